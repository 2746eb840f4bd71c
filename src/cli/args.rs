//! CLI argument definitions using clap
//!
//! Commands:
//! - product-api init --config <path>
//! - product-api serve --config <path> [--port <port>] [--in-memory]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Product API - JSON CRUD service for product records
#[derive(Parser, Debug)]
#[command(name = "product-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the products table if it does not exist
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./product-api.json")]
        config: PathBuf,
    },

    /// Start the HTTP server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./product-api.json")]
        config: PathBuf,

        /// Port to listen on, overriding the configuration file
        #[arg(long)]
        port: Option<u16>,

        /// Keep products in process memory instead of PostgreSQL
        #[arg(long)]
        in_memory: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
