//! CLI module for the product API
//!
//! Provides command-line interface for:
//! - init: Create the products table
//! - serve: Start the HTTP server

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, Command};
pub use commands::{build_store, init, run, run_command, serve};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
