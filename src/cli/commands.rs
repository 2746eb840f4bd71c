//! CLI command implementations

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use super::args::Command;
use super::config::Config;
use super::errors::{CliError, CliResult};
use crate::http_server::{HttpServer, ProductState};
use crate::observability::init_logging;
use crate::store::{InMemoryProductStore, PgProductStore, ProductStore};

/// Main entry point for the CLI
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Init { config } => init(&config),
        Command::Serve {
            config,
            port,
            in_memory,
        } => serve(&config, port, in_memory),
    }
}

fn runtime() -> CliResult<tokio::runtime::Runtime> {
    tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))
}

/// Create the products table
pub fn init(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;
    init_logging(&config.logging);

    let db = config.database()?;
    info!(host = %db.host, dbname = %db.dbname, "ensuring products table");

    runtime()?.block_on(async {
        let store = PgProductStore::connect_lazy(db);
        store.ensure_table().await
    })?;

    info!("products table ready");
    Ok(())
}

/// Build the store selected by the configuration and flags
pub fn build_store(config: &Config, in_memory: bool) -> CliResult<Arc<dyn ProductStore>> {
    if in_memory {
        info!("using in-memory product store");
        return Ok(Arc::new(InMemoryProductStore::new()));
    }

    let db = config.database()?;
    info!(host = %db.host, port = db.port, dbname = %db.dbname, "using PostgreSQL product store");
    Ok(Arc::new(PgProductStore::connect_lazy(db)))
}

/// Start the HTTP server
pub fn serve(config_path: &Path, port: Option<u16>, in_memory: bool) -> CliResult<()> {
    let mut config = Config::load(config_path)?;
    init_logging(&config.logging);

    if let Some(port) = port {
        config.http.port = port;
    }

    let rt = runtime()?;

    // The lazy pool needs a runtime context when it is created.
    rt.block_on(async {
        let store = build_store(&config, in_memory)?;
        let state = ProductState::new(store).with_exposed_store_errors(config.expose_store_errors);
        let server = HttpServer::with_config(config.http.clone(), Arc::new(state));

        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::errors::CliErrorCode;

    #[test]
    fn test_in_memory_store_needs_no_database() {
        let config = Config::from_json("{}").unwrap();
        assert!(build_store(&config, true).is_ok());
    }

    #[test]
    fn test_postgres_store_requires_database_section() {
        let config = Config::from_json("{}").unwrap();
        let err = build_store(&config, false).err().unwrap();
        assert_eq!(err.code(), &CliErrorCode::ConfigError);
    }

    #[test]
    fn test_serve_fails_on_missing_config() {
        let err = serve(Path::new("/nonexistent/product-api.json"), None, true).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::ConfigError);
    }
}
