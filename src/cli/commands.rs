//! CLI command implementations

use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::http_server::{HttpServer, ServerConfig};
use crate::observability::Logger;
use crate::store::{EmployeeRepository, InMemoryEmployeeStore};

use super::args::Command;
use super::errors::{CliError, CliResult};

/// Dispatch a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Init { config } => init(&config),
        Command::Serve { config, host, port } => {
            let config = resolve_config(config.as_deref(), host, port)?;
            serve(config)
        }
    }
}

/// Write the default configuration to `path`, refusing to overwrite.
pub fn init(path: &Path) -> CliResult<()> {
    if path.exists() {
        return Err(CliError::already_initialized(path.display()));
    }

    let json = serde_json::to_string_pretty(&ServerConfig::default())?;
    fs::write(path, json + "\n")?;

    Logger::info("CONFIG_WRITTEN", &[("path", &*path.to_string_lossy())]);
    Ok(())
}

/// Load the config file (if any) and apply command line overrides.
pub fn resolve_config(
    path: Option<&Path>,
    host: Option<String>,
    port: Option<u16>,
) -> CliResult<ServerConfig> {
    let mut config = match path {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::default(),
    };

    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }
    config.validate()?;

    Ok(config)
}

/// Build the store and serve the API until interrupted.
pub fn serve(config: ServerConfig) -> CliResult<()> {
    Logger::set_min_severity(config.severity());

    let store = Arc::new(InMemoryEmployeeStore::new());
    let employees = store
        .count()
        .map_err(|e| CliError::serve_failed(e.to_string()))?
        .to_string();
    Logger::info("STORE_READY", &[("employees", employees.as_str())]);

    let server = HttpServer::new(config, store);

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to start runtime: {}", e)))?;

    runtime.block_on(server.start()).map_err(|e| {
        let err = CliError::serve_failed(e.to_string());
        Logger::fatal(
            "SERVER_FAILED",
            &[("code", err.code().code()), ("reason", err.message())],
        );
        err
    })
}
