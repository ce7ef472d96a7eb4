//! Truckers CLI server
//!
//! ```sh
//! # Run with default config (~/.config/truckers/config.toml)
//! truckers
//!
//! # Custom config path
//! truckers --config /etc/truckers/config.toml
//!
//! # Persist to SQLite on another port
//! truckers --storage sqlite --port 9090
//!
//! # Validate config without starting
//! truckers --check
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use truckers::config::{AppConfig, StorageBackend};
use truckers::server::{init_tracing, ServerHandle, ServerOptions};

/// Truck driver and trip registry REST server.
#[derive(Parser, Debug)]
#[command(
    name = "truckers",
    version,
    about = "REST API for truck drivers and their trips",
    long_about = "Truckers: REST API server keeping a registry of truck drivers \
                  (keyed by CPF) and the trips they make.\n\n\
                  Default config: ~/.config/truckers/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "TRUCKERS_CONFIG")]
    config: Option<PathBuf>,

    /// Override the REST API listen port.
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the storage backend (memory, sqlite).
    #[arg(short, long)]
    storage: Option<StorageBackend>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration file and exit without starting the server.
    #[arg(long)]
    check: bool,

    /// Skip database migrations on startup.
    #[arg(long)]
    no_migrate: bool,
}

impl Cli {
    fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(backend) = self.storage {
            config.storage.backend = backend;
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli.config.clone().unwrap_or_else(truckers::default_config_path);

    let mut config = match AppConfig::load(&config_path) {
        Ok(cfg) => cfg,
        Err(e) if cli.check => {
            eprintln!("Invalid configuration in {}: {}", config_path.display(), e);
            return ExitCode::FAILURE;
        }
        Err(e) => {
            eprintln!("Failed to load config from {}: {}", config_path.display(), e);
            eprintln!("Using default configuration.");
            AppConfig::default()
        }
    };
    cli.apply_overrides(&mut config);

    // ── Config validation mode ─────────────────────────────────
    if cli.check {
        if let Err(e) = config.validate() {
            eprintln!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
        println!("Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   API address : {}", config.listen_addr());
        println!("   Storage     : {}", config.storage.backend);
        if config.storage.backend == StorageBackend::Sqlite {
            println!("   SQLite file : {}", config.storage.sqlite_path);
        }
        println!("   Log level   : {}", config.logging.level);
        return ExitCode::SUCCESS;
    }

    init_tracing(&config);
    info!("Configuration loaded from {}", config_path.display());

    // ── Start server ───────────────────────────────────────────
    let handle = match ServerHandle::start(ServerOptions {
        config,
        auto_migrate: !cli.no_migrate,
    })
    .await
    {
        Ok(handle) => handle,
        Err(e) => {
            error!("Failed to start server: {}", e);
            return ExitCode::FAILURE;
        }
    };

    handle.install_signal_handler();
    info!("Press Ctrl+C to shutdown gracefully.");

    handle.shutdown_signal().wait().await;
    handle.wait().await;

    ExitCode::SUCCESS
}
