//! Server runtime.
//!
//! [`ServerHandle`] owns the full lifecycle: storage backend selection,
//! migrations, the REST API listener, metrics, and graceful shutdown.

use std::net::SocketAddr;
use std::sync::{Arc, OnceLock};

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tracing::{error, info, warn};

use crate::config::{AppConfig, StorageBackend};
use crate::domain::RepositoryProvider;
use crate::infrastructure::database::migrator::Migrator;
use crate::infrastructure::database::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};
use crate::infrastructure::storage::InMemoryRepositoryProvider;
use crate::interfaces::http::create_api_router;
use crate::shared::errors::{AppError, InfraError};
use crate::shared::shutdown::{ShutdownCoordinator, ShutdownSignal};

// ── Options ────────────────────────────────────────────────────────

pub struct ServerOptions {
    pub config: AppConfig,
    /// Run database migrations on startup (sqlite only, default: true).
    pub auto_migrate: bool,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            config: AppConfig::default(),
            auto_migrate: true,
        }
    }
}

// ── ServerHandle ───────────────────────────────────────────────────

/// Handle to a running server.
///
/// ```rust,no_run
/// use truckers::server::{ServerHandle, ServerOptions};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let handle = ServerHandle::start(ServerOptions::default()).await?;
///     handle.install_signal_handler();
///     handle.shutdown_signal().wait().await;
///     handle.wait().await;
///     Ok(())
/// }
/// ```
pub struct ServerHandle {
    pub repos: Arc<dyn RepositoryProvider>,
    pub config: AppConfig,
    /// Address actually bound (differs from the config when port is 0).
    pub local_addr: SocketAddr,

    db: Option<DatabaseConnection>,
    shutdown: ShutdownCoordinator,
    api_task: tokio::task::JoinHandle<()>,
}

impl ServerHandle {
    /// 1. Install the Prometheus recorder (once per process)
    /// 2. Open the configured storage backend, migrating sqlite
    /// 3. Bind and serve the REST API with graceful shutdown
    pub async fn start(opts: ServerOptions) -> Result<Self, AppError> {
        let app_cfg = opts.config;
        app_cfg.validate()?;

        let prometheus_handle = prometheus_handle();

        // ── Storage ────────────────────────────────────────────
        let (repos, db): (Arc<dyn RepositoryProvider>, Option<DatabaseConnection>) =
            match app_cfg.storage.backend {
                StorageBackend::Memory => {
                    info!("Storage: in-memory (data is lost on restart)");
                    (Arc::new(InMemoryRepositoryProvider::new()), None)
                }
                StorageBackend::Sqlite => {
                    let db_config = DatabaseConfig::sqlite(&app_cfg.storage.sqlite_path);
                    let db = init_database(&db_config).await.map_err(InfraError::from)?;
                    if opts.auto_migrate {
                        info!("Running database migrations...");
                        Migrator::up(&db, None).await.map_err(InfraError::from)?;
                        info!("Migrations completed");
                    }
                    (Arc::new(SeaOrmRepositoryProvider::new(db.clone())), Some(db))
                }
            };

        // ── Shutdown coordinator ───────────────────────────────
        let shutdown = ShutdownCoordinator::new(app_cfg.server.shutdown_timeout);
        let shutdown_signal = shutdown.signal();

        // ── REST API server ────────────────────────────────────
        let api_router = create_api_router(repos.clone(), prometheus_handle);

        let listener = tokio::net::TcpListener::bind(app_cfg.listen_addr())
            .await
            .map_err(InfraError::from)?;
        let local_addr = listener.local_addr().map_err(InfraError::from)?;
        info!("REST API server listening on http://{}", local_addr);
        info!("Swagger UI available at http://{}/docs/", local_addr);

        let api_server = axum::serve(listener, api_router).with_graceful_shutdown(async move {
            shutdown_signal.wait().await;
            info!("REST API server received shutdown signal");
        });

        let api_task = tokio::spawn(async move {
            if let Err(e) = api_server.await {
                error!("REST API server error: {}", e);
            }
        });

        Ok(Self {
            repos,
            config: app_cfg,
            local_addr,
            db,
            shutdown,
            api_task,
        })
    }

    pub fn shutdown_signal(&self) -> ShutdownSignal {
        self.shutdown.signal()
    }

    /// Install OS signal listeners (SIGTERM, SIGINT) that trigger shutdown.
    pub fn install_signal_handler(&self) {
        self.shutdown.start_signal_listener();
    }

    pub fn trigger_shutdown(&self) {
        self.shutdown.signal().trigger();
    }

    /// Waits for shutdown to be triggered, then drains the API server and
    /// closes the database, bounded by `server.shutdown_timeout`.
    pub async fn wait(self) {
        let Self {
            db,
            shutdown,
            api_task,
            ..
        } = self;
        let abort = api_task.abort_handle();

        let clean = shutdown
            .shutdown_with_cleanup(|| async move {
                match api_task.await {
                    Ok(()) => info!("REST API server stopped"),
                    Err(e) => error!("REST API server task failed: {}", e),
                }
                if let Some(db) = db {
                    match db.close().await {
                        Ok(()) => info!("Database connection closed"),
                        Err(e) => warn!("Error closing database connection: {}", e),
                    }
                }
            })
            .await;

        if !clean {
            abort.abort();
        }
        info!("Shutdown complete");
    }

    /// Trigger shutdown and wait for completion.
    pub async fn shutdown(self) {
        info!("Shutting down...");
        self.trigger_shutdown();
        self.wait().await;
    }

    pub fn is_running(&self) -> bool {
        !self.api_task.is_finished()
    }
}

// ── Helpers ────────────────────────────────────────────────────────

/// The global recorder can only be installed once per process; later
/// servers in the same process share its handle.
fn prometheus_handle() -> PrometheusHandle {
    static PROM_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

    PROM_HANDLE
        .get_or_init(|| match PrometheusBuilder::new().install_recorder() {
            Ok(handle) => {
                info!("Prometheus metrics recorder installed");
                handle
            }
            Err(e) => {
                warn!("Prometheus recorder not installed, /metrics will be empty: {}", e);
                PrometheusBuilder::new().build_recorder().handle()
            }
        })
        .clone()
}

/// Initialise tracing from config. `RUST_LOG` takes precedence over
/// `logging.level`.
pub fn init_tracing(config: &AppConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    let registry = tracing_subscriber::registry().with(env_filter);
    let result = if config.logging.format.eq_ignore_ascii_case("json") {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
    } else {
        registry.with(tracing_subscriber::fmt::layer()).try_init()
    };

    if let Err(e) = result {
        eprintln!("tracing already initialised: {}", e);
    }
}

// ── Tests ──────────────────────────────────────────────────────────
