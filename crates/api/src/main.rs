use std::net::SocketAddr;
use std::sync::Arc;

use slotbook_api::auth::identity::PasswordIdentity;
use slotbook_api::config::{ServerConfig, StoreBackend};
use slotbook_api::router::build_app_router;
use slotbook_api::state::AppState;
use slotbook_core::identity::IdentityProvider;
use slotbook_db::memory::MemoryStore;
use slotbook_db::postgres::PgStore;
use slotbook_db::store::{AccountStore, RecordStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "slotbook_api=debug,tower_http=debug".into());
    let json_logs = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    let registry = tracing_subscriber::registry().with(filter);
    if json_logs {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = %config.port,
        store_backend = ?config.store_backend,
        "Loaded server configuration"
    );

    // --- Record store ---
    let (store, accounts): (Arc<dyn RecordStore>, Arc<dyn AccountStore>) =
        match config.store_backend {
            StoreBackend::Postgres => {
                let database_url =
                    std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

                let pool = slotbook_db::create_pool(&database_url)
                    .await
                    .expect("Failed to connect to database");
                tracing::info!("Database connection pool created");

                slotbook_db::health_check(&pool)
                    .await
                    .expect("Database health check failed");
                tracing::info!("Database health check passed");

                slotbook_db::run_migrations(&pool)
                    .await
                    .expect("Failed to run database migrations");
                tracing::info!("Database migrations applied");

                let pg = Arc::new(PgStore::new(pool));
                let store: Arc<dyn RecordStore> = pg.clone();
                let accounts: Arc<dyn AccountStore> = pg;
                (store, accounts)
            }
            StoreBackend::Memory => {
                tracing::warn!("Using in-memory store; data is lost on restart");
                let memory = Arc::new(MemoryStore::new());
                let store: Arc<dyn RecordStore> = memory.clone();
                let accounts: Arc<dyn AccountStore> = memory;
                (store, accounts)
            }
        };

    // --- Identity provider ---
    let identity: Arc<dyn IdentityProvider> = Arc::new(PasswordIdentity::new(
        accounts,
        config.jwt.clone(),
        config.min_password_length,
    ));

    // --- App state ---
    let state = AppState {
        config: Arc::new(config.clone()),
        store,
        identity,
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
