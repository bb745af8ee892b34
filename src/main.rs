use loan_portal::{
    AppState,
    config::{AppConfig, Env},
    create_router,
    repository::{PostgresRepository, RepositoryState},
};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// main
///
/// Asynchronous entry point: configuration, logging, database, HTTP server.
#[tokio::main]
async fn main() {
    // 1. Configuration & environment loading (fail-fast).
    dotenv::dotenv().ok();
    // AppConfig::load() refuses to start without DATABASE_URL and JWT_SECRET.
    let config = AppConfig::load();

    // 2. Logging filter setup: RUST_LOG wins, with sensible local defaults.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "loan_portal=debug,tower_http=info,axum=trace".into());

    // 3. Initialize logging based on environment.
    match config.env {
        Env::Local => {
            // LOCAL: pretty output for human readability.
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
        Env::Production => {
            // PROD: JSON output for centralized log aggregators.
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
    }

    tracing::info!("Application starting in {:?} mode", config.env);

    // 4. Database initialization (Postgres).
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.db_url)
        .await
        .expect("FATAL: Failed to connect to Postgres. Check DATABASE_URL.");

    let repository = PostgresRepository::new(pool);

    // Local convenience: create the backing tables if they don't exist yet.
    if config.env == Env::Local {
        repository
            .ensure_schema()
            .await
            .expect("FATAL: Failed to initialize database schema");
    }

    let repo = Arc::new(repository) as RepositoryState;

    // 5. Unified state assembly and server startup.
    let listen_addr = format!("0.0.0.0:{}", config.port);
    let app_state = AppState { repo, config };
    let app = create_router(app_state);

    let listener = TcpListener::bind(&listen_addr)
        .await
        .expect("FATAL: Failed to bind listen port");

    tracing::info!("HTTP server bound successfully.");
    tracing::info!("Listening on {listen_addr}");
    tracing::info!("API documentation (Swagger UI) available at /swagger-ui");

    axum::serve(listener, app).await.unwrap();
}
