//! `SibLore` API server binary.

use dotenvy::dotenv;
use siblore::{
    api::{self, AppState},
    config::{AppConfig, database},
    errors::Result,
    seed,
};
use tokio::{net::TcpListener, signal};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; variables may also be set externally
    dotenv().ok();

    // 3. Load the application configuration
    let config = AppConfig::load();
    info!(port = config.port, "Loaded application configuration");
    if config.auth.token.is_none() {
        warn!("ADMIN_TOKEN is not set; every admin request will be rejected");
    }

    // 4. Connect to the database and ensure the schema exists
    let db = database::create_connection(&config.database_url)
        .await
        .inspect(|_| info!("Database initialized successfully"))
        .inspect_err(|e| error!("Failed to initialize database: {e}"))?;
    database::create_tables(&db).await?;

    // 5. Seed the service catalog on first run
    seed::seed_default_services(&db, &config.catalog_path).await?;

    // 6. Serve the API until a shutdown signal arrives
    let app = api::router(AppState::new(db, config.auth.clone()));
    let address = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&address).await?;
    info!("SibLore API listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down cleanly");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
