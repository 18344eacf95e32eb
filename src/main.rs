use anyhow::Context;
use tokio::net::TcpListener;

use savings_calculator_backend::{app, config::AppConfig, logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().context("Invalid configuration")?;

    // Initialize logging FIRST
    logging::init_logging(&config.logging).context("Failed to initialize logging")?;

    tracing::info!(
        "Rounding mode: {}, CORS origins: {:?}",
        config.rounding_mode,
        config.allowed_origins
    );

    let app = app::create_app(&config);

    let listener = TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.addr))?;
    tracing::info!("🚀 Savings calculator running at http://{}/", config.addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("⚡ Received Ctrl+C, shutting down gracefully"),
        () = terminate => tracing::info!("⚡ Received SIGTERM, shutting down gracefully"),
    }
}
