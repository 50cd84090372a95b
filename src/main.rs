use std::net::SocketAddr;

use clap::Parser;
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use inventory_server::config::{self, Cli};
use inventory_server::routes;
use inventory_server::state::AppState;
use inventory_server::storage;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Missing flags exit here with clap's usage message
    let cli = Cli::parse();
    let app_cfg = config::load(&cli)?;

    // Logging (stdout + daily rotated file)
    std::fs::create_dir_all(&app_cfg.logging.dir).ok();
    let (stdout_nb, stdout_guard) = tracing_appender::non_blocking(std::io::stdout());
    let file_appender = tracing_appender::rolling::daily(&app_cfg.logging.dir, "inventory-server.log");
    let (file_nb, file_guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| app_cfg.logging.filter.as_str().into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(stdout_nb))
        .with(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(file_nb))
        .init();
    // Keep the guards alive so the non-blocking writers flush on exit
    let _log_guards = (stdout_guard, file_guard);

    info!("Configuration loaded:");
    info!("Host: {}", app_cfg.server.host);
    info!("Port: {}", app_cfg.server.port);
    info!("Cache: {}", app_cfg.server.cache_dir.display());

    storage::ensure_cache_dir(&app_cfg.server.cache_dir).await?;

    let host = app_cfg.server.host.clone();
    let port = app_cfg.server.port;
    let state = AppState::new(app_cfg);

    let app = routes::app(state);
    // CORS: permissive in debug builds for local form testing
    let app = if cfg!(debug_assertions) { app.layer(CorsLayer::permissive()) } else { app };

    let addr: SocketAddr = tokio::net::lookup_host((host.as_str(), port))
        .await?
        .next()
        .ok_or_else(|| anyhow::anyhow!("invalid listen addr {}:{}", host, port))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Inventory server listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    Ok(())
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut term) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {},
                    _ = term.recv() => {},
                }
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", e);
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
    info!("Shutdown signal received. Stopping server...");
}
