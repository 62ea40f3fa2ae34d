//! Qualtrack Web - browser dashboard and JSON API
//!
//! An axum router over a shared `QualificationRepo`. Every request runs one
//! dashboard command and renders the fresh view it returns.

pub mod api;
pub mod config;
pub mod error;
pub mod html;
pub mod state;

pub use api::app_router;
pub use config::ServerConfig;
pub use state::{build_state, AppState};

/// Bind the listener and serve until Ctrl-C
pub async fn serve(config: &ServerConfig) -> anyhow::Result<()> {
    let state = build_state(config)?;
    let router = app_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(
        addr = %config.listen_addr,
        db_path = %config.db_path.display(),
        "Listening"
    );
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
