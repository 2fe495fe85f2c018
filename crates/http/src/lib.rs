//! HTTP server facade for biblio with Axum, error handling, and JSON extraction.

use anyhow::Context;
use axum::Router;

pub mod error;
pub mod extract;
pub mod router;

/// Start the HTTP server with the given application router
pub async fn start_server(
    app: Router,
    settings: &biblio_kernel::settings::Settings,
) -> anyhow::Result<()> {
    tracing::info!(
        "starting HTTP server on {}:{}",
        settings.server.host,
        settings.server.port
    );

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", settings.server.host, settings.server.port))
            .await
            .context("failed to bind to address")?;

    tracing::info!(
        "HTTP server listening on http://{}:{}",
        settings.server.host,
        settings.server.port
    );

    axum::serve(listener, app)
        .await
        .context("HTTP server failed")?;

    Ok(())
}
