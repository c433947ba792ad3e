pub mod app;
pub mod config;

mod routes;

#[cfg(test)]
mod test_util;

use anyhow::Context;
use entrait::Impl;
use tower::ServiceBuilder;

pub async fn serve(app: app::App) -> anyhow::Result<()> {
    let bind_addr = app.config.bind_addr;

    let router = routes::api_router().layer(
        ServiceBuilder::new()
            .layer(axum::extract::Extension(Impl::new(app)))
            // Enables logging. Use `RUST_LOG=tower_http=debug`
            .layer(tower_http::trace::TraceLayer::new_for_http())
            // The API is called straight from browsers on other origins.
            .layer(tower_http::cors::CorsLayer::permissive()),
    );

    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;

    tracing::info!("listening on {bind_addr}");

    axum::serve(listener, router)
        .await
        .context("error running HTTP server")
}
