mod meta_routes;
mod readme_routes;
mod report_routes;
mod scrape_routes;

use crate::app::App;

use axum::routing::Router;
use entrait::Impl;

/// Axum API router for the real app.
pub fn api_router() -> axum::Router {
    Router::new()
        .merge(meta_routes::router())
        .merge(scrape_routes::ScrapeRoutes::<Impl<App>>::router())
        .merge(readme_routes::ReadmeRoutes::<Impl<App>>::router())
        .merge(report_routes::ReportRoutes::<Impl<App>>::router())
}
