use axum::routing::get;
use axum::Json;

#[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq, Eq)]
struct ApiInfo {
    message: String,
    version: String,
}

pub fn router() -> axum::Router {
    axum::Router::new().route("/", get(api_info))
}

async fn api_info() -> Json<ApiInfo> {
    Json(ApiInfo {
        message: "GitHub Profile Scraper API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
