use ghprofile_core::error::GpResult;
use ghprofile_scrape::ScrapeResult;

use axum::extract::Extension;
use axum::routing::post;
use axum::Json;

/// A missing `username` is treated like a blank one.
#[derive(serde::Serialize, serde::Deserialize, Debug)]
struct ScrapeRequest {
    #[serde(default)]
    username: String,
}

pub struct ScrapeRoutes<D>(std::marker::PhantomData<D>);

impl<D> ScrapeRoutes<D>
where
    D: ghprofile_scrape::ScrapeProfile + Sized + Clone + Send + Sync + 'static,
{
    pub fn router() -> axum::Router {
        axum::Router::new().route("/scrape", post(Self::scrape))
    }

    async fn scrape(
        Extension(deps): Extension<D>,
        Json(body): Json<ScrapeRequest>,
    ) -> GpResult<Json<ScrapeResult>> {
        Ok(Json(deps.scrape_profile(&body.username).await?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::*;
    use ghprofile_core::error::GpError;
    use ghprofile_scrape::{ProfileRecord, RepositoryRecord, ScrapeProfileMock};

    use axum::http::{Request, StatusCode};
    use unimock::*;

    fn test_router(deps: Unimock) -> axum::Router {
        ScrapeRoutes::<Unimock>::router().layer(Extension(deps.no_verify_in_drop()))
    }

    fn octocat() -> ScrapeResult {
        ScrapeResult {
            profile: ProfileRecord {
                username: "octocat".into(),
                name: "The Octocat".into(),
                avatar: "https://avatars.githubusercontent.com/u/583231?v=4".into(),
                bio: "".into(),
                followers: "17.4k".into(),
                following: "9".into(),
                email: "".into(),
                location: "San Francisco".into(),
                company: "@github".into(),
                website: "https://github.blog".into(),
                twitter: "".into(),
            },
            repos: vec![RepositoryRecord {
                name: "Spoon-Knife".into(),
                url: "https://github.com/octocat/Spoon-Knife".into(),
                description: "This repo is for demonstration purposes only.".into(),
                language: "HTML".into(),
                stars: "1.2k".into(),
                forks: "150k".into(),
                updated: "2024-02-11T16:43:09Z".into(),
            }],
        }
    }

    #[tokio::test]
    async fn scrape_returns_profile_and_repos() {
        let deps = Unimock::new(
            ScrapeProfileMock
                .each_call(matching!("octocat"))
                .returns(Ok(octocat())),
        );

        let (status, result) = request_json::<ScrapeResult>(
            test_router(deps),
            Request::post("/scrape").with_json_body(serde_json::json!({ "username": "octocat" })),
        )
        .await
        .unwrap();

        assert_eq!(StatusCode::OK, status);
        assert_eq!(octocat(), result);
    }

    #[tokio::test]
    async fn unknown_user_is_404_with_detail() {
        let deps = Unimock::new(
            ScrapeProfileMock
                .each_call(matching!("nobody-here"))
                .returns(Err(GpError::UserNotFound)),
        );

        let (status, body) = request_json::<serde_json::Value>(
            test_router(deps),
            Request::post("/scrape").with_json_body(serde_json::json!({ "username": "nobody-here" })),
        )
        .await
        .unwrap();

        assert_eq!(StatusCode::NOT_FOUND, status);
        assert_eq!(serde_json::json!({ "detail": "GitHub user not found" }), body);
    }

    #[tokio::test]
    async fn missing_username_is_400() {
        let deps = Unimock::new(
            ScrapeProfileMock
                .each_call(matching!(""))
                .returns(Err(GpError::UsernameRequired)),
        );

        let (status, body) = request_json::<serde_json::Value>(
            test_router(deps),
            Request::post("/scrape").with_json_body(serde_json::json!({})),
        )
        .await
        .unwrap();

        assert_eq!(StatusCode::BAD_REQUEST, status);
        assert_eq!(serde_json::json!({ "detail": "Username is required" }), body);
    }

    #[tokio::test]
    async fn upstream_failure_is_500() {
        let deps = Unimock::new(
            ScrapeProfileMock
                .each_call(matching!(_))
                .returns(Err(GpError::Upstream("operation timed out".into()))),
        );

        let (status, body) = request_json::<serde_json::Value>(
            test_router(deps),
            Request::post("/scrape").with_json_body(serde_json::json!({ "username": "octocat" })),
        )
        .await
        .unwrap();

        assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, status);
        assert_eq!(
            serde_json::json!({ "detail": "Error scraping GitHub: operation timed out" }),
            body
        );
    }
}
