use ghprofile_readme::Readme;

use axum::extract::{Extension, Path};
use axum::routing::get;
use axum::Json;

pub struct ReadmeRoutes<D>(std::marker::PhantomData<D>);

impl<D> ReadmeRoutes<D>
where
    D: ghprofile_readme::ResolveReadme + Sized + Clone + Send + Sync + 'static,
{
    pub fn router() -> axum::Router {
        axum::Router::new().route("/readme/:username/:repo", get(Self::get_readme))
    }

    /// Failures are reported inside the document, so this is always a 200.
    async fn get_readme(
        Extension(deps): Extension<D>,
        Path((username, repo)): Path<(String, String)>,
    ) -> Json<Readme> {
        Json(deps.resolve_readme(&username, &repo).await)
    }
}
