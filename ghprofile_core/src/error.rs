use crate::fetch::FetchError;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

pub type GpResult<T, E = GpError> = std::result::Result<T, E>;

#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum GpError {
    #[error("Username is required")]
    UsernameRequired,

    #[error("GitHub user not found")]
    UserNotFound,

    #[error("Error scraping GitHub: {0}")]
    Upstream(String),

    #[error("Error generating PDF: {0}")]
    Render(String),
}

impl GpError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::UsernameRequired => StatusCode::BAD_REQUEST,
            Self::UserNotFound => StatusCode::NOT_FOUND,
            Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<FetchError> for GpError {
    fn from(err: FetchError) -> Self {
        Self::Upstream(err.0)
    }
}

impl IntoResponse for GpError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("{self}");
        }
        (
            status,
            Json(ErrorBody {
                detail: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[derive(serde::Serialize)]
struct ErrorBody {
    detail: String,
}
