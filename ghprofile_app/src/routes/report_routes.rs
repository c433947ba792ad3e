use ghprofile_core::error::{GpError, GpResult};
use ghprofile_report::ReportInput;

use axum::extract::Extension;
use axum::http::header::{HeaderValue, CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::Json;

pub struct ReportRoutes<D>(std::marker::PhantomData<D>);

impl<D> ReportRoutes<D>
where
    D: ghprofile_report::GenerateReport + Sized + Clone + Send + Sync + 'static,
{
    pub fn router() -> axum::Router {
        axum::Router::new().route("/generate-pdf", post(Self::generate_pdf))
    }

    async fn generate_pdf(
        Extension(deps): Extension<D>,
        Json(input): Json<ReportInput>,
    ) -> GpResult<Response> {
        let disposition = attachment(&ghprofile_report::attachment_filename(&input.username))?;
        let report = deps.generate_report(input).await?;

        Ok((
            [
                (CONTENT_TYPE, HeaderValue::from_static("application/pdf")),
                (CONTENT_DISPOSITION, disposition),
            ],
            report.bytes,
        )
            .into_response())
    }
}

/// `Content-Disposition` value with `filename` as a quoted string. Characters
/// that cannot appear in a header value are replaced by `_`.
fn attachment(filename: &str) -> GpResult<HeaderValue> {
    let mut quoted = String::with_capacity(filename.len());
    for ch in filename.chars() {
        match ch {
            '"' | '\\' => {
                quoted.push('\\');
                quoted.push(ch);
            }
            ' '..='~' => quoted.push(ch),
            _ => quoted.push('_'),
        }
    }

    HeaderValue::from_str(&format!("attachment; filename=\"{quoted}\""))
        .map_err(|_| GpError::Render(format!("invalid attachment filename {filename:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::*;
    use ghprofile_report::{GenerateReportMock, ReportFile};

    use axum::http::{Request, StatusCode};
    use unimock::*;

    fn test_router(deps: Unimock) -> axum::Router {
        ReportRoutes::<Unimock>::router().layer(Extension(deps.no_verify_in_drop()))
    }

    fn octocat_input() -> serde_json::Value {
        serde_json::json!({
            "username": "octocat",
            "profile": { "name": "The Octocat", "location": "San Francisco" },
            "repos": [{ "name": "Spoon-Knife", "language": "HTML", "updated": "2024-02-11T16:43:09Z" }],
        })
    }

    #[tokio::test]
    async fn pdf_is_sent_as_named_attachment() {
        let deps = Unimock::new(
            GenerateReportMock
                .each_call(matching!(_))
                .returns(Ok(ReportFile {
                    filename: "octocat_github_profile.pdf".into(),
                    bytes: b"%PDF-1.3\n".to_vec(),
                })),
        );

        let (status, headers, body) = request(
            test_router(deps),
            Request::post("/generate-pdf").with_json_body(octocat_input()),
        )
        .await;

        assert_eq!(StatusCode::OK, status);
        assert_eq!("application/pdf", headers[CONTENT_TYPE]);
        assert_eq!(
            "attachment; filename=\"octocat_github_profile.pdf\"",
            headers[CONTENT_DISPOSITION]
        );
        assert_eq!(&b"%PDF-1.3\n"[..], &body[..]);
    }

    #[tokio::test]
    async fn quotes_in_username_are_escaped_in_filename() {
        let deps = Unimock::new(
            GenerateReportMock
                .each_call(matching!(_))
                .returns(Ok(ReportFile {
                    filename: "a\"b_github_profile.pdf".into(),
                    bytes: b"%PDF-1.3\n".to_vec(),
                })),
        );

        let (status, headers, _) = request(
            test_router(deps),
            Request::post("/generate-pdf").with_json_body(serde_json::json!({
                "username": "a\"b",
                "profile": {},
                "repos": [],
            })),
        )
        .await;

        assert_eq!(StatusCode::OK, status);
        assert_eq!(
            "attachment; filename=\"a\\\"b_github_profile.pdf\"",
            headers[CONTENT_DISPOSITION]
        );
    }

    #[test]
    fn attachment_header_is_always_a_valid_value() {
        assert_eq!(
            "attachment; filename=\"octocat_github_profile.pdf\"",
            attachment("octocat_github_profile.pdf").unwrap()
        );
        assert_eq!(
            "attachment; filename=\"back\\\\slash\"",
            attachment("back\\slash").unwrap()
        );
        assert_eq!(
            "attachment; filename=\"line_break_j_rg\"",
            attachment("line\nbreak_j\u{fc}rg").unwrap()
        );
    }

    #[tokio::test]
    async fn render_failure_is_500() {
        let deps = Unimock::new(
            GenerateReportMock
                .each_call(matching!(_))
                .returns(Err(GpError::Render("out of paper".into()))),
        );

        let (status, body) = request_json::<serde_json::Value>(
            test_router(deps),
            Request::post("/generate-pdf").with_json_body(octocat_input()),
        )
        .await
        .unwrap();

        assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, status);
        assert_eq!(
            serde_json::json!({ "detail": "Error generating PDF: out of paper" }),
            body
        );
    }

    #[tokio::test]
    async fn body_without_profile_is_rejected_before_rendering() {
        let (status, _, _) = request(
            test_router(Unimock::new(())),
            Request::post("/generate-pdf").with_json_body(serde_json::json!({ "username": "octocat" })),
        )
        .await;

        assert!(status.is_client_error());
    }
}
