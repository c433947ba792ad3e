pub mod layout;
pub mod pdf;

use ghprofile_core::error::{GpError, GpResult};
use ghprofile_core::System;

use anyhow::Context;
use entrait::entrait_export as entrait;

/// Report request body. It mirrors the scrape records but is supplied by the
/// caller, so every field may be missing. Unknown fields are ignored.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ReportInput {
    pub username: String,
    pub profile: ProfileFields,
    pub repos: Vec<RepoFields>,
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ProfileFields {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub company: Option<String>,
    pub email: Option<String>,
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RepoFields {
    pub name: Option<String>,
    pub language: Option<String>,
    pub updated: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

pub fn attachment_filename(username: &str) -> String {
    format!("{username}_github_profile.pdf")
}

#[entrait(pub GenerateReport, mock_api=GenerateReportMock)]
async fn generate_report(deps: &impl System, input: ReportInput) -> GpResult<ReportFile> {
    let story = layout::build_story(&input, deps.get_current_time());
    let title = format!("{} GitHub profile", input.username);

    let bytes = render_blocking(title, story)
        .await
        .map_err(|err| GpError::Render(format!("{err:#}")))?;

    Ok(ReportFile {
        filename: attachment_filename(&input.username),
        bytes,
    })
}

async fn render_blocking(title: String, story: Vec<layout::Block>) -> anyhow::Result<Vec<u8>> {
    // Drawing and file I/O are synchronous, keep them off the async workers.
    tokio::task::spawn_blocking(move || pdf::write_pdf(&title, &story))
        .await
        .context("panic while rendering report")?
}
