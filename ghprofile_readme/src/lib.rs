pub mod markdown;

use ghprofile_core::{api_url, site_url, FetchPage};

use anyhow::Context;
use base64::Engine;
use entrait::entrait_export as entrait;
use scraper::{Html, Selector};

/// Fallback repository page could not be fetched successfully.
pub const README_NOT_AVAILABLE: &str = "<p>README not available</p>";

/// Fallback repository page has no rendered README.
pub const README_NOT_FOUND: &str = "<p>README not found</p>";

const RENDERED_README: &str = r#"article[class*="markdown-body"]"#;

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Readme {
    pub content: String,
    pub html_url: String,
    pub is_html: bool,
}

impl Readme {
    fn html(content: impl Into<String>, html_url: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            html_url: html_url.into(),
            is_html: true,
        }
    }
}

/// Body of the contents API `readme` endpoint.
#[derive(serde::Deserialize)]
struct ApiReadme {
    content: String,
    html_url: String,
    #[serde(default)]
    encoding: Option<String>,
}

///
/// Always produces something displayable: every failure becomes a
/// placeholder paragraph.
///
#[entrait(pub ResolveReadme, mock_api=ResolveReadmeMock)]
async fn resolve_readme(deps: &impl FetchPage, username: &str, repo: &str) -> Readme {
    let repo_url = site_url(&format!("/{username}/{repo}"));

    match try_resolve(deps, username, repo, &repo_url).await {
        Ok(readme) => readme,
        Err(err) => {
            tracing::warn!("README for {username}/{repo} failed: {err:#}");
            Readme::html(
                format!("<p>Error fetching README: {}</p>", escape_html(&format!("{err:#}"))),
                repo_url,
            )
        }
    }
}

async fn try_resolve(
    deps: &impl FetchPage,
    username: &str,
    repo: &str,
    repo_url: &str,
) -> anyhow::Result<Readme> {
    let api = deps
        .fetch_page(&api_url(&format!("/repos/{username}/{repo}/readme")))
        .await?;
    if api.status == 200 {
        return from_api(&api.body);
    }

    let page = deps.fetch_page(repo_url).await?;
    if page.status != 200 {
        return Ok(Readme::html(README_NOT_AVAILABLE, repo_url));
    }

    Ok(match rendered_readme(&page.body) {
        Some(article) => Readme::html(article, format!("{repo_url}#readme")),
        None => Readme::html(README_NOT_FOUND, repo_url),
    })
}

fn from_api(body: &str) -> anyhow::Result<Readme> {
    let api: ApiReadme = serde_json::from_str(body).context("malformed readme response")?;

    let source = match api.encoding.as_deref() {
        None | Some("base64") => decode_base64(&api.content)?,
        Some(other) => anyhow::bail!("unsupported content encoding `{other}`"),
    };

    Ok(Readme::html(markdown::to_html(&source), api.html_url))
}

/// The API wraps its base64 payload across lines.
fn decode_base64(content: &str) -> anyhow::Result<String> {
    let compact: String = content
        .chars()
        .filter(|ch| !ch.is_ascii_whitespace())
        .collect();
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(compact)
        .context("readme content is not valid base64")?;

    String::from_utf8(bytes).context("readme content is not valid UTF-8")
}

fn rendered_readme(html: &str) -> Option<String> {
    let selector = Selector::parse(RENDERED_README).ok()?;
    let document = Html::parse_document(html);
    let article = document.select(&selector).next()?;
    Some(article.html())
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            ch => out.push(ch),
        }
    }
    out
}
