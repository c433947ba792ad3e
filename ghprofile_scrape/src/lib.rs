pub mod extract;
pub mod rules;

#[cfg(test)]
mod test_pages;

use rules::Ruleset;

use ghprofile_core::error::{GpError, GpResult};
use ghprofile_core::{site_url, FetchPage};

use entrait::entrait_export as entrait;

/// Counts are display text as the page shows them ("1.2k"), never numbers.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ProfileRecord {
    pub username: String,
    pub name: String,
    pub avatar: String,
    pub bio: String,
    pub followers: String,
    pub following: String,
    pub email: String,
    pub location: String,
    pub company: String,
    pub website: String,
    pub twitter: String,
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct RepositoryRecord {
    pub name: String,
    pub url: String,
    pub description: String,
    pub language: String,
    pub stars: String,
    pub forks: String,
    pub updated: String,
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ScrapeResult {
    pub profile: ProfileRecord,
    pub repos: Vec<RepositoryRecord>,
}

#[entrait(pub ScrapeProfile, mock_api=ScrapeProfileMock)]
async fn scrape_profile(deps: &impl FetchPage, username: &str) -> GpResult<ScrapeResult> {
    scrape_profile_with(deps, &Ruleset::github(), username).await
}

/// Scrapes with a caller-chosen ruleset.
pub async fn scrape_profile_with(
    deps: &impl FetchPage,
    rules: &Ruleset,
    username: &str,
) -> GpResult<ScrapeResult> {
    let username = username.trim();
    if username.is_empty() {
        return Err(GpError::UsernameRequired);
    }

    let profile_url = site_url(&format!("/{username}"));
    let page = deps.fetch_page(&profile_url).await?;
    if page.is_not_found() {
        return Err(GpError::UserNotFound);
    }
    if !page.is_success() {
        return Err(GpError::Upstream(format!(
            "{} returned status {}",
            profile_url, page.status
        )));
    }
    let profile = extract::extract_profile(&page.body, username, &rules.profile);

    // The listing's status is not checked: an error page simply has no cards.
    let listing = deps
        .fetch_page(&site_url(&format!("/{username}?tab=repositories")))
        .await?;
    let repos = extract::extract_repos(&listing.body, username, &rules.repo_card, rules.max_repos);

    tracing::debug!("scraped {username}: {} repositories", repos.len());

    Ok(ScrapeResult { profile, repos })
}
