use crate::rules::{ProfileRules, RepoCardRules};
use crate::{ProfileRecord, RepositoryRecord};

use ghprofile_core::site_url;
use scraper::{ElementRef, Html, Selector};

/// Reads every profile field from a profile page. Never fails: each field
/// that cannot be located gets its default.
pub fn extract_profile(html: &str, username: &str, rules: &ProfileRules) -> ProfileRecord {
    let document = Html::parse_document(html);
    let root = document.root_element();

    ProfileRecord {
        username: username.to_string(),
        name: rules.name.extract(root, username),
        avatar: rules.avatar.extract(root, username),
        bio: rules.bio.extract(root, username),
        followers: rules.followers.extract(root, username),
        following: rules.following.extract(root, username),
        email: rules.email.extract(root, username),
        location: rules.location.extract(root, username),
        company: rules.company.extract(root, username),
        website: rules.website.extract(root, username),
        twitter: rules.twitter.extract(root, username),
    }
}

/// Reads up to `limit` repository cards from a listing page, in page order.
pub fn extract_repos(
    html: &str,
    username: &str,
    rules: &RepoCardRules,
    limit: usize,
) -> Vec<RepositoryRecord> {
    let document = Html::parse_document(html);
    let card = match Selector::parse(&rules.card) {
        Ok(card) => card,
        Err(err) => {
            tracing::warn!("repository card selector `{}` is unusable: {err:?}", rules.card);
            return vec![];
        }
    };

    document
        .select(&card)
        .take(limit)
        .filter_map(|card| extract_repo(card, username, rules))
        .collect()
}

fn extract_repo(card: ElementRef<'_>, username: &str, rules: &RepoCardRules) -> Option<RepositoryRecord> {
    let name = rules.name.find(card, username)?;

    let url = rules
        .url
        .locator
        .find(card, username)
        .map(|href| site_url(&href))
        .unwrap_or_else(|| rules.url.default.to_string());

    Some(RepositoryRecord {
        name,
        url,
        description: rules.description.extract(card, username),
        language: rules.language.extract(card, username),
        stars: rules.stars.extract(card, username),
        forks: rules.forks.extract(card, username),
        updated: rules.updated.extract(card, username),
    })
}
