use entrait::entrait_export as entrait;

pub mod error;
pub mod fetch;

pub use fetch::{FetchError, FetchPage, Page};

/// Browsable front of the code-hosting site.
pub const SITE_URL: &str = "https://github.com";

/// Machine-readable API of the same site.
pub const API_URL: &str = "https://api.github.com";

///
/// Mockable system abstraction
///
#[entrait(mock_api=SystemMock)]
pub trait System {
    fn get_current_time(&self) -> time::OffsetDateTime;
}

/// Absolute URL of a page on the site, for a path like `/octocat`.
pub fn site_url(path: &str) -> String {
    join(SITE_URL, path)
}

pub fn api_url(path: &str) -> String {
    join(API_URL, path)
}

fn join(base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    match path.strip_prefix('/') {
        Some(rest) => format!("{base}/{rest}"),
        None => format!("{base}/{path}"),
    }
}
