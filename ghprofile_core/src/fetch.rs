use entrait::entrait_export as entrait;

/// A fetched document. Any HTTP status is a successful fetch; callers decide
/// what a status means for them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page {
    pub status: u16,
    pub body: String,
}

impl Page {
    pub fn ok(body: impl Into<String>) -> Self {
        Self::with_status(200, body)
    }

    pub fn with_status(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }
}

/// Transport-level failure: timeout, DNS, refused connection, broken body.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
#[error("{0}")]
pub struct FetchError(pub String);

///
/// Outbound GET against the scraped site. Implementations must send the
/// browser user-agent and enforce a timeout.
///
#[entrait(mock_api=FetchPageMock)]
pub trait FetchPage {
    async fn fetch_page(&self, url: &str) -> Result<Page, FetchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_classification() {
        assert!(Page::ok("").is_success());
        assert!(Page::with_status(204, "").is_success());
        assert!(!Page::with_status(404, "").is_success());
        assert!(Page::with_status(404, "").is_not_found());
        assert!(!Page::with_status(500, "").is_not_found());
    }
}
