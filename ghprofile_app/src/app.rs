use crate::config::Config;

use ghprofile_core::{FetchError, FetchPage, Page, System};

use anyhow::Context;
use std::sync::Arc;
use time::{OffsetDateTime, UtcOffset};

#[derive(Clone)]
pub struct App {
    pub config: Arc<Config>,
    pub http: reqwest::Client,
    /// Offset for wall-clock times shown to users.
    pub local_offset: UtcOffset,
}

impl App {
    pub fn new(config: Config, local_offset: UtcOffset) -> anyhow::Result<Self> {
        let http = build_client(&config)?;

        Ok(Self {
            config: Arc::new(config),
            http,
            local_offset,
        })
    }
}

fn build_client(config: &Config) -> anyhow::Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(config.http_timeout())
        .build()
        .context("failed to build HTTP client")
}

impl FetchPage for App {
    async fn fetch_page(&self, url: &str) -> Result<Page, FetchError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|err| FetchError(err.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|err| FetchError(err.to_string()))?;

        tracing::debug!("GET {url} -> {status}");

        Ok(Page { status, body })
    }
}

impl System for App {
    fn get_current_time(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc().to_offset(self.local_offset)
    }
}
