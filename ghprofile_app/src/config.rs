use std::net::SocketAddr;
use std::time::Duration;

/// Sent on every outbound fetch. The site serves reduced markup to
/// unrecognised clients.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

#[derive(clap::Parser, Clone, Debug)]
pub struct Config {
    #[arg(long, env, default_value = "0.0.0.0:8000")]
    pub bind_addr: SocketAddr,

    /// Upper bound for each outbound request, connect to last byte.
    #[arg(long, env, default_value_t = 15)]
    pub http_timeout_secs: u64,

    #[arg(long, env, default_value = BROWSER_USER_AGENT)]
    pub user_agent: String,
}

impl Config {
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}
