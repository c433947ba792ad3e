use ghprofile_app::{app::App, config::Config};

use clap::Parser;
use time::UtcOffset;

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    // Only readable while the process is single-threaded, so before the runtime starts.
    let local_offset = UtcOffset::current_local_offset().unwrap_or_else(|_| {
        tracing::warn!("local UTC offset unavailable, showing times in UTC");
        UtcOffset::UTC
    });

    let config = Config::parse();
    let app = App::new(config, local_offset)?;

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(ghprofile_app::serve(app))
}
