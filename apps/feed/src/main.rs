use anyhow::Context;
use moor::prelude::*;
use moor_logger::Logger;
use tracing::info;

fn main() -> anyhow::Result<()> {
    let _log = Logger::builder(env!("CARGO_PKG_NAME")).init()?;

    let cfg: AppConfig =
        load_config(Some("feed")).context("Critical: Configuration is malformed")?;

    let client = moor_feed::bootstrap(&cfg)?;
    info!(server_url = %client.server_url(), "Feed backend ready");

    Ok(())
}
