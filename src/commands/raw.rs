use anyhow::{Context, Result};
use doodle_core::DoodleConfig;

use super::open_poll;

/// Print the poll JSON exactly as Doodle returned it (pretty printed).
pub fn run(config: &DoodleConfig, poll: &str) -> Result<()> {
    let client = open_poll(config, poll)?;

    let raw = client
        .raw_document()
        .context("Poll document missing after fetch")?;

    println!(
        "{}",
        serde_json::to_string_pretty(raw).context("Failed to serialize poll document")?
    );

    Ok(())
}
