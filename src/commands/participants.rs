use anyhow::Result;
use doodle_core::DoodleConfig;
use owo_colors::OwoColorize;

use super::open_poll;

pub fn run(config: &DoodleConfig, poll: &str) -> Result<()> {
    let client = open_poll(config, poll)?;
    let participants = client.participants()?;

    if participants.is_empty() {
        println!("{}", "No participants yet".dimmed());
        return Ok(());
    }

    for name in participants {
        println!("{}", name);
    }

    Ok(())
}
