use anyhow::Result;
use doodle_core::{DoodleConfig, PollClient};
use owo_colors::OwoColorize;

use super::open_poll;
use crate::render::Render;

pub fn run(config: &DoodleConfig, poll: &str) -> Result<()> {
    let client = open_poll(config, poll)?;

    for line in slot_lines(&client) {
        println!("{}", line);
    }

    Ok(())
}

fn slot_lines(client: &PollClient) -> Vec<String> {
    match client.final_slots() {
        None => vec!["Poll has no options".dimmed().to_string()],
        Some(slots) if slots.is_empty() => vec!["No final slot chosen yet".dimmed().to_string()],
        Some(slots) => slots.iter().map(Render::render).collect(),
    }
}
