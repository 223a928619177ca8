use anyhow::Result;
use doodle_core::{DoodleConfig, PollClient};
use owo_colors::OwoColorize;

use super::open_poll;
use crate::render::{Render, format_time, pluralize};

pub fn run(config: &DoodleConfig, poll: &str) -> Result<()> {
    let client = open_poll(config, poll)?;

    for line in summary_lines(&client)? {
        println!("{}", line);
    }

    Ok(())
}

fn summary_lines(client: &PollClient) -> Result<Vec<String>> {
    let mut lines = Vec::new();

    let title = client.title().unwrap_or("(untitled)");
    let state = match client.state() {
        Ok(state) => format!(" ({})", state.render()),
        Err(_) => String::new(),
    };
    lines.push(format!("📅 {}{}", title.bold(), state));
    lines.push(format!("   {}", client.url().dimmed()));

    if let Ok(initiator) = client.initiator() {
        lines.push(field("Initiator", initiator));
    }
    if let Some(location) = client.location() {
        lines.push(field("Location", location));
    }
    if let Some(description) = client.description() {
        lines.push(field("Description", description));
    }
    if let Ok(changed) = client.latest_change() {
        let zone = client
            .timezone()
            .map(|tz| format!(" ({})", tz))
            .unwrap_or_default();
        lines.push(field("Changed", &format!("{}{}", format_time(&changed), zone.dimmed())));
    }

    let participants = client.participants()?;
    lines.push(field(
        &format!("{} {}", participants.len(), pluralize("participant", participants.len())),
        &participants.join(", "),
    ));

    if let Some(slots) = client.final_slots() {
        if slots.is_empty() {
            lines.push(field("Final", &"not chosen yet".dimmed().to_string()));
        } else {
            for slot in slots {
                lines.push(field("Final", &slot.render()));
            }
        }
    }

    Ok(lines)
}

fn field(label: &str, value: &str) -> String {
    format!("   {} {}", format!("{}:", label).dimmed(), value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_server::serve;

    #[test]
    fn test_summary_lines() {
        let body = r#"{
            "title": "Team lunch",
            "state": "OPEN",
            "initiator": {"name": "Alice", "timeZone": "Europe/Berlin"},
            "participants": [{"name": "Bob"}, {"name": "Carol"}],
            "location": {"name": "Canteen"},
            "latestChange": 1700000000000,
            "options": [{"start": 1700000000000, "end": 1700003600000, "final": true}]
        }"#;
        let (config, server) = serve(vec![(200, body.to_string())]);

        let client = open_poll(&config, "abc123").unwrap();
        server.join().unwrap();

        let summary = summary_lines(&client).unwrap().join("\n");

        assert!(summary.contains("Team lunch"));
        assert!(summary.contains("open"));
        assert!(summary.contains("Alice"));
        assert!(summary.contains("Canteen"));
        assert!(summary.contains("Bob, Carol"));
        assert!(summary.contains("Europe/Berlin"));
        assert!(summary.contains("Tue 2023-11-14 23:13 +01:00 → Wed 2023-11-15 00:13 +01:00"));
    }

    #[test]
    fn test_summary_of_sparse_poll() {
        let (config, server) = serve(vec![(200, "{}".to_string())]);

        let client = open_poll(&config, "abc123").unwrap();
        server.join().unwrap();

        let summary = summary_lines(&client).unwrap().join("\n");

        assert!(summary.contains("(untitled)"));
        assert!(summary.contains("0 participants"));
        assert!(!summary.contains("Final"));
    }
}
