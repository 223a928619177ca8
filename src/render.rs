//! Terminal rendering for poll types using owo_colors.

use chrono::{DateTime, FixedOffset};
use doodle_core::{FinalSlot, PollState};
use owo_colors::OwoColorize;

pub trait Render {
    fn render(&self) -> String;
}

impl Render for PollState {
    fn render(&self) -> String {
        match self {
            PollState::Open => "open".green().to_string(),
            PollState::Closed => "closed".red().to_string(),
            PollState::Other(state) => state.to_lowercase().yellow().to_string(),
        }
    }
}

impl Render for FinalSlot {
    fn render(&self) -> String {
        format!(
            "{} → {}",
            render_side(self.start.as_ref()),
            render_side(self.end.as_ref())
        )
    }
}

/// Unknown sides of a slot show as a dimmed "?"
fn render_side(time: Option<&DateTime<FixedOffset>>) -> String {
    match time {
        Some(dt) => format_time(dt),
        None => "?".dimmed().to_string(),
    }
}

/// e.g. "Tue 2023-11-14 23:13 +01:00"
pub fn format_time(dt: &DateTime<FixedOffset>) -> String {
    dt.format("%a %Y-%m-%d %H:%M %:z").to_string()
}

/// Simple pluralization helper
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn berlin_winter() -> FixedOffset {
        FixedOffset::east_opt(3600).unwrap()
    }

    #[test]
    fn test_format_time() {
        let dt = berlin_winter()
            .with_ymd_and_hms(2023, 11, 14, 23, 13, 20)
            .unwrap();

        assert_eq!(format_time(&dt), "Tue 2023-11-14 23:13 +01:00");
    }

    #[test]
    fn test_render_half_known_slot() {
        let start = berlin_winter()
            .with_ymd_and_hms(2023, 11, 14, 12, 0, 0)
            .unwrap();
        let slot = FinalSlot {
            start: Some(start),
            end: None,
        };

        let rendered = slot.render();
        assert!(rendered.starts_with("Tue 2023-11-14 12:00 +01:00 → "));
        assert!(rendered.contains('?'));
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize("participant", 1), "participant");
        assert_eq!(pluralize("participant", 3), "participants");
    }
}
