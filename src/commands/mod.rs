pub mod final_slots;
pub mod participants;
pub mod raw;
pub mod show;

#[cfg(test)]
mod test_server;

use anyhow::{Context, Result};
use doodle_core::{DoodleConfig, PollClient};

/// Split a poll argument into (url, id): anything with an http(s) scheme is a URL.
pub fn split_poll_arg(poll: &str) -> (Option<&str>, Option<&str>) {
    if poll.starts_with("http://") || poll.starts_with("https://") {
        (Some(poll), None)
    } else {
        (None, Some(poll))
    }
}

/// Fetch a poll, treating "not found" as an error for the CLI.
pub fn open_poll(config: &DoodleConfig, poll: &str) -> Result<PollClient> {
    let (url, poll_id) = split_poll_arg(poll);

    let client = PollClient::with_config(config, url, poll_id)
        .with_context(|| format!("Failed to fetch poll '{}'", poll))?;

    if !client.is_fetched() {
        anyhow::bail!("Poll not found: {}", client.url());
    }

    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_poll_arg() {
        assert_eq!(
            split_poll_arg("https://doodle.com/poll/abc123"),
            (Some("https://doodle.com/poll/abc123"), None)
        );
        assert_eq!(
            split_poll_arg("http://localhost:8080/poll/abc123"),
            (Some("http://localhost:8080/poll/abc123"), None)
        );
        assert_eq!(split_poll_arg("abc123"), (None, Some("abc123")));
        assert_eq!(split_poll_arg("doodle.com/poll/abc"), (None, Some("doodle.com/poll/abc")));
    }

    #[test]
    fn test_open_poll_not_found() {
        let (config, server) = test_server::serve(vec![(404, String::new())]);

        let result = open_poll(&config, "abc123");
        server.join().unwrap();

        let err = result.err().expect("404 should be an error");
        assert!(err.to_string().starts_with("Poll not found"));
        assert!(err.to_string().ends_with("/poll/abc123"));
    }

    #[test]
    fn test_open_poll_by_url() {
        let (config, server) = test_server::serve(vec![(200, r#"{"title":"Lunch"}"#.to_string())]);
        let url = format!("{}/poll/abc123", config.provider_url);

        let client = open_poll(&config, &url).unwrap();
        server.join().unwrap();

        assert_eq!(client.poll_id(), "abc123");
        assert_eq!(client.title().unwrap(), "Lunch");
    }
}
