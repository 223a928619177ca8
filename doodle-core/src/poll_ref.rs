//! Resolution of a poll URL or identifier into the addresses the client uses.

use url::Url;

use crate::constants::{API_POLLS_PATH, POLL_PAGE_PATH};
use crate::error::{DoodleError, DoodleResult};

/// A resolved poll: its identifier, API endpoint and human-facing URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollRef {
    pub poll_id: String,
    /// JSON endpoint, with empty admin and participant keys.
    pub endpoint: String,
    /// Page a person would open in a browser.
    pub display_url: String,
}

impl PollRef {
    /// Resolve from a poll URL, a bare identifier, or both.
    ///
    /// The identifier wins for the endpoint when both are given; the URL is
    /// then only kept as the display URL. Empty strings count as absent.
    pub fn resolve(
        provider_url: &str,
        url: Option<&str>,
        poll_id: Option<&str>,
    ) -> DoodleResult<Self> {
        let url = url.map(str::trim).filter(|u| !u.is_empty());
        let poll_id = poll_id.map(str::trim).filter(|id| !id.is_empty());

        let poll_id = match (poll_id, url) {
            (Some(id), _) => id.to_string(),
            (None, Some(url)) => poll_id_from_url(url)?,
            (None, None) => {
                return Err(DoodleError::InvalidArgument(
                    "either a poll URL or a poll id is required".into(),
                ));
            }
        };

        let base = provider_url.trim_end_matches('/');

        Ok(PollRef {
            endpoint: format!(
                "{}/{}/{}?adminKey=&participantKey=",
                base, API_POLLS_PATH, poll_id
            ),
            display_url: match url {
                Some(url) => url.to_string(),
                None => format!("{}/{}/{}", base, POLL_PAGE_PATH, poll_id),
            },
            poll_id,
        })
    }
}

/// Extract the identifier from a poll URL.
///
/// Drops every `/` and every literal `poll` from the path, so
/// `https://doodle.com/poll/abc123` gives `abc123`.
pub fn poll_id_from_url(url: &str) -> DoodleResult<String> {
    let parsed = Url::parse(url)
        .map_err(|e| DoodleError::InvalidArgument(format!("invalid poll URL '{}': {}", url, e)))?;

    let poll_id = parsed.path().replace('/', "").replace("poll", "");

    if poll_id.is_empty() {
        return Err(DoodleError::InvalidArgument(format!(
            "no poll id in URL '{}'",
            url
        )));
    }

    Ok(poll_id)
}
