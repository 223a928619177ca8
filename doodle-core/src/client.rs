//! Blocking client for a single Doodle poll.
//!
//! The poll is fetched once on construction and cached; every accessor reads
//! the cache. Only `refresh` touches the network again.

use chrono::{DateTime, FixedOffset};
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, error, trace, warn};

use crate::config::DoodleConfig;
use crate::document::{FinalSlot, PollDocument, PollState};
use crate::error::{DoodleError, DoodleResult};
use crate::poll_ref::PollRef;
use crate::timezone::PollTimeZone;

/// What a successful `refresh` did to the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Doodle answered 200 and the cached document was replaced.
    Updated,
    /// Doodle answered 404; the cache was left as it was.
    NotFound,
}

struct CachedDocument {
    raw: Value,
    document: PollDocument,
}

pub struct PollClient {
    poll: PollRef,
    http: reqwest::blocking::Client,
    fallback_offset_hours: i32,
    cached: Option<CachedDocument>,
    /// Set once, on the first successful fetch.
    timezone: Option<PollTimeZone>,
}

impl PollClient {
    /// Open a poll on doodle.com by URL or id and fetch it.
    pub fn new(url: Option<&str>, poll_id: Option<&str>) -> DoodleResult<Self> {
        Self::with_config(&DoodleConfig::default(), url, poll_id)
    }

    pub fn with_config(
        config: &DoodleConfig,
        url: Option<&str>,
        poll_id: Option<&str>,
    ) -> DoodleResult<Self> {
        let poll = PollRef::resolve(&config.provider_url, url, poll_id)?;

        let mut builder = reqwest::blocking::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        let mut client = PollClient {
            poll,
            http: builder.build()?,
            fallback_offset_hours: config.fallback_utc_offset_hours,
            cached: None,
            timezone: None,
        };

        client.refresh()?;

        Ok(client)
    }

    /// Fetch the poll endpoint again.
    pub fn refresh(&mut self) -> DoodleResult<RefreshOutcome> {
        let endpoint = self.poll.endpoint.clone();
        self.refresh_from(&endpoint)
    }

    /// Fetch `url` and, on 200, replace the cached document with its body.
    pub fn refresh_from(&mut self, url: &str) -> DoodleResult<RefreshOutcome> {
        trace!(url, "Fetching poll");

        let response = self.http.get(url).send()?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            debug!(url, "Poll not found, keeping cached document");
            return Ok(RefreshOutcome::NotFound);
        }

        if status != StatusCode::OK {
            let body = match response.text() {
                Ok(body) => body,
                Err(e) => {
                    warn!(url, error = %e, "Could not read error response body");
                    String::new()
                }
            };
            error!(url, status = status.as_u16(), body = %body, "Doodle request failed");

            return Err(DoodleError::Remote {
                url: url.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        let raw: Value = serde_json::from_str(&response.text()?)?;
        debug!("Fetched poll {}:\n{:#}", self.poll.poll_id, raw);

        let document = PollDocument::from_value(raw.clone())?;

        if self.timezone.is_none() {
            self.timezone = Some(PollTimeZone::resolve(
                document.time_zone_name(),
                self.fallback_offset_hours,
            )?);
        }

        self.cached = Some(CachedDocument { raw, document });

        Ok(RefreshOutcome::Updated)
    }

    pub fn poll_ref(&self) -> &PollRef {
        &self.poll
    }

    pub fn poll_id(&self) -> &str {
        &self.poll.poll_id
    }

    pub fn endpoint(&self) -> &str {
        &self.poll.endpoint
    }

    /// Human-facing poll URL.
    pub fn url(&self) -> &str {
        &self.poll.display_url
    }

    pub fn timezone(&self) -> Option<&PollTimeZone> {
        self.timezone.as_ref()
    }

    pub fn is_fetched(&self) -> bool {
        self.cached.is_some()
    }

    pub fn document(&self) -> Option<&PollDocument> {
        self.cached.as_ref().map(|c| &c.document)
    }

    /// The document exactly as Doodle sent it.
    pub fn raw_document(&self) -> Option<&Value> {
        self.cached.as_ref().map(|c| &c.raw)
    }

    fn populated(&self) -> DoodleResult<(&PollDocument, &PollTimeZone)> {
        match (&self.cached, &self.timezone) {
            (Some(cached), Some(tz)) => Ok((&cached.document, tz)),
            _ => Err(DoodleError::NotFetched),
        }
    }

    /// Participant names in the order Doodle lists them.
    ///
    /// Entries without a name are skipped.
    pub fn participants(&self) -> DoodleResult<Vec<&str>> {
        let (doc, _) = self.populated()?;

        Ok(doc
            .participants
            .iter()
            .flatten()
            .filter_map(|p| p.name.as_deref())
            .collect())
    }

    pub fn title(&self) -> DoodleResult<&str> {
        let (doc, _) = self.populated()?;
        doc.title.as_deref().ok_or(DoodleError::MissingField("title"))
    }

    pub fn location(&self) -> Option<&str> {
        self.document()?.location_name()
    }

    pub fn description(&self) -> Option<&str> {
        self.document()?.description.as_deref()
    }

    pub fn comments(&self) -> Option<&Value> {
        self.document()?.comments.as_ref()
    }

    /// Name of the poll's creator.
    pub fn initiator(&self) -> DoodleResult<&str> {
        let (doc, _) = self.populated()?;

        doc.initiator()
            .and_then(|i| i.name.as_deref())
            .ok_or(DoodleError::MissingField("initiator"))
    }

    /// When the poll last changed, in the poll's time zone.
    pub fn latest_change(&self) -> DoodleResult<DateTime<FixedOffset>> {
        let (doc, tz) = self.populated()?;
        let millis = doc
            .latest_change
            .ok_or(DoodleError::MissingField("latestChange"))?;

        tz.at_epoch_millis(millis)
            .ok_or(DoodleError::InvalidTimestamp(millis))
    }

    /// Finalized slots; `None` if nothing is fetched or the poll has no options.
    pub fn final_slots(&self) -> Option<Vec<FinalSlot>> {
        let (doc, tz) = self.populated().ok()?;
        doc.final_slots(tz)
    }

    pub fn is_open(&self) -> DoodleResult<bool> {
        let (doc, _) = self.populated()?;
        Ok(doc.is_open())
    }

    pub fn state(&self) -> DoodleResult<PollState> {
        let (doc, _) = self.populated()?;

        doc.state
            .as_deref()
            .map(PollState::from)
            .ok_or(DoodleError::MissingField("state"))
    }
}
