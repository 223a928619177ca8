//! Typed view of the poll JSON returned by the Doodle API.
//!
//! Every field is optional: Doodle omits fields freely depending on the poll
//! type and on who is asking. Epoch values that are not numbers are read as
//! absent so one odd option cannot reject the whole document.

use chrono::{DateTime, FixedOffset};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::constants::OPEN_STATE;
use crate::timezone::PollTimeZone;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PollDocument {
    #[serde(default, deserialize_with = "lenient")]
    pub initiator: Option<InitiatorField>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub participants: Option<Vec<Participant>>,
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub location: Option<Location>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    /// Passed through untouched; its shape differs between poll types.
    pub comments: Option<Value>,
    #[serde(default, deserialize_with = "lenient_millis")]
    pub latest_change: Option<i64>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub options: Option<Vec<PollOption>>,
    #[serde(default, deserialize_with = "lenient")]
    pub state: Option<String>,
}

/// The poll creator. Usually an object, occasionally a list of them.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum InitiatorField {
    Many(Vec<Initiator>),
    One(Initiator),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Initiator {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub time_zone: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Participant {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Location {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
}

/// One candidate slot of the poll.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PollOption {
    #[serde(default, deserialize_with = "lenient_millis")]
    pub start: Option<i64>,
    #[serde(default, deserialize_with = "lenient_millis")]
    pub end: Option<i64>,
    #[serde(default, rename = "final", deserialize_with = "lenient_flag")]
    pub is_final: bool,
}

/// A finalized slot. Either side may be unknown, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalSlot {
    pub start: Option<DateTime<FixedOffset>>,
    pub end: Option<DateTime<FixedOffset>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollState {
    Open,
    Closed,
    Other(String),
}

impl From<&str> for PollState {
    fn from(state: &str) -> Self {
        match state {
            OPEN_STATE => PollState::Open,
            "CLOSED" => PollState::Closed,
            other => PollState::Other(other.to_string()),
        }
    }
}

impl InitiatorField {
    /// The initiator entry, or the first one when Doodle sent a list.
    pub fn primary(&self) -> Option<&Initiator> {
        match self {
            InitiatorField::Many(initiators) => initiators.first(),
            InitiatorField::One(initiator) => Some(initiator),
        }
    }
}

impl PollDocument {
    pub fn from_value(value: Value) -> serde_json::Result<Self> {
        serde_json::from_value(value)
    }

    pub fn initiator(&self) -> Option<&Initiator> {
        self.initiator.as_ref().and_then(InitiatorField::primary)
    }

    /// The initiator's time zone name, if Doodle sent a non-empty one.
    pub fn time_zone_name(&self) -> Option<&str> {
        self.initiator()
            .and_then(|i| i.time_zone.as_deref())
            .filter(|tz| !tz.is_empty())
    }

    pub fn location_name(&self) -> Option<&str> {
        self.location.as_ref().and_then(|l| l.name.as_deref())
    }

    pub fn is_open(&self) -> bool {
        self.state.as_deref() == Some(OPEN_STATE)
    }

    /// Slots flagged final, rendered in `tz`.
    ///
    /// Returns `None` when the document has no options, or an empty list of
    /// them. A side whose
    /// timestamp is missing or unrepresentable becomes `None`; options with
    /// neither side are skipped.
    pub fn final_slots(&self, tz: &PollTimeZone) -> Option<Vec<FinalSlot>> {
        let options = self.options.as_ref().filter(|o| !o.is_empty())?;

        let slots = options
            .iter()
            .filter(|o| o.is_final)
            .filter_map(|o| {
                let start = o.start.and_then(|ms| tz.at_epoch_millis(ms));
                let end = o.end.and_then(|ms| tz.at_epoch_millis(ms));

                if start.is_none() && end.is_none() {
                    None
                } else {
                    Some(FinalSlot { start, end })
                }
            })
            .collect();

        Some(slots)
    }
}

/// Read a value of the expected shape; anything else is absent.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

/// Read a list, dropping entries of the wrong shape. A non-list is absent.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;

    Ok(match value {
        Some(Value::Array(items)) => Some(
            items
                .into_iter()
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect(),
        ),
        _ => None,
    })
}

/// Accept any JSON number as epoch milliseconds; anything else is absent.
fn lenient_millis<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;

    Ok(value.and_then(|v| {
        v.as_i64()
            .or_else(|| v.as_f64().filter(|f| f.is_finite()).map(|f| f as i64))
    }))
}

/// `final` is a boolean, but treat null or junk as "not final".
fn lenient_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_bool()).unwrap_or(false))
}
