//! Read-only client for Doodle scheduling polls.
//!
//! A [`PollClient`] resolves a poll from its URL or id, fetches the poll's
//! JSON once and exposes accessors over the cached document:
//!
//! ```no_run
//! use doodle_core::PollClient;
//!
//! let poll = PollClient::new(Some("https://doodle.com/poll/abc123"), None)?;
//! println!("{} by {}", poll.title()?, poll.initiator()?);
//! # Ok::<(), doodle_core::DoodleError>(())
//! ```

pub mod client;
pub mod config;
pub mod constants;
pub mod document;
pub mod error;
pub mod poll_ref;
pub mod timezone;

pub use client::{PollClient, RefreshOutcome};
pub use config::DoodleConfig;
pub use document::{FinalSlot, PollDocument, PollState};
pub use error::{DoodleError, DoodleResult};
pub use poll_ref::PollRef;
pub use timezone::PollTimeZone;
