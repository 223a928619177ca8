/// Provider the client talks to unless configured otherwise.
pub const DEFAULT_PROVIDER_URL: &str = "https://doodle.com";

/// Path prefix of the poll JSON API, relative to the provider URL.
pub const API_POLLS_PATH: &str = "api/v2.0/polls";

/// Path prefix of the human-facing poll page.
pub const POLL_PAGE_PATH: &str = "poll";

/// Offset used when the initiator has no time zone.
///
/// Not a documented provider default; observed behavior only.
pub const FALLBACK_UTC_OFFSET_HOURS: i32 = -12;

/// Value of `state` for a poll that still accepts votes.
pub const OPEN_STATE: &str = "OPEN";
