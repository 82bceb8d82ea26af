//! Wall-clock helpers for stamping notifications.

use chrono::{DateTime, Utc};

/// UTC instant at which a notification was recorded.
pub type Timestamp = DateTime<Utc>;

/// Current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}
