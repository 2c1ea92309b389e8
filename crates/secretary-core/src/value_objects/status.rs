//! Presence status and the event types that drive it
//!
//! Status is never stored. It is derived from how many events a user has
//! recorded since the start of the current day: an odd count means the user
//! is in the lab, an even count (including zero) means they are not.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Derived presence of a user in the lab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Arrived,
    #[default]
    Left,
}

impl Status {
    /// Derive the status from the number of events recorded today
    #[inline]
    pub fn from_event_count(count: i64) -> Self {
        if count % 2 == 0 {
            Self::Left
        } else {
            Self::Arrived
        }
    }

    /// The status a new event switches to
    #[inline]
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Arrived => Self::Left,
            Self::Left => Self::Arrived,
        }
    }

    #[inline]
    pub fn is_arrived(self) -> bool {
        matches!(self, Self::Arrived)
    }

    /// Event type that records a transition into this status
    #[inline]
    pub fn event_type(self) -> EventType {
        match self {
            Self::Arrived => EventType::Arrive,
            Self::Left => EventType::Leave,
        }
    }

    /// Human-readable status line for `username`
    pub fn describe(self, username: &str) -> String {
        match self {
            Self::Arrived => format!("{username} is comming!"),
            Self::Left => format!("{username} has left..."),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arrived => write!(f, "arrived"),
            Self::Left => write!(f, "left"),
        }
    }
}

/// Kind of a persisted lab event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Arrive,
    Leave,
}

impl EventType {
    /// Column value stored in the events table
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Arrive => "arrive",
            Self::Leave => "leave",
        }
    }

    /// Status a user is in right after this event
    #[inline]
    pub fn resulting_status(self) -> Status {
        match self {
            Self::Arrive => Status::Arrived,
            Self::Leave => Status::Left,
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "arrive" => Ok(Self::Arrive),
            "leave" => Ok(Self::Leave),
            other => Err(DomainError::InvalidEventType(other.to_string())),
        }
    }
}

impl From<Status> for EventType {
    fn from(status: Status) -> Self {
        status.event_type()
    }
}

/// First instant of the calendar day containing `now`, in `now`'s time zone
///
/// Local midnight can be skipped by a DST transition; in that case the earliest
/// valid instant of the day is used, falling back to `now` itself.
pub fn start_of_day<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Utc> {
    let tz = now.timezone();
    let date = now.date_naive();

    let midnight = date.and_time(NaiveTime::MIN);
    if let Some(start) = tz.from_local_datetime(&midnight).earliest() {
        return start.with_timezone(&Utc);
    }

    // Midnight fell into a gap: probe forward in 15 minute steps.
    (1..=4 * 24)
        .filter_map(|step| {
            let probe = midnight + chrono::Duration::minutes(15 * step);
            (probe.date() == date).then_some(probe)
        })
        .find_map(|probe| tz.from_local_datetime(&probe).earliest())
        .map_or_else(|| now.with_timezone(&Utc), |start| start.with_timezone(&Utc))
}
