use std::fmt;
use std::str::FromStr;

use chrono::{Local, NaiveDateTime, Utc};
use thiserror::Error;

/// Source of the current wall-clock time.
pub trait Clock: Send + Sync {
    /// Returns the current time as a zone-less date and time.
    fn now(&self) -> NaiveDateTime;
}

/// Time zone a [`SystemClock`] reports in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClockZone {
    /// The process's local zone (honors `TZ`).
    #[default]
    Local,
    Utc,
}

impl ClockZone {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClockZone::Local => "local",
            ClockZone::Utc => "utc",
        }
    }
}

impl fmt::Display for ClockZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a clock zone name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown clock zone '{0}', expected 'local' or 'utc'")]
pub struct ParseClockZoneError(pub String);

impl FromStr for ClockZone {
    type Err = ParseClockZoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(ClockZone::Local),
            "utc" => Ok(ClockZone::Utc),
            _ => Err(ParseClockZoneError(s.to_string())),
        }
    }
}

/// Clock backed by the operating system's wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    zone: ClockZone,
}

impl SystemClock {
    pub fn new(zone: ClockZone) -> Self {
        Self { zone }
    }

    /// Reports server local time.
    pub fn local() -> Self {
        Self::new(ClockZone::Local)
    }

    /// Reports UTC.
    pub fn utc() -> Self {
        Self::new(ClockZone::Utc)
    }

    pub fn zone(&self) -> ClockZone {
        self.zone
    }
}

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        match self.zone {
            ClockZone::Local => Local::now().naive_local(),
            ClockZone::Utc => Utc::now().naive_utc(),
        }
    }
}

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(NaiveDateTime);

impl FixedClock {
    pub fn new(at: NaiveDateTime) -> Self {
        Self(at)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
