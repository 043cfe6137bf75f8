//! Shared building blocks for the payment service.
//!
//! Handlers never read the global clock directly; they receive a [`Clock`]
//! so tests can pin the reported time.

pub mod clock;
pub mod timestamp;

pub use clock::{Clock, ClockZone, FixedClock, ParseClockZoneError, SystemClock};
pub use timestamp::{TIMESTAMP_FORMAT, format_timestamp, parse_timestamp, serialize_timestamp};
