//! Temporal value representations.
//!
//! The converter operates on a closed set of representations. Zone-aware
//! variants carry their own offset or zone identifier; naive variants are
//! interpreted in the converter's configured zone; the legacy variants are
//! zone-independent points in time.

use std::fmt;
use std::time::SystemTime;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;

/// Identifies one of the supported temporal representations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TemporalKind {
    /// Calendar date without time or zone.
    Date,
    /// Date and time without zone.
    DateTime,
    /// Date and time with a fixed UTC offset.
    OffsetDateTime,
    /// Date and time in a named IANA zone.
    ZonedDateTime,
    /// OS-level point in time (`std::time::SystemTime`).
    SystemTime,
    /// Millisecond instant since the Unix epoch.
    UnixMillis,
    /// Millisecond instant carried as decimal text.
    MillisText,
}

impl fmt::Display for TemporalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date => f.write_str("date"),
            Self::DateTime => f.write_str("datetime"),
            Self::OffsetDateTime => f.write_str("offset datetime"),
            Self::ZonedDateTime => f.write_str("zoned datetime"),
            Self::SystemTime => f.write_str("system time"),
            Self::UnixMillis => f.write_str("unix millis"),
            Self::MillisText => f.write_str("millis text"),
        }
    }
}

/// A temporal value in one of the supported representations.
///
/// Any two values represent the same real instant iff converting both
/// through the canonical instant yields equal instants.
#[derive(Clone, Debug, PartialEq)]
pub enum TemporalValue {
    /// Calendar date without time or zone.
    Date(NaiveDate),
    /// Date and time without zone.
    DateTime(NaiveDateTime),
    /// Date and time with a fixed UTC offset.
    OffsetDateTime(DateTime<FixedOffset>),
    /// Date and time in a named IANA zone.
    ZonedDateTime(DateTime<Tz>),
    /// OS-level point in time.
    SystemTime(SystemTime),
    /// Millisecond instant since the Unix epoch.
    UnixMillis(i64),
    /// Millisecond instant carried as decimal text.
    MillisText(String),
}

impl TemporalValue {
    /// The kind tag for this value.
    pub fn kind(&self) -> TemporalKind {
        match self {
            Self::Date(_) => TemporalKind::Date,
            Self::DateTime(_) => TemporalKind::DateTime,
            Self::OffsetDateTime(_) => TemporalKind::OffsetDateTime,
            Self::ZonedDateTime(_) => TemporalKind::ZonedDateTime,
            Self::SystemTime(_) => TemporalKind::SystemTime,
            Self::UnixMillis(_) => TemporalKind::UnixMillis,
            Self::MillisText(_) => TemporalKind::MillisText,
        }
    }

    /// Check if this value carries an explicit offset or zone.
    #[inline]
    pub fn is_zone_aware(&self) -> bool {
        matches!(self, Self::OffsetDateTime(_) | Self::ZonedDateTime(_))
    }
}

impl fmt::Display for TemporalValue {
    /// Default text rendering. Instant-bearing variants render in their
    /// carried zone; the legacy variants render as UTC or raw milliseconds.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(d) => write!(f, "{d}"),
            Self::DateTime(dt) => write!(f, "{dt}"),
            Self::OffsetDateTime(dt) => write!(f, "{dt}"),
            Self::ZonedDateTime(dt) => write!(f, "{dt}"),
            Self::SystemTime(st) => write!(f, "{}", DateTime::<Utc>::from(*st)),
            Self::UnixMillis(ms) => write!(f, "{ms}"),
            Self::MillisText(text) => f.write_str(text),
        }
    }
}

impl From<NaiveDate> for TemporalValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<NaiveDateTime> for TemporalValue {
    fn from(value: NaiveDateTime) -> Self {
        Self::DateTime(value)
    }
}

impl From<DateTime<FixedOffset>> for TemporalValue {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Self::OffsetDateTime(value)
    }
}

impl From<DateTime<Tz>> for TemporalValue {
    fn from(value: DateTime<Tz>) -> Self {
        Self::ZonedDateTime(value)
    }
}

impl From<SystemTime> for TemporalValue {
    fn from(value: SystemTime) -> Self {
        Self::SystemTime(value)
    }
}
