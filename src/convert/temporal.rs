//! Type-directed temporal conversion.
//!
//! Every conversion goes through a canonical instant: classify the source,
//! derive the instant (zone-aware sources keep their own offset or zone,
//! naive sources are interpreted in the configured zone), then materialize
//! the destination representation by projecting the instant back out.

use chrono::{DateTime, FixedOffset, LocalResult, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::schema::{FieldType, FieldValue};
use crate::util::{Error, Result};

use super::{TemporalKind, TemporalValue};

/// Zone recovered from the source, used to project the canonical instant
/// into the destination representation.
#[derive(Clone, Copy, Debug)]
enum Zone {
    Fixed(FixedOffset),
    Named(Tz),
}

/// Converts between temporal representations without losing the
/// represented instant.
///
/// Naive sources are interpreted in the configured zone — a documented
/// imprecision for callers that deal in wall-clock values. The zone and
/// the passthrough format are explicit state, never ambient process state,
/// so conversions stay deterministic and testable.
#[derive(Clone, Debug)]
pub struct TemporalConverter {
    zone: Tz,
    format: String,
}

impl TemporalConverter {
    /// Default passthrough format for text destinations.
    pub const DEFAULT_FORMAT: &'static str = "%Y-%m-%dT%H:%M:%S";

    /// Create a converter interpreting naive values in `zone`.
    pub fn new(zone: Tz) -> Self {
        Self {
            zone,
            format: Self::DEFAULT_FORMAT.to_string(),
        }
    }

    /// Replace the passthrough format used for text destinations.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    /// The configured default zone.
    #[inline]
    pub fn zone(&self) -> Tz {
        self.zone
    }

    /// Convert `source` into the representation requested by `dest`.
    ///
    /// Temporal destinations preserve the represented instant. A `Text`
    /// destination is the generic passthrough: the source renders with the
    /// configured format string in its carried (or the configured) zone.
    /// Every other destination fails with
    /// [`Error::UnsupportedDestination`].
    pub fn convert(
        &self,
        dest: &FieldType,
        source: Option<&TemporalValue>,
    ) -> Result<FieldValue> {
        let source = source.ok_or(Error::NullSource)?;
        let (instant, zone) = self.instant_of(source)?;

        match dest {
            FieldType::Temporal(kind) => {
                Ok(FieldValue::Temporal(self.project(instant, zone, *kind)))
            }
            FieldType::Text => {
                let wall = match zone {
                    Zone::Fixed(offset) => instant.with_timezone(&offset).naive_local(),
                    Zone::Named(tz) => instant.with_timezone(&tz).naive_local(),
                };
                Ok(FieldValue::Text(wall.format(&self.format).to_string()))
            }
            other => Err(Error::UnsupportedDestination(other.to_string())),
        }
    }

    /// Check whether a conversion involves temporal values at all.
    ///
    /// Generic mapping layers use this to decide between a temporal
    /// conversion and a plain field copy: true iff the destination tag or
    /// the source's runtime value is temporal.
    pub fn is_applicable(dest: &FieldType, source: Option<&FieldValue>) -> bool {
        dest.is_temporal() || source.is_some_and(FieldValue::is_temporal)
    }

    /// Derive the canonical instant and the zone to project results into.
    ///
    /// Zone-aware sources keep their carried offset or zone; everything
    /// else projects through the configured zone.
    fn instant_of(&self, source: &TemporalValue) -> Result<(DateTime<Utc>, Zone)> {
        let configured = Zone::Named(self.zone);
        Ok(match source {
            TemporalValue::Date(date) => (
                self.localize(date.and_time(NaiveTime::MIN)).to_utc(),
                configured,
            ),
            TemporalValue::DateTime(dt) => (self.localize(*dt).to_utc(), configured),
            TemporalValue::OffsetDateTime(dt) => {
                (dt.with_timezone(&Utc), Zone::Fixed(*dt.offset()))
            }
            TemporalValue::ZonedDateTime(dt) => {
                (dt.with_timezone(&Utc), Zone::Named(dt.timezone()))
            }
            TemporalValue::SystemTime(st) => ((*st).into(), configured),
            TemporalValue::UnixMillis(ms) => (
                DateTime::from_timestamp_millis(*ms).ok_or(Error::MillisOutOfRange(*ms))?,
                configured,
            ),
            TemporalValue::MillisText(text) => {
                let ms: i64 = text
                    .trim()
                    .parse()
                    .map_err(|_| Error::InvalidMillisText(text.clone()))?;
                (
                    DateTime::from_timestamp_millis(ms).ok_or(Error::MillisOutOfRange(ms))?,
                    configured,
                )
            }
        })
    }

    /// Interpret a naive wall-clock value in the configured zone.
    ///
    /// Ambiguous local times (clocks rolled back) resolve to the earlier
    /// instant; nonexistent local times (clocks rolled forward) fall back
    /// to the UTC reading of the same wall clock.
    fn localize(&self, naive: NaiveDateTime) -> DateTime<Tz> {
        match self.zone.from_local_datetime(&naive) {
            LocalResult::Single(dt) => dt,
            LocalResult::Ambiguous(earlier, _) => earlier,
            LocalResult::None => self.zone.from_utc_datetime(&naive),
        }
    }

    /// Materialize the destination representation from the canonical
    /// instant.
    fn project(&self, instant: DateTime<Utc>, zone: Zone, kind: TemporalKind) -> TemporalValue {
        match kind {
            TemporalKind::Date => TemporalValue::Date(match zone {
                Zone::Fixed(offset) => instant.with_timezone(&offset).date_naive(),
                Zone::Named(tz) => instant.with_timezone(&tz).date_naive(),
            }),
            TemporalKind::DateTime => TemporalValue::DateTime(match zone {
                Zone::Fixed(offset) => instant.with_timezone(&offset).naive_local(),
                Zone::Named(tz) => instant.with_timezone(&tz).naive_local(),
            }),
            TemporalKind::OffsetDateTime => TemporalValue::OffsetDateTime(match zone {
                Zone::Fixed(offset) => instant.with_timezone(&offset),
                Zone::Named(tz) => instant.with_timezone(&tz).fixed_offset(),
            }),
            TemporalKind::ZonedDateTime => TemporalValue::ZonedDateTime(match zone {
                Zone::Named(tz) => instant.with_timezone(&tz),
                // A bare offset has no IANA name; use the configured zone.
                Zone::Fixed(_) => instant.with_timezone(&self.zone),
            }),
            TemporalKind::SystemTime => TemporalValue::SystemTime(instant.into()),
            TemporalKind::UnixMillis => TemporalValue::UnixMillis(instant.timestamp_millis()),
            TemporalKind::MillisText => {
                TemporalValue::MillisText(instant.timestamp_millis().to_string())
            }
        }
    }
}

impl Default for TemporalConverter {
    fn default() -> Self {
        Self::new(Tz::UTC)
    }
}
