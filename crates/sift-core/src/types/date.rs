use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use time::{Date as TimeDate, Month, OffsetDateTime, Time, format_description::well_known::Rfc3339};

///
/// Date
///
/// Point in time, stored as signed milliseconds since the Unix epoch (UTC).
///

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[repr(transparent)]
pub struct Date(i64);

impl Date {
    pub const EPOCH: Self = Self(0);
    pub const MIN: Self = Self(i64::MIN);
    pub const MAX: Self = Self(i64::MAX);

    const NANOS_PER_MILLI: i128 = 1_000_000;

    #[must_use]
    pub const fn from_unix_millis(millis: i64) -> Self {
        Self(millis)
    }

    #[must_use]
    pub const fn unix_millis(self) -> i64 {
        self.0
    }

    /// Midnight UTC on the given calendar day, if the day exists.
    #[must_use]
    pub fn from_calendar_date(y: i32, m: u8, d: u8) -> Option<Self> {
        let month = Month::try_from(m).ok()?;
        let date = TimeDate::from_calendar_date(y, month, d).ok()?;

        Some(Self::from_offset_date_time(
            date.with_time(Time::MIDNIGHT).assume_utc(),
        ))
    }

    /// Parse an RFC 3339 timestamp (`2024-05-01T12:00:00Z`).
    pub fn parse_rfc3339(s: &str) -> Result<Self, Error> {
        OffsetDateTime::parse(s, &Rfc3339)
            .map(Self::from_offset_date_time)
            .map_err(|err| Error::invalid_value(format!("invalid date '{s}': {err}")))
    }

    #[expect(clippy::cast_possible_truncation)]
    fn from_offset_date_time(value: OffsetDateTime) -> Self {
        let millis = value.unix_timestamp_nanos() / Self::NANOS_PER_MILLI;

        Self(millis.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64)
    }

    fn to_offset_date_time(self) -> Option<OffsetDateTime> {
        OffsetDateTime::from_unix_timestamp_nanos(i128::from(self.0) * Self::NANOS_PER_MILLI).ok()
    }
}

impl Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_offset_date_time().and_then(|v| v.format(&Rfc3339).ok()) {
            Some(text) => write!(f, "{text}"),
            None => write!(f, "{}ms", self.0),
        }
    }
}

///
/// TESTS
///
