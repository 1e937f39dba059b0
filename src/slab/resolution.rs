//! Slab resolutions
//!
//! Defines the granularities a slab can be cut at, the short codes callers
//! use to name them, and the calendar step each one advances by.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration as ChronoDuration, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use crate::error::{Error, Result};
use crate::slab::format;
use crate::slab::step::CalendarStep;
use crate::slab::Slab;

/// Granularity of a time slab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resolution {
    /// One minute
    Min,
    /// Every 5 minutes
    Min5,
    /// Every 10 minutes
    Min10,
    /// Every 15 minutes
    Min15,
    /// Every 20 minutes
    Min20,
    /// Every 30 minutes
    Min30,
    /// One hour
    Hour,
    /// Every 2 hours
    Hour2,
    /// Every 3 hours
    Hour3,
    /// Every 6 hours
    Hour6,
    /// Every 12 hours
    Hour12,
    /// One day
    Day,
    /// One ISO-8601 week
    Week,
    /// One month
    Month,
    /// Every 2 months
    Month2,
    /// Every 3 months
    Month3,
    /// Every 6 months
    Month6,
    /// One year
    Year,
    /// All time, a single slab
    All,
    /// An integer code outside the known table.
    ///
    /// Only produced by [`Resolution::from_i32`]. Slabs are cut hourly.
    Unrecognized(i32),
}

/// Short code, enumeration name and resolution, in integer-code order
static TABLE: [(&str, &str, Resolution); 19] = [
    ("mi", "MIN", Resolution::Min),
    ("mi5", "MIN5", Resolution::Min5),
    ("mi10", "MIN10", Resolution::Min10),
    ("mi15", "MIN15", Resolution::Min15),
    ("mi20", "MIN20", Resolution::Min20),
    ("mi30", "MIN30", Resolution::Min30),
    ("h", "HOUR", Resolution::Hour),
    ("h2", "HOUR2", Resolution::Hour2),
    ("h3", "HOUR3", Resolution::Hour3),
    ("h6", "HOUR6", Resolution::Hour6),
    ("h12", "HOUR12", Resolution::Hour12),
    ("d", "DAY", Resolution::Day),
    ("w", "WEEK", Resolution::Week),
    ("m", "MONTH", Resolution::Month),
    ("m2", "MONTH2", Resolution::Month2),
    ("m3", "MONTH3", Resolution::Month3),
    ("m6", "MONTH6", Resolution::Month6),
    ("y", "YEAR", Resolution::Year),
    ("a", "ALL", Resolution::All),
];

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unrecognized(code) => write!(f, "UNRECOGNIZED({})", code),
            _ => f.write_str(self.name()),
        }
    }
}

impl Resolution {
    /// Resolve a short code such as `"mi5"`, `"h"` or `"m3"`.
    ///
    /// Never fails: any code not in the table resolves to [`Resolution::Hour`].
    /// Use [`str::parse`] for a validating lookup.
    pub fn from_code_str(code: &str) -> Self {
        match TABLE.iter().find(|(c, _, _)| *c == code) {
            Some(&(_, _, resolution)) => resolution,
            None => {
                debug!(code, "unknown resolution code, falling back to HOUR");
                Self::Hour
            }
        }
    }

    /// Get the short code, `None` for an unrecognized resolution
    pub fn code(&self) -> Option<&'static str> {
        TABLE.iter().find(|(_, _, r)| r == self).map(|(c, _, _)| *c)
    }

    /// Get the upper-case enumeration name
    pub fn name(&self) -> &'static str {
        TABLE
            .iter()
            .find(|(_, _, r)| r == self)
            .map_or("UNRECOGNIZED", |(_, n, _)| *n)
    }

    /// Look up a resolution by its enumeration name
    pub fn from_name(name: &str) -> Option<Self> {
        TABLE.iter().find(|(_, n, _)| *n == name).map(|(_, _, r)| *r)
    }

    /// Get the stable integer code of this resolution
    pub fn to_i32(&self) -> i32 {
        match self {
            Self::Unrecognized(code) => *code,
            Self::Min => 0,
            Self::Min5 => 1,
            Self::Min10 => 2,
            Self::Min15 => 3,
            Self::Min20 => 4,
            Self::Min30 => 5,
            Self::Hour => 6,
            Self::Hour2 => 7,
            Self::Hour3 => 8,
            Self::Hour6 => 9,
            Self::Hour12 => 10,
            Self::Day => 11,
            Self::Week => 12,
            Self::Month => 13,
            Self::Month2 => 14,
            Self::Month3 => 15,
            Self::Month6 => 16,
            Self::Year => 17,
            Self::All => 18,
        }
    }

    /// Build a resolution from its integer code, keeping unknown codes as-is
    pub fn from_i32(code: i32) -> Self {
        usize::try_from(code)
            .ok()
            .and_then(|idx| TABLE.get(idx))
            .map_or(Self::Unrecognized(code), |(_, _, r)| *r)
    }

    /// Get all known resolutions, finest first
    pub fn all() -> [Self; 19] {
        TABLE.map(|(_, _, r)| r)
    }

    /// Calendar step a slab range advances by, `None` for [`Resolution::All`]
    pub fn step(&self) -> Option<CalendarStep> {
        let step = match self {
            Self::Min => CalendarStep::Fixed(ChronoDuration::minutes(1)),
            Self::Min5 => CalendarStep::Fixed(ChronoDuration::minutes(5)),
            Self::Min10 => CalendarStep::Fixed(ChronoDuration::minutes(10)),
            Self::Min15 => CalendarStep::Fixed(ChronoDuration::minutes(15)),
            Self::Min20 => CalendarStep::Fixed(ChronoDuration::minutes(20)),
            Self::Min30 => CalendarStep::Fixed(ChronoDuration::minutes(30)),
            Self::Hour | Self::Unrecognized(_) => CalendarStep::Fixed(ChronoDuration::hours(1)),
            Self::Hour2 => CalendarStep::Fixed(ChronoDuration::hours(2)),
            Self::Hour3 => CalendarStep::Fixed(ChronoDuration::hours(3)),
            Self::Hour6 => CalendarStep::Fixed(ChronoDuration::hours(6)),
            Self::Hour12 => CalendarStep::Fixed(ChronoDuration::hours(12)),
            Self::Day => CalendarStep::Fixed(ChronoDuration::days(1)),
            Self::Week => CalendarStep::Fixed(ChronoDuration::days(7)),
            Self::Month => CalendarStep::Months(1),
            Self::Month2 => CalendarStep::Months(2),
            Self::Month3 => CalendarStep::Months(3),
            Self::Month6 => CalendarStep::Months(6),
            Self::Year => CalendarStep::Months(12),
            Self::All => return None,
        };
        Some(step)
    }

    /// Whether a range includes the slab its end instant falls in.
    ///
    /// MONTH3 and unrecognized resolutions stop before the end instant
    /// instead of one step past it. HOUR shares the unrecognized step but
    /// still includes the end slab, like every other stepped resolution.
    pub(crate) fn includes_range_end(&self) -> bool {
        !matches!(self, Self::Month3 | Self::Unrecognized(_))
    }

    /// Format the slab of a UTC instant
    pub fn format(&self, instant: &DateTime<Utc>) -> Slab {
        format::format_slab(*self, instant)
    }
}

impl FromStr for Resolution {
    type Err = Error;

    /// Strict lookup by short code or (case-insensitive) enumeration name
    fn from_str(s: &str) -> Result<Self> {
        TABLE
            .iter()
            .find(|(c, _, _)| *c == s)
            .map(|(_, _, r)| *r)
            .or_else(|| Self::from_name(&s.to_ascii_uppercase()))
            .ok_or_else(|| Error::unknown_resolution(s))
    }
}

impl Serialize for Resolution {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.to_i32())
    }
}

impl<'de> Deserialize<'de> for Resolution {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        i32::deserialize(deserializer).map(Self::from_i32)
    }
}
