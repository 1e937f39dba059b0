//! Calendar steps used to walk a slab range

use chrono::{DateTime, Datelike, Days, Duration as ChronoDuration, NaiveDate, TimeZone, Utc};

/// Increment between consecutive cursor positions in a slab range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarStep {
    /// A fixed UTC duration (minutes, hours, days, weeks)
    Fixed(ChronoDuration),
    /// A number of calendar months, keeping the time of day
    Months(u32),
}

impl CalendarStep {
    /// Advance `instant` by one step, `None` past chrono's representable range.
    ///
    /// Month steps keep the day of month; a day the target month does not
    /// have rolls over into the next month, so Jan 31 + 1 month is Mar 3
    /// (Mar 2 in leap years).
    pub fn advance(&self, instant: &DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            Self::Fixed(duration) => instant.checked_add_signed(*duration),
            Self::Months(months) => add_months_rolling(instant, *months),
        }
    }
}

fn add_months_rolling(instant: &DateTime<Utc>, months: u32) -> Option<DateTime<Utc>> {
    let total = i64::from(instant.month0()) + i64::from(months);
    let year = i32::try_from(i64::from(instant.year()) + total.div_euclid(12)).ok()?;
    let month = total.rem_euclid(12) as u32 + 1;

    let date = NaiveDate::from_ymd_opt(year, month, 1)?
        .checked_add_days(Days::new(u64::from(instant.day() - 1)))?;

    Some(Utc.from_utc_datetime(&date.and_time(instant.time())))
}
