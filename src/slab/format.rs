//! Slab key rendering
//!
//! Every key starts with the 4-digit year. Grouped resolutions append a
//! marker naming the group size and the group index, computed by integer
//! division of the raw calendar field:
//!
//! | resolution        | key                        | example          |
//! |-------------------|----------------------------|------------------|
//! | MIN               | `YYYYMMDDHHMM`             | `200911102301`   |
//! | MIN5              | `YYYYMMDDHH` `I5` `{m/5:02}` | `2009111023I500` |
//! | MIN10/15/20/30    | `YYYYMMDDHH` `I{n}` `{m/n}`  | `2009053006I301` |
//! | HOUR              | `YYYYMMDDHH`               | `2009111023`     |
//! | HOUR2/3/6/12      | `YYYYMMDD` `H{n:02}` `{h/n}` | `20091110H0211`  |
//! | DAY               | `YYYYMMDD`                 | `20091110`       |
//! | WEEK              | ISO year, ISO week `{:02}` | `200946`         |
//! | MONTH             | `YYYYMM`                   | `200911`         |
//! | MONTH2/3/6        | `YYYY` `M{n}` `{month/n}`  | `2009M25`        |
//! | YEAR              | `YYYY`                     | `2009`           |
//! | ALL               | `ALL`                      | `ALL`            |
//!
//! Month groups divide the 1-based month number, so MONTH6 puts January to
//! May in group 0, June to November in group 1 and December alone in group 2.

use chrono::{DateTime, Datelike, Timelike, Utc};

use crate::slab::{Resolution, Slab, ALL_SLAB};

/// Render the slab key of a UTC instant
pub(crate) fn format_slab(resolution: Resolution, t: &DateTime<Utc>) -> Slab {
    match resolution {
        Resolution::Min => format!("{}{:02}", hour_key(t), t.minute()),
        Resolution::Min5 => format!("{}I5{:02}", hour_key(t), t.minute() / 5),
        Resolution::Min10 => minute_group_key(t, 10),
        Resolution::Min15 => minute_group_key(t, 15),
        Resolution::Min20 => minute_group_key(t, 20),
        Resolution::Min30 => minute_group_key(t, 30),
        Resolution::Hour2 => hour_group_key(t, 2),
        Resolution::Hour3 => hour_group_key(t, 3),
        Resolution::Hour6 => hour_group_key(t, 6),
        Resolution::Hour12 => hour_group_key(t, 12),
        Resolution::Day => day_key(t),
        Resolution::Week => week_key(t),
        Resolution::Month => format!("{:04}{:02}", t.year(), t.month()),
        Resolution::Month2 => month_group_key(t, 2),
        Resolution::Month3 => month_group_key(t, 3),
        Resolution::Month6 => month_group_key(t, 6),
        Resolution::Year => format!("{:04}", t.year()),
        Resolution::All => ALL_SLAB.to_string(),
        Resolution::Hour | Resolution::Unrecognized(_) => hour_key(t),
    }
}

/// ISO week-numbering year and week of whatever calendar `date` is in
pub(crate) fn week_key<D: Datelike>(date: &D) -> Slab {
    let week = date.iso_week();
    format!("{:04}{:02}", week.year(), week.week())
}

fn day_key(t: &DateTime<Utc>) -> String {
    format!("{:04}{:02}{:02}", t.year(), t.month(), t.day())
}

fn hour_key(t: &DateTime<Utc>) -> String {
    format!("{}{:02}", day_key(t), t.hour())
}

fn minute_group_key(t: &DateTime<Utc>, size: u32) -> String {
    format!("{}I{}{}", hour_key(t), size, t.minute() / size)
}

fn hour_group_key(t: &DateTime<Utc>, size: u32) -> String {
    format!("{}H{:02}{}", day_key(t), size, t.hour() / size)
}

fn month_group_key(t: &DateTime<Utc>, size: u32) -> String {
    format!("{:04}M{}{}", t.year(), size, t.month() / size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn test_minute_group_widths() {
        let t = utc(2016, 1, 23, 17, 45, 0);
        assert_eq!(format_slab(Resolution::Min5, &t), "2016012317I509");
        assert_eq!(format_slab(Resolution::Min10, &t), "2016012317I104");
        assert_eq!(format_slab(Resolution::Min15, &t), "2016012317I153");
        assert_eq!(format_slab(Resolution::Min20, &t), "2016012317I202");
        assert_eq!(format_slab(Resolution::Min30, &t), "2016012317I301");

        let t = utc(2016, 1, 23, 17, 59, 59);
        assert_eq!(format_slab(Resolution::Min5, &t), "2016012317I511");
    }

    #[test]
    fn test_hour_groups() {
        let t = utc(2016, 1, 23, 0, 0, 0);
        assert_eq!(format_slab(Resolution::Hour2, &t), "20160123H020");
        assert_eq!(format_slab(Resolution::Hour12, &t), "20160123H120");

        let t = utc(2016, 1, 23, 23, 59, 0);
        assert_eq!(format_slab(Resolution::Hour2, &t), "20160123H0211");
        assert_eq!(format_slab(Resolution::Hour3, &t), "20160123H037");
        assert_eq!(format_slab(Resolution::Hour6, &t), "20160123H063");
        assert_eq!(format_slab(Resolution::Hour12, &t), "20160123H121");
    }

    #[test]
    fn test_month_group_boundaries() {
        let month2 = ["0", "1", "1", "2", "2", "3", "3", "4", "4", "5", "5", "6"];
        let month3 = ["0", "0", "1", "1", "1", "2", "2", "2", "3", "3", "3", "4"];
        let month6 = ["0", "0", "0", "0", "0", "1", "1", "1", "1", "1", "1", "2"];

        for month in 1..=12u32 {
            let t = utc(2016, month, 15, 12, 0, 0);
            let idx = (month - 1) as usize;
            assert_eq!(format_slab(Resolution::Month2, &t), format!("2016M2{}", month2[idx]));
            assert_eq!(format_slab(Resolution::Month3, &t), format!("2016M3{}", month3[idx]));
            assert_eq!(format_slab(Resolution::Month6, &t), format!("2016M6{}", month6[idx]));
        }
    }

    #[test]
    fn test_week_uses_iso_year() {
        // 2010-01-01 belongs to week 53 of ISO year 2009
        assert_eq!(format_slab(Resolution::Week, &utc(2010, 1, 1, 12, 0, 0)), "200953");
        assert_eq!(format_slab(Resolution::Week, &utc(2010, 1, 4, 0, 0, 0)), "201001");
        // 2008-12-29 opens week 1 of ISO year 2009
        assert_eq!(format_slab(Resolution::Week, &utc(2008, 12, 29, 0, 0, 0)), "200901");
    }

    #[test]
    fn test_fixed_keys() {
        let t = utc(2009, 1, 2, 3, 4, 5);
        assert_eq!(format_slab(Resolution::Min, &t), "200901020304");
        assert_eq!(format_slab(Resolution::Hour, &t), "2009010203");
        assert_eq!(format_slab(Resolution::Day, &t), "20090102");
        assert_eq!(format_slab(Resolution::Month, &t), "200901");
        assert_eq!(format_slab(Resolution::Year, &t), "2009");
        assert_eq!(format_slab(Resolution::All, &t), "ALL");
        assert_eq!(format_slab(Resolution::Unrecognized(77), &t), "2009010203");
    }
}
