//! Solar Hijri (Jalali) calendar conversion and Persian date formatting.
//!
//! Conversion uses the standard arithmetic algorithm over the 33-year
//! leap cycle, accurate for every date this system will ever handle.
//! Formatting renders the long Persian form at the café's fixed UTC+03:30
//! offset; the caller supplies the timestamp, this module never reads the
//! clock.

use chrono::{DateTime, Datelike, FixedOffset, Timelike, Utc};

use crate::format::to_persian_digits;

/// Tehran's fixed offset from UTC (+03:30, no daylight saving since 2022).
pub const TEHRAN_OFFSET_SECS: i32 = 3 * 3600 + 1800;

/// Persian month names, Farvardin first.
pub const MONTH_NAMES: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

/// A date in the Solar Hijri calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JalaliDate {
    pub year: i32,
    /// 1-based month, Farvardin = 1.
    pub month: u32,
    /// 1-based day of month.
    pub day: u32,
}

impl JalaliDate {
    /// Convert a Gregorian calendar date.
    ///
    /// `month` and `day` are 1-based, as in `chrono`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_gregorian(year: i32, month: u32, day: u32) -> Self {
        // Cumulative day counts for the months preceding each Gregorian month.
        const DAYS_BEFORE_MONTH: [i64; 12] =
            [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

        let month_index = month.saturating_sub(1).min(11) as usize;
        let gy = i64::from(year);
        let gy2 = if month > 2 { gy + 1 } else { gy };
        let mut days = 355_666
            + 365 * gy
            + (gy2 + 3) / 4
            - (gy2 + 99) / 100
            + (gy2 + 399) / 400
            + i64::from(day)
            + DAYS_BEFORE_MONTH
                .get(month_index)
                .copied()
                .unwrap_or_default();

        let mut jy = -1595 + 33 * (days / 12_053);
        days %= 12_053;
        jy += 4 * (days / 1461);
        days %= 1461;
        if days > 365 {
            jy += (days - 1) / 365;
            days = (days - 1) % 365;
        }
        // The first six Jalali months have 31 days, the rest 30.
        let (jm, jd) = if days < 186 {
            (1 + days / 31, 1 + days % 31)
        } else {
            (7 + (days - 186) / 30, 1 + (days - 186) % 30)
        };

        Self {
            year: jy as i32,
            month: jm as u32,
            day: jd as u32,
        }
    }

    /// Convert the date part of a timestamp, as seen from Tehran.
    #[must_use]
    pub fn from_timestamp(ts: DateTime<Utc>) -> Self {
        let local = in_tehran(ts);
        Self::from_gregorian(local.year(), local.month(), local.day())
    }

    /// Name of this date's month.
    #[must_use]
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES
            .get(self.month.saturating_sub(1) as usize)
            .copied()
            .unwrap_or_default()
    }
}

impl std::fmt::Display for JalaliDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}/{:02}/{:02}", self.year, self.month, self.day)
    }
}

fn in_tehran(ts: DateTime<Utc>) -> DateTime<FixedOffset> {
    FixedOffset::east_opt(TEHRAN_OFFSET_SECS)
        .map_or_else(|| ts.fixed_offset(), |offset| ts.with_timezone(&offset))
}

/// Format a timestamp in the long Persian form with time, e.g.
/// `۱ فروردین ۱۴۰۳، ۱۴:۳۰`.
#[must_use]
pub fn format_datetime(ts: DateTime<Utc>) -> String {
    let local = in_tehran(ts);
    let date = JalaliDate::from_gregorian(local.year(), local.month(), local.day());
    to_persian_digits(&format!(
        "{} {} {}، {:02}:{:02}",
        date.day,
        date.month_name(),
        date.year,
        local.hour(),
        local.minute()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn nowruz_1403() {
        // Nowruz 2024 fell on March 20.
        let date = JalaliDate::from_gregorian(2024, 3, 20);
        assert_eq!(
            date,
            JalaliDate {
                year: 1403,
                month: 1,
                day: 1
            }
        );
        assert_eq!(date.month_name(), "فروردین");
    }

    #[test]
    fn unix_epoch() {
        // 1 January 1970 = 11 Dey 1348.
        let date = JalaliDate::from_gregorian(1970, 1, 1);
        assert_eq!(
            date,
            JalaliDate {
                year: 1348,
                month: 10,
                day: 11
            }
        );
    }

    #[test]
    fn second_half_of_year() {
        // 7 August 2026 = 16 Mordad 1405.
        let date = JalaliDate::from_gregorian(2026, 8, 7);
        assert_eq!(
            date,
            JalaliDate {
                year: 1405,
                month: 5,
                day: 16
            }
        );
    }

    #[test]
    fn timestamp_respects_tehran_offset() {
        // 21:00 UTC is already past midnight in Tehran.
        let ts = Utc.with_ymd_and_hms(2024, 3, 19, 21, 30, 0).single();
        let ts = ts.expect("valid timestamp");
        let date = JalaliDate::from_timestamp(ts);
        assert_eq!(
            date,
            JalaliDate {
                year: 1403,
                month: 1,
                day: 1
            }
        );
    }

    #[test]
    fn formats_long_persian_form() {
        let ts = Utc
            .with_ymd_and_hms(2024, 3, 20, 11, 0, 0)
            .single()
            .expect("valid timestamp");
        let formatted = format_datetime(ts);
        // 11:00 UTC = 14:30 Tehran, 1 Farvardin 1403.
        assert_eq!(formatted, "۱ فروردین ۱۴۰۳، ۱۴:۳۰");
    }

    #[test]
    fn display_is_zero_padded() {
        let date = JalaliDate {
            year: 1403,
            month: 1,
            day: 1,
        };
        assert_eq!(date.to_string(), "1403/01/01");
    }
}
