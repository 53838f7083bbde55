//! Report cutoff dates.
//!
//! Financial report data is published against fixed period-end dates. These
//! helpers map a reference date to the period-end string (`YYYYMMDD`) whose
//! reports are the newest ones worth fetching.

use chrono::{Datelike, Local, NaiveDate};

/// Most recently completed quarter end for a reference date.
///
/// January through March map to December 31 of the prior year; every other
/// month maps to the last quarter end of the same year.
pub fn quarterly_report_cutoff(date: NaiveDate) -> String {
    let year = date.year();
    match date.month() {
        1..=3 => format!("{}1231", year - 1),
        4..=6 => format!("{}0331", year),
        7..=9 => format!("{}0630", year),
        _ => format!("{}0930", year),
    }
}

/// Semiannual dividend-report cutoff for a reference date.
///
/// Dividend plans publish against June 30 and December 31. The boundary
/// months (January and July) switch on day 25.
pub fn dividend_report_cutoff(date: NaiveDate) -> String {
    let year = date.year();
    let day = date.day();
    match date.month() {
        2..=6 => format!("{}1231", year - 1),
        8..=12 => format!("{}0630", year),
        7 => {
            if day > 25 {
                format!("{}0630", year)
            } else {
                format!("{}1231", year - 1)
            }
        }
        // January
        _ => {
            if day > 25 {
                format!("{}1231", year - 1)
            } else {
                format!("{}0630", year - 1)
            }
        }
    }
}

/// [`quarterly_report_cutoff`] for today's local date
pub fn quarterly_report_cutoff_now() -> String {
    quarterly_report_cutoff(Local::now().date_naive())
}

/// [`dividend_report_cutoff`] for today's local date
pub fn dividend_report_cutoff_now() -> String {
    dividend_report_cutoff(Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_quarterly_cutoff() {
        assert_eq!(quarterly_report_cutoff(date(2024, 2, 10)), "20231231");
        assert_eq!(quarterly_report_cutoff(date(2024, 1, 1)), "20231231");
        assert_eq!(quarterly_report_cutoff(date(2024, 3, 31)), "20231231");
        assert_eq!(quarterly_report_cutoff(date(2024, 5, 20)), "20240331");
        assert_eq!(quarterly_report_cutoff(date(2024, 8, 1)), "20240630");
        assert_eq!(quarterly_report_cutoff(date(2024, 11, 30)), "20240930");
    }

    #[test]
    fn test_dividend_cutoff_plain_months() {
        assert_eq!(dividend_report_cutoff(date(2024, 2, 1)), "20231231");
        assert_eq!(dividend_report_cutoff(date(2024, 6, 30)), "20231231");
        assert_eq!(dividend_report_cutoff(date(2024, 8, 1)), "20240630");
        assert_eq!(dividend_report_cutoff(date(2024, 12, 31)), "20240630");
    }

    #[test]
    fn test_dividend_cutoff_july_boundary() {
        assert_eq!(dividend_report_cutoff(date(2024, 7, 20)), "20231231");
        assert_eq!(dividend_report_cutoff(date(2024, 7, 25)), "20231231");
        assert_eq!(dividend_report_cutoff(date(2024, 7, 26)), "20240630");
    }

    #[test]
    fn test_dividend_cutoff_january_boundary() {
        assert_eq!(dividend_report_cutoff(date(2024, 1, 25)), "20230630");
        assert_eq!(dividend_report_cutoff(date(2024, 1, 26)), "20231231");
    }
}
