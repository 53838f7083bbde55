//! Trade-date calendar queries.
//!
//! A [`TradeCalendar`] wraps the externally supplied set of known trading
//! dates. The set may be unavailable (not yet loaded, or the feed failed);
//! every query then degrades to a documented fallback instead of failing:
//! membership checks return `false` and day walks echo the input back.

use chrono::{Days, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

use super::session::{is_closed, is_opened};

/// Default historical lookback, in days (three 365-day years, not
/// calendar-aware)
pub const DEFAULT_LOOKBACK_DAYS: u64 = 365 * 3;

/// Errors from calendar queries taking string input
#[derive(Debug, Error)]
pub enum CalendarError {
    /// Date string did not parse as `YYYY-MM-DD`
    #[error("invalid date string: {0}")]
    InvalidDate(#[from] chrono::ParseError),
}

/// Historical data window derived from a reference date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryWindow {
    /// First date of the window
    pub start: NaiveDate,
    /// Whether history up to the reference date can be treated as final
    /// (false only while the reference date's session is still running)
    pub complete: bool,
}

impl HistoryWindow {
    /// Start date formatted as `YYYYMMDD`, the format historical data
    /// providers take
    pub fn start_compact(&self) -> String {
        self.start.format("%Y%m%d").to_string()
    }
}

/// The most recent effective trading dates for batch jobs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectiveTradeDates {
    /// Last date with a complete session behind it
    pub complete: NaiveDate,
    /// Last date with usable data, accepting a partial session once the
    /// market has opened
    pub partial: NaiveDate,
}

/// Set of known trading dates with session-aware queries
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TradeCalendar {
    dates: Option<BTreeSet<NaiveDate>>,
}

impl TradeCalendar {
    /// Create a calendar from a set of known trading dates
    pub fn new(dates: BTreeSet<NaiveDate>) -> Self {
        Self { dates: Some(dates) }
    }

    /// Create a calendar in the unavailable (degraded) state
    pub fn unavailable() -> Self {
        Self { dates: None }
    }

    /// Whether trade-date data has been loaded
    pub fn is_available(&self) -> bool {
        self.dates.is_some()
    }

    /// Number of known trading dates
    pub fn len(&self) -> usize {
        self.dates.as_ref().map(|d| d.len()).unwrap_or(0)
    }

    /// Whether no trading dates are known
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check whether a date is a known trading day.
    ///
    /// Returns `false` when calendar data is unavailable.
    pub fn is_trading_day(&self, date: NaiveDate) -> bool {
        match &self.dates {
            Some(dates) => dates.contains(&date),
            None => false,
        }
    }

    /// Find the closest trading day strictly before `date`.
    ///
    /// Returns `date` unchanged when calendar data is unavailable.
    ///
    /// The walk is unbounded: the calendar must contain a trading day
    /// before `date`, otherwise this does not terminate. An available but
    /// too-sparse calendar is a data-provisioning error upstream.
    pub fn previous_trading_day(&self, date: NaiveDate) -> NaiveDate {
        let dates = match &self.dates {
            Some(dates) => dates,
            None => return date,
        };

        let mut current = date;
        loop {
            current = current - Days::new(1);
            if dates.contains(&current) {
                return current;
            }
        }
    }

    /// Find the closest trading day strictly after `date`.
    ///
    /// Returns `date` unchanged when calendar data is unavailable. Same
    /// termination precondition as [`previous_trading_day`].
    ///
    /// [`previous_trading_day`]: TradeCalendar::previous_trading_day
    pub fn next_trading_day(&self, date: NaiveDate) -> NaiveDate {
        let dates = match &self.dates {
            Some(dates) => dates,
            None => return date,
        };

        let mut current = date;
        loop {
            current = current + Days::new(1);
            if dates.contains(&current) {
                return current;
            }
        }
    }

    /// Derive the default historical window ending at `date_end`.
    ///
    /// The start is `date_end` minus [`DEFAULT_LOOKBACK_DAYS`] days via exact
    /// calendar arithmetic. `complete` is false only when `date_end` is
    /// today, today is a trading day, and `now` sits between open and close.
    pub fn history_window(&self, date_end: NaiveDate, now: NaiveDateTime) -> HistoryWindow {
        let start = date_end - Days::new(DEFAULT_LOOKBACK_DAYS);

        let mut still_open = false;
        if date_end == now.date() && self.is_trading_day(date_end) {
            still_open = is_opened(now) && !is_closed(now);
        }

        HistoryWindow {
            start,
            complete: !still_open,
        }
    }

    /// As [`history_window`], parsing the reference date from `YYYY-MM-DD`.
    ///
    /// [`history_window`]: TradeCalendar::history_window
    pub fn history_window_from_str(
        &self,
        date_end: &str,
        now: NaiveDateTime,
    ) -> Result<HistoryWindow, CalendarError> {
        let date_end = NaiveDate::parse_from_str(date_end, "%Y-%m-%d")?;
        Ok(self.history_window(date_end, now))
    }

    /// Derive the most recent effective trading dates as of `now`.
    ///
    /// On a non-trading day both dates are the previous trading day. On a
    /// trading day: before open both are the previous trading day; between
    /// open and close `complete` is the previous trading day while `partial`
    /// is today; after close both are today.
    pub fn effective_trade_dates(&self, now: NaiveDateTime) -> EffectiveTradeDates {
        let today = now.date();
        let mut complete = today;
        let mut partial = today;

        if self.is_trading_day(today) {
            if !is_closed(now) {
                complete = self.previous_trading_day(today);
                if !is_opened(now) {
                    partial = complete;
                }
            }
        } else {
            complete = self.previous_trading_day(today);
            partial = complete;
        }

        EffectiveTradeDates { complete, partial }
    }

    /// [`history_window`] evaluated at the local wall clock.
    ///
    /// [`history_window`]: TradeCalendar::history_window
    pub fn history_window_now(&self, date_end: NaiveDate) -> HistoryWindow {
        self.history_window(date_end, Local::now().naive_local())
    }

    /// [`effective_trade_dates`] evaluated at the local wall clock.
    ///
    /// [`effective_trade_dates`]: TradeCalendar::effective_trade_dates
    pub fn effective_trade_dates_now(&self) -> EffectiveTradeDates {
        self.effective_trade_dates(Local::now().naive_local())
    }

    /// Known trading dates inside `[start, end]`, oldest first
    pub fn trading_days_between(&self, start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
        match &self.dates {
            Some(dates) => dates.range(start..=end).copied().collect(),
            None => Vec::new(),
        }
    }
}
