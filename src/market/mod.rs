//! Market module - trading calendar and session logic.
//!
//! This module answers the date and time-of-day questions behind chart data
//! fetching:
//!
//! - **session**: fixed A-share session windows and time-of-day predicates
//! - **calendar**: trade-date set queries (membership, day walks, history
//!   windows, effective run dates)
//! - **cutoff**: quarterly and dividend report cutoff dates
//! - **datafeed**: abstract feed supplying the trade-date set

pub mod calendar;
pub mod cutoff;
pub mod datafeed;
pub mod session;

// Re-exports for convenience
pub use calendar::{
    CalendarError, EffectiveTradeDates, HistoryWindow, TradeCalendar, DEFAULT_LOOKBACK_DAYS,
};
pub use cutoff::{
    dividend_report_cutoff, dividend_report_cutoff_now, quarterly_report_cutoff,
    quarterly_report_cutoff_now,
};
pub use datafeed::{get_datafeed_name, EmptyTradeDateFeed, TradeDateFeed};
pub use session::{
    is_closed, is_closing, is_closing_from, is_midday_pause, is_opened, is_pause_to_open,
    is_trading_time,
};
