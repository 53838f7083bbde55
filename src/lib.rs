//! Kline Chart - trading calendar and pattern-label placement for A-share
//! candlestick charts
//!
//! This crate provides the leaf utilities behind an interactive kline page:
//!
//! - Trading calendar (trade-day lookup, session windows, history windows,
//!   report cutoff dates)
//! - Pattern label placement (stacking annotations above/below candles
//!   without overlap)
//! - Chart data frame with indicator and pattern signal columns
//! - Annotation driver producing labels and legend for a renderer
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use kline_chart::chart::{arrange_pattern_labels, KlineFrame, PatternCatalog};
//! use kline_chart::market::TradeCalendar;
//!
//! # fn run(bars: Vec<kline_chart::chart::DailyBar>) {
//! // Build the chart frame and place pattern labels
//! let frame = KlineFrame::new(bars);
//! let annotations = arrange_pattern_labels(&frame, &PatternCatalog::standard());
//! println!("{} labels placed", annotations.labels.len());
//!
//! // Calendar queries degrade gracefully without trade-date data
//! let calendar = TradeCalendar::unavailable();
//! let dates = calendar.effective_trade_dates_now();
//! println!("last complete session: {}", dates.complete);
//! # }
//! ```

pub mod chart;
pub mod logger;
pub mod market;
pub mod setting;
pub mod utility;

// Re-export commonly used types
pub use chart::{
    arrange_pattern_labels, arrange_pattern_labels_with, ChartAnnotations, ChartError,
    CharWidthEstimator, DailyBar, KlineFrame, LabelSide, PatternCatalog, PatternDef,
    PatternSignal, PlacedLabel, PositionTracker, TextWidthEstimator,
};
pub use logger::{init_logger, Logger, CRITICAL, DEBUG, ERROR, INFO, WARNING};
pub use market::{
    CalendarError, EffectiveTradeDates, EmptyTradeDateFeed, HistoryWindow, TradeCalendar,
    TradeDateFeed,
};
pub use setting::{SettingValue, Settings, SETTINGS};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
