//! Chart module for kline pattern annotation.
//!
//! This module provides:
//! - `KlineFrame` - bars plus indicator and pattern signal columns
//! - `PatternCatalog` - ordered pattern definitions with display names
//! - placement - the label stacking engine
//! - driver - per-chart label arrangement and legend
//!
//! # Example
//!
//! ```ignore
//! use kline_chart::chart::{arrange_pattern_labels, KlineFrame, PatternCatalog};
//!
//! let mut frame = KlineFrame::new(bars);
//! frame.insert_signal("cdldoji", signals)?;
//! let annotations = arrange_pattern_labels(&frame, &PatternCatalog::standard());
//! ```

pub mod base;
pub mod driver;
pub mod frame;
pub mod indicator;
pub mod pattern;
pub mod placement;

pub use base::{format_price, format_volume, DOWN_COLOR, HISTORY_THRESHOLD, STOCK_COLORS, UP_COLOR};
pub use driver::{arrange_pattern_labels, arrange_pattern_labels_with, ChartAnnotations, PlacedLabel};
pub use frame::{ChartError, DailyBar, KlineFrame, PatternSignal};
pub use indicator::{sma_series, PRICE_MA_PERIODS, VOLUME_MA_PERIODS};
pub use pattern::{PatternCatalog, PatternDef};
pub use placement::{
    compute_offset, CharWidthEstimator, LabelSide, PositionTracker, TextWidthEstimator,
};
