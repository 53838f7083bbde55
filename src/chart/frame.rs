//! Chart data objects.
//!
//! A [`KlineFrame`] holds everything one chart render consumes: the daily
//! bars plus the named indicator series and pattern signal columns computed
//! by external providers. All columns must match the bar count; the frame is
//! read-only once assembled.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

use super::base::{DOWN_COLOR, HISTORY_THRESHOLD, UP_COLOR};
use super::pattern::PatternCatalog;

/// Errors from chart frame assembly and access
#[derive(Debug, Error)]
pub enum ChartError {
    /// A requested series or signal column is not present
    #[error("column not found: {0}")]
    MissingColumn(String),
    /// A column's length does not match the bar count
    #[error("column {name} has {got} values, frame has {expected} bars")]
    LengthMismatch {
        name: String,
        got: usize,
        expected: usize,
    },
}

/// Daily bar data for one security
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    pub amount: f64,
    /// Percent change against the previous close
    pub quote_change: f64,
    /// Turnover rate in percent
    pub turnover: f64,
}

impl DailyBar {
    /// Whether the bar closed at or above its open
    pub fn is_up(&self) -> bool {
        self.close >= self.open
    }

    /// Candle body color, red up and green down per A-share convention
    pub fn color(&self) -> &'static str {
        if self.is_up() {
            UP_COLOR
        } else {
            DOWN_COLOR
        }
    }
}

/// Pattern signal at one bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatternSignal {
    /// Positive recognizer value
    Bullish,
    /// Negative recognizer value
    Bearish,
    /// Pattern absent
    None,
}

impl PatternSignal {
    /// Map a signed recognizer value to a signal
    pub fn from_value(value: i32) -> Self {
        if value > 0 {
            PatternSignal::Bullish
        } else if value < 0 {
            PatternSignal::Bearish
        } else {
            PatternSignal::None
        }
    }
}

/// Bars plus indicator series and pattern signal columns for one chart
#[derive(Debug, Clone, Default)]
pub struct KlineFrame {
    bars: Vec<DailyBar>,
    series: HashMap<String, Vec<Option<f64>>>,
    signals: HashMap<String, Vec<i32>>,
}

impl KlineFrame {
    /// Create a frame over a list of bars
    pub fn new(bars: Vec<DailyBar>) -> Self {
        Self {
            bars,
            series: HashMap::new(),
            signals: HashMap::new(),
        }
    }

    /// Create a frame over the most recent bars, dropping history beyond
    /// the [`HISTORY_THRESHOLD`](super::base::HISTORY_THRESHOLD) bar
    /// render limit
    pub fn with_recent(mut bars: Vec<DailyBar>) -> Self {
        if bars.len() > HISTORY_THRESHOLD {
            bars.drain(..bars.len() - HISTORY_THRESHOLD);
        }
        Self::new(bars)
    }

    /// Number of bars
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Whether the frame holds no bars
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// The bars, oldest first
    pub fn bars(&self) -> &[DailyBar] {
        &self.bars
    }

    /// Insert a named indicator series
    pub fn insert_series(
        &mut self,
        name: impl Into<String>,
        values: Vec<Option<f64>>,
    ) -> Result<(), ChartError> {
        let name = name.into();
        if values.len() != self.bars.len() {
            return Err(ChartError::LengthMismatch {
                name,
                got: values.len(),
                expected: self.bars.len(),
            });
        }
        self.series.insert(name, values);
        Ok(())
    }

    /// Insert a named pattern signal column
    pub fn insert_signal(
        &mut self,
        name: impl Into<String>,
        values: Vec<i32>,
    ) -> Result<(), ChartError> {
        let name = name.into();
        if values.len() != self.bars.len() {
            return Err(ChartError::LengthMismatch {
                name,
                got: values.len(),
                expected: self.bars.len(),
            });
        }
        self.signals.insert(name, values);
        Ok(())
    }

    /// Look up an indicator series
    pub fn series(&self, name: &str) -> Option<&[Option<f64>]> {
        self.series.get(name).map(|v| v.as_slice())
    }

    /// Look up an indicator series, erroring when absent
    pub fn try_series(&self, name: &str) -> Result<&[Option<f64>], ChartError> {
        self.series(name)
            .ok_or_else(|| ChartError::MissingColumn(name.to_string()))
    }

    /// Look up a pattern signal column
    pub fn signal(&self, name: &str) -> Option<&[i32]> {
        self.signals.get(name).map(|v| v.as_slice())
    }

    /// Look up a pattern signal column, erroring when absent
    pub fn try_signal(&self, name: &str) -> Result<&[i32], ChartError> {
        self.signal(name)
            .ok_or_else(|| ChartError::MissingColumn(name.to_string()))
    }

    /// Signal at one bar for one pattern; `None` column reads as absent
    pub fn signal_at(&self, name: &str, index: usize) -> PatternSignal {
        self.signal(name)
            .and_then(|col| col.get(index))
            .map(|v| PatternSignal::from_value(*v))
            .unwrap_or(PatternSignal::None)
    }

    /// Per-bar summary of all firing patterns, the chart hover text.
    ///
    /// Joins the decorated label of every firing catalog pattern at each bar
    /// with single spaces, in catalog order.
    pub fn pattern_summary(&self, catalog: &PatternCatalog) -> Vec<String> {
        let mut summary = vec![String::new(); self.bars.len()];
        for def in catalog.iter() {
            let col = match self.signal(&def.id) {
                Some(col) => col,
                None => continue,
            };
            for (index, value) in col.iter().enumerate() {
                let text = match PatternSignal::from_value(*value) {
                    PatternSignal::Bullish => def.bullish_text(),
                    PatternSignal::Bearish => def.bearish_text(),
                    PatternSignal::None => continue,
                };
                let entry = &mut summary[index];
                if !entry.is_empty() {
                    entry.push(' ');
                }
                entry.push_str(&text);
            }
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::pattern::PatternDef;

    fn sample_bar(day: u32, high: f64, low: f64) -> DailyBar {
        DailyBar {
            date: NaiveDate::from_ymd_opt(2024, 6, day).unwrap(),
            open: (high + low) / 2.0,
            high,
            low,
            close: high,
            volume: 10_000.0,
            amount: 1_000_000.0,
            quote_change: 1.0,
            turnover: 0.5,
        }
    }

    fn sample_frame() -> KlineFrame {
        KlineFrame::new(vec![
            sample_bar(11, 10.5, 9.8),
            sample_bar(12, 10.9, 10.1),
            sample_bar(13, 11.2, 10.4),
        ])
    }

    #[test]
    fn test_bar_color() {
        let up = sample_bar(11, 10.5, 9.8);
        assert!(up.is_up());
        assert_eq!(up.color(), "red");

        let mut down = sample_bar(12, 10.9, 10.1);
        down.close = down.open - 0.1;
        assert!(!down.is_up());
        assert_eq!(down.color(), "green");
    }

    #[test]
    fn test_with_recent_truncates_history() {
        let bars: Vec<DailyBar> = (0..HISTORY_THRESHOLD + 40)
            .map(|i| {
                let mut bar = sample_bar(11, 10.5, 9.8);
                bar.volume = i as f64;
                bar
            })
            .collect();

        let frame = KlineFrame::with_recent(bars);
        assert_eq!(frame.len(), HISTORY_THRESHOLD);
        // the oldest 40 bars are gone, the newest survive in order
        assert_eq!(frame.bars()[0].volume, 40.0);
        assert_eq!(frame.bars()[HISTORY_THRESHOLD - 1].volume, 399.0);

        let short = KlineFrame::with_recent(vec![sample_bar(11, 10.5, 9.8)]);
        assert_eq!(short.len(), 1);
    }

    #[test]
    fn test_signal_from_value() {
        assert_eq!(PatternSignal::from_value(100), PatternSignal::Bullish);
        assert_eq!(PatternSignal::from_value(-100), PatternSignal::Bearish);
        assert_eq!(PatternSignal::from_value(0), PatternSignal::None);
    }

    #[test]
    fn test_length_mismatch() {
        let mut frame = sample_frame();
        let err = frame.insert_signal("cdldoji", vec![0, 100]).unwrap_err();
        assert!(matches!(err, ChartError::LengthMismatch { .. }));

        let err = frame
            .insert_series("ma10", vec![None, Some(10.0)])
            .unwrap_err();
        assert!(matches!(err, ChartError::LengthMismatch { .. }));
    }

    #[test]
    fn test_missing_column() {
        let frame = sample_frame();
        assert!(frame.signal("cdldoji").is_none());
        assert!(matches!(
            frame.try_signal("cdldoji").unwrap_err(),
            ChartError::MissingColumn(_)
        ));
        assert_eq!(frame.signal_at("cdldoji", 0), PatternSignal::None);
    }

    #[test]
    fn test_signal_at() {
        let mut frame = sample_frame();
        frame.insert_signal("cdldoji", vec![0, 100, -100]).unwrap();
        assert_eq!(frame.signal_at("cdldoji", 0), PatternSignal::None);
        assert_eq!(frame.signal_at("cdldoji", 1), PatternSignal::Bullish);
        assert_eq!(frame.signal_at("cdldoji", 2), PatternSignal::Bearish);
        // out of range reads as absent
        assert_eq!(frame.signal_at("cdldoji", 9), PatternSignal::None);
    }

    #[test]
    fn test_pattern_summary() {
        let mut frame = sample_frame();
        frame.insert_signal("cdldoji", vec![0, 100, -100]).unwrap();
        frame.insert_signal("cdlhammer", vec![0, 100, 0]).unwrap();

        let mut catalog = PatternCatalog::new();
        catalog.push(PatternDef::new("cdldoji", "十字"));
        catalog.push(PatternDef::new("cdlhammer", "锤头"));

        let summary = frame.pattern_summary(&catalog);
        assert_eq!(summary[0], "");
        assert_eq!(summary[1], "十字(↑) 锤头(↑)");
        assert_eq!(summary[2], "十字(↓)");
    }
}
