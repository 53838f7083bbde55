//! Pattern label arrangement for one chart render.
//!
//! Walks the pattern catalog in order over every bar, placing bullish
//! labels above the bar high and bearish labels below the bar low. Offsets
//! come from the placement engine so labels at the same bar stack outward
//! without overlapping. The renderer consumes the resulting annotations and
//! legend as-is.

use serde::{Deserialize, Serialize};

use super::base::{
    BEARISH_LABEL_COLOR, BULLISH_LABEL_COLOR, LABEL_ANGLE_DOWN, LABEL_ANGLE_UP,
    LABEL_BASE_OFFSET_DOWN, LABEL_BASE_OFFSET_UP, LABEL_FONT_SIZE, LABEL_X_OFFSET_DOWN,
    LABEL_X_OFFSET_UP,
};
use super::frame::{KlineFrame, PatternSignal};
use super::pattern::PatternCatalog;
use super::placement::{CharWidthEstimator, LabelSide, PositionTracker, TextWidthEstimator};

/// One placed pattern label
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacedLabel {
    /// Bar index the label annotates
    pub index: usize,
    /// Price the label is anchored to (bar high or low)
    pub anchor: f64,
    /// Label text, the pattern display name
    pub text: String,
    /// Horizontal displacement in display units
    pub x_offset: f64,
    /// Vertical displacement in display units, signed away from the anchor
    pub y_offset: f64,
    /// Text rotation in degrees
    pub angle: f64,
    /// Text color
    pub color: String,
}

/// Arranged labels and legend for one chart
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChartAnnotations {
    /// All placed labels, in catalog then bar order
    pub labels: Vec<PlacedLabel>,
    /// Display names of patterns that produced at least one label,
    /// in catalog order
    pub legend: Vec<String>,
}

/// Arrange pattern labels for a frame with the default width estimator
pub fn arrange_pattern_labels(frame: &KlineFrame, catalog: &PatternCatalog) -> ChartAnnotations {
    arrange_pattern_labels_with(frame, catalog, &CharWidthEstimator)
}

/// Arrange pattern labels for a frame with a caller-supplied width estimator
pub fn arrange_pattern_labels_with(
    frame: &KlineFrame,
    catalog: &PatternCatalog,
    estimator: &dyn TextWidthEstimator,
) -> ChartAnnotations {
    let mut annotations = ChartAnnotations::default();
    let mut tracker = PositionTracker::new();

    for def in catalog.iter() {
        // Column absent means the recognizer did not evaluate this pattern
        let column = match frame.signal(&def.id) {
            Some(column) => column,
            None => continue,
        };

        let mut has_labels = false;
        for (index, value) in column.iter().enumerate() {
            let (side, anchor, color) = match PatternSignal::from_value(*value) {
                PatternSignal::Bullish => (
                    LabelSide::Above,
                    frame.bars()[index].high,
                    BULLISH_LABEL_COLOR,
                ),
                PatternSignal::Bearish => (
                    LabelSide::Below,
                    frame.bars()[index].low,
                    BEARISH_LABEL_COLOR,
                ),
                PatternSignal::None => continue,
            };

            let (base_offset, x_offset, angle) = match side {
                LabelSide::Above => (LABEL_BASE_OFFSET_UP, LABEL_X_OFFSET_UP, LABEL_ANGLE_UP),
                LabelSide::Below => (LABEL_BASE_OFFSET_DOWN, LABEL_X_OFFSET_DOWN, LABEL_ANGLE_DOWN),
            };

            let y_offset =
                tracker.offset_for(index, side, base_offset, LABEL_FONT_SIZE, estimator);
            // the chart carries the plain display name; direction arrows
            // belong to the hover summary text only
            tracker.push(index, side, def.name.clone());

            annotations.labels.push(PlacedLabel {
                index,
                anchor,
                text: def.name.clone(),
                x_offset,
                y_offset,
                angle,
                color: color.to_string(),
            });
            has_labels = true;
        }

        if has_labels {
            annotations.legend.push(def.name.clone());
        }
    }

    tracing::debug!(
        labels = annotations.labels.len(),
        patterns = annotations.legend.len(),
        "arranged pattern labels"
    );

    annotations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::frame::DailyBar;
    use crate::chart::pattern::PatternDef;
    use chrono::NaiveDate;

    fn bar(day: u32) -> DailyBar {
        DailyBar {
            date: NaiveDate::from_ymd_opt(2024, 6, day).unwrap(),
            open: 10.0,
            high: 11.0,
            low: 9.0,
            close: 10.5,
            volume: 1000.0,
            amount: 0.0,
            quote_change: 0.0,
            turnover: 0.0,
        }
    }

    fn catalog() -> PatternCatalog {
        let mut catalog = PatternCatalog::new();
        catalog.push(PatternDef::new("cdldoji", "十字"));
        catalog.push(PatternDef::new("cdlhammer", "锤头"));
        catalog
    }

    fn estimated(text: &str) -> f64 {
        CharWidthEstimator.estimate(text, LABEL_FONT_SIZE)
    }

    #[test]
    fn test_empty_frame() {
        let frame = KlineFrame::new(Vec::new());
        let annotations = arrange_pattern_labels(&frame, &catalog());
        assert!(annotations.labels.is_empty());
        assert!(annotations.legend.is_empty());
    }

    #[test]
    fn test_missing_columns_are_skipped() {
        let frame = KlineFrame::new(vec![bar(11), bar(12)]);
        let annotations = arrange_pattern_labels(&frame, &catalog());
        assert!(annotations.labels.is_empty());
        assert!(annotations.legend.is_empty());
    }

    #[test]
    fn test_bullish_above_bearish_below() {
        let mut frame = KlineFrame::new(vec![bar(11), bar(12)]);
        frame.insert_signal("cdldoji", vec![100, -100]).unwrap();

        let annotations = arrange_pattern_labels(&frame, &catalog());
        assert_eq!(annotations.labels.len(), 2);

        let up = &annotations.labels[0];
        assert_eq!(up.index, 0);
        assert_eq!(up.anchor, 11.0);
        assert_eq!(up.text, "十字");
        assert_eq!(up.y_offset, 5.0);
        assert_eq!(up.x_offset, 7.0);
        assert_eq!(up.angle, 90.0);
        assert_eq!(up.color, "red");

        let down = &annotations.labels[1];
        assert_eq!(down.index, 1);
        assert_eq!(down.anchor, 9.0);
        assert_eq!(down.text, "十字");
        assert_eq!(down.y_offset, -5.0);
        assert_eq!(down.x_offset, -7.0);
        assert_eq!(down.angle, 270.0);
        assert_eq!(down.color, "green");
    }

    #[test]
    fn test_labels_stack_at_shared_bar() {
        let mut frame = KlineFrame::new(vec![bar(11)]);
        frame.insert_signal("cdldoji", vec![100]).unwrap();
        frame.insert_signal("cdlhammer", vec![100]).unwrap();

        let annotations = arrange_pattern_labels(&frame, &catalog());
        assert_eq!(annotations.labels.len(), 2);

        // catalog order decides stacking: doji first at the base offset
        assert_eq!(annotations.labels[0].text, "十字");
        assert_eq!(annotations.labels[0].y_offset, 5.0);
        assert_eq!(annotations.labels[1].text, "锤头");
        assert_eq!(
            annotations.labels[1].y_offset,
            5.0 + estimated("十字") + 5.0
        );
    }

    #[test]
    fn test_chart_text_is_undecorated() {
        let mut frame = KlineFrame::new(vec![bar(11)]);
        frame.insert_signal("cdldoji", vec![100]).unwrap();

        // the placed label carries the plain name while the hover
        // summary keeps the direction arrow
        let annotations = arrange_pattern_labels(&frame, &catalog());
        assert_eq!(annotations.labels[0].text, "十字");
        assert_eq!(frame.pattern_summary(&catalog()), vec!["十字(↑)"]);
    }

    #[test]
    fn test_legend_dedup_and_order() {
        let mut frame = KlineFrame::new(vec![bar(11), bar(12), bar(13)]);
        // doji fires both directions, hammer fires once
        frame.insert_signal("cdldoji", vec![100, -100, 0]).unwrap();
        frame.insert_signal("cdlhammer", vec![0, 0, -100]).unwrap();

        let annotations = arrange_pattern_labels(&frame, &catalog());
        assert_eq!(annotations.legend, vec!["十字", "锤头"]);
    }

    #[test]
    fn test_sides_stack_independently() {
        let mut frame = KlineFrame::new(vec![bar(11)]);
        frame.insert_signal("cdldoji", vec![100]).unwrap();
        frame.insert_signal("cdlhammer", vec![-100]).unwrap();

        let annotations = arrange_pattern_labels(&frame, &catalog());
        // both sit at their base offsets; opposite sides never interact
        assert_eq!(annotations.labels[0].y_offset, 5.0);
        assert_eq!(annotations.labels[1].y_offset, -5.0);
    }
}
