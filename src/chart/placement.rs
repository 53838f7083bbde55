//! Pattern label placement.
//!
//! Labels stack outward from the candle they annotate: each new label at a
//! (bar, side) slot starts just past the outer edge of every label already
//! placed there, with a fixed gap in between. Widths are estimated from the
//! character count rather than real font metrics; the consumer only needs
//! non-overlapping, not pixel-perfect.

use std::collections::HashMap;

use super::base::{CHAR_WIDTH_FACTOR, LABEL_GAP};

/// Vertical side of the baseline a label stacks on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelSide {
    /// Stacked upward from the bar high
    Above,
    /// Stacked downward from the bar low
    Below,
}

/// Estimates the rendered width of a label text
pub trait TextWidthEstimator {
    /// Estimated width in display units for `text` at `font_size` points
    fn estimate(&self, text: &str, font_size: f64) -> f64;
}

/// Fixed per-character width heuristic
#[derive(Debug, Clone, Copy, Default)]
pub struct CharWidthEstimator;

impl TextWidthEstimator for CharWidthEstimator {
    fn estimate(&self, text: &str, font_size: f64) -> f64 {
        text.chars().count() as f64 * font_size * CHAR_WIDTH_FACTOR
    }
}

/// Compute the stacking offset for the next label at one (bar, side) slot.
///
/// With no existing labels the new label sits at `base_offset`. Otherwise
/// the estimated width of each already placed label plus the fixed gap is
/// accumulated onto the base, added for [`LabelSide::Above`] and subtracted
/// for [`LabelSide::Below`]. The new label's own width does not enter the
/// result; the offset marks where the label starts, not where it ends.
pub fn compute_offset(
    existing: &[String],
    base_offset: f64,
    font_size: f64,
    side: LabelSide,
    estimator: &dyn TextWidthEstimator,
) -> f64 {
    if existing.is_empty() {
        return base_offset;
    }

    let mut total = base_offset;
    for label in existing {
        let step = estimator.estimate(label, font_size) + LABEL_GAP;
        match side {
            LabelSide::Above => total += step,
            LabelSide::Below => total -= step,
        }
    }
    total
}

/// Per-render scratch state tracking the labels placed at each bar and side.
///
/// Built fresh for every chart render and discarded afterwards.
#[derive(Debug, Default)]
pub struct PositionTracker {
    placed: HashMap<usize, SideLabels>,
}

#[derive(Debug, Default)]
struct SideLabels {
    above: Vec<String>,
    below: Vec<String>,
}

impl PositionTracker {
    /// Create an empty tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Labels already placed at a (bar, side) slot, in stacking order
    pub fn placed(&self, index: usize, side: LabelSide) -> &[String] {
        match self.placed.get(&index) {
            Some(slot) => match side {
                LabelSide::Above => &slot.above,
                LabelSide::Below => &slot.below,
            },
            None => &[],
        }
    }

    /// Offset for the next label at a (bar, side) slot
    pub fn offset_for(
        &self,
        index: usize,
        side: LabelSide,
        base_offset: f64,
        font_size: f64,
        estimator: &dyn TextWidthEstimator,
    ) -> f64 {
        compute_offset(
            self.placed(index, side),
            base_offset,
            font_size,
            side,
            estimator,
        )
    }

    /// Record a placed label so later labels stack past it
    pub fn push(&mut self, index: usize, side: LabelSide, text: impl Into<String>) {
        let slot = self.placed.entry(index).or_default();
        match side {
            LabelSide::Above => slot.above.push(text.into()),
            LabelSide::Below => slot.below.push(text.into()),
        }
    }
}
