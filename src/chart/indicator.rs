//! Moving-average series for the chart frame.
//!
//! The heavier indicator computation lives in an external provider; the
//! chart itself only needs the standard price and volume moving averages
//! drawn as overlay lines.

use ta::indicators::SimpleMovingAverage;
use ta::Next;

use super::frame::{ChartError, KlineFrame};

/// Price MA periods drawn on the main chart
pub const PRICE_MA_PERIODS: [usize; 4] = [10, 20, 50, 200];

/// Volume MA periods drawn on the volume chart
pub const VOLUME_MA_PERIODS: [usize; 2] = [5, 10];

/// Simple moving average over a value series.
///
/// The first `period - 1` positions have no complete window and read `None`.
/// A zero period yields an all-`None` series.
pub fn sma_series(values: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut result = vec![None; values.len()];

    let mut sma = match SimpleMovingAverage::new(period) {
        Ok(sma) => sma,
        Err(_) => return result,
    };

    for (i, value) in values.iter().enumerate() {
        let avg = sma.next(*value);
        if i + 1 >= period {
            result[i] = Some(avg);
        }
    }
    result
}

impl KlineFrame {
    /// Fill the standard close-price MA columns (`ma10` .. `ma200`)
    pub fn add_price_mas(&mut self) -> Result<(), ChartError> {
        let closes: Vec<f64> = self.bars().iter().map(|bar| bar.close).collect();
        for period in PRICE_MA_PERIODS {
            self.insert_series(format!("ma{}", period), sma_series(&closes, period))?;
        }
        Ok(())
    }

    /// Fill the standard volume MA columns (`vol_5`, `vol_10`)
    pub fn add_volume_mas(&mut self) -> Result<(), ChartError> {
        let volumes: Vec<f64> = self.bars().iter().map(|bar| bar.volume).collect();
        for period in VOLUME_MA_PERIODS {
            self.insert_series(format!("vol_{}", period), sma_series(&volumes, period))?;
        }
        Ok(())
    }
}
