//! Kline demo example arranging pattern labels over generated bars.
//!
//! Run with: cargo run --example kline_demo

use chrono::{Days, NaiveDate};
use kline_chart::chart::{arrange_pattern_labels, DailyBar, KlineFrame, PatternCatalog};
use kline_chart::market::TradeCalendar;

fn main() {
    kline_chart::init_logger();

    // Generate sample data
    let bars = generate_sample_bars(60);
    let dates: Vec<NaiveDate> = bars.iter().map(|bar| bar.date).collect();
    let calendar = TradeCalendar::new(dates.into_iter().collect());

    let mut frame = KlineFrame::with_recent(bars);
    frame.add_price_mas().expect("column lengths match bars");
    frame.add_volume_mas().expect("column lengths match bars");

    // Fake recognizer output: doji at bar 10, hammer and engulfing at bar 20
    let len = frame.len();
    frame
        .insert_signal("cdldoji", signal_at(len, 10, 100))
        .unwrap();
    frame
        .insert_signal("cdlhammer", signal_at(len, 20, 100))
        .unwrap();
    frame
        .insert_signal("cdlengulfing", signal_at(len, 20, -100))
        .unwrap();

    let annotations = arrange_pattern_labels(&frame, &PatternCatalog::standard());

    println!("legend: {:?}", annotations.legend);
    for label in &annotations.labels {
        println!(
            "bar {:>2} anchor {:>6.2} y_offset {:>7.2} {}",
            label.index, label.anchor, label.y_offset, label.text
        );
    }

    let dates = calendar.effective_trade_dates_now();
    println!(
        "last complete session: {}, last usable date: {}",
        dates.complete, dates.partial
    );
}

fn generate_sample_bars(count: usize) -> Vec<DailyBar> {
    let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let mut close = 10.0;
    (0..count)
        .map(|i| {
            let swing = ((i as f64) * 0.7).sin() * 0.3;
            close += swing;
            DailyBar {
                date: start + Days::new(i as u64),
                open: close - swing,
                high: close + 0.2,
                low: close - swing.abs() - 0.2,
                close,
                volume: 50_000.0 + (i as f64) * 100.0,
                amount: close * 50_000.0,
                quote_change: swing * 10.0,
                turnover: 1.2,
            }
        })
        .collect()
}

fn signal_at(len: usize, index: usize, value: i32) -> Vec<i32> {
    let mut column = vec![0; len];
    if index < len {
        column[index] = value;
    }
    column
}
