//! Base constants and utility functions for the chart module.

// Indicator line palette (securities-software colors)
pub const STOCK_COLORS: [&str; 11] = [
    "#FFA500", // orange - volume
    "#87CEEB", // sky blue - 5 day volume MA
    "#90EE90", // light green - 10 day volume MA
    "#FF4500", // orange red - primary indicator
    "#4169E1", // royal blue - secondary indicator
    "#32CD32", // lime - auxiliary indicator
    "#FFD700", // gold
    "#9370DB", // medium purple
    "#20B2AA", // light sea green
    "#FF69B4", // hot pink
    "#CD5C5C", // indian red
];

// Candle colors (Chinese style: red up, green down)
pub const UP_COLOR: &str = "red";
pub const DOWN_COLOR: &str = "green";

// Pattern label text colors
pub const BULLISH_LABEL_COLOR: &str = "red";
pub const BEARISH_LABEL_COLOR: &str = "green";

// Pattern label geometry
pub const LABEL_FONT_SIZE: f64 = 7.0;
pub const LABEL_GAP: f64 = 5.0;
pub const LABEL_BASE_OFFSET_UP: f64 = 5.0;
pub const LABEL_BASE_OFFSET_DOWN: f64 = -5.0;
pub const LABEL_X_OFFSET_UP: f64 = 7.0;
pub const LABEL_X_OFFSET_DOWN: f64 = -7.0;
pub const LABEL_ANGLE_UP: f64 = 90.0;
pub const LABEL_ANGLE_DOWN: f64 = 270.0;

// Estimated horizontal advance per character, in fractions of the font size
pub const CHAR_WIDTH_FACTOR: f64 = 1.8;

// Default number of bars shown on a chart
pub const HISTORY_THRESHOLD: usize = 360;

/// Format price with appropriate precision
pub fn format_price(price: f64, decimals: usize) -> String {
    format!("{:.prec$}", price, prec = decimals)
}

/// Format volume with appropriate units (K, M, B)
pub fn format_volume(volume: f64) -> String {
    if volume >= 1_000_000_000.0 {
        format!("{:.2}B", volume / 1_000_000_000.0)
    } else if volume >= 1_000_000.0 {
        format!("{:.2}M", volume / 1_000_000.0)
    } else if volume >= 1_000.0 {
        format!("{:.2}K", volume / 1_000.0)
    } else {
        format!("{:.2}", volume)
    }
}
