//! Candlestick pattern catalog.
//!
//! Pattern recognizers report one signal column per pattern, keyed by the
//! recognizer id. The catalog pairs each id with its display name and fixes
//! the enumeration order, which in turn fixes label stacking order and the
//! legend order. That order must stay stable for reproducible charts.

use serde::{Deserialize, Serialize};

/// One recognizable candlestick pattern
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternDef {
    /// Recognizer column key, e.g. `cdl2crows`
    pub id: String,
    /// Display name shown on the chart
    pub name: String,
}

impl PatternDef {
    /// Create a new pattern definition
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Label text for a bullish occurrence
    pub fn bullish_text(&self) -> String {
        format!("{}(↑)", self.name)
    }

    /// Label text for a bearish occurrence
    pub fn bearish_text(&self) -> String {
        format!("{}(↓)", self.name)
    }
}

/// Ordered list of patterns drawn on a chart
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatternCatalog {
    patterns: Vec<PatternDef>,
}

impl PatternCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog from a list of definitions
    pub fn from_defs(patterns: Vec<PatternDef>) -> Self {
        Self { patterns }
    }

    /// The commonly charted candlestick pattern set
    pub fn standard() -> Self {
        let defs = [
            ("cdl2crows", "两只乌鸦"),
            ("cdl3blackcrows", "三只乌鸦"),
            ("cdl3inside", "三内部上涨和下跌"),
            ("cdl3whitesoldiers", "三个白兵"),
            ("cdlabandonedbaby", "弃婴"),
            ("cdldarkcloudcover", "乌云压顶"),
            ("cdldoji", "十字"),
            ("cdldojistar", "十字星"),
            ("cdldragonflydoji", "蜻蜓十字"),
            ("cdlengulfing", "吞噬模式"),
            ("cdleveningdojistar", "十字暮星"),
            ("cdleveningstar", "暮星"),
            ("cdlgravestonedoji", "墓碑十字"),
            ("cdlhammer", "锤头"),
            ("cdlhangingman", "上吊线"),
            ("cdlharami", "母子线"),
            ("cdlharamicross", "十字孕线"),
            ("cdlinvertedhammer", "倒锤头"),
            ("cdlmorningdojistar", "十字晨星"),
            ("cdlmorningstar", "晨星"),
            ("cdlpiercing", "刺透形态"),
            ("cdlshootingstar", "射击之星"),
        ];
        Self {
            patterns: defs
                .into_iter()
                .map(|(id, name)| PatternDef::new(id, name))
                .collect(),
        }
    }

    /// Append a pattern definition
    pub fn push(&mut self, def: PatternDef) {
        self.patterns.push(def);
    }

    /// Number of patterns
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Iterate definitions in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &PatternDef> {
        self.patterns.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_text_decoration() {
        let def = PatternDef::new("cdldoji", "十字");
        assert_eq!(def.bullish_text(), "十字(↑)");
        assert_eq!(def.bearish_text(), "十字(↓)");
    }

    #[test]
    fn test_standard_catalog_order_stable() {
        let catalog = PatternCatalog::standard();
        assert!(!catalog.is_empty());
        let first: Vec<_> = catalog.iter().map(|d| d.id.clone()).collect();
        let second: Vec<_> = PatternCatalog::standard()
            .iter()
            .map(|d| d.id.clone())
            .collect();
        assert_eq!(first, second);
        assert_eq!(first[0], "cdl2crows");
    }
}
