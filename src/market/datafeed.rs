//! Datafeed abstraction for the trade-date set.
//!
//! The set of known trading dates comes from an external data service. This
//! module only defines the seam; a [`TradeCalendar`] is built once from the
//! feed's answer and passed by reference to every consumer.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::BTreeSet;

use super::calendar::TradeCalendar;
use crate::setting::SETTINGS;

/// Abstract feed supplying the set of known trading dates
#[async_trait]
pub trait TradeDateFeed: Send + Sync {
    /// Initialize the feed service connection
    async fn init(&self) -> Result<bool, String> {
        Ok(false)
    }

    /// Query the full set of known trading dates
    async fn query_trade_dates(&self) -> Result<BTreeSet<NaiveDate>, String> {
        Err("查询交易日历失败：没有正确配置数据服务".to_string())
    }
}

/// Empty feed implementation for when no data service is configured
pub struct EmptyTradeDateFeed;

impl EmptyTradeDateFeed {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EmptyTradeDateFeed {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TradeDateFeed for EmptyTradeDateFeed {
    async fn init(&self) -> Result<bool, String> {
        tracing::warn!("没有配置要使用的数据服务，请修改全局配置中的datafeed相关内容");
        Ok(false)
    }
}

/// Get the configured datafeed name
pub fn get_datafeed_name() -> String {
    SETTINGS.get_string("datafeed.name").unwrap_or_default()
}

impl TradeCalendar {
    /// Build a calendar by querying a trade-date feed.
    ///
    /// A feed failure produces the unavailable calendar, not an error; every
    /// downstream query then runs in degraded mode.
    pub async fn from_feed(feed: &dyn TradeDateFeed) -> Self {
        match feed.query_trade_dates().await {
            Ok(dates) => Self::new(dates),
            Err(msg) => {
                tracing::warn!("交易日历加载失败，进入降级模式: {}", msg);
                Self::unavailable()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedFeed {
        dates: BTreeSet<NaiveDate>,
    }

    #[async_trait]
    impl TradeDateFeed for FixedFeed {
        async fn init(&self) -> Result<bool, String> {
            Ok(true)
        }

        async fn query_trade_dates(&self) -> Result<BTreeSet<NaiveDate>, String> {
            Ok(self.dates.clone())
        }
    }

    #[tokio::test]
    async fn test_empty_feed() {
        let feed = EmptyTradeDateFeed::new();

        let result = feed.init().await;
        assert!(!result.unwrap());

        let result = feed.query_trade_dates().await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_calendar_from_empty_feed_degrades() {
        let feed = EmptyTradeDateFeed::new();
        let calendar = TradeCalendar::from_feed(&feed).await;
        assert!(!calendar.is_available());
    }

    #[tokio::test]
    async fn test_calendar_from_fixed_feed() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 14).unwrap();
        let feed = FixedFeed {
            dates: [date].into_iter().collect(),
        };
        let calendar = TradeCalendar::from_feed(&feed).await;
        assert!(calendar.is_available());
        assert!(calendar.is_trading_day(date));
    }
}
