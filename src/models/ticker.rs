use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Snapshot of one market's quote. Values are passed through as the
/// upstream formats them, `null` included; nothing is parsed as a number.
///
/// Upstream uses `vol`/`last`/`sell`/`buy`; callers see the field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticker {
    pub low: Option<String>,
    pub high: Option<String>,
    #[serde(rename(deserialize = "vol"))]
    pub volume: Option<String>,
    #[serde(rename(deserialize = "last"))]
    pub price: Option<String>,
    #[serde(rename(deserialize = "sell"))]
    pub ask: Option<String>,
    #[serde(rename(deserialize = "buy"))]
    pub bid: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MarketEnvelope {
    /// Observation time (unix seconds)
    #[serde(rename = "at", default)]
    pub timestamp: Option<i64>,
    #[serde(default)]
    pub ticker: Option<Ticker>,
    /// Only present on the single-market endpoint
    #[serde(rename = "market", default)]
    pub market_name: Option<String>,
}

/// Body of `GET /api/v1/markets/tickers`.
#[derive(Debug, Clone, Deserialize)]
pub struct AllMarketsResponse {
    #[serde(default)]
    pub status: Option<String>,
    /// `null` entries are kept here and dropped when unwrapping.
    #[serde(default)]
    pub data: Option<IndexMap<String, Option<MarketEnvelope>>>,
}

/// Body of `GET /api/v1/markets/tickers/{market}`.
#[derive(Debug, Clone, Deserialize)]
pub struct SingleMarketResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<MarketEnvelope>,
}
