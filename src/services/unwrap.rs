//! Strips the upstream envelopes down to bare tickers.
//!
//! A `status` other than `"success"` (or none at all) is not an error here:
//! it yields an empty map or `None`, and only transport/decode problems are
//! errors.

use crate::models::ticker::{AllMarketsResponse, SingleMarketResponse, Ticker};
use indexmap::IndexMap;

pub const SUCCESS: &str = "success";

/// Collects `symbol -> ticker` in upstream order, skipping envelopes
/// without a ticker.
pub fn unwrap_all(body: Option<AllMarketsResponse>) -> IndexMap<String, Ticker> {
    let mut tickers = IndexMap::new();

    let Some(body) = body else {
        return tickers;
    };
    if body.status.as_deref() != Some(SUCCESS) {
        tracing::debug!(status = ?body.status, "upstream bulk response not successful");
        return tickers;
    }

    let mut skipped = 0usize;
    for (market, envelope) in body.data.unwrap_or_default() {
        match envelope.and_then(|envelope| envelope.ticker) {
            Some(ticker) => {
                tickers.insert(market, ticker);
            }
            None => skipped += 1,
        }
    }
    tracing::debug!(kept = tickers.len(), skipped, "unwrapped bulk tickers");

    tickers
}

pub fn unwrap_single(body: Option<SingleMarketResponse>) -> Option<Ticker> {
    let body = body?;
    if body.status.as_deref() != Some(SUCCESS) {
        tracing::debug!(
            status = ?body.status,
            upstream_message = body.message.as_deref().unwrap_or_default(),
            "upstream market response not successful"
        );
        return None;
    }
    body.data?.ticker
}
