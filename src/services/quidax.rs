use crate::error::UpstreamError;
use crate::models::ticker::{AllMarketsResponse, SingleMarketResponse, Ticker};
use crate::services::unwrap::{unwrap_all, unwrap_single};
use indexmap::IndexMap;
use serde::de::DeserializeOwned;

pub const DEFAULT_BASE_URL: &str = "https://app.quidax.io";
const TICKERS_PATH: &str = "/api/v1/markets/tickers";

/// Client for the Quidax public market tickers API.
#[derive(Clone)]
pub struct QuidaxService {
    client: reqwest::Client,
    base_url: String,
}

impl QuidaxService {
    /// For tests / custom endpoints.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Raw bulk envelope; `None` when upstream sent no body or `null`.
    pub async fn fetch_all_markets(&self) -> Result<Option<AllMarketsResponse>, UpstreamError> {
        let url = format!("{}{TICKERS_PATH}", self.base_url);
        self.get_json(&url).await
    }

    /// Raw single-market envelope. The symbol goes into the path as given.
    pub async fn fetch_market_response(
        &self,
        market: &str,
    ) -> Result<Option<SingleMarketResponse>, UpstreamError> {
        let url = format!("{}{TICKERS_PATH}/{market}", self.base_url);
        self.get_json(&url).await
    }

    /// Every market's ticker keyed by symbol, in upstream order.
    pub async fn fetch_tickers(&self) -> Result<IndexMap<String, Ticker>, UpstreamError> {
        Ok(unwrap_all(self.fetch_all_markets().await?))
    }

    pub async fn fetch_market(&self, market: &str) -> Result<Option<Ticker>, UpstreamError> {
        Ok(unwrap_single(self.fetch_market_response(market).await?))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<Option<T>, UpstreamError> {
        tracing::debug!(%url, "fetching from Quidax");
        let resp = self.client.get(url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status));
        }

        // Decode separately so malformed bodies are told apart from transport errors.
        let bytes = resp.bytes().await?;
        if bytes.trim_ascii().is_empty() {
            return Ok(None);
        }
        Ok(serde_json::from_slice::<Option<T>>(&bytes)?)
    }
}
