use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Hard failures talking to the upstream API. Soft failures (a non-success
/// `status` in the envelope) never end up here.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("upstream request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("upstream responded with {0}")]
    Status(reqwest::StatusCode),
    #[error("upstream returned malformed data: {0}")]
    Decode(#[from] serde_json::Error),
}

impl UpstreamError {
    fn kind(&self) -> &'static str {
        match self {
            UpstreamError::Request(_) | UpstreamError::Status(_) => "upstream unavailable",
            UpstreamError::Decode(_) => "upstream returned malformed data",
        }
    }
}

impl IntoResponse for UpstreamError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_GATEWAY, Json(json!({ "error": self.kind() }))).into_response()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}
