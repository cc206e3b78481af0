use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

pub async fn get_tickers(State(state): State<AppState>) -> Response {
    match state.quidax.fetch_tickers().await {
        Ok(tickers) => (StatusCode::OK, Json(tickers)).into_response(),
        Err(err) => {
            tracing::warn!(error = %err, "failed to fetch tickers from Quidax");
            err.into_response()
        }
    }
}

pub async fn get_ticker(Path(market): Path<String>, State(state): State<AppState>) -> Response {
    match state.quidax.fetch_market(&market).await {
        Ok(Some(ticker)) => (StatusCode::OK, Json(ticker)).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(err) => {
            tracing::warn!(error = %err, %market, "failed to fetch ticker from Quidax");
            err.into_response()
        }
    }
}
