pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod state;

use axum::{Router, routing::get};
use state::AppState;
use tower_http::trace::TraceLayer;

pub fn app(state: AppState) -> Router {
    let markets = Router::new()
        .route("/tickers", get(handlers::tickers::get_tickers))
        .route("/tickers/{market}", get(handlers::tickers::get_ticker));

    Router::new()
        .route("/health", get(handlers::health::get_health))
        .nest("/api/v1/markets", markets)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
