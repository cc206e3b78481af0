pub mod health;
pub mod tickers;
