use axum::Router;
use cryptoticker::{config::Config, state::AppState};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cryptoticker=info,tower_http=info,axum=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = AppState::from_config(&config);
    let app: Router = cryptoticker::app(state);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!(upstream = %config.base_url, "listening on {}", config.bind_addr);
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
