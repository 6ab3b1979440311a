use card_services_stub::config::AppConfig;
use card_services_stub::service::card_stub_service::CardStubService;
use card_services_stub::stub::generator::ThreadRngGenerator;
use card_services_stub::AppState;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = AppConfig::from_env();

    let card_service = CardStubService {
        generator: Arc::new(ThreadRngGenerator),
    };

    let state = AppState { card_service };
    let app = card_services_stub::app(state);

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!("listening on {}", cfg.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
