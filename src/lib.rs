pub mod config;
pub mod domain {
    pub mod card;
}
pub mod http {
    pub mod handlers {
        pub mod cards;
    }
    pub mod validation;
}
pub mod service {
    pub mod card_stub_service;
}
pub mod stub {
    pub mod classifier;
    pub mod generator;
}

use axum::routing::{get, post};
use axum::Router;

#[derive(Clone)]
pub struct AppState {
    pub card_service: service::card_stub_service::CardStubService,
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(http::handlers::cards::health))
        .route("/v1/cards", post(http::handlers::cards::create_card))
        .route(
            "/v1/cards/:card_id/balance",
            get(http::handlers::cards::get_balance),
        )
        .route(
            "/v1/cards/:card_id/deposit",
            post(http::handlers::cards::deposit_funds),
        )
        .with_state(state)
}
