use crate::domain::card::{
    CardRequest, DepositFundsRequest, ErrorEnvelope, ErrorPayload, FieldError,
};
use crate::http::validation::{validate_card_request, validate_deposit_request};
use crate::service::card_stub_service::StubFailure;
use crate::AppState;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

pub async fn create_card(
    State(state): State<AppState>,
    Json(req): Json<CardRequest>,
) -> impl IntoResponse {
    let errors = validate_card_request(&req);
    if !errors.is_empty() {
        return validation_failure(errors).into_response();
    }
    let resp = state.card_service.create_card(&req);
    (axum::http::StatusCode::OK, Json(resp)).into_response()
}

pub async fn get_balance(
    State(state): State<AppState>,
    Path(card_id): Path<String>,
) -> impl IntoResponse {
    match state.card_service.get_balance(&card_id) {
        Ok(resp) => (axum::http::StatusCode::OK, Json(resp)).into_response(),
        Err(failure) => failure_response(failure),
    }
}

pub async fn deposit_funds(
    State(state): State<AppState>,
    Path(card_id): Path<String>,
    Json(req): Json<DepositFundsRequest>,
) -> impl IntoResponse {
    let errors = validate_deposit_request(&req);
    if !errors.is_empty() {
        return validation_failure(errors).into_response();
    }
    match state.card_service.deposit_funds(&card_id, &req) {
        Ok(resp) => (axum::http::StatusCode::OK, Json(resp)).into_response(),
        Err(failure) => failure_response(failure),
    }
}

pub async fn health() -> impl IntoResponse {
    (axum::http::StatusCode::OK, Json(serde_json::json!({"status": "ok"}))).into_response()
}

fn failure_response(failure: StubFailure) -> axum::response::Response {
    match failure {
        // Not-found carries no body, matching the provider's behavior.
        StubFailure::NotFound => axum::http::StatusCode::NOT_FOUND.into_response(),
        // The simulated fault is opaque: dependents assert on the status
        // class, never on the payload.
        StubFailure::SimulatedServerFailure => (
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            Json(err("INTERNAL_SERVER_ERROR", "An internal server error occurred", None)),
        )
            .into_response(),
    }
}

fn validation_failure(errors: Vec<FieldError>) -> (axum::http::StatusCode, Json<ErrorEnvelope>) {
    (
        axum::http::StatusCode::BAD_REQUEST,
        Json(err(
            "VALIDATION_ERROR",
            "There were validation issues with the request",
            Some(errors),
        )),
    )
}

fn err(code: &str, message: &str, field_errors: Option<Vec<FieldError>>) -> ErrorEnvelope {
    ErrorEnvelope {
        error: ErrorPayload {
            code: code.to_string(),
            message: message.to_string(),
            field_errors,
        },
    }
}
