//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use checkout_types::{AppError, CheckoutRequest, PaymentProcessor, TokenRequest, TopUpRequest};

use crate::CheckoutService;

/// Application state shared across handlers.
pub struct AppState<P: PaymentProcessor> {
    pub service: CheckoutService<P>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::BadGateway(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = serde_json::json!({
            "error": message,
            "code": status.as_u16()
        });

        (status, Json(body)).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Settings for the client-side payment form.
#[tracing::instrument(skip(state))]
pub async fn client_config<P: PaymentProcessor>(
    State(state): State<Arc<AppState<P>>>,
) -> impl IntoResponse {
    Json(state.service.client_settings().clone())
}

/// The configured location.
#[tracing::instrument(skip(state))]
pub async fn location<P: PaymentProcessor>(
    State(state): State<Arc<AppState<P>>>,
) -> Result<impl IntoResponse, ApiError> {
    let location = state
        .service
        .location_information()
        .await
        .map_err(AppError::from)?;
    Ok(Json(location))
}

/// All locations of the merchant.
#[tracing::instrument(skip(state))]
pub async fn list_locations<P: PaymentProcessor>(
    State(state): State<Arc<AppState<P>>>,
) -> Result<impl IntoResponse, ApiError> {
    let locations = state
        .service
        .list_locations()
        .await
        .map_err(AppError::from)?;
    Ok(Json(locations))
}

/// Top up a wallet.
#[tracing::instrument(skip(state, req), fields(amount = req.amount, currency = %req.currency))]
pub async fn top_up<P: PaymentProcessor>(
    State(state): State<Arc<AppState<P>>>,
    Json(req): Json<TopUpRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let outcome = state.service.top_up(req).await?;
    Ok(Json(outcome))
}

/// Buy the fixed checkout item.
#[tracing::instrument(skip(state, req))]
pub async fn charge_for_cookie<P: PaymentProcessor>(
    State(state): State<Arc<AppState<P>>>,
    Json(req): Json<CheckoutRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let result = state.service.charge_for_checkout(req).await?;
    Ok(Json(result))
}

/// Charge the fixed token amount.
#[tracing::instrument(skip(state, req))]
pub async fn process_payment<P: PaymentProcessor>(
    State(state): State<Arc<AppState<P>>>,
    Json(req): Json<TokenRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let result = state.service.process_payment(req).await?;
    Ok(Json(result))
}
