//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use checkout_types::domain::{Currency, ErrorDetail, Location, Money, Payment};
use checkout_types::dto::{
    CheckoutRequest, ClientSettings, PaymentResult, PaymentStatus, TokenRequest, TopUpOutcome,
    TopUpRequest,
};
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// Settings for the client-side payment form
#[utoipa::path(
    get,
    path = "/config",
    tag = "locations",
    responses(
        (status = 200, description = "Application and location identifiers", body = ClientSettings)
    )
)]
async fn client_config() {}

/// The configured location
#[utoipa::path(
    get,
    path = "/location",
    tag = "locations",
    responses(
        (status = 200, description = "Location details", body = Location),
        (status = 502, description = "Processor lookup failed")
    )
)]
async fn location() {}

/// All merchant locations
#[utoipa::path(
    get,
    path = "/locations",
    tag = "locations",
    responses(
        (status = 200, description = "List of locations", body = Vec<Location>),
        (status = 502, description = "Processor lookup failed")
    )
)]
async fn list_locations() {}

/// Top up a wallet
#[utoipa::path(
    post,
    path = "/walletTopUp",
    tag = "payments",
    request_body = TopUpRequest,
    responses(
        (status = 200, description = "Processor payment record, or a FAILURE result", body = TopUpOutcome),
        (status = 400, description = "Invalid request")
    )
)]
async fn top_up() {}

/// Buy the fixed checkout item
#[utoipa::path(
    post,
    path = "/chargeForCookie",
    tag = "payments",
    request_body = CheckoutRequest,
    responses(
        (status = 200, description = "Payment outcome", body = PaymentResult),
        (status = 400, description = "Invalid request")
    )
)]
async fn charge_for_cookie() {}

/// Charge a fixed amount against a payment token
#[utoipa::path(
    post,
    path = "/process-payment",
    tag = "payments",
    request_body = TokenRequest,
    responses(
        (status = 200, description = "Payment outcome", body = PaymentResult),
        (status = 400, description = "Invalid request")
    )
)]
async fn process_payment() {}

/// OpenAPI documentation for the checkout API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Checkout Gateway API",
        version = "1.0.0",
        description = "Creates orders and payments with the payments processor on behalf of a wallet or shop front end.\n\nEvery payment endpoint answers `200`; processor failures are reported as `{\"status\": \"FAILURE\", \"errors\": [...]}`.",
        license(name = "MIT"),
    ),
    paths(
        health,
        client_config,
        location,
        list_locations,
        top_up,
        charge_for_cookie,
        process_payment,
    ),
    components(
        schemas(
            TopUpRequest,
            CheckoutRequest,
            TokenRequest,
            PaymentResult,
            PaymentStatus,
            TopUpOutcome,
            ClientSettings,
            Payment,
            Location,
            Money,
            Currency,
            ErrorDetail,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "locations", description = "Merchant location lookups"),
        (name = "payments", description = "Top-up, checkout and token payments"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_payment_routes() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for route in ["/walletTopUp", "/chargeForCookie", "/process-payment"] {
            assert!(paths.iter().any(|p| p.as_str() == route), "missing {route}");
        }
    }
}
