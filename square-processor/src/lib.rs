//! # Square Processor
//!
//! Outbound adapter implementing the `PaymentProcessor` port against the
//! Square Connect v2 REST API (locations, orders, payments).

mod environment;

pub use environment::{SquareEnvironment, UnknownEnvironment};

use std::time::Duration;

use async_trait::async_trait;
use checkout_types::{
    CreateOrderRequest, CreatePaymentRequest, ErrorDetail, Location, Order, Payment,
    PaymentProcessor, ProcessorError,
};
use reqwest::Client;
use serde::{Deserialize, de::DeserializeOwned};

/// Connect API version pinned on every request.
pub const SQUARE_VERSION: &str = "2024-01-18";

#[derive(Deserialize)]
struct LocationEnvelope {
    location: Location,
}

#[derive(Deserialize)]
struct LocationsEnvelope {
    #[serde(default)]
    locations: Vec<Location>,
}

#[derive(Deserialize)]
struct OrderEnvelope {
    order: Order,
}

#[derive(Deserialize)]
struct PaymentEnvelope {
    payment: Payment,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    errors: Vec<ErrorDetail>,
}

/// Square Connect client.
pub struct SquareClient {
    base_url: String,
    access_token: String,
    http: Client,
}

impl SquareClient {
    /// Creates a client for the given environment.
    pub fn new(
        environment: SquareEnvironment,
        access_token: impl Into<String>,
    ) -> Result<Self, ProcessorError> {
        Self::with_base_url(environment.base_url(), access_token)
    }

    /// Creates a client against an explicit base URL (mock servers, proxies).
    pub fn with_base_url(
        base_url: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Result<Self, ProcessorError> {
        let http = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(transport)?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            access_token: access_token.into(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ProcessorError> {
        tracing::debug!(path, "GET");
        let resp = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .bearer_auth(&self.access_token)
            .header("Square-Version", SQUARE_VERSION)
            .send()
            .await
            .map_err(transport)?;
        handle_response(resp).await
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ProcessorError> {
        tracing::debug!(path, "POST");
        let resp = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .bearer_auth(&self.access_token)
            .header("Square-Version", SQUARE_VERSION)
            .json(body)
            .send()
            .await
            .map_err(transport)?;
        handle_response(resp).await
    }
}

#[async_trait]
impl PaymentProcessor for SquareClient {
    async fn retrieve_location(&self, location_id: &str) -> Result<Location, ProcessorError> {
        let envelope: LocationEnvelope = self
            .get(&format!("/v2/locations/{}", location_id))
            .await?;
        Ok(envelope.location)
    }

    async fn list_locations(&self) -> Result<Vec<Location>, ProcessorError> {
        let envelope: LocationsEnvelope = self.get("/v2/locations").await?;
        Ok(envelope.locations)
    }

    async fn create_order(&self, req: CreateOrderRequest) -> Result<Order, ProcessorError> {
        let envelope: OrderEnvelope = self.post("/v2/orders", &req).await?;
        Ok(envelope.order)
    }

    async fn create_payment(&self, req: CreatePaymentRequest) -> Result<Payment, ProcessorError> {
        let envelope: PaymentEnvelope = self.post("/v2/payments", &req).await?;
        Ok(envelope.payment)
    }
}

fn transport(err: reqwest::Error) -> ProcessorError {
    ProcessorError::Transport(err.to_string())
}

async fn handle_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ProcessorError> {
    let status = resp.status();
    let body = resp.text().await.map_err(transport)?;

    if status.is_success() {
        return serde_json::from_str(&body).map_err(|e| ProcessorError::Decode(e.to_string()));
    }

    Err(api_error(status.as_u16(), &body))
}

/// Builds the error for a non-success response body.
fn api_error(status: u16, body: &str) -> ProcessorError {
    let errors = serde_json::from_str::<ErrorEnvelope>(body)
        .map(|e| e.errors)
        .unwrap_or_default();
    let message = errors
        .first()
        .map(|e| e.detail.clone().unwrap_or_else(|| e.code.clone()))
        .unwrap_or_else(|| format!("HTTP {}", status));

    tracing::debug!(status, %message, "Processor returned an error");
    ProcessorError::Api {
        status,
        message,
        errors,
    }
}
