//! # Checkout Client SDK
//!
//! A typed Rust client for the checkout gateway API.

use checkout_types::{
    CheckoutRequest, ClientSettings, Location, PaymentResult, TokenRequest, TopUpOutcome,
    TopUpRequest,
};
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Checkout gateway API client.
pub struct CheckoutClient {
    base_url: String,
    http: Client,
}

impl CheckoutClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Checks if the API is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Ok(resp.status().is_success())
    }

    /// Fetches the payment-form settings.
    pub async fn config(&self) -> Result<ClientSettings, ClientError> {
        self.get("/config").await
    }

    /// Fetches the configured location.
    pub async fn location(&self) -> Result<Location, ClientError> {
        self.get("/location").await
    }

    /// Lists all merchant locations.
    pub async fn locations(&self) -> Result<Vec<Location>, ClientError> {
        self.get("/locations").await
    }

    /// Tops up a wallet.
    pub async fn top_up(
        &self,
        nonce: &str,
        amount: i64,
        currency: &str,
        name: &str,
    ) -> Result<TopUpOutcome, ClientError> {
        let req = TopUpRequest {
            nonce: nonce.to_string(),
            amount,
            currency: currency.to_string(),
            name: name.to_string(),
        };
        self.post("/walletTopUp", &req).await
    }

    /// Buys the fixed checkout item.
    pub async fn charge_for_cookie(&self, nonce: &str) -> Result<PaymentResult, ClientError> {
        let req = CheckoutRequest {
            nonce: nonce.to_string(),
        };
        self.post("/chargeForCookie", &req).await
    }

    /// Charges the fixed token amount.
    pub async fn process_payment(&self, token: &str) -> Result<PaymentResult, ClientError> {
        let req = TokenRequest {
            token: token.to_string(),
        };
        self.post("/process-payment", &req).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let resp = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;
        self.handle_response(resp).await
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let resp = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await?;
        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
                .unwrap_or(body);
            Err(ClientError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = CheckoutClient::new("http://localhost:3000");
        assert_eq!(client.base_url, "http://localhost:3000");
    }

    #[test]
    fn test_client_with_trailing_slash() {
        let client = CheckoutClient::new("http://localhost:3000/");
        assert_eq!(client.base_url, "http://localhost:3000");
    }
}
