//! Data Transfer Objects (DTOs) for requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{ErrorDetail, Payment};

// ─────────────────────────────────────────────────────────────────────────────
// Requests
// ─────────────────────────────────────────────────────────────────────────────

/// Request to top up a wallet with a tokenised card.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TopUpRequest {
    /// Single-use payment-method token from the payment form
    #[schema(example = "cnon:card-nonce-ok")]
    pub nonce: String,
    /// Amount in smallest currency unit
    #[schema(example = 50000)]
    pub amount: i64,
    /// Informational only: the charge always uses the location's currency
    #[schema(example = "IDR")]
    pub currency: String,
    /// Label of the order line item
    #[schema(example = "Wallet top up")]
    pub name: String,
}

/// Request to buy the fixed checkout item.
///
/// Other fields sent by the client are accepted and ignored.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CheckoutRequest {
    #[schema(example = "cnon:card-nonce-ok")]
    pub nonce: String,
}

/// Request to charge a fixed amount against a payment token.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenRequest {
    #[schema(example = "cnon:card-nonce-ok")]
    pub token: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Results
// ─────────────────────────────────────────────────────────────────────────────

/// Outcome of a payment attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Success,
    Failure,
}

/// Simple success/failure result handed back to the client.
///
/// `errors` is `null` on success and carries the processor's descriptors on
/// failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PaymentResult {
    pub status: PaymentStatus,
    pub errors: Option<Vec<ErrorDetail>>,
}

impl PaymentResult {
    pub fn success() -> Self {
        Self {
            status: PaymentStatus::Success,
            errors: None,
        }
    }

    pub fn failure(errors: Vec<ErrorDetail>) -> Self {
        Self {
            status: PaymentStatus::Failure,
            errors: Some(errors),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == PaymentStatus::Success
    }
}

/// Response of a wallet top-up: the processor's payment on success, the
/// failure result otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum TopUpOutcome {
    Completed(Payment),
    Failed(PaymentResult),
}

/// Values a client-side payment form needs to tokenise a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ClientSettings {
    #[schema(example = "sandbox-sq0idb-abc123")]
    pub application_id: String,
    #[schema(example = "L8Z1A2B3C4D5E")]
    pub location_id: String,
    #[schema(example = "sandbox")]
    pub environment: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_result_serialises_null_errors() {
        let json = serde_json::to_value(PaymentResult::success()).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "SUCCESS", "errors": null }));
    }

    #[test]
    fn test_failure_result_carries_errors() {
        let result = PaymentResult::failure(vec![ErrorDetail::new(
            "PAYMENT_METHOD_ERROR",
            "CARD_DECLINED",
        )]);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["status"], "FAILURE");
        assert_eq!(json["errors"][0]["code"], "CARD_DECLINED");
    }

    #[test]
    fn test_checkout_request_ignores_extra_fields() {
        let req: CheckoutRequest = serde_json::from_value(serde_json::json!({
            "nonce": "cnon:card-nonce-ok",
            "buyer": "someone",
            "quantity": 3
        }))
        .unwrap();
        assert_eq!(req.nonce, "cnon:card-nonce-ok");
    }

    #[test]
    fn test_top_up_outcome_decodes_failure() {
        let outcome: TopUpOutcome = serde_json::from_value(serde_json::json!({
            "status": "FAILURE",
            "errors": [{ "category": "PAYMENT_METHOD_ERROR", "code": "CARD_DECLINED" }]
        }))
        .unwrap();
        assert!(matches!(outcome, TopUpOutcome::Failed(r) if !r.is_success()));
    }
}
