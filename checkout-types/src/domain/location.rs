//! Merchant location as reported by the processor.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Currency;

/// The processor's point-of-sale context: which location an order belongs to
/// and the currency it settles in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Location {
    #[schema(example = "L8Z1A2B3C4D5E")]
    pub id: String,
    pub currency: Currency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "ACTIVE")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "ID")]
    pub country: Option<String>,
}

impl Location {
    pub fn new(id: impl Into<String>, currency: Currency) -> Self {
        Self {
            id: id.into(),
            currency,
            name: None,
            status: None,
            country: None,
        }
    }
}
