//! Orders built per request and submitted to the processor.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Money;

/// A single order line.
///
/// The processor keys a new line by its quantity string; every order built
/// here carries exactly one unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OrderLineItem {
    #[schema(example = "1")]
    pub quantity: String,
    #[schema(example = "Cookie")]
    pub name: String,
    pub base_price_money: Money,
}

impl OrderLineItem {
    /// One unit of `name` priced at `price`.
    pub fn single(name: impl Into<String>, price: Money) -> Self {
        Self {
            quantity: "1".to_string(),
            name: name.into(),
            base_price_money: price,
        }
    }
}

/// An order, either freshly built (no id, no total) or as returned by the
/// processor after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Order {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub location_id: String,
    #[serde(default)]
    pub line_items: Vec<OrderLineItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_money: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "OPEN")]
    pub state: Option<String>,
}

impl Order {
    /// Builds an unsubmitted order with a single line item.
    pub fn single_item(location_id: impl Into<String>, item: OrderLineItem) -> Self {
        Self {
            id: None,
            location_id: location_id.into(),
            line_items: vec![item],
            total_money: None,
            state: None,
        }
    }
}

/// Body of an order-creation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub order: Order,
    pub idempotency_key: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Currency;

    #[test]
    fn test_single_item_order_wire_format() {
        let price = Money::new(100, Currency::IDR).unwrap();
        let order = Order::single_item("LOC_1", OrderLineItem::single("Cookie", price));

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "location_id": "LOC_1",
                "line_items": [{
                    "quantity": "1",
                    "name": "Cookie",
                    "base_price_money": { "amount": 100, "currency": "IDR" }
                }]
            })
        );
    }

    #[test]
    fn test_created_order_decodes_total() {
        let json = serde_json::json!({
            "id": "order_1",
            "location_id": "LOC_1",
            "line_items": [{
                "uid": "abc",
                "quantity": "1",
                "name": "Cookie",
                "base_price_money": { "amount": 100, "currency": "IDR" },
                "total_money": { "amount": 100, "currency": "IDR" }
            }],
            "total_money": { "amount": 100, "currency": "IDR" },
            "state": "OPEN",
            "version": 1
        });

        let order: Order = serde_json::from_value(json).unwrap();
        assert_eq!(order.id.as_deref(), Some("order_1"));
        assert_eq!(order.total_money.unwrap().amount(), 100);
        assert_eq!(order.line_items.len(), 1);
    }
}
