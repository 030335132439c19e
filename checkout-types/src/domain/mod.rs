//! Domain records exchanged with the payments processor.

pub mod location;
pub mod money;
pub mod order;
pub mod payment;

pub use location::Location;
pub use money::{Currency, Money};
pub use order::{CreateOrderRequest, Order, OrderLineItem};
pub use payment::{CreatePaymentRequest, ErrorDetail, Payment};

/// Generates a fresh idempotency key for a single remote call.
///
/// Keys are never reused, so a caller-side retry is a new logical attempt.
pub fn new_idempotency_key() -> String {
    uuid::Uuid::new_v4().to_string()
}
