//! Payments processor port trait.
//!
//! This is the outbound port of the hexagon. The Square adapter implements
//! it over HTTP; tests implement it with scripted responses.

use crate::domain::{CreateOrderRequest, CreatePaymentRequest, Location, Order, Payment};
use crate::error::ProcessorError;

/// Remote operations the checkout workflow needs from the processor.
///
/// Every call is a single remote round-trip. Implementations must not retry:
/// each request carries its own idempotency key chosen by the caller.
#[async_trait::async_trait]
pub trait PaymentProcessor: Send + Sync + 'static {
    /// Fetches one location by id.
    async fn retrieve_location(&self, location_id: &str) -> Result<Location, ProcessorError>;

    /// Lists every location of the merchant.
    async fn list_locations(&self) -> Result<Vec<Location>, ProcessorError>;

    /// Creates an order and returns it with its id and computed total.
    async fn create_order(&self, req: CreateOrderRequest) -> Result<Order, ProcessorError>;

    /// Creates (and, with `autocomplete`, captures) a payment.
    async fn create_payment(&self, req: CreatePaymentRequest) -> Result<Payment, ProcessorError>;
}
