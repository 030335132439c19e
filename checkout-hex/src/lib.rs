//! # Checkout Hex
//!
//! Application service layer and HTTP adapter for the checkout gateway.
//!
//! ## Architecture
//!
//! - `service/` - Application service (runs the payment workflows)
//! - `inbound/` - HTTP adapter (Axum server)
//! - `openapi/` - OpenAPI document served by Swagger UI
//!
//! The service is generic over `P: PaymentProcessor`, allowing
//! different processor adapters to be injected.

pub mod inbound;
pub mod openapi;
pub mod service;


pub use service::{ChargeSettings, CheckoutService};
