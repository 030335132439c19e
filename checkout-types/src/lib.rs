//! # Checkout Types
//!
//! Domain types and port traits for the checkout gateway.
//! This crate has ZERO external IO dependencies - only data structures,
//! validation rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate is the **innermost core** of the hexagonal layout:
//! - `domain/` - Processor-facing records (Money, Location, Order, Payment)
//! - `ports/` - The `PaymentProcessor` trait that outbound adapters implement
//! - `dto/` - Request/response bodies of the inbound HTTP API
//! - `error/` - Domain, processor and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    CreateOrderRequest, CreatePaymentRequest, Currency, ErrorDetail, Location, Money, Order,
    OrderLineItem, Payment, new_idempotency_key,
};
pub use dto::*;
pub use error::{AppError, DomainError, ProcessorError};
pub use ports::PaymentProcessor;
