//! Error types for the checkout gateway.

use crate::domain::ErrorDetail;

/// Domain-level errors (invalid values).
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Amount cannot be negative")]
    NegativeAmount,

    #[error("Invalid ISO 4217 currency code: {0:?}")]
    InvalidCurrency(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Failures of a call to the payments processor.
#[derive(Debug, thiserror::Error)]
pub enum ProcessorError {
    /// The processor answered with a non-success status and its own error list.
    #[error("Processor rejected the request ({status}): {message}")]
    Api {
        status: u16,
        message: String,
        errors: Vec<ErrorDetail>,
    },

    #[error("Processor unreachable: {0}")]
    Transport(String),

    #[error("Unexpected processor response: {0}")]
    Decode(String),
}

impl ProcessorError {
    /// HTTP status returned by the processor, if it answered at all.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ProcessorError::Api { status, .. } => Some(*status),
            ProcessorError::Transport(_) | ProcessorError::Decode(_) => None,
        }
    }

    /// Error descriptors to hand back to the client.
    ///
    /// Failures that never reached the processor's error reporting get a
    /// single synthesised descriptor.
    pub fn errors(&self) -> Vec<ErrorDetail> {
        match self {
            ProcessorError::Api { errors, message, .. } if errors.is_empty() => {
                vec![ErrorDetail::new("API_ERROR", "INTERNAL_SERVER_ERROR").with_detail(message)]
            }
            ProcessorError::Api { errors, .. } => errors.clone(),
            ProcessorError::Transport(msg) => {
                vec![ErrorDetail::new("API_ERROR", "SERVICE_UNAVAILABLE").with_detail(msg)]
            }
            ProcessorError::Decode(msg) => {
                vec![ErrorDetail::new("API_ERROR", "BAD_RESPONSE").with_detail(msg)]
            }
        }
    }
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Bad gateway: {0}")]
    BadGateway(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<ProcessorError> for AppError {
    fn from(err: ProcessorError) -> Self {
        AppError::BadGateway(err.to_string())
    }
}
