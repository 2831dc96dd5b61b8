//! Client error types

use thiserror::Error;

use crate::checkout::ErrorSet;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (network/transport)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server rejected the request
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Response body did not match the expected shape
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// A logged-in identity of the required kind is missing
    #[error("Authentication required")]
    Unauthenticated,

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Checkout form validation failed
    #[error("Validation failed: {0}")]
    Validation(ErrorSet),

    /// Checkout attempted with an empty cart
    #[error("Cart is empty")]
    EmptyCart,

    /// UPI payment has not been confirmed by the payer
    #[error("Please confirm your UPI payment before placing the order")]
    PaymentUnconfirmed,

    /// An order submission is already in flight
    #[error("An order submission is already in progress")]
    SubmissionInFlight,

    /// Cart index is not a valid current position
    #[error("Cart index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Whether the user can retry after correcting input or re-triggering
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, ClientError::IndexOutOfRange { .. })
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
