//! # Billing Error Types
//!
//! Typed error handling for the snap-billing service.
//! Every fallible operation returns `Result<T, BillingError>`.

use crate::request::FieldError;
use thiserror::Error;

/// Core error type for all billing operations
#[derive(Debug, Error)]
pub enum BillingError {
    /// Configuration errors (missing keys, unreadable env file)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Request body could not be decoded into a payment request
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    /// One or more field rules failed
    #[error("Validation failed for {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    /// Gateway rejected the transaction. `raw` is the vendor payload, untouched.
    #[error("Gateway error [{provider}] (HTTP {status}): {raw}")]
    Gateway {
        provider: String,
        status: u16,
        raw: serde_json::Value,
    },

    /// Network/HTTP error communicating with the gateway
    #[error("Network error: {0}")]
    Network(String),

    /// Outbound gateway call exceeded its time budget
    #[error("Gateway request timed out after {secs} seconds")]
    Timeout { secs: u64 },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Internal error (should not happen)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BillingError {
    /// Returns the HTTP status code appropriate for this error.
    ///
    /// Only validation failures are client errors; everything else,
    /// malformed bodies included, is reported as 500.
    pub fn status_code(&self) -> u16 {
        match self {
            BillingError::Validation(_) => 400,
            BillingError::Configuration(_)
            | BillingError::MalformedBody(_)
            | BillingError::Gateway { .. }
            | BillingError::Network(_)
            | BillingError::Timeout { .. }
            | BillingError::Serialization(_)
            | BillingError::Internal(_) => 500,
        }
    }

    /// Returns true if this error came from talking to the gateway
    pub fn is_gateway_failure(&self) -> bool {
        matches!(
            self,
            BillingError::Gateway { .. } | BillingError::Network(_) | BillingError::Timeout { .. }
        )
    }
}

/// Result type alias for billing operations
pub type BillingResult<T> = Result<T, BillingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(BillingError::Validation(vec![]).status_code(), 400);
        assert_eq!(
            BillingError::MalformedBody("expected value".into()).status_code(),
            500
        );
        assert_eq!(
            BillingError::Gateway {
                provider: "midtrans".into(),
                status: 401,
                raw: serde_json::json!({"error_messages": ["Access denied"]}),
            }
            .status_code(),
            500
        );
        assert_eq!(BillingError::Timeout { secs: 30 }.status_code(), 500);
    }

    #[test]
    fn test_gateway_failures() {
        assert!(BillingError::Network("connection refused".into()).is_gateway_failure());
        assert!(BillingError::Timeout { secs: 5 }.is_gateway_failure());
        assert!(!BillingError::Validation(vec![]).is_gateway_failure());
        assert!(!BillingError::MalformedBody("eof".into()).is_gateway_failure());
    }

    #[test]
    fn test_validation_display() {
        let err = BillingError::Validation(vec![
            FieldError::new("user_id", "This field is required"),
            FieldError::new("amount", "This field is required"),
        ]);
        assert_eq!(err.to_string(), "Validation failed for 2 field(s)");
    }
}
