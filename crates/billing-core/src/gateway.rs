//! # Payment Gateway Trait
//!
//! Seam between the HTTP layer and the external payment gateway.
//! The service talks to exactly one gateway; the trait exists so the
//! HTTP layer can be exercised against a stub.

use crate::error::BillingResult;
use crate::transaction::{GatewayResponse, TransactionRequest};
use async_trait::async_trait;
use std::sync::Arc;

/// A hosted-checkout payment gateway.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create a transaction and return the checkout token and redirect URL.
    ///
    /// Vendor rejections come back as `BillingError::Gateway` carrying the
    /// raw vendor payload.
    async fn create_transaction(&self, request: &TransactionRequest)
        -> BillingResult<GatewayResponse>;

    /// Get the provider name (for logging).
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a shared gateway (dynamic dispatch)
pub type BoxedPaymentGateway = Arc<dyn PaymentGateway>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customer::CustomerProfile;
    use crate::error::BillingError;
    use crate::request::PaymentRequest;
    use crate::transaction::PaymentSelection;

    struct EchoGateway;

    #[async_trait]
    impl PaymentGateway for EchoGateway {
        async fn create_transaction(
            &self,
            request: &TransactionRequest,
        ) -> BillingResult<GatewayResponse> {
            if request.gross_amount < 0 {
                return Err(BillingError::Internal("negative amount".into()));
            }
            Ok(GatewayResponse {
                token: request.order_id.clone(),
                redirect_url: format!("https://pay/{}", request.order_id),
            })
        }

        fn provider_name(&self) -> &'static str {
            "echo"
        }
    }

    #[tokio::test]
    async fn test_dynamic_dispatch() {
        let gateway: BoxedPaymentGateway = Arc::new(EchoGateway);
        let tx = TransactionRequest::from_payment(
            &PaymentRequest::new(42, 500, "ABC", "Studio"),
            &CustomerProfile::default(),
            &PaymentSelection::All,
        );

        let response = gateway.create_transaction(&tx).await.unwrap();
        assert_eq!(response.token, "MID-User-42-ABC");
        assert_eq!(response.redirect_url, "https://pay/MID-User-42-ABC");
        assert_eq!(gateway.provider_name(), "echo");
    }
}
