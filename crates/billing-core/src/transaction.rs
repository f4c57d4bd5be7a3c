//! # Transaction Types
//!
//! Gateway-bound transaction request and the gateway's checkout response.

use crate::customer::CustomerProfile;
use crate::request::PaymentRequest;
use serde::{Deserialize, Serialize};

/// Which payment methods the hosted checkout page offers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentSelection {
    /// Every payment type the gateway supports
    #[default]
    All,
    /// An explicit list of gateway payment-type codes, passed through as-is
    Only(Vec<String>),
}

impl PaymentSelection {
    /// Parse a comma-separated list; blank input selects everything.
    pub fn parse(list: &str) -> Self {
        let codes: Vec<String> = list
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        if codes.is_empty() {
            PaymentSelection::All
        } else {
            PaymentSelection::Only(codes)
        }
    }
}

/// A single purchased line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDetail {
    pub id: String,
    pub name: String,
    /// Unit price in the smallest currency unit
    pub price: i64,
    pub quantity: u32,
}

/// A transaction ready to be sent to the gateway
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRequest {
    pub order_id: String,
    pub gross_amount: i64,
    pub items: Vec<ItemDetail>,
    pub customer: CustomerProfile,
    pub enabled_payments: PaymentSelection,
    /// Force 3-D Secure on card payments
    pub credit_card_secure: bool,
}

impl TransactionRequest {
    /// Build the gateway request for a validated payment.
    pub fn from_payment(
        request: &PaymentRequest,
        customer: &CustomerProfile,
        enabled_payments: &PaymentSelection,
    ) -> Self {
        Self {
            order_id: order_id(request.user_id, &request.item_id),
            gross_amount: request.amount,
            items: vec![ItemDetail {
                id: format!("Property-{}", request.item_id),
                name: request.item_name.clone(),
                price: request.amount,
                quantity: 1,
            }],
            customer: customer.clone(),
            enabled_payments: enabled_payments.clone(),
            credit_card_secure: true,
        }
    }
}

/// Deterministic order identifier. Same user and item always collide.
pub fn order_id(user_id: i64, item_id: &str) -> String {
    format!("MID-User-{}-{}", user_id, item_id)
}

/// Hosted checkout session issued by the gateway
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayResponse {
    pub token: String,
    pub redirect_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_id() {
        assert_eq!(order_id(42, "ABC"), "MID-User-42-ABC");
        assert_eq!(order_id(42, "ABC"), order_id(42, "ABC"));
    }

    #[test]
    fn test_from_payment() {
        let request = PaymentRequest::new(1, 100_000, "X1", "Villa");
        let tx = TransactionRequest::from_payment(
            &request,
            &CustomerProfile::placeholder(),
            &PaymentSelection::All,
        );

        assert_eq!(tx.order_id, "MID-User-1-X1");
        assert_eq!(tx.gross_amount, 100_000);
        assert_eq!(
            tx.items,
            vec![ItemDetail {
                id: "Property-X1".to_string(),
                name: "Villa".to_string(),
                price: 100_000,
                quantity: 1,
            }]
        );
        assert!(tx.credit_card_secure);
        assert_eq!(tx.enabled_payments, PaymentSelection::All);
        assert_eq!(tx.customer.email, "john@doe.com");
    }

    #[test]
    fn test_item_price_tracks_amount() {
        for amount in [1, 99, 100_000, i64::MAX] {
            let request = PaymentRequest::new(7, amount, "Y", "Loft");
            let tx = TransactionRequest::from_payment(
                &request,
                &CustomerProfile::default(),
                &PaymentSelection::default(),
            );

            assert_eq!(tx.items.len(), 1);
            assert_eq!(tx.items[0].price, amount);
            assert_eq!(tx.items[0].quantity, 1);
        }
    }

    #[test]
    fn test_payment_selection_parse() {
        assert_eq!(PaymentSelection::parse(""), PaymentSelection::All);
        assert_eq!(PaymentSelection::parse(" , "), PaymentSelection::All);
        assert_eq!(
            PaymentSelection::parse("gopay, bca_va"),
            PaymentSelection::Only(vec!["gopay".to_string(), "bca_va".to_string()])
        );
    }
}
