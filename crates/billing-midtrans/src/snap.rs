//! # Midtrans Snap
//!
//! Implementation of the Midtrans Snap transaction API.
//! Snap returns a token and a hosted payment page URL for each transaction.

use crate::config::MidtransConfig;
use async_trait::async_trait;
use billing_core::{
    BillingError, BillingResult, GatewayResponse, PaymentGateway, PaymentSelection,
    TransactionRequest,
};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, warn};

const PROVIDER: &str = "midtrans";

/// Every payment type Snap can offer. Sent when the selection is `All`.
///
/// Same set and order as `AllSnapPaymentType` in midtrans-go
/// (`snap/paymentType.go`).
pub const ALL_PAYMENT_TYPES: &[&str] = &[
    "gopay",
    "shopeepay",
    "credit_card",
    "bank_transfer",
    "bni_va",
    "permata_va",
    "bca_va",
    "bri_va",
    "other_va",
    "mandiri_clickpay",
    "cimb_clicks",
    "danamon_online",
    "bca_klikbca",
    "bca_klikpay",
    "bri_epay",
    "mandiri_ecash",
    "echannel",
    "indomaret",
    "alfamart",
    "akulaku",
];

/// Midtrans Snap gateway
///
/// Creates hosted-checkout transactions. Card payments always go through
/// 3-D Secure.
pub struct SnapGateway {
    config: MidtransConfig,
    client: Client,
}

impl SnapGateway {
    /// Create a new Snap gateway
    pub fn new(config: MidtransConfig) -> BillingResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                BillingError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        if config.key_mismatch() {
            warn!(
                "MIDTRANS_SERVER_KEY prefix does not match the {} environment",
                config.environment
            );
        }

        Ok(Self { config, client })
    }

    /// Create from environment variables
    pub fn from_env() -> BillingResult<Self> {
        let config = MidtransConfig::from_env()?;
        Self::new(config)
    }

    pub fn config(&self) -> &MidtransConfig {
        &self.config
    }

    fn map_send_error(&self, e: reqwest::Error) -> BillingError {
        if e.is_timeout() {
            BillingError::Timeout {
                secs: self.config.timeout.as_secs(),
            }
        } else {
            BillingError::Network(e.to_string())
        }
    }
}

#[async_trait]
impl PaymentGateway for SnapGateway {
    #[instrument(skip(self, request), fields(order_id = %request.order_id))]
    async fn create_transaction(
        &self,
        request: &TransactionRequest,
    ) -> BillingResult<GatewayResponse> {
        let body = SnapRequest::from(request);
        let url = self.config.transactions_url();

        debug!(
            "Creating Snap transaction: {} items, gross_amount={}",
            body.item_details.len(),
            body.transaction_details.gross_amount
        );

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.config.server_key, None::<&str>)
            .header("Accept", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        let text = response.text().await.map_err(|e| self.map_send_error(e))?;

        if !status.is_success() {
            error!("Snap API error: status={}, body={}", status, text);

            // Pass the vendor payload through untouched
            let raw = serde_json::from_str(&text)
                .unwrap_or_else(|_| serde_json::Value::String(text.clone()));

            return Err(BillingError::Gateway {
                provider: PROVIDER.to_string(),
                status: status.as_u16(),
                raw,
            });
        }

        let snap: SnapResponse = serde_json::from_str(&text).map_err(|e| {
            BillingError::Serialization(format!("Failed to parse Snap response: {}", e))
        })?;

        info!("Created Snap transaction: redirect_url={}", snap.redirect_url);

        Ok(GatewayResponse {
            token: snap.token,
            redirect_url: snap.redirect_url,
        })
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER
    }
}

// =============================================================================
// Snap API Types
// =============================================================================

#[derive(Debug, Serialize)]
struct SnapRequest<'a> {
    transaction_details: SnapTransactionDetails<'a>,
    item_details: Vec<SnapItem<'a>>,
    customer_details: SnapCustomer<'a>,
    enabled_payments: Vec<&'a str>,
    credit_card: SnapCreditCard,
}

#[derive(Debug, Serialize)]
struct SnapTransactionDetails<'a> {
    order_id: &'a str,
    gross_amount: i64,
}

#[derive(Debug, Serialize)]
struct SnapItem<'a> {
    id: &'a str,
    price: i64,
    quantity: u32,
    name: &'a str,
}

#[derive(Debug, Serialize)]
struct SnapCustomer<'a> {
    first_name: &'a str,
    last_name: &'a str,
    email: &'a str,
    phone: &'a str,
    billing_address: SnapAddress<'a>,
    shipping_address: SnapAddress<'a>,
}

#[derive(Debug, Serialize)]
struct SnapAddress<'a> {
    first_name: &'a str,
    last_name: &'a str,
    phone: &'a str,
    address: &'a str,
    city: &'a str,
    postal_code: &'a str,
    country_code: &'a str,
}

#[derive(Debug, Serialize)]
struct SnapCreditCard {
    secure: bool,
}

#[derive(Debug, Deserialize)]
struct SnapResponse {
    token: String,
    redirect_url: String,
}

impl<'a> From<&'a billing_core::Address> for SnapAddress<'a> {
    fn from(a: &'a billing_core::Address) -> Self {
        Self {
            first_name: &a.first_name,
            last_name: &a.last_name,
            phone: &a.phone,
            address: &a.address,
            city: &a.city,
            postal_code: &a.postcode,
            country_code: &a.country_code,
        }
    }
}

impl<'a> From<&'a TransactionRequest> for SnapRequest<'a> {
    fn from(tx: &'a TransactionRequest) -> Self {
        let enabled_payments = match &tx.enabled_payments {
            PaymentSelection::All => ALL_PAYMENT_TYPES.to_vec(),
            PaymentSelection::Only(codes) => codes.iter().map(String::as_str).collect(),
        };

        Self {
            transaction_details: SnapTransactionDetails {
                order_id: &tx.order_id,
                gross_amount: tx.gross_amount,
            },
            item_details: tx
                .items
                .iter()
                .map(|item| SnapItem {
                    id: &item.id,
                    price: item.price,
                    quantity: item.quantity,
                    name: &item.name,
                })
                .collect(),
            customer_details: SnapCustomer {
                first_name: &tx.customer.first_name,
                last_name: &tx.customer.last_name,
                email: &tx.customer.email,
                phone: &tx.customer.phone,
                billing_address: SnapAddress::from(&tx.customer.billing_address),
                shipping_address: SnapAddress::from(&tx.customer.shipping_address),
            },
            enabled_payments,
            credit_card: SnapCreditCard {
                secure: tx.credit_card_secure,
            },
        }
    }
}
