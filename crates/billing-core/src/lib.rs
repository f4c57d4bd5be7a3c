//! # billing-core
//!
//! Core types and traits for the snap-billing payment service.
//!
//! This crate provides:
//! - `PaymentRequest` and its field validation (`FieldError`)
//! - `TransactionRequest` built from a payment and a `CustomerProfile`
//! - `PaymentGateway` trait for the hosted-checkout provider
//! - `BillingError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use billing_core::{CustomerProfile, PaymentRequest, PaymentSelection, TransactionRequest};
//!
//! let request = PaymentRequest::from_json(body)?.validated()?;
//! let tx = TransactionRequest::from_payment(&request, &CustomerProfile::default(), &PaymentSelection::All);
//! let session = gateway.create_transaction(&tx).await?;
//!
//! // Redirect user to session.redirect_url
//! ```

pub mod customer;
pub mod error;
pub mod gateway;
pub mod request;
pub mod transaction;

// Re-exports for convenience
pub use customer::{Address, CustomerProfile};
pub use error::{BillingError, BillingResult};
pub use gateway::{BoxedPaymentGateway, PaymentGateway};
pub use request::{field_errors, message_for_rule, FieldError, PaymentRequest};
pub use transaction::{
    order_id, GatewayResponse, ItemDetail, PaymentSelection, TransactionRequest,
};
