//! # billing-midtrans
//!
//! Midtrans Snap gateway for snap-billing.
//!
//! `SnapGateway` implements `PaymentGateway` against the Snap transaction
//! API. It targets the sandbox unless `MIDTRANS_ENVIRONMENT=production`.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use billing_midtrans::SnapGateway;
//! use billing_core::PaymentGateway;
//!
//! // Create gateway from environment
//! let gateway = SnapGateway::from_env()?;
//!
//! // Create the hosted checkout
//! let session = gateway.create_transaction(&tx).await?;
//!
//! // Redirect user to session.redirect_url
//! ```

pub mod config;
pub mod snap;

// Re-exports
pub use config::{Environment, MidtransConfig};
pub use snap::{SnapGateway, ALL_PAYMENT_TYPES};
