//! # Application State
//!
//! Shared state for the Axum application.
//! Contains the payment gateway, customer profile, and configuration.

use billing_core::{BillingError, BoxedPaymentGateway, CustomerProfile, PaymentSelection};
use billing_midtrans::{MidtransConfig, SnapGateway};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// `.env` file that was loaded, if any
    pub env_file: Option<PathBuf>,
}

impl AppConfig {
    /// Load from environment variables.
    ///
    /// `./.env` is loaded first when present; parent directories are not
    /// searched. With `ENV_FILE_REQUIRED=true` a missing file is a
    /// configuration error.
    pub fn from_env() -> Result<Self, BillingError> {
        let required = std::env::var("ENV_FILE_REQUIRED")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);
        let env_file = load_env_file(Path::new(ENV_FILE), required)?;

        let port = match std::env::var("PORT") {
            Ok(p) => p.trim().parse().map_err(|_| {
                BillingError::Configuration(format!("PORT must be a port number, got {:?}", p))
            })?,
            Err(_) => 8080,
        };

        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port,
            env_file,
        })
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> Result<SocketAddr, BillingError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| BillingError::Configuration(format!("Invalid socket address: {}", e)))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            env_file: None,
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Env file read at startup, relative to the working directory
const ENV_FILE: &str = ".env";

/// Load exactly `path` into the process environment.
fn load_env_file(path: &Path, required: bool) -> Result<Option<PathBuf>, BillingError> {
    match dotenvy::from_path(path) {
        Ok(()) => Ok(Some(path.to_path_buf())),
        Err(e) if e.not_found() => {
            if required {
                Err(BillingError::Configuration(format!(
                    "{} is required (ENV_FILE_REQUIRED) but was not found",
                    path.display()
                )))
            } else {
                Ok(None)
            }
        }
        Err(e) => Err(BillingError::Configuration(format!(
            "Failed to load {}: {}",
            path.display(),
            e
        ))),
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Payment gateway
    pub gateway: BoxedPaymentGateway,
    /// Customer details attached to every transaction
    pub customer: Arc<CustomerProfile>,
    /// Payment methods offered on the checkout page
    pub enabled_payments: Arc<PaymentSelection>,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Create a new AppState with the Midtrans Snap gateway
    pub fn new() -> Result<Self, BillingError> {
        let config = AppConfig::from_env()?;
        let midtrans = MidtransConfig::from_env()?;

        info!(
            "Midtrans environment: {}, timeout: {}s",
            midtrans.environment,
            midtrans.timeout.as_secs()
        );

        let customer = CustomerProfile::from_env();
        if customer.is_placeholder() {
            warn!("Using placeholder customer details; set CUSTOMER_* to override");
        }

        let enabled_payments = midtrans.enabled_payments.clone();
        let gateway = SnapGateway::new(midtrans)?;

        Ok(Self::with_gateway(Arc::new(gateway), config)
            .with_customer(customer)
            .with_enabled_payments(enabled_payments))
    }

    /// Create state around an existing gateway
    pub fn with_gateway(gateway: BoxedPaymentGateway, config: AppConfig) -> Self {
        Self {
            gateway,
            customer: Arc::new(CustomerProfile::default()),
            enabled_payments: Arc::new(PaymentSelection::All),
            config,
        }
    }

    /// Builder: replace the customer profile
    pub fn with_customer(mut self, customer: CustomerProfile) -> Self {
        self.customer = Arc::new(customer);
        self
    }

    /// Builder: replace the payment selection
    pub fn with_enabled_payments(mut self, enabled_payments: PaymentSelection) -> Self {
        self.enabled_payments = Arc::new(enabled_payments);
        self
    }
}
