//! # Midtrans Configuration
//!
//! Configuration management for the Midtrans Snap integration.
//! The server key is loaded from environment variables.

use billing_core::{BillingError, PaymentSelection};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Midtrans deployment to target
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Environment {
    #[default]
    Sandbox,
    Production,
}

impl Environment {
    /// Base URL of the Snap API for this environment
    pub fn snap_base_url(&self) -> &'static str {
        match self {
            Environment::Sandbox => "https://app.sandbox.midtrans.com",
            Environment::Production => "https://app.midtrans.com",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Sandbox => "sandbox",
            Environment::Production => "production",
        }
    }
}

impl FromStr for Environment {
    type Err = BillingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sandbox" => Ok(Environment::Sandbox),
            "production" => Ok(Environment::Production),
            other => Err(BillingError::Configuration(format!(
                "MIDTRANS_ENVIRONMENT must be sandbox or production, got {:?}",
                other
            ))),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Midtrans API configuration
#[derive(Clone)]
pub struct MidtransConfig {
    /// Server key (SB-Mid-server-... in sandbox)
    pub server_key: String,

    /// Target environment
    pub environment: Environment,

    /// API base URL (derived from the environment, overridable for testing)
    pub api_base_url: String,

    /// Upper bound on a single gateway call
    pub timeout: Duration,

    /// Payment methods offered on the checkout page
    pub enabled_payments: PaymentSelection,
}

impl MidtransConfig {
    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `MIDTRANS_SERVER_KEY`
    ///
    /// Optional:
    /// - `MIDTRANS_ENVIRONMENT` (`sandbox` | `production`, default `sandbox`)
    /// - `MIDTRANS_TIMEOUT_SECS` (default 30)
    /// - `MIDTRANS_ENABLED_PAYMENTS` (comma-separated, default all)
    pub fn from_env() -> Result<Self, BillingError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, BillingError> {
        let server_key = lookup("MIDTRANS_SERVER_KEY")
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                BillingError::Configuration("MIDTRANS_SERVER_KEY not set".to_string())
            })?;

        let environment = match lookup("MIDTRANS_ENVIRONMENT") {
            Some(v) => v.parse()?,
            None => Environment::default(),
        };

        let timeout_secs = match lookup("MIDTRANS_TIMEOUT_SECS") {
            Some(v) => v.trim().parse::<u64>().ok().filter(|s| *s > 0).ok_or_else(|| {
                BillingError::Configuration(format!(
                    "MIDTRANS_TIMEOUT_SECS must be a positive integer, got {:?}",
                    v
                ))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let enabled_payments = lookup("MIDTRANS_ENABLED_PAYMENTS")
            .map(|v| PaymentSelection::parse(&v))
            .unwrap_or_default();

        Ok(Self::new(server_key, environment)
            .with_timeout(Duration::from_secs(timeout_secs))
            .with_enabled_payments(enabled_payments))
    }

    /// Create config with explicit values (for testing)
    pub fn new(server_key: impl Into<String>, environment: Environment) -> Self {
        Self {
            server_key: server_key.into(),
            environment,
            api_base_url: environment.snap_base_url().to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            enabled_payments: PaymentSelection::All,
        }
    }

    /// Check if the key looks like a sandbox key
    pub fn is_sandbox_key(&self) -> bool {
        self.server_key.starts_with("SB-")
    }

    /// True when the key prefix disagrees with the selected environment
    pub fn key_mismatch(&self) -> bool {
        self.is_sandbox_key() != (self.environment == Environment::Sandbox)
    }

    /// Snap transaction endpoint
    pub fn transactions_url(&self) -> String {
        format!("{}/snap/v1/transactions", self.api_base_url.trim_end_matches('/'))
    }

    /// Builder: set custom API base URL (for testing)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Builder: set the outbound call timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builder: restrict payment methods
    pub fn with_enabled_payments(mut self, enabled_payments: PaymentSelection) -> Self {
        self.enabled_payments = enabled_payments;
        self
    }
}

// Keep the server key out of logs.
impl fmt::Debug for MidtransConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MidtransConfig")
            .field("server_key", &"<redacted>")
            .field("environment", &self.environment)
            .field("api_base_url", &self.api_base_url)
            .field("timeout", &self.timeout)
            .field("enabled_payments", &self.enabled_payments)
            .finish()
    }
}
