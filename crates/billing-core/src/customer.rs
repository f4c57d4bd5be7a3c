//! # Customer Profile
//!
//! Customer and address details attached to every transaction.
//!
//! The service does not receive customer data from the caller, so a
//! configured profile is used. The default profile is a placeholder
//! fixture and should be overridden in production.

use serde::{Deserialize, Serialize};

/// Postal address used for both billing and shipping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub postcode: String,
    /// ISO 3166-1 alpha-3
    pub country_code: String,
}

/// Customer details sent to the gateway
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub billing_address: Address,
    pub shipping_address: Address,
}

impl CustomerProfile {
    /// The fixed "John Doe" fixture.
    pub fn placeholder() -> Self {
        let address = Address {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            phone: "081234567890".to_string(),
            address: "Baker Street 97th".to_string(),
            city: "Jakarta".to_string(),
            postcode: "16000".to_string(),
            country_code: "IDN".to_string(),
        };

        Self {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "john@doe.com".to_string(),
            phone: "081234567890".to_string(),
            billing_address: address.clone(),
            shipping_address: address,
        }
    }

    /// Load overrides from `CUSTOMER_*` environment variables.
    ///
    /// Each variable replaces one placeholder value; the address fields
    /// apply to both billing and shipping.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut profile = Self::placeholder();
        let mut address = profile.billing_address.clone();

        if let Some(v) = lookup("CUSTOMER_FIRST_NAME") {
            address.first_name = v.clone();
            profile.first_name = v;
        }
        if let Some(v) = lookup("CUSTOMER_LAST_NAME") {
            address.last_name = v.clone();
            profile.last_name = v;
        }
        if let Some(v) = lookup("CUSTOMER_EMAIL") {
            profile.email = v;
        }
        if let Some(v) = lookup("CUSTOMER_PHONE") {
            address.phone = v.clone();
            profile.phone = v;
        }
        if let Some(v) = lookup("CUSTOMER_ADDRESS") {
            address.address = v;
        }
        if let Some(v) = lookup("CUSTOMER_CITY") {
            address.city = v;
        }
        if let Some(v) = lookup("CUSTOMER_POSTCODE") {
            address.postcode = v;
        }
        if let Some(v) = lookup("CUSTOMER_COUNTRY_CODE") {
            address.country_code = v;
        }

        profile.billing_address = address.clone();
        profile.shipping_address = address;
        profile
    }

    /// True while the fixture values are still in use
    pub fn is_placeholder(&self) -> bool {
        *self == Self::placeholder()
    }
}

impl Default for CustomerProfile {
    fn default() -> Self {
        Self::placeholder()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_placeholder_values() {
        let profile = CustomerProfile::default();

        assert_eq!(profile.first_name, "John");
        assert_eq!(profile.email, "john@doe.com");
        assert_eq!(profile.billing_address.city, "Jakarta");
        assert_eq!(profile.billing_address.country_code, "IDN");
        assert_eq!(profile.billing_address, profile.shipping_address);
        assert!(profile.is_placeholder());
    }

    #[test]
    fn test_overrides_from_lookup() {
        let vars: HashMap<&str, &str> = [
            ("CUSTOMER_FIRST_NAME", "Siti"),
            ("CUSTOMER_EMAIL", "siti@example.com"),
            ("CUSTOMER_CITY", "Bandung"),
        ]
        .into_iter()
        .collect();

        let profile = CustomerProfile::from_lookup(|k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(profile.first_name, "Siti");
        assert_eq!(profile.billing_address.first_name, "Siti");
        assert_eq!(profile.shipping_address.city, "Bandung");
        assert_eq!(profile.email, "siti@example.com");
        assert_eq!(profile.last_name, "Doe");
        assert!(!profile.is_placeholder());
    }
}
