//! # Payment Requests
//!
//! Inbound payment request and its field-presence validation.
//!
//! Fields default to their zero value when absent, so "missing" and
//! "zero" are the same thing to the `required` rule.

use crate::error::{BillingError, BillingResult};
use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

/// Rule code for a field that must be present and non-zero.
pub const RULE_REQUIRED: &str = "required";

/// Field names in declaration order; field errors are reported in this order.
const FIELD_ORDER: [&str; 4] = ["user_id", "amount", "item_id", "item_name"];

/// A payment request as posted by the caller
///
/// JSON keys match exactly; `User_Id` is not `user_id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct PaymentRequest {
    /// Paying user
    #[serde(default, deserialize_with = "null_as_default")]
    #[validate(custom(function = "required_number"))]
    pub user_id: i64,
    /// Amount in the smallest currency unit
    #[serde(default, deserialize_with = "null_as_default")]
    #[validate(custom(function = "required_number"))]
    pub amount: i64,
    /// Purchased item
    #[serde(default, deserialize_with = "null_as_default")]
    #[validate(custom(function = "required_text"))]
    pub item_id: String,
    /// Display name of the purchased item
    #[serde(default, deserialize_with = "null_as_default")]
    #[validate(custom(function = "required_text"))]
    pub item_name: String,
}

fn required_number(value: impl std::borrow::Borrow<i64>) -> Result<(), ValidationError> {
    if *value.borrow() == 0 {
        return Err(ValidationError::new(RULE_REQUIRED));
    }
    Ok(())
}

fn required_text(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new(RULE_REQUIRED));
    }
    Ok(())
}

/// `null` is treated the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl PaymentRequest {
    pub fn new(
        user_id: i64,
        amount: i64,
        item_id: impl Into<String>,
        item_name: impl Into<String>,
    ) -> Self {
        Self {
            user_id,
            amount,
            item_id: item_id.into(),
            item_name: item_name.into(),
        }
    }

    /// Decode a raw JSON body.
    pub fn from_json(body: &[u8]) -> BillingResult<Self> {
        serde_json::from_slice(body).map_err(|e| BillingError::MalformedBody(e.to_string()))
    }

    /// Run the field rules, turning any failure into `BillingError::Validation`.
    pub fn validated(self) -> BillingResult<Self> {
        match self.validate() {
            Ok(()) => Ok(self),
            Err(errors) => Err(BillingError::Validation(field_errors(&errors))),
        }
    }
}

/// One failed rule on one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Human-readable message for a rule code. Unknown codes map to `""`.
pub fn message_for_rule(rule: &str) -> &'static str {
    match rule {
        RULE_REQUIRED => "This field is required",
        _ => "",
    }
}

/// Flatten validator output into ordered `FieldError`s.
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let by_field = errors.field_errors();

    FIELD_ORDER
        .iter()
        .filter_map(|field| by_field.get(*field).map(|errs| (*field, errs)))
        .flat_map(|(field, errs)| {
            errs.iter()
                .map(move |e| FieldError::new(field, message_for_rule(&e.code)))
        })
        .collect()
}
