//! # Extractors
//!
//! Body extractor that reports failures through the response envelope
//! instead of axum's plain-text rejections.

use crate::error::ApiError;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use billing_core::{BillingError, PaymentRequest};

/// JSON payment request body. Content type is not checked.
pub struct PaymentBody(pub PaymentRequest);

impl<S> FromRequest<S> for PaymentBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| BillingError::MalformedBody(rejection.body_text()))?;

        Ok(PaymentBody(PaymentRequest::from_json(&bytes)?))
    }
}
