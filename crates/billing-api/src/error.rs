//! # Response Envelope and Error Mapping
//!
//! Every response on the payment route is a `{code, status, data}` envelope.
//! `ApiError` is the single place where a `BillingError` becomes an HTTP
//! response; `handle_panic` renders anything that unwinds through the
//! router as the same 500 envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use billing_core::{BillingError, FieldError};
use serde::{Deserialize, Serialize};
use std::any::Any;
use thiserror::Error;
use tracing::{error, warn};

/// Uniform response wrapper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebResponse<T> {
    pub code: u16,
    pub status: String,
    pub data: T,
}

impl<T> WebResponse<T> {
    pub fn new(code: StatusCode, data: T) -> Self {
        Self {
            code: code.as_u16(),
            status: status_text(code),
            data,
        }
    }

    /// 200 envelope
    pub fn ok(data: T) -> Self {
        Self::new(StatusCode::OK, data)
    }
}

/// Upper-case reason phrase used in the `status` field
fn status_text(code: StatusCode) -> String {
    code.canonical_reason()
        .unwrap_or("UNKNOWN")
        .to_ascii_uppercase()
}

/// Error returned by handlers and extractors
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub BillingError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            BillingError::Validation(fields) => {
                warn!("Request failed validation: {} field(s)", fields.len());
                envelope::<Vec<FieldError>>(StatusCode::BAD_REQUEST, fields)
            }
            BillingError::Gateway { raw, .. } => {
                error!("Gateway rejected transaction: {}", raw);
                envelope(StatusCode::INTERNAL_SERVER_ERROR, raw)
            }
            other => {
                error!("Request failed: {}", other);
                envelope(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    serde_json::Value::String(other.to_string()),
                )
            }
        }
    }
}

fn envelope<T: Serialize>(code: StatusCode, data: T) -> Response {
    (code, Json(WebResponse::new(code, data))).into_response()
}

/// Panic handler for `CatchPanicLayer`
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic".to_string()
    };

    error!("Recovered from panic: {}", detail);
    envelope(
        StatusCode::INTERNAL_SERVER_ERROR,
        serde_json::Value::String(detail),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::{json, Value};

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_status_text() {
        assert_eq!(status_text(StatusCode::OK), "OK");
        assert_eq!(status_text(StatusCode::BAD_REQUEST), "BAD REQUEST");
        assert_eq!(
            status_text(StatusCode::INTERNAL_SERVER_ERROR),
            "INTERNAL SERVER ERROR"
        );
    }

    #[tokio::test]
    async fn test_validation_maps_to_400() {
        let err = ApiError(BillingError::Validation(vec![FieldError::new(
            "user_id",
            "This field is required",
        )]));
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({
                "code": 400,
                "status": "BAD REQUEST",
                "data": [{"field": "user_id", "message": "This field is required"}]
            })
        );
    }

    #[tokio::test]
    async fn test_gateway_payload_passes_through() {
        let raw = json!({"status_code": "401", "error_messages": ["Access denied"]});
        let err = ApiError(BillingError::Gateway {
            provider: "midtrans".into(),
            status: 401,
            raw: raw.clone(),
        });
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({"code": 500, "status": "INTERNAL SERVER ERROR", "data": raw})
        );
    }

    #[tokio::test]
    async fn test_other_errors_map_to_500() {
        let response = ApiError(BillingError::Timeout { secs: 30 }).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["code"], 500);
        assert_eq!(body["data"], "Gateway request timed out after 30 seconds");
    }

    #[tokio::test]
    async fn test_handle_panic() {
        let response = handle_panic(Box::new("boom"));

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({"code": 500, "status": "INTERNAL SERVER ERROR", "data": "boom"})
        );
    }
}
