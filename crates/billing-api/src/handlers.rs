//! # Request Handlers
//!
//! Axum request handlers for the payment API.

use crate::error::{ApiError, WebResponse};
use crate::extract::PaymentBody;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use billing_core::{GatewayResponse, TransactionRequest};
use tracing::{info, instrument};

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "snap-billing",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Create a Snap transaction for a single item
#[instrument(skip_all, fields(user_id = request.user_id, item_id = %request.item_id))]
pub async fn create_transaction(
    State(state): State<AppState>,
    PaymentBody(request): PaymentBody,
) -> Result<Json<WebResponse<GatewayResponse>>, ApiError> {
    let request = request.validated()?;

    let transaction =
        TransactionRequest::from_payment(&request, &state.customer, &state.enabled_payments);

    info!(
        "Creating transaction: order_id={}, amount={}, provider={}",
        transaction.order_id,
        transaction.gross_amount,
        state.gateway.provider_name()
    );

    let session = state.gateway.create_transaction(&transaction).await?;

    info!("Created transaction: order_id={}", transaction.order_id);

    Ok(Json(WebResponse::ok(session)))
}
