//! # Routes
//!
//! Axum router configuration for the payment API.

use crate::error::handle_panic;
use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

/// Create the main application router
///
/// Routes:
/// - POST /midtrans/create - Create a Snap transaction
/// - GET  /health - Health check
///
/// Handler errors are turned into envelopes by `ApiError`; panics are
/// recovered by `CatchPanicLayer` into the 500 envelope.
pub fn create_router(state: AppState) -> Router {
    let midtrans_routes = Router::new().route("/create", post(handlers::create_transaction));

    Router::new()
        .route("/health", get(handlers::health))
        .nest("/midtrans", midtrans_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CatchPanicLayer::custom(handle_panic)),
        )
        .with_state(state)
}
