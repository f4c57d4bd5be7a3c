//! # billing-api
//!
//! HTTP API layer for snap-billing.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - The payment endpoint that forwards to Midtrans Snap
//! - The `{code, status, data}` response envelope and error mapping
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | POST | `/midtrans/create` | Create Snap transaction |

pub mod error;
pub mod extract;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::{ApiError, WebResponse};
pub use routes::create_router;
pub use state::{AppConfig, AppState};
