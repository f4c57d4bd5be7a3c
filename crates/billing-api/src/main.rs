//! # snap-billing
//!
//! Payment request service in front of Midtrans Snap.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables (or put them in .env)
//! export MIDTRANS_SERVER_KEY=SB-Mid-server-...
//! export MIDTRANS_ENVIRONMENT=sandbox
//!
//! # Run the server
//! snap-billing
//! ```

use billing_api::{routes, state::AppState};
use tracing::{error, info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging (LOG_FORMAT=json for structured output)
    let json_logs = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    tracing_subscriber::registry()
        .with(json_logs.then(|| fmt::layer().json()))
        .with((!json_logs).then(fmt::layer))
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    // Initialize application state
    let state = AppState::new().map_err(|e| {
        error!("Startup failed: {}", e);
        e
    })?;

    let addr = state.config.socket_addr()?;

    match &state.config.env_file {
        Some(path) => info!("Loaded environment from {}", path.display()),
        None => info!("No .env file found, using process environment"),
    }
    info!("Payment gateway: {}", state.gateway.provider_name());

    // Create router
    let app = routes::create_router(state);

    // Start server
    info!("snap-billing {} listening on http://{}", env!("CARGO_PKG_VERSION"), addr);
    info!("Create transaction: POST http://{}/midtrans/create", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
