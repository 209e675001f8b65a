//! HTTP boundary for the token classifier
//!
//! Loads configuration, resolves the static identity once at startup and
//! exposes `POST /bfhl`, which wraps each classification in a success
//! envelope alongside the identity fields.

pub mod config;
pub mod envelope;
pub mod error;
pub mod identity;
pub mod routes;

pub use config::{BfhlConfig, IdentityConfig, ServerConfig};
pub use envelope::{FailureEnvelope, OperationCode, SuccessEnvelope};
pub use error::{ApiError, Result, ServerError};
pub use identity::Identity;
pub use routes::{create_router, AppState};

use chrono::Local;
use std::future::Future;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Bind the configured address and serve until Ctrl+C
pub async fn serve(config: BfhlConfig) -> Result<()> {
    let identity = Identity::resolve(&config.identity, Local::now().date_naive())?;
    let address = config.server.address();

    let listener = TcpListener::bind((config.server.host.as_str(), config.server.port))
        .await
        .map_err(|source| ServerError::Bind {
            address: address.clone(),
            source,
        })?;

    serve_with_listener(listener, identity, shutdown_signal()).await
}

/// Serve on an already bound listener until `shutdown` resolves
pub async fn serve_with_listener<F>(listener: TcpListener, identity: Identity, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let local_addr = listener.local_addr()?;
    info!(
        user_id = %identity.user_id,
        "Listening on http://{}/bfhl",
        local_addr
    );

    let router = create_router(AppState::new(identity));
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl+C
pub async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
