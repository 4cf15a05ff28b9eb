//! Startup orchestration.
//!
//! # Responsibilities
//! - Build the process-wide seed buffer
//! - Log build and host diagnostics when verbose
//! - Bind the listener and serve until shutdown
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - The listener binds last, after every shared value exists

use thiserror::Error;
use tokio::sync::watch;

use crate::config::ServerConfig;
use crate::http::{HttpServer, SeedBuffer};
use crate::lifecycle::shutdown::{drain_deadline, Shutdown, DRAIN_TIMEOUT};
use crate::net::{self, ListenerError};

/// Fatal errors before or while serving.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to seed payload buffer: {0}")]
    Seed(#[from] rand::Error),

    #[error(transparent)]
    Listener(#[from] ListenerError),

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Run the responder until `shutdown` fires.
pub async fn run(config: ServerConfig, shutdown: &Shutdown) -> Result<(), StartupError> {
    if config.observability.very_verbose() {
        tracing::debug!(?config, "Configuration parsed");
    }

    if config.observability.verbose() {
        let cpus = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        tracing::info!(version = env!("CARGO_PKG_VERSION"), cpus, "Build info");
    }

    let seed = SeedBuffer::random()?;
    let listener = net::bind(&config.listener).await?;

    serve(HttpServer::new(seed), listener, shutdown.subscribe(), shutdown.subscribe()).await
}

/// Serve until shutdown, then drain for at most [`DRAIN_TIMEOUT`].
async fn serve(
    server: HttpServer,
    listener: tokio::net::TcpListener,
    shutdown: watch::Receiver<bool>,
    deadline: watch::Receiver<bool>,
) -> Result<(), StartupError> {
    tokio::select! {
        result = server.run(listener, shutdown) => result?,
        _ = drain_deadline(deadline, DRAIN_TIMEOUT) => {
            tracing::warn!(
                timeout_secs = DRAIN_TIMEOUT.as_secs(),
                "Drain timeout reached, dropping in-flight requests"
            );
        }
    }
    Ok(())
}
