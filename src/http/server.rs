//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the four responder routes
//! - Wire up middleware (tracing, per-request dump)
//! - Serve on a bound listener until the shutdown signal
//!
//! Each accepted connection runs on its own task inside `axum::serve`;
//! nothing here coordinates requests with one another.

use axum::{
    middleware,
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::watch;
use tower_http::trace::{DefaultOnFailure, TraceLayer};
use tracing::Level;

use crate::http::handlers::{self, AppState};
use crate::http::middleware::request_dump_middleware;
use crate::http::payload::SeedBuffer;
use crate::lifecycle::shutdown::signalled;

/// HTTP server for the load-generation target.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server serving payloads from `seed`.
    pub fn new(seed: SeedBuffer) -> Self {
        Self {
            router: Self::build_router(AppState { seed }),
        }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/", get(handlers::index))
            .route("/data/{size}", get(handlers::data))
            .route(
                "/data/null",
                get(handlers::data_null)
                    .put(handlers::discard)
                    .post(handlers::discard),
            )
            .route("/sleep/{time}", get(handlers::sleep))
            .with_state(state)
            .layer(middleware::from_fn(request_dump_middleware))
            // 500s are ordinary answers here; HandlerError already logs them.
            .layer(
                TraceLayer::new_for_http()
                    .on_failure(DefaultOnFailure::new().level(Level::DEBUG)),
            )
    }

    /// A handle to the router, for serving it somewhere other than [`run`](Self::run).
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Stops accepting once `shutdown` fires, then waits for in-flight
    /// requests to finish.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: watch::Receiver<bool>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                signalled(shutdown).await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
