//! simpleton: a synthetic HTTP load-generation target.
//!
//! # Routes
//!
//! ```text
//!     GET       /               → "OK"
//!     GET       /data/{size}    → size KiB of fixed random filler
//!     GET       /sleep/{time}   → "OK" after time milliseconds
//!     PUT/POST  /data/null      → number of request body bytes discarded
//! ```
//!
//! # Startup
//!
//! ```text
//!     argv ──▶ config::Cli ──▶ ServerConfig ──▶ logging
//!                                    │
//!                                    ▼
//!                           lifecycle::startup::run
//!                    seed buffer → bind → axum::serve
//!                                    ▲
//!     SIGINT/SIGTERM ──▶ Shutdown ───┘
//! ```

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

use simpleton::config::Cli;
use simpleton::lifecycle::{signals, startup, Shutdown};
use simpleton::observability::logging;

#[tokio::main]
async fn main() -> ExitCode {
    // Usage errors, --help and --version exit here, before anything binds.
    let config = Cli::parse().into_config();

    if let Err(e) = logging::init_logging(&config.observability) {
        eprintln!("failed to initialize logging: {e}");
        return ExitCode::FAILURE;
    }

    let shutdown = Arc::new(Shutdown::new());
    let trigger = Arc::clone(&shutdown);
    tokio::spawn(async move {
        signals::wait_for_signal().await;
        trigger.trigger();
    });

    match startup::run(config, &shutdown).await {
        Ok(()) => {
            tracing::info!("Shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Fatal error");
            ExitCode::FAILURE
        }
    }
}
