//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! handlers, startup, shutdown
//!     → tracing events with structured fields
//!     → logging.rs (EnvFilter + fmt layer)
//!     → stderr
//! ```
//!
//! Logging is advisory: nothing a subscriber does changes a response.

pub mod logging;
