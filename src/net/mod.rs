//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! ListenerConfig (port)
//!     → listener.rs (bind 0.0.0.0:<port>)
//!     → TcpListener handed to the HTTP server
//! ```
//!
//! Accepting and per-connection tasks belong to `axum::serve`; this layer
//! only owns the bind step and its failure.

pub mod listener;

pub use listener::{bind, ListenerError};
