//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection (one task each, owned by axum::serve)
//!     → server.rs (Axum router, trace + dump layers)
//!     → handlers.rs (parse path parameter, perform the effect)
//!     → payload.rs (shared seed buffer, acknowledgement token)
//!     → error.rs (500 + plain-text cause on failure)
//!     → Send to client
//! ```

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod payload;
pub mod server;

pub use error::HandlerError;
pub use payload::{SeedBuffer, ACK};
pub use server::HttpServer;
