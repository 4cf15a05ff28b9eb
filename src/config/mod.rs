//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! argv
//!     → cli.rs (clap parse, usage errors exit the process)
//!     → ServerConfig (immutable)
//!     → passed by value to logging, startup and the HTTP server
//! ```
//!
//! # Design Decisions
//! - No config file and no environment; the command line is the only source
//! - All fields have defaults so a bare invocation serves on port 8080

pub mod cli;
pub mod schema;

pub use cli::Cli;
pub use schema::{ListenerConfig, ObservabilityConfig, ServerConfig};
