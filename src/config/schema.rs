//! Configuration schema definitions.
//!
//! The whole configuration comes from the command line. It is parsed once
//! at startup and handed down by value; nothing mutates it afterwards.

use std::net::{Ipv4Addr, SocketAddr};

use tracing_subscriber::filter::LevelFilter;

/// Root configuration for the responder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerConfig {
    /// Listener configuration (port).
    pub listener: ListenerConfig,

    /// Logging verbosity.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListenerConfig {
    /// TCP port to listen on, on all interfaces.
    pub port: u16,
}

impl ListenerConfig {
    pub const DEFAULT_PORT: u16 = 8080;

    /// Address the listener binds to (`0.0.0.0:<port>`).
    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            port: Self::DEFAULT_PORT,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Number of `-v` flags given on the command line.
    pub verbosity: u8,
}

impl ObservabilityConfig {
    /// `-v`: log startup diagnostics.
    pub fn verbose(&self) -> bool {
        self.verbosity >= 1
    }

    /// `-vv`: log every request and the parsed configuration.
    pub fn very_verbose(&self) -> bool {
        self.verbosity >= 2
    }

    /// Maximum level emitted by the subscriber.
    pub fn log_level(&self) -> LevelFilter {
        if self.very_verbose() {
            LevelFilter::DEBUG
        } else {
            LevelFilter::INFO
        }
    }
}
