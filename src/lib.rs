//! Synthetic HTTP load-generation target.
//!
//! Serves fixed acknowledgements, N KiB payloads, artificial latency and
//! request-body discard so HTTP clients, proxies and load balancers can be
//! exercised under controlled conditions.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;

pub use config::ServerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
