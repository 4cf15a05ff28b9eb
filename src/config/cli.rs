//! Command-line surface.

use clap::{ArgAction, Parser};

use crate::config::schema::{ListenerConfig, ObservabilityConfig, ServerConfig};

#[derive(Debug, Parser)]
#[command(name = "simpleton", version)]
#[command(about = "Synthetic HTTP load-generation target", long_about = None)]
pub struct Cli {
    /// Port to listen on
    #[arg(long, default_value_t = ListenerConfig::DEFAULT_PORT)]
    pub port: u16,

    /// Enable verbose logging (-vv for very verbose)
    #[arg(short, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn into_config(self) -> ServerConfig {
        ServerConfig {
            listener: ListenerConfig { port: self.port },
            observability: ObservabilityConfig {
                verbosity: self.verbose,
            },
        }
    }
}
