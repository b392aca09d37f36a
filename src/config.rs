//! Server configuration, parsed from the command line.

use clap::Parser;
use std::net::SocketAddr;
use tracing_subscriber::EnvFilter;

/// Grid robot HTTP service.
#[derive(Parser, Clone, Debug)]
#[command(version, about)]
pub struct ServerConfig {
    /// Address to bind (e.g. 127.0.0.1:5000).
    #[arg(short, long, default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    /// Log filter used when `RUST_LOG` is not set.
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl ServerConfig {
    /// `RUST_LOG` if set and valid, otherwise `--log-level`.
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.log_level))
    }
}
