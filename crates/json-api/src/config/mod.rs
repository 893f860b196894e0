//! Server configuration module

use clap::Parser;

use crate::config::{
    observability::LoggingConfig, offers::OffersConfig, segments::SegmentServiceArgs,
    server::ServerRuntimeConfig,
};

pub(crate) mod observability;
pub(crate) mod offers;
pub(crate) mod segments;
pub(crate) mod server;

/// Cart Offer JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "cartoffer-json", about = "Cart Offer JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// User segment service settings.
    #[command(flatten)]
    pub segments: SegmentServiceArgs,

    /// Offer behaviour settings.
    #[command(flatten)]
    pub offers: OffersConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}
