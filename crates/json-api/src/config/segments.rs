//! Segment Service Config

use std::time::Duration;

use clap::Args;

use cartoffer_app::domain::segments::SegmentServiceConfig;

/// User segment service settings.
#[derive(Debug, Args)]
pub struct SegmentServiceArgs {
    /// Base URL of the user segment service
    #[arg(long, env = "SEGMENT_SERVICE_URL", default_value = "http://localhost:8080")]
    pub segment_service_url: String,

    /// Timeout for a single segment lookup, in milliseconds
    #[arg(long, env = "SEGMENT_SERVICE_TIMEOUT_MS", default_value_t = 2_000_u64)]
    pub segment_service_timeout_ms: u64,
}

impl SegmentServiceArgs {
    /// Build the segment client configuration.
    #[must_use]
    pub fn client_config(&self) -> SegmentServiceConfig {
        SegmentServiceConfig {
            base_url: self.segment_service_url.clone(),
            timeout: Duration::from_millis(self.segment_service_timeout_ms),
        }
    }
}
