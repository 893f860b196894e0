//! HTTP client for the user segment service.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use cartoffer::{ids::UserId, segments::Segment};

use crate::domain::segments::{SegmentResolutionError, SegmentResolver};

const USER_SEGMENT_PATH: &str = "/api/v1/user_segment";

/// Configuration for connecting to the user segment service.
#[derive(Debug, Clone)]
pub struct SegmentServiceConfig {
    /// Service base address, e.g. `"http://localhost:8080"`.
    pub base_url: String,

    /// Upper bound for a whole lookup, connect to body.
    pub timeout: Duration,
}

/// Resolves segments with `GET /api/v1/user_segment?user_id=<id>`.
#[derive(Debug, Clone)]
pub struct HttpSegmentResolver {
    config: SegmentServiceConfig,
    http: Client,
}

impl HttpSegmentResolver {
    /// Create a new resolver from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: SegmentServiceConfig) -> Result<Self, SegmentResolutionError> {
        let http = Client::builder().timeout(config.timeout).build()?;

        Ok(Self { config, http })
    }

    fn url(&self) -> String {
        format!(
            "{}{USER_SEGMENT_PATH}",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl SegmentResolver for HttpSegmentResolver {
    #[tracing::instrument(
        name = "segments.client.resolve",
        skip(self),
        fields(user_id = %user),
        err
    )]
    async fn resolve(&self, user: UserId) -> Result<Segment, SegmentResolutionError> {
        let response = self
            .http
            .get(self.url())
            .query(&[("user_id", user.get())])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            return Err(SegmentResolutionError::UnexpectedStatus(status.as_u16()));
        }

        let body = response.bytes().await?;

        let parsed: SegmentResponse = serde_json::from_slice(&body)
            .map_err(|source| SegmentResolutionError::MalformedResponse(source.to_string()))?;

        let segment = Segment::new(&parsed.segment)
            .map_err(|source| SegmentResolutionError::MalformedResponse(source.to_string()))?;

        debug!(segment = %segment, "resolved user segment");

        Ok(segment)
    }
}

#[derive(Debug, Deserialize)]
struct SegmentResponse {
    segment: String,
}
