//! Segment resolution errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SegmentResolutionError {
    #[error("segment lookup timed out")]
    Timeout,

    #[error("segment lookup failed: {0}")]
    Http(#[source] reqwest::Error),

    #[error("segment service responded with status {0}")]
    UnexpectedStatus(u16),

    #[error("malformed segment response: {0}")]
    MalformedResponse(String),
}

impl SegmentResolutionError {
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }
}

impl From<reqwest::Error> for SegmentResolutionError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            return Self::Timeout;
        }

        Self::Http(error)
    }
}
