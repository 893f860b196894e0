//! Segment Resolver

use async_trait::async_trait;
use mockall::automock;

use cartoffer::{ids::UserId, segments::Segment};

use crate::domain::segments::SegmentResolutionError;

#[automock]
#[async_trait]
pub trait SegmentResolver: Send + Sync {
    /// Resolve the customer segment a user currently belongs to.
    ///
    /// Implementations must bound the lookup in time and must never fall back
    /// to a default segment on failure.
    async fn resolve(&self, user: UserId) -> Result<Segment, SegmentResolutionError>;
}
