//! Offers service errors.

use cartoffer::{
    discounts::DiscountError, ids::RestaurantId, offers::InvalidOfferType,
    segments::InvalidSegment,
};
use thiserror::Error;

use crate::domain::segments::SegmentResolutionError;

/// Input rejected before any state is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("restaurant id must be positive, got {0}")]
    InvalidRestaurant(RestaurantId),

    #[error(transparent)]
    InvalidOfferType(#[from] InvalidOfferType),

    #[error("offer value must not be negative")]
    NegativeOfferValue,

    #[error("percentage offer value must not exceed 100")]
    PercentageAboveHundred,

    #[error("offer must target at least one customer segment")]
    NoSegments,

    #[error("invalid customer segment: {0}")]
    InvalidSegment(#[from] InvalidSegment),

    #[error("cart value must not be negative")]
    NegativeCartValue,
}

#[derive(Debug, Error)]
pub enum CartOffersServiceError {
    #[error("invalid request: {0}")]
    Validation(#[from] ValidationError),

    #[error("failed to resolve customer segment")]
    Resolution(#[from] SegmentResolutionError),

    #[error("failed to calculate discount")]
    Discount(#[from] DiscountError),
}
