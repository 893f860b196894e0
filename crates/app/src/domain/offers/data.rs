//! Offers Data

use rust_decimal::Decimal;
use smallvec::SmallVec;

use cartoffer::{
    discounts::Discount,
    ids::{OfferId, RestaurantId, UserId},
    offers::OfferType,
    segments::Segment,
};

use crate::domain::offers::ValidationError;

/// Offer creation input, as received from callers.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOffer {
    pub restaurant: RestaurantId,
    pub offer_type: String,
    pub value: Decimal,
    pub segments: Vec<String>,
}

/// A validated offer, ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfferDraft {
    pub restaurant: RestaurantId,
    pub discount: Discount,
    pub segments: SmallVec<[Segment; 4]>,
}

impl TryFrom<NewOffer> for OfferDraft {
    type Error = ValidationError;

    fn try_from(offer: NewOffer) -> Result<Self, Self::Error> {
        if !offer.restaurant.is_valid() {
            return Err(ValidationError::InvalidRestaurant(offer.restaurant));
        }

        let offer_type: OfferType = offer.offer_type.parse()?;

        if offer.value < Decimal::ZERO {
            return Err(ValidationError::NegativeOfferValue);
        }

        if offer_type == OfferType::FlatPercent && offer.value > Decimal::ONE_HUNDRED {
            return Err(ValidationError::PercentageAboveHundred);
        }

        if offer.segments.is_empty() {
            return Err(ValidationError::NoSegments);
        }

        let mut segments: SmallVec<[Segment; 4]> = SmallVec::with_capacity(offer.segments.len());

        for code in &offer.segments {
            let segment = Segment::new(code)?;

            if !segments.contains(&segment) {
                segments.push(segment);
            }
        }

        Ok(Self {
            restaurant: offer.restaurant,
            discount: offer_type.discount(offer.value),
            segments,
        })
    }
}

/// Cart submitted for discounting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartRequest {
    pub cart_value: Decimal,
    pub user: UserId,
    pub restaurant: RestaurantId,
}

/// Outcome of applying offers to a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedCart {
    /// Cart value after the chosen discount, or the submitted value when no
    /// offer matched.
    pub cart_value: Decimal,

    /// Offer that produced the discount.
    pub offer: Option<OfferId>,
}
