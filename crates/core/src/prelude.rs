//! Prelude

pub use crate::{
    discounts::{Discount, DiscountError, apply_discount},
    ids::{OfferId, RestaurantId, UserId},
    offers::{InvalidOfferType, Offer, OfferType},
    segments::{InvalidSegment, Segment},
    selection::{InvalidSelectionPolicy, OfferSelector, SelectionPolicy},
};
