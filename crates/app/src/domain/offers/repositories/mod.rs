//! Offer Repositories

mod memory;

use mockall::automock;

use cartoffer::{
    ids::{OfferId, RestaurantId},
    offers::Offer,
    segments::Segment,
};

use crate::domain::offers::data::OfferDraft;

pub use memory::InMemoryOfferStore;

/// Append-only offer storage.
#[automock]
pub trait OfferStore: Send + Sync {
    /// Store a new offer. Duplicate configurations are kept side by side.
    fn create(&self, offer: OfferDraft) -> OfferId;

    /// Offers for `restaurant` that target `segment`, oldest first.
    fn query(&self, restaurant: RestaurantId, segment: &Segment) -> Vec<Offer>;
}
