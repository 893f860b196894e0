//! In-memory offer store.

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use rustc_hash::FxBuildHasher;

use cartoffer::{
    ids::{OfferId, RestaurantId},
    offers::Offer,
    segments::Segment,
};

use crate::domain::offers::{data::OfferDraft, repositories::OfferStore};

/// Offers grouped by restaurant.
///
/// Each restaurant's offers live in one shard entry, so a create holds the
/// shard's write lock while it allocates the id and appends. A query clones
/// the matching offers under the read lock and therefore never sees a
/// half-written offer, and ids within a restaurant always ascend.
#[derive(Debug, Default)]
pub struct InMemoryOfferStore {
    offers: DashMap<RestaurantId, Vec<Offer>, FxBuildHasher>,
    sequence: AtomicU64,
}

impl InMemoryOfferStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of stored offers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.offers.iter().map(|entry| entry.value().len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl OfferStore for InMemoryOfferStore {
    fn create(&self, offer: OfferDraft) -> OfferId {
        let mut offers = self.offers.entry(offer.restaurant).or_default();

        let id = OfferId::new(self.sequence.fetch_add(1, Ordering::Relaxed) + 1);

        offers.push(Offer {
            id,
            restaurant: offer.restaurant,
            discount: offer.discount,
            segments: offer.segments,
        });

        id
    }

    fn query(&self, restaurant: RestaurantId, segment: &Segment) -> Vec<Offer> {
        self.offers
            .get(&restaurant)
            .map(|offers| {
                offers
                    .iter()
                    .filter(|offer| offer.segments.contains(segment))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }
}
