//! Cart Offers Service

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use rust_decimal::Decimal;
use tracing::{Span, info};

use cartoffer::{discounts::apply_discount, ids::OfferId, selection::OfferSelector};

use crate::domain::{
    offers::{
        CartOffersServiceError, ValidationError,
        data::{AppliedCart, CartRequest, NewOffer, OfferDraft},
        repositories::OfferStore,
    },
    segments::SegmentResolver,
};

#[derive(Clone)]
pub struct DefaultCartOffersService {
    store: Arc<dyn OfferStore>,
    segments: Arc<dyn SegmentResolver>,
    selector: OfferSelector,
}

impl DefaultCartOffersService {
    #[must_use]
    pub fn new(
        store: Arc<dyn OfferStore>,
        segments: Arc<dyn SegmentResolver>,
        selector: OfferSelector,
    ) -> Self {
        Self {
            store,
            segments,
            selector,
        }
    }
}

#[async_trait]
impl CartOffersService for DefaultCartOffersService {
    #[tracing::instrument(
        name = "offers.service.create_offer",
        skip(self, offer),
        fields(
            restaurant_id = %offer.restaurant,
            offer_type = %offer.offer_type,
            segment_count = offer.segments.len(),
            offer_id = tracing::field::Empty
        ),
        err
    )]
    async fn create_offer(&self, offer: NewOffer) -> Result<OfferId, CartOffersServiceError> {
        let draft = OfferDraft::try_from(offer)?;

        let id = self.store.create(draft);

        Span::current().record("offer_id", tracing::field::display(id));

        info!(offer_id = %id, "created offer");

        Ok(id)
    }

    #[tracing::instrument(
        name = "offers.service.apply_offer",
        skip(self),
        fields(
            user_id = %cart.user,
            restaurant_id = %cart.restaurant,
            segment = tracing::field::Empty,
            candidate_count = tracing::field::Empty,
            offer_id = tracing::field::Empty
        ),
        err
    )]
    async fn apply_offer(&self, cart: CartRequest) -> Result<AppliedCart, CartOffersServiceError> {
        if cart.cart_value < Decimal::ZERO {
            return Err(ValidationError::NegativeCartValue.into());
        }

        let segment = self.segments.resolve(cart.user).await?;

        let span = Span::current();

        span.record("segment", tracing::field::display(&segment));

        let candidates = self.store.query(cart.restaurant, &segment);

        span.record("candidate_count", candidates.len());

        let Some(offer) = self.selector.select(cart.cart_value, &candidates)? else {
            info!("no matching offer");

            return Ok(AppliedCart {
                cart_value: cart.cart_value,
                offer: None,
            });
        };

        let cart_value = apply_discount(cart.cart_value, &offer.discount)?;

        span.record("offer_id", tracing::field::display(offer.id));

        info!(offer_id = %offer.id, cart_value = %cart_value, "applied offer");

        Ok(AppliedCart {
            cart_value,
            offer: Some(offer.id),
        })
    }
}

#[automock]
#[async_trait]
pub trait CartOffersService: Send + Sync {
    /// Validate and store a new offer.
    async fn create_offer(&self, offer: NewOffer) -> Result<OfferId, CartOffersServiceError>;

    /// Discount a cart with the best applicable offer for the user's segment.
    ///
    /// A cart with no matching offer is returned unchanged; that is not an error.
    async fn apply_offer(&self, cart: CartRequest) -> Result<AppliedCart, CartOffersServiceError>;
}
