//! App Context

use std::sync::Arc;

use thiserror::Error;

use cartoffer::selection::{OfferSelector, SelectionPolicy};

use crate::domain::{
    offers::{CartOffersService, DefaultCartOffersService, repositories::InMemoryOfferStore},
    segments::{HttpSegmentResolver, SegmentResolutionError, SegmentServiceConfig},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to build segment service client")]
    SegmentClient(#[source] SegmentResolutionError),
}

#[derive(Clone)]
pub struct AppContext {
    pub offers: Arc<dyn CartOffersService>,
}

impl AppContext {
    /// Build the application context with an empty offer store.
    ///
    /// # Errors
    ///
    /// Returns an error when the segment service client cannot be created.
    pub fn new(
        segments: SegmentServiceConfig,
        selection: SelectionPolicy,
    ) -> Result<Self, AppInitError> {
        let resolver = HttpSegmentResolver::new(segments).map_err(AppInitError::SegmentClient)?;

        Ok(Self {
            offers: Arc::new(DefaultCartOffersService::new(
                Arc::new(InMemoryOfferStore::new()),
                Arc::new(resolver),
                OfferSelector::new(selection),
            )),
        })
    }
}
