//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use cartoffer_app::{context::AppContext, domain::offers::MockCartOffersService};

use crate::state::State;

pub(crate) fn state_with_offers(offers: MockCartOffersService) -> Arc<State> {
    State::from_app_context(AppContext {
        offers: Arc::new(offers),
    })
}

pub(crate) fn offers_service(offers: MockCartOffersService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_offers(offers)))
            .push(route),
    )
}
