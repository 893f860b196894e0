//! Apply Offer Handler

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{Depot, oapi::extract::JsonBody, prelude::*};
use serde::{Deserialize, Serialize};

use cartoffer::ids::{RestaurantId, UserId};
use cartoffer_app::domain::offers::data::CartRequest;

use crate::{extensions::*, offers::errors::into_status_error, state::State};

/// Apply Offer Request
#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct ApplyOfferRequest {
    /// Cart value before any discount
    #[salvo(schema(value_type = f64))]
    pub cart_value: Decimal,

    /// User placing the order
    pub user_id: i64,

    /// Restaurant the cart belongs to
    pub restaurant_id: i64,
}

impl From<ApplyOfferRequest> for CartRequest {
    fn from(request: ApplyOfferRequest) -> Self {
        CartRequest {
            cart_value: request.cart_value,
            user: UserId::new(request.user_id),
            restaurant: RestaurantId::new(request.restaurant_id),
        }
    }
}

/// Apply Offer Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ApplyOfferResponse {
    /// Cart value after the applied offer, unchanged if none matched
    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub cart_value: Decimal,
}

/// Apply Offer Handler
#[endpoint(
    tags("carts"),
    summary = "Apply Offer",
    responses(
        (status_code = StatusCode::OK, description = "Cart value after discount"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::BAD_GATEWAY, description = "Segment lookup failed"),
        (status_code = StatusCode::GATEWAY_TIMEOUT, description = "Segment lookup timed out"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<ApplyOfferRequest>,
    depot: &mut Depot,
) -> Result<Json<ApplyOfferResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let applied = state
        .app
        .offers
        .apply_offer(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(ApplyOfferResponse {
        cart_value: applied.cart_value,
    }))
}
