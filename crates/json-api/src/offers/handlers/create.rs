//! Create Offer Handler

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{Depot, oapi::extract::JsonBody, prelude::*};
use serde::{Deserialize, Serialize};
use tracing::info;

use cartoffer::ids::RestaurantId;
use cartoffer_app::domain::offers::data::NewOffer;

use crate::{extensions::*, offers::errors::into_status_error, state::State};

/// Create Offer Request
#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct CreateOfferRequest {
    /// Restaurant the offer applies to
    pub restaurant_id: i64,

    /// Offer type: `FLATX` or `FLAT%`
    pub offer_type: String,

    /// Amount off for `FLATX`, percentage off for `FLAT%`
    #[salvo(schema(value_type = f64))]
    pub offer_value: Decimal,

    /// Customer segments eligible for the offer
    pub customer_segment: Vec<String>,
}

impl From<CreateOfferRequest> for NewOffer {
    fn from(request: CreateOfferRequest) -> Self {
        NewOffer {
            restaurant: RestaurantId::new(request.restaurant_id),
            offer_type: request.offer_type,
            value: request.offer_value,
            segments: request.customer_segment,
        }
    }
}

/// Offer Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OfferCreatedResponse {
    /// Acknowledgement message
    pub response_msg: String,
}

/// Create Offer Handler
#[endpoint(
    tags("offers"),
    summary = "Create Offer",
    responses(
        (status_code = StatusCode::OK, description = "Offer created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateOfferRequest>,
    depot: &mut Depot,
) -> Result<Json<OfferCreatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let offer_id = state
        .app
        .offers
        .create_offer(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    info!(offer_id = %offer_id, "offer created");

    Ok(Json(OfferCreatedResponse {
        response_msg: "success".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use cartoffer::ids::OfferId;
    use cartoffer_app::domain::offers::{MockCartOffersService, ValidationError};

    use crate::test_helpers::offers_service;

    use super::*;

    fn make_service(offers: MockCartOffersService) -> Service {
        offers_service(
            offers,
            Router::with_path("api/v1/offer").post(handler),
        )
    }

    #[tokio::test]
    async fn test_create_offer_success() -> TestResult {
        let mut mock = MockCartOffersService::new();

        mock.expect_create_offer()
            .once()
            .withf(|offer| {
                *offer
                    == NewOffer {
                        restaurant: RestaurantId::new(1),
                        offer_type: "FLATX".to_string(),
                        value: dec!(10),
                        segments: vec!["p1".to_string()],
                    }
            })
            .return_once(|_| Ok(OfferId::new(1)));

        let mut res = TestClient::post("http://example.com/api/v1/offer")
            .json(&json!({
                "restaurant_id": 1,
                "offer_type": "FLATX",
                "offer_value": 10,
                "customer_segment": ["p1"]
            }))
            .send(&make_service(mock))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: OfferCreatedResponse = res.take_json().await?;

        assert_eq!(body.response_msg, "success");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_offer_keeps_fractional_value() -> TestResult {
        let mut mock = MockCartOffersService::new();

        mock.expect_create_offer()
            .once()
            .withf(|offer| offer.value == dec!(10.50) && offer.offer_type == "FLAT%")
            .return_once(|_| Ok(OfferId::new(1)));

        let res = TestClient::post("http://example.com/api/v1/offer")
            .json(&json!({
                "restaurant_id": 1,
                "offer_type": "FLAT%",
                "offer_value": 10.5,
                "customer_segment": ["p1", "p2"]
            }))
            .send(&make_service(mock))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_offer_validation_error_returns_400() -> TestResult {
        let mut mock = MockCartOffersService::new();

        mock.expect_create_offer()
            .once()
            .return_once(|_| Err(ValidationError::NoSegments.into()));

        let res = TestClient::post("http://example.com/api/v1/offer")
            .json(&json!({
                "restaurant_id": 1,
                "offer_type": "FLATX",
                "offer_value": 10,
                "customer_segment": []
            }))
            .send(&make_service(mock))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_offer_malformed_body_returns_400() -> TestResult {
        let mut mock = MockCartOffersService::new();

        mock.expect_create_offer().never();

        let res = TestClient::post("http://example.com/api/v1/offer")
            .json(&json!({
                "restaurant_id": "one",
                "offer_type": "FLATX"
            }))
            .send(&make_service(mock))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
