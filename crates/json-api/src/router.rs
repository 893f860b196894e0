//! App Router

use salvo::Router;

use crate::{carts, healthcheck, offers};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(
            Router::with_path("api/v1")
                .push(Router::with_path("offer").post(offers::create::handler))
                .push(Router::with_path("cart/apply_offer").post(carts::apply_offer::handler)),
        )
}

#[cfg(test)]
mod tests {
    use salvo::{
        affix_state::inject,
        prelude::*,
        test::{ResponseExt, TestClient},
        trailing_slash::remove_slash,
    };
    use rust_decimal_macros::dec;
    use serde_json::{Value, json};
    use testresult::TestResult;

    use cartoffer::ids::OfferId;
    use cartoffer_app::domain::offers::{MockCartOffersService, data::AppliedCart};

    use crate::test_helpers::state_with_offers;

    use super::*;

    fn service(offers: MockCartOffersService) -> Service {
        Service::new(
            Router::new()
                .hoop(remove_slash())
                .hoop(inject(state_with_offers(offers)))
                .push(app_router()),
        )
    }

    #[tokio::test]
    async fn routes_offer_creation() -> TestResult {
        let mut mock = MockCartOffersService::new();

        mock.expect_create_offer()
            .once()
            .return_once(|_| Ok(OfferId::new(1)));

        let mut res = TestClient::post("http://example.com/api/v1/offer")
            .json(&json!({
                "restaurant_id": 1,
                "offer_type": "FLATPERCENT",
                "offer_value": 10,
                "customer_segment": ["p1"]
            }))
            .send(&service(mock))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(body, json!({ "response_msg": "success" }));

        Ok(())
    }

    #[tokio::test]
    async fn routes_apply_offer_with_trailing_slash() -> TestResult {
        let mut mock = MockCartOffersService::new();

        mock.expect_apply_offer().once().return_once(|_| {
            Ok(AppliedCart {
                cart_value: dec!(180),
                offer: Some(OfferId::new(1)),
            })
        });

        let mut res = TestClient::post("http://example.com/api/v1/cart/apply_offer/")
            .json(&json!({
                "cart_value": 200,
                "user_id": 1,
                "restaurant_id": 1
            }))
            .send(&service(mock))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(body.get("cart_value").and_then(Value::as_f64), Some(180.0));

        Ok(())
    }

    #[tokio::test]
    async fn unknown_route_returns_404() {
        let res = TestClient::get("http://example.com/api/v1/offers")
            .send(&service(MockCartOffersService::new()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }
}
