//! Errors

use salvo::http::StatusError;
use tracing::{error, warn};

use cartoffer_app::domain::offers::CartOffersServiceError;

pub(crate) fn into_status_error(error: CartOffersServiceError) -> StatusError {
    match error {
        CartOffersServiceError::Validation(source) => {
            StatusError::bad_request().brief(source.to_string())
        }
        CartOffersServiceError::Resolution(source) if source.is_timeout() => {
            warn!("segment lookup timed out");

            StatusError::gateway_timeout().brief("Customer segment lookup timed out")
        }
        CartOffersServiceError::Resolution(source) => {
            warn!("failed to resolve customer segment: {source}");

            StatusError::bad_gateway().brief("Customer segment lookup failed")
        }
        CartOffersServiceError::Discount(source) => {
            error!("failed to calculate discount: {source}");

            StatusError::internal_server_error()
        }
    }
}
