//! Offers

pub mod data;
mod errors;
pub mod repositories;
pub mod service;

pub use errors::{CartOffersServiceError, ValidationError};
pub use service::*;
