//! Discounts

use rust_decimal::Decimal;
use thiserror::Error;

use crate::offers::OfferType;

/// Errors specific to discount calculations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiscountError {
    /// Decimal arithmetic exceeded the representable range.
    #[error("discount calculation overflowed")]
    Overflow,
}

/// The discount carried by an offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discount {
    /// Subtract a fixed amount from the cart value.
    FlatAmount(Decimal),

    /// Subtract a percentage of the cart value.
    FlatPercent(Decimal),
}

impl Discount {
    /// The offer type this discount belongs to.
    #[must_use]
    pub const fn offer_type(&self) -> OfferType {
        match self {
            Self::FlatAmount(_) => OfferType::FlatAmount,
            Self::FlatPercent(_) => OfferType::FlatPercent,
        }
    }

    /// The configured amount or percentage.
    #[must_use]
    pub const fn value(&self) -> Decimal {
        match self {
            Self::FlatAmount(value) | Self::FlatPercent(value) => *value,
        }
    }
}

/// Applies a discount to a cart value, flooring the result at zero.
///
/// - `FlatAmount(x)`: `max(0, cart - x)`
/// - `FlatPercent(p)`: `max(0, cart - cart * p / 100)`
///
/// No rounding is performed; the scale of the inputs is carried through.
///
/// # Errors
///
/// Returns [`DiscountError::Overflow`] if an intermediate value cannot be
/// represented as a [`Decimal`].
pub fn apply_discount(cart_value: Decimal, discount: &Discount) -> Result<Decimal, DiscountError> {
    let reduction = match discount {
        Discount::FlatAmount(amount) => *amount,
        Discount::FlatPercent(percent) => percent_of(cart_value, *percent)?,
    };

    let discounted = cart_value
        .checked_sub(reduction)
        .ok_or(DiscountError::Overflow)?;

    Ok(discounted.max(Decimal::ZERO).normalize())
}

/// Calculate `percent`% of `value`.
///
/// Divides before multiplying so any cart value a [`Decimal`] can hold works
/// with percentages up to 100.
fn percent_of(value: Decimal, percent: Decimal) -> Result<Decimal, DiscountError> {
    value
        .checked_div(Decimal::ONE_HUNDRED)
        .and_then(|share| share.checked_mul(percent))
        .ok_or(DiscountError::Overflow)
}
