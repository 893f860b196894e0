//! Offer Selection
//!
//! Several offers may match the same restaurant and segment. The selector
//! picks exactly one of them according to a [`SelectionPolicy`], so the
//! outcome never depends on storage internals.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    discounts::{DiscountError, apply_discount},
    offers::Offer,
};

/// Raised when a selection policy name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown offer selection policy `{0}`")]
pub struct InvalidSelectionPolicy(pub String);

/// Rule used to choose between several matching offers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectionPolicy {
    /// The offer leaving the lowest cart value wins; ties go to the earliest offer.
    #[default]
    BestDiscount,

    /// The earliest created offer wins.
    FirstCreated,
}

impl SelectionPolicy {
    /// Configuration name of the policy.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BestDiscount => "best-discount",
            Self::FirstCreated => "first-created",
        }
    }
}

impl FromStr for SelectionPolicy {
    type Err = InvalidSelectionPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "best-discount" => Ok(Self::BestDiscount),
            "first-created" => Ok(Self::FirstCreated),
            other => Err(InvalidSelectionPolicy(other.to_owned())),
        }
    }
}

impl Display for SelectionPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Chooses a single offer from a candidate set.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfferSelector {
    policy: SelectionPolicy,
}

impl OfferSelector {
    /// Create a selector using `policy`.
    #[must_use]
    pub const fn new(policy: SelectionPolicy) -> Self {
        Self { policy }
    }

    /// The policy in use.
    #[must_use]
    pub const fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    /// Select the offer to apply to a cart worth `cart_value`.
    ///
    /// Returns `None` when there are no candidates.
    ///
    /// # Errors
    ///
    /// Returns [`DiscountError`] if evaluating a candidate's discount overflows
    /// (only possible under [`SelectionPolicy::BestDiscount`]).
    pub fn select<'a>(
        &self,
        cart_value: Decimal,
        candidates: &'a [Offer],
    ) -> Result<Option<&'a Offer>, DiscountError> {
        match self.policy {
            SelectionPolicy::FirstCreated => Ok(candidates.iter().min_by_key(|offer| offer.id)),
            SelectionPolicy::BestDiscount => best_discount(cart_value, candidates),
        }
    }
}

fn best_discount(
    cart_value: Decimal,
    candidates: &[Offer],
) -> Result<Option<&Offer>, DiscountError> {
    let mut best: Option<(Decimal, &Offer)> = None;

    for offer in candidates {
        let discounted = apply_discount(cart_value, &offer.discount)?;

        let replaces = match best {
            None => true,
            Some((lowest, current)) => {
                discounted < lowest || (discounted == lowest && offer.id < current.id)
            }
        };

        if replaces {
            best = Some((discounted, offer));
        }
    }

    Ok(best.map(|(_, offer)| offer))
}
