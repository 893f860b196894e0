//! Offers

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use rust_decimal::Decimal;
use smallvec::SmallVec;
use thiserror::Error;

use crate::{
    discounts::Discount,
    ids::{OfferId, RestaurantId},
    segments::Segment,
};

/// Raised when an offer type string is not one of the supported kinds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported offer type `{0}`")]
pub struct InvalidOfferType(pub String);

/// Offer type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OfferType {
    /// `FLATX`: a fixed amount off the cart.
    FlatAmount,

    /// `FLAT%`: a percentage off the cart.
    FlatPercent,
}

impl OfferType {
    /// Wire name of the offer type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FlatAmount => "FLATX",
            Self::FlatPercent => "FLAT%",
        }
    }

    /// Build the discount for this type with the given value.
    #[must_use]
    pub const fn discount(self, value: Decimal) -> Discount {
        match self {
            Self::FlatAmount => Discount::FlatAmount(value),
            Self::FlatPercent => Discount::FlatPercent(value),
        }
    }
}

impl FromStr for OfferType {
    type Err = InvalidOfferType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "FLATX" => Ok(Self::FlatAmount),
            "FLAT%" | "FLATPERCENT" => Ok(Self::FlatPercent),
            other => Err(InvalidOfferType(other.to_owned())),
        }
    }
}

impl Display for OfferType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// A stored offer.
///
/// Offers are immutable once created. `segments` is never empty and holds no
/// duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Offer {
    /// Creation-ordered identifier.
    pub id: OfferId,

    /// Restaurant the offer is scoped to.
    pub restaurant: RestaurantId,

    /// Discount applied when the offer is chosen.
    pub discount: Discount,

    /// Segments eligible for the offer.
    pub segments: SmallVec<[Segment; 4]>,
}

impl Offer {
    /// Whether this offer applies to a cart at `restaurant` for a user in `segment`.
    #[must_use]
    pub fn matches(&self, restaurant: RestaurantId, segment: &Segment) -> bool {
        self.restaurant == restaurant && self.segments.contains(segment)
    }

    /// Type of the offer's discount.
    #[must_use]
    pub const fn offer_type(&self) -> OfferType {
        self.discount.offer_type()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use testresult::TestResult;

    use super::*;

    fn offer(restaurant: i64, segments: &[&str]) -> TestResult<Offer> {
        Ok(Offer {
            id: OfferId::new(1),
            restaurant: RestaurantId::new(restaurant),
            discount: Discount::FlatAmount(dec!(10)),
            segments: segments
                .iter()
                .map(|code| Segment::new(code))
                .collect::<Result<_, _>>()?,
        })
    }

    #[test]
    fn offer_type_parses_wire_names() -> TestResult {
        assert_eq!("FLATX".parse::<OfferType>()?, OfferType::FlatAmount);
        assert_eq!("FLAT%".parse::<OfferType>()?, OfferType::FlatPercent);
        assert_eq!("FLATPERCENT".parse::<OfferType>()?, OfferType::FlatPercent);

        Ok(())
    }

    #[test]
    fn offer_type_rejects_unknown_names() {
        assert_eq!(
            "BOGO".parse::<OfferType>(),
            Err(InvalidOfferType("BOGO".to_string()))
        );
        assert!("flatx".parse::<OfferType>().is_err(), "names are case sensitive");
    }

    #[test]
    fn offer_type_round_trips_through_display() -> TestResult {
        for offer_type in [OfferType::FlatAmount, OfferType::FlatPercent] {
            assert_eq!(offer_type.to_string().parse::<OfferType>()?, offer_type);
        }

        Ok(())
    }

    #[test]
    fn offer_type_builds_matching_discount() {
        assert_eq!(
            OfferType::FlatPercent.discount(dec!(5)),
            Discount::FlatPercent(dec!(5))
        );
        assert_eq!(
            OfferType::FlatAmount.discount(dec!(5)),
            Discount::FlatAmount(dec!(5))
        );
    }

    #[test]
    fn offer_matches_restaurant_and_segment() -> TestResult {
        let offer = offer(1, &["p1", "p2"])?;

        assert!(offer.matches(RestaurantId::new(1), &Segment::new("p1")?));
        assert!(offer.matches(RestaurantId::new(1), &Segment::new("p2")?));
        assert!(!offer.matches(RestaurantId::new(1), &Segment::new("p3")?));
        assert!(!offer.matches(RestaurantId::new(2), &Segment::new("p1")?));

        Ok(())
    }

    #[test]
    fn offer_reports_its_type() -> TestResult {
        let mut offer = offer(1, &["p1"])?;

        assert_eq!(offer.offer_type(), OfferType::FlatAmount);

        offer.discount = Discount::FlatPercent(dec!(10));

        assert_eq!(offer.offer_type(), OfferType::FlatPercent);

        Ok(())
    }
}
