//! Identifiers

use std::fmt::{Display, Formatter, Result as FmtResult};

/// Restaurant identifier, as supplied by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RestaurantId(i64);

impl RestaurantId {
    /// Wrap a raw restaurant id.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// The raw id.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Whether this id can own offers (strictly positive).
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 > 0
    }
}

impl Display for RestaurantId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl From<i64> for RestaurantId {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

/// User identifier used for segment lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw user id.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// The raw id.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

/// Offer identifier.
///
/// Ids are handed out in creation order, so comparing two ids tells which
/// offer was created first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OfferId(u64);

impl OfferId {
    /// Wrap a raw sequence number.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The raw sequence number.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl Display for OfferId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restaurant_id_validity() {
        assert!(RestaurantId::new(1).is_valid());
        assert!(!RestaurantId::new(0).is_valid());
        assert!(!RestaurantId::new(-4).is_valid());
    }

    #[test]
    fn offer_ids_order_by_sequence() {
        assert!(OfferId::new(1) < OfferId::new(2));
    }
}
