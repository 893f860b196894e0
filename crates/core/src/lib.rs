//! Cartoffer
//!
//! Pure domain logic for restaurant cart offers: identifiers, customer segments,
//! offer definitions, discount arithmetic and offer selection. Nothing in this
//! crate performs I/O.

pub mod discounts;
pub mod ids;
pub mod offers;
pub mod prelude;
pub mod segments;
pub mod selection;
