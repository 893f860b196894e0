//! Cart Offer Domain Concerns

pub mod offers;
pub mod segments;
