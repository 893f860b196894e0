//! Customer Segments

mod client;
mod errors;
mod resolver;

pub use client::{HttpSegmentResolver, SegmentServiceConfig};
pub use errors::SegmentResolutionError;
pub use resolver::*;
