//! Offer Handlers

pub(crate) mod create;
