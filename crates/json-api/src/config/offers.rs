//! Offers Config

use cartoffer::selection::SelectionPolicy;
use clap::Args;

/// Offer behaviour settings.
#[derive(Debug, Args)]
pub struct OffersConfig {
    /// Rule for choosing between several matching offers (best-discount, first-created)
    #[arg(long, env = "OFFER_SELECTION", default_value = "best-discount")]
    pub offer_selection: SelectionPolicy,
}
