//! Pricing and configuration sync.

pub mod pricing;
pub mod sync;

pub use pricing::{PricedFeature, PricingEngine, TierQuote};
pub use sync::rebuild_configuration;
