//! Data models for the plan catalog, tiers and configurations.
//!
//! Models are independent of UI and event handling.

pub mod catalog;
pub mod configuration;
pub mod feature;
pub mod money;
pub mod rgb;
pub mod tier;

pub use catalog::PlanCatalog;
pub use configuration::Configuration;
pub use feature::Feature;
pub use money::Money;
pub use rgb::RgbColor;
pub use tier::Tier;
