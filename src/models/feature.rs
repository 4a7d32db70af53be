//! Optional add-on features that can be placed into a tier.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::models::Money;

/// An add-on with a fixed monthly price and the text shown on its card.
///
/// # Validation
///
/// - ID must be non-empty, lowercase ASCII letters, digits or hyphens
/// - Title must be non-empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    /// Catalog key (e.g. "arc", "glasscoat")
    pub id: String,
    /// Monthly price
    pub price: Money,
    /// Card heading (e.g. "ARC / Exclusionary")
    pub title: String,
    /// Short term/mileage lines shown under the heading
    #[serde(default)]
    pub details: Vec<String>,
    /// Longer description of the coverage
    #[serde(default)]
    pub description: String,
}

impl Feature {
    /// Creates a feature with validation.
    ///
    /// # Errors
    ///
    /// Returns an error if the ID or title is invalid.
    pub fn new(id: impl Into<String>, price: Money, title: impl Into<String>) -> Result<Self> {
        let feature = Self {
            id: id.into(),
            price,
            title: title.into(),
            details: Vec::new(),
            description: String::new(),
        };
        feature.validate()?;
        Ok(feature)
    }

    /// Adds a detail line.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.details.push(detail.into());
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Checks the ID format and title.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_empty() {
            anyhow::bail!("Feature ID cannot be empty");
        }

        if !self
            .id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            anyhow::bail!(
                "Feature ID '{}' must use lowercase letters, digits and hyphens only",
                self.id
            );
        }

        if self.title.trim().is_empty() {
            anyhow::bail!("Feature '{}' needs a title", self.id);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let feature = Feature::new("tirewheel", Money::from_cents(1400), "Tire & Wheel - New")
            .unwrap()
            .with_detail("84 mo. / 999,999 miles");
        assert_eq!(feature.details.len(), 1);
        assert!(feature.description.is_empty());
    }

    #[test]
    fn test_invalid_ids() {
        assert!(Feature::new("", Money::ZERO, "x").is_err());
        assert!(Feature::new("Glass Coat", Money::ZERO, "x").is_err());
        assert!(Feature::new("glass_coat", Money::ZERO, "x").is_err());
    }

    #[test]
    fn test_blank_title_rejected() {
        assert!(Feature::new("gap", Money::ZERO, "   ").is_err());
    }
}
