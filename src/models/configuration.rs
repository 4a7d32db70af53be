//! Assignment of features to tiers.

use serde::{Deserialize, Serialize};

use crate::models::Tier;

/// Mapping from each tier to its ordered list of feature identifiers.
///
/// Order only matters for display. Identifiers are not checked against the
/// catalog here; pricing ignores the ones it does not know.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    #[serde(default)]
    platinum: Vec<String>,
    #[serde(default)]
    gold: Vec<String>,
    #[serde(default)]
    silver: Vec<String>,
    #[serde(default)]
    bronze: Vec<String>,
}

impl Configuration {
    /// Creates a configuration with every tier empty.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a configuration from per-tier string slices.
    #[must_use]
    pub fn from_lists<S: AsRef<str>>(lists: [&[S]; 4]) -> Self {
        let mut config = Self::empty();
        for (tier, list) in Tier::ALL.into_iter().zip(lists) {
            *config.features_mut(tier) = list.iter().map(|s| s.as_ref().to_string()).collect();
        }
        config
    }

    /// Feature identifiers currently assigned to a tier.
    #[must_use]
    pub fn features(&self, tier: Tier) -> &[String] {
        match tier {
            Tier::Platinum => &self.platinum,
            Tier::Gold => &self.gold,
            Tier::Silver => &self.silver,
            Tier::Bronze => &self.bronze,
        }
    }

    /// Mutable access to a tier's list.
    pub fn features_mut(&mut self, tier: Tier) -> &mut Vec<String> {
        match tier {
            Tier::Platinum => &mut self.platinum,
            Tier::Gold => &mut self.gold,
            Tier::Silver => &mut self.silver,
            Tier::Bronze => &mut self.bronze,
        }
    }

    /// Iterates tiers in fixed order with their lists.
    pub fn iter(&self) -> impl Iterator<Item = (Tier, &[String])> {
        Tier::ALL.into_iter().map(move |tier| (tier, self.features(tier)))
    }

    /// Whether a tier contains the given feature.
    #[must_use]
    pub fn contains(&self, tier: Tier, feature_id: &str) -> bool {
        self.features(tier).iter().any(|f| f == feature_id)
    }

    /// Total number of placed features across all tiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().map(|(_, list)| list.len()).sum()
    }

    /// Whether no tier has any feature.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_lists_and_lookup() {
        let config = Configuration::from_lists([&["arc", "gap"][..], &["arc"], &[], &["gap"]]);
        assert_eq!(config.features(Tier::Platinum), ["arc", "gap"]);
        assert!(config.contains(Tier::Bronze, "gap"));
        assert!(!config.contains(Tier::Silver, "gap"));
        assert_eq!(config.len(), 4);
    }

    #[test]
    fn test_missing_tiers_default_to_empty() {
        let config: Configuration = toml::from_str(r#"gold = ["arc"]"#).unwrap();
        assert_eq!(config.features(Tier::Gold), ["arc"]);
        assert!(config.features(Tier::Platinum).is_empty());
        assert!(config.features(Tier::Bronze).is_empty());
    }

    #[test]
    fn test_clone_is_deep() {
        let original = Configuration::from_lists([&["arc"][..], &[], &[], &[]]);
        let mut copy = original.clone();
        copy.features_mut(Tier::Platinum).push("gap".to_string());
        assert_eq!(original.features(Tier::Platinum).len(), 1);
    }
}
