//! Feature catalog, base payment and default plan table.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::models::{Configuration, Feature, Money, Tier};

/// Embedded catalog used when no catalog file is configured.
const BUILTIN_CATALOG: &str = include_str!("../data/catalog.toml");

/// On-disk shape of a catalog file.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogFile {
    base_payment: Money,
    #[serde(default)]
    features: Vec<Feature>,
    #[serde(default)]
    default_plan: Configuration,
}

/// Static pricing data: the base payment, every known feature and the
/// default assignment of features to tiers.
///
/// Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanCatalog {
    base_payment: Money,
    features: Vec<Feature>,
    index: HashMap<String, usize>,
    default_plan: Configuration,
}

impl PlanCatalog {
    /// Builds a catalog from parts, validating feature IDs.
    ///
    /// # Errors
    ///
    /// Returns an error if a feature is invalid or an ID appears twice.
    pub fn new(
        base_payment: Money,
        features: Vec<Feature>,
        default_plan: Configuration,
    ) -> Result<Self> {
        let mut index = HashMap::with_capacity(features.len());
        for (i, feature) in features.iter().enumerate() {
            feature.validate()?;
            if index.insert(feature.id.clone(), i).is_some() {
                anyhow::bail!("Duplicate feature ID '{}' in catalog", feature.id);
            }
        }

        let catalog = Self {
            base_payment,
            features,
            index,
            default_plan,
        };

        for (tier, id) in catalog.unknown_default_features() {
            tracing::warn!(%tier, feature = %id, "default plan references a feature missing from the catalog");
        }

        Ok(catalog)
    }

    /// Loads the embedded catalog.
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_CATALOG).context("Failed to parse built-in catalog")
    }

    /// Parses a catalog from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(content).context("Invalid catalog TOML")?;
        Self::new(file.base_payment, file.features, file.default_plan)
    }

    /// Loads a catalog file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
        let catalog = Self::from_toml_str(&content)
            .with_context(|| format!("Failed to load catalog file: {}", path.display()))?;
        tracing::info!(path = %path.display(), features = catalog.features.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Loads `path` if given, otherwise the embedded catalog.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Self::builtin(),
        }
    }

    /// Serializes the catalog back to TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        let file = CatalogFile {
            base_payment: self.base_payment,
            features: self.features.clone(),
            default_plan: self.default_plan.clone(),
        };
        toml::to_string_pretty(&file).context("Failed to serialize catalog")
    }

    /// Amount every tier starts from before add-ons.
    #[must_use]
    pub const fn base_payment(&self) -> Money {
        self.base_payment
    }

    /// All features in catalog order.
    #[must_use]
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// Looks up a feature by ID.
    #[must_use]
    pub fn feature(&self, id: &str) -> Option<&Feature> {
        self.index.get(id).map(|&i| &self.features[i])
    }

    /// Monthly price of a feature, if the catalog knows it.
    #[must_use]
    pub fn price_of(&self, id: &str) -> Option<Money> {
        self.feature(id).map(|f| f.price)
    }

    /// Whether the catalog knows a feature.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// The reset target.
    #[must_use]
    pub const fn default_plan(&self) -> &Configuration {
        &self.default_plan
    }

    /// Default plan entries that have no catalog entry.
    #[must_use]
    pub fn unknown_default_features(&self) -> Vec<(Tier, String)> {
        self.default_plan
            .iter()
            .flat_map(|(tier, ids)| {
                ids.iter()
                    .filter(|id| !self.contains(id))
                    .map(move |id| (tier, id.clone()))
            })
            .collect()
    }
}
