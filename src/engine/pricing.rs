//! Monthly payment computation.

use serde::Serialize;

use crate::models::{Configuration, Money, PlanCatalog, Tier};

/// Computes tier payments from a configuration and the catalog.
///
/// Pure: the engine never mutates either input and never fails. Features
/// the catalog does not know add nothing.
#[derive(Debug, Clone, Copy)]
pub struct PricingEngine<'a> {
    catalog: &'a PlanCatalog,
}

/// One line of a priced tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PricedFeature {
    /// Feature identifier as placed in the tier
    pub id: String,
    /// Catalog title, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Catalog price; `None` for unknown identifiers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Money>,
}

/// Breakdown of a tier's payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierQuote {
    /// Tier being quoted
    pub tier: Tier,
    /// Shared base amount
    pub base: Money,
    /// Features in tier order
    pub features: Vec<PricedFeature>,
    /// Base plus known feature prices
    pub total: Money,
    /// `total` formatted as currency (`$551.67`)
    pub display: String,
}

impl<'a> PricingEngine<'a> {
    /// Creates an engine over a catalog.
    #[must_use]
    pub const fn new(catalog: &'a PlanCatalog) -> Self {
        Self { catalog }
    }

    /// Payment for a tier: base plus the price of every known feature in it.
    #[must_use]
    pub fn price(&self, config: &Configuration, tier: Tier) -> Money {
        self.catalog.base_payment()
            + config
                .features(tier)
                .iter()
                .filter_map(|id| self.catalog.price_of(id))
                .sum::<Money>()
    }

    /// Payment for a tier formatted as currency.
    #[must_use]
    pub fn price_string(&self, config: &Configuration, tier: Tier) -> String {
        self.price(config, tier).to_string()
    }

    /// Payments for all tiers in fixed order.
    #[must_use]
    pub fn price_all(&self, config: &Configuration) -> [(Tier, Money); 4] {
        Tier::ALL.map(|tier| (tier, self.price(config, tier)))
    }

    /// Itemized quote for a tier.
    #[must_use]
    pub fn quote(&self, config: &Configuration, tier: Tier) -> TierQuote {
        let features = config
            .features(tier)
            .iter()
            .map(|id| {
                let feature = self.catalog.feature(id);
                PricedFeature {
                    id: id.clone(),
                    title: feature.map(|f| f.title.clone()),
                    price: feature.map(|f| f.price),
                }
            })
            .collect();
        let total = self.price(config, tier);

        TierQuote {
            tier,
            base: self.catalog.base_payment(),
            features,
            total,
            display: total.to_string(),
        }
    }

    /// Itemized quotes for all tiers in fixed order.
    #[must_use]
    pub fn quote_all(&self, config: &Configuration) -> Vec<TierQuote> {
        Tier::ALL
            .into_iter()
            .map(|tier| self.quote(config, tier))
            .collect()
    }
}
