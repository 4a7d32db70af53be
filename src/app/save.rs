//! Save flow and the plan summary it produces.
//!
//! Saving never persists anything. It shows a short busy state, then a
//! summary of every tier that can be copied as plain text.

use std::fmt::Write as _;

use serde::Serialize;

use crate::engine::{PricingEngine, TierQuote};
use crate::models::{Configuration, PlanCatalog};

/// Snapshot of the live configuration with payments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanSummary {
    /// One quote per tier, in fixed tier order
    pub tiers: Vec<TierQuote>,
}

impl PlanSummary {
    /// Builds a summary of `config`.
    #[must_use]
    pub fn new(config: &Configuration, catalog: &PlanCatalog) -> Self {
        Self {
            tiers: PricingEngine::new(catalog).quote_all(config),
        }
    }

    /// Plain-text rendering used for the clipboard.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::from("Protection Plan Summary\n");
        for quote in &self.tiers {
            let _ = writeln!(out, "\n{}: {}/month", quote.tier.label(), quote.display);
            if quote.features.is_empty() {
                out.push_str("  (no features)\n");
            }
            for feature in &quote.features {
                let title = feature.title.as_deref().unwrap_or(&feature.id);
                match feature.price {
                    Some(price) => {
                        let _ = writeln!(out, "  - {title} ({price})");
                    }
                    None => {
                        let _ = writeln!(out, "  - {title}");
                    }
                }
            }
        }
        out
    }
}

/// Where the flow currently is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SavePhase {
    /// Nothing happening
    #[default]
    Idle,
    /// Busy state before the summary appears
    Saving,
    /// Summary dialog is open
    SummaryShown(PlanSummary),
}

/// Save control state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveFlow {
    phase: SavePhase,
}

impl SaveFlow {
    /// Label of the control while idle.
    pub const IDLE_LABEL: &'static str = "Save Configuration";
    /// Label of the control while saving.
    pub const BUSY_LABEL: &'static str = "Saving...";

    /// Creates an idle flow.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enters the busy state. Ignored while already saving.
    pub fn request(&mut self) -> bool {
        if self.is_saving() {
            return false;
        }
        self.phase = SavePhase::Saving;
        true
    }

    /// Leaves the busy state and shows `summary`. Ignored unless saving.
    pub fn finish(&mut self, summary: PlanSummary) -> bool {
        if !self.is_saving() {
            return false;
        }
        self.phase = SavePhase::SummaryShown(summary);
        true
    }

    /// Closes the summary dialog.
    pub fn dismiss(&mut self) -> bool {
        if matches!(self.phase, SavePhase::SummaryShown(_)) {
            self.phase = SavePhase::Idle;
            true
        } else {
            false
        }
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> &SavePhase {
        &self.phase
    }

    /// Open summary, if any.
    #[must_use]
    pub const fn summary(&self) -> Option<&PlanSummary> {
        match &self.phase {
            SavePhase::SummaryShown(summary) => Some(summary),
            _ => None,
        }
    }

    /// Whether the busy state is active.
    #[must_use]
    pub const fn is_saving(&self) -> bool {
        matches!(self.phase, SavePhase::Saving)
    }

    /// Current control label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        if self.is_saving() {
            Self::BUSY_LABEL
        } else {
            Self::IDLE_LABEL
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Tier;

    #[test]
    fn test_flow_phases() {
        let catalog = PlanCatalog::builtin().unwrap();
        let mut flow = SaveFlow::new();
        assert!(!flow.finish(PlanSummary::new(catalog.default_plan(), &catalog)));

        assert!(flow.request());
        assert_eq!(flow.label(), "Saving...");
        assert!(!flow.request());

        assert!(flow.finish(PlanSummary::new(catalog.default_plan(), &catalog)));
        assert_eq!(flow.label(), "Save Configuration");
        assert_eq!(flow.summary().map(|s| s.tiers.len()), Some(4));

        assert!(flow.dismiss());
        assert_eq!(flow.phase(), &SavePhase::Idle);
    }

    #[test]
    fn test_summary_text() {
        let catalog = PlanCatalog::builtin().unwrap();
        let mut config = Configuration::empty();
        config.features_mut(Tier::Bronze).push("arc".to_string());
        config.features_mut(Tier::Bronze).push("ghost".to_string());

        let text = PlanSummary::new(&config, &catalog).to_text();
        assert!(text.starts_with("Protection Plan Summary\n"));
        assert!(text.contains("Bronze: $536.67/month"));
        assert!(text.contains("  - ghost\n"));
        assert!(text.contains("Platinum: $511.67/month\n  (no features)"));
    }
}
