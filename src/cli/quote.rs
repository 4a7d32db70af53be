//! `quote`: price a plan without opening the board.

use clap::Args;
use std::path::PathBuf;

use crate::app::PlanSummary;
use crate::board::{Board, CardLocation};
use crate::cli::common::{load_catalog, load_plan, print_json, CliError, CliResult};
use crate::engine::rebuild_configuration;
use crate::models::{Configuration, Tier};

/// Price every tier of a plan
#[derive(Args, Debug)]
pub struct QuoteArgs {
    /// Catalog file (TOML); defaults to the configured or built-in catalog
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Plan file (TOML or JSON) with one feature list per tier; defaults to
    /// the catalog's default plan
    #[arg(long, value_name = "FILE")]
    plan: Option<PathBuf>,

    /// Move a feature before pricing; repeatable
    #[arg(long = "move", value_name = "FEATURE:FROM:TO")]
    moves: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// A parsed `--move` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanMove {
    /// Feature identifier
    pub feature: String,
    /// Tier the feature leaves
    pub from: Tier,
    /// Tier the feature is appended to
    pub to: Tier,
}

impl PlanMove {
    /// Parses `FEATURE:FROM:TO`.
    pub fn parse(spec: &str) -> CliResult<Self> {
        let parts: Vec<&str> = spec.split(':').collect();
        let [feature, from, to] = parts.as_slice() else {
            return Err(CliError::validation(format!(
                "Invalid move '{spec}': expected FEATURE:FROM:TO"
            )));
        };
        if feature.is_empty() {
            return Err(CliError::validation(format!(
                "Invalid move '{spec}': feature is empty"
            )));
        }
        let tier = |name: &str| {
            name.parse::<Tier>()
                .map_err(|e| CliError::validation(format!("Invalid move '{spec}': {e}")))
        };
        Ok(Self {
            feature: (*feature).to_string(),
            from: tier(from)?,
            to: tier(to)?,
        })
    }
}

/// Applies moves through a board, the way drops on the interactive board do,
/// and rebuilds the configuration from it. Unknown features keep their cards.
pub fn apply_moves(plan: &Configuration, moves: &[PlanMove]) -> CliResult<Configuration> {
    let mut board = Board::new();
    for (tier, features) in plan.iter() {
        for feature in features {
            board.place(tier, feature.as_str());
        }
    }

    for plan_move in moves {
        let from = board
            .find_feature(plan_move.from, &plan_move.feature)
            .ok_or_else(|| {
                CliError::validation(format!(
                    "Feature '{}' is not in the {} tier",
                    plan_move.feature,
                    plan_move.from.label()
                ))
            })?;
        let end = board.zone(plan_move.to).len();
        board.move_card(from, CardLocation::new(plan_move.to, end));
        tracing::debug!(
            feature = %plan_move.feature,
            from = %plan_move.from,
            to = %plan_move.to,
            "applied move"
        );
    }

    Ok(rebuild_configuration(&board))
}

impl QuoteArgs {
    /// Execute quote command
    pub fn execute(&self) -> CliResult<()> {
        let catalog = load_catalog(self.catalog.as_deref())?;
        let plan = match &self.plan {
            Some(path) => load_plan(path)?,
            None => catalog.default_plan().clone(),
        };
        let moves = self
            .moves
            .iter()
            .map(|spec| PlanMove::parse(spec))
            .collect::<CliResult<Vec<_>>>()?;

        let config = apply_moves(&plan, &moves)?;
        let summary = PlanSummary::new(&config, &catalog);

        if self.json {
            print_json(&summary)?;
        } else {
            print!("{}", summary.to_text());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::PricingEngine;
    use crate::models::PlanCatalog;

    #[test]
    fn test_parse_move() {
        let parsed = PlanMove::parse("glasscoat:Silver:bronze").unwrap();
        assert_eq!(parsed.feature, "glasscoat");
        assert_eq!(parsed.from, Tier::Silver);
        assert_eq!(parsed.to, Tier::Bronze);
    }

    #[test]
    fn test_parse_move_rejects_bad_input() {
        assert!(PlanMove::parse("glasscoat:silver").is_err());
        assert!(PlanMove::parse(":silver:gold").is_err());
        assert!(PlanMove::parse("gap:silver:diamond").is_err());
    }

    #[test]
    fn test_apply_move_reprices() {
        let catalog = PlanCatalog::builtin().unwrap();
        let moves = [PlanMove::parse("glasscoat:silver:bronze").unwrap()];
        let config = apply_moves(catalog.default_plan(), &moves).unwrap();

        assert_eq!(config.features(Tier::Bronze), ["arc", "gap", "glasscoat"]);
        assert!(!config.contains(Tier::Silver, "glasscoat"));
        let engine = PricingEngine::new(&catalog);
        assert_eq!(engine.price_string(&config, Tier::Bronze), "$563.67");
    }

    #[test]
    fn test_apply_move_from_wrong_tier() {
        let catalog = PlanCatalog::builtin().unwrap();
        let moves = [PlanMove::parse("tirewheel:bronze:gold").unwrap()];
        let err = apply_moves(catalog.default_plan(), &moves).unwrap_err();
        assert!(err.message.contains("not in the Bronze tier"));
    }

    #[test]
    fn test_unknown_features_survive_moves() {
        let plan = Configuration::from_lists([&["mystery"][..], &[], &[], &["arc"]]);
        let moves = [PlanMove::parse("arc:bronze:platinum").unwrap()];
        let config = apply_moves(&plan, &moves).unwrap();
        assert_eq!(config.features(Tier::Platinum), ["mystery", "arc"]);
    }
}
