//! `catalog`: list the features that can be placed into tiers.

use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::common::{load_catalog, print_json, CliError, CliResult};
use crate::models::{Configuration, Feature, Money, PlanCatalog};

/// List the feature catalog
#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Catalog file (TOML); defaults to the configured or built-in catalog
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, conflicts_with = "toml")]
    json: bool,

    /// Output as a catalog file, ready to edit and pass to `--catalog`
    #[arg(long)]
    toml: bool,
}

/// JSON-serializable catalog for output
#[derive(Serialize, Debug)]
struct CatalogOutput<'a> {
    base_payment: Money,
    features: &'a [Feature],
    default_plan: &'a Configuration,
}

impl CatalogArgs {
    /// Execute catalog command
    pub fn execute(&self) -> CliResult<()> {
        let catalog = load_catalog(self.catalog.as_deref())?;

        if self.json {
            print_json(&CatalogOutput {
                base_payment: catalog.base_payment(),
                features: catalog.features(),
                default_plan: catalog.default_plan(),
            })
        } else if self.toml {
            let text = catalog
                .to_toml_string()
                .map_err(|e| CliError::io(format!("{e:#}")))?;
            print!("{text}");
            Ok(())
        } else {
            print!("{}", format_catalog(&catalog));
            Ok(())
        }
    }
}

/// Human-readable listing.
fn format_catalog(catalog: &PlanCatalog) -> String {
    let mut out = format!("Base payment: {}/month\n\nFeatures:\n", catalog.base_payment());

    let id_width = catalog
        .features()
        .iter()
        .map(|f| f.id.len())
        .max()
        .unwrap_or(0);
    for feature in catalog.features() {
        out.push_str(&format!(
            "  {:<id_width$}  {:>8}  {}\n",
            feature.id,
            feature.price.to_string(),
            feature.title
        ));
    }

    out.push_str("\nDefault plan:\n");
    for (tier, features) in catalog.default_plan().iter() {
        let list = if features.is_empty() {
            "(none)".to_string()
        } else {
            features.join(", ")
        };
        out.push_str(&format!("  {:<9} {list}\n", format!("{}:", tier.label())));
    }
    out
}
