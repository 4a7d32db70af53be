//! Keybinding help loaded from the embedded `help.toml`.
//!
//! The status bar reads the hinted bindings of the active context; the help
//! overlay lists every context in [`contexts::ORDER`].

use anyhow::{Context as _, Result};
use serde::Deserialize;
use std::collections::HashMap;

const HELP_TOML: &str = include_str!("../data/help.toml");

/// Known context names.
pub mod contexts {
    /// Board browsing
    pub const MAIN: &str = "main";
    /// A card is lifted
    pub const DRAG: &str = "drag";
    /// Reset confirmation dialog
    pub const RESET_CONFIRM: &str = "reset_confirm";
    /// Save summary dialog
    pub const SUMMARY: &str = "summary";
    /// Help overlay
    pub const HELP: &str = "help";

    /// Contexts in the order the help overlay lists them
    pub const ORDER: [&str; 5] = [MAIN, DRAG, RESET_CONFIRM, SUMMARY, HELP];
}

/// One documented key binding.
#[derive(Debug, Clone, Deserialize)]
pub struct Binding {
    /// Keys shown first
    pub keys: Vec<String>,
    /// Equivalent keys, shown in parentheses
    #[serde(default)]
    pub alt_keys: Vec<String>,
    /// What the binding does
    pub action: String,
    /// Short label for the status bar; unhinted bindings only appear in help
    pub hint: Option<String>,
    /// Lower sorts first
    #[serde(default = "default_priority")]
    pub priority: u32,
}

const fn default_priority() -> u32 {
    50
}

impl Binding {
    /// Keys as listed in the help overlay: `s (Ctrl+S)`.
    #[must_use]
    pub fn help_keys(&self) -> String {
        let keys = self.keys.join("/");
        if self.alt_keys.is_empty() {
            keys
        } else {
            format!("{keys} ({})", self.alt_keys.join("/"))
        }
    }

    /// Keys as listed on the status bar help line: `s/Ctrl+S`.
    #[must_use]
    pub fn status_keys(&self) -> String {
        let keys = self.keys.join(",");
        if self.alt_keys.is_empty() {
            keys
        } else {
            format!("{keys}/{}", self.alt_keys.join(","))
        }
    }

    /// Status bar label, falling back to the full action.
    #[must_use]
    pub fn label(&self) -> &str {
        self.hint.as_deref().unwrap_or(&self.action)
    }

    /// First key and label, for the compact hint line.
    #[must_use]
    pub fn short_hint(&self) -> (&str, &str) {
        (self.keys.first().map_or("", String::as_str), self.label())
    }
}

#[derive(Debug, Deserialize)]
struct RawSection {
    name: String,
    description: String,
    bindings: Vec<Binding>,
}

#[derive(Debug, Deserialize)]
struct RawHelp {
    meta: RawMeta,
    contexts: HashMap<String, RawSection>,
}

#[derive(Debug, Deserialize)]
struct RawMeta {
    app_name: String,
}

/// Help for one context, bindings sorted by priority.
#[derive(Debug, Clone)]
pub struct HelpSection {
    /// Context key (see [`contexts`])
    pub key: &'static str,
    /// Heading
    pub name: String,
    /// When the context is active
    pub description: String,
    /// Bindings, most important first
    pub bindings: Vec<Binding>,
}

/// Parsed help, one section per known context.
#[derive(Debug, Clone)]
pub struct HelpRegistry {
    app_name: String,
    sections: Vec<HelpSection>,
}

impl HelpRegistry {
    /// Parses the embedded help file.
    ///
    /// # Errors
    ///
    /// Fails when the file does not parse or a known context is missing.
    pub fn load() -> Result<Self> {
        Self::from_toml_str(HELP_TOML)
    }

    fn from_toml_str(content: &str) -> Result<Self> {
        let mut raw: RawHelp = toml::from_str(content).context("Invalid help definitions")?;

        let sections = contexts::ORDER
            .into_iter()
            .map(|key| {
                let mut section = raw
                    .contexts
                    .remove(key)
                    .with_context(|| format!("Help has no '{key}' context"))?;
                section.bindings.sort_by_key(|b| b.priority);
                Ok(HelpSection {
                    key,
                    name: section.name,
                    description: section.description,
                    bindings: section.bindings,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        for extra in raw.contexts.keys() {
            tracing::debug!(context = %extra, "help context is never shown");
        }

        Ok(Self {
            app_name: raw.meta.app_name,
            sections,
        })
    }

    /// Application name shown in the overlay title.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Every section in overlay order.
    #[must_use]
    pub fn sections(&self) -> &[HelpSection] {
        &self.sections
    }

    /// Section of a context, if known.
    #[must_use]
    pub fn section(&self, key: &str) -> Option<&HelpSection> {
        self.sections.iter().find(|s| s.key == key)
    }

    /// Hinted bindings of a context, most important first.
    pub fn hints<'a>(&'a self, key: &str) -> impl Iterator<Item = &'a Binding> + 'a {
        self.section(key)
            .map(|s| s.bindings.as_slice())
            .unwrap_or_default()
            .iter()
            .filter(|b| b.hint.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_follow_context_order() {
        let registry = HelpRegistry::load().unwrap();
        assert_eq!(registry.app_name(), "Plan Configurator");
        let keys: Vec<&str> = registry.sections().iter().map(|s| s.key).collect();
        assert_eq!(keys, contexts::ORDER);
        assert!(registry.sections().iter().all(|s| !s.bindings.is_empty()));
    }

    #[test]
    fn test_bindings_sorted_by_priority() {
        let registry = HelpRegistry::load().unwrap();
        let main = registry.section(contexts::MAIN).unwrap();
        for pair in main.bindings.windows(2) {
            assert!(pair[0].priority <= pair[1].priority);
        }
    }

    #[test]
    fn test_drag_hints() {
        let registry = HelpRegistry::load().unwrap();
        let first = registry.hints(contexts::DRAG).next().unwrap();
        assert_eq!(first.short_hint(), ("Enter", "Drop"));
        assert_eq!(registry.hints("nowhere").count(), 0);
    }

    #[test]
    fn test_save_binding_formats() {
        let registry = HelpRegistry::load().unwrap();
        let save = registry
            .hints(contexts::MAIN)
            .find(|b| b.label() == "Save")
            .unwrap();
        assert_eq!(save.help_keys(), "s (Ctrl+S)");
        assert_eq!(save.status_keys(), "s/Ctrl+S");
    }

    #[test]
    fn test_missing_context_is_an_error() {
        let content = r#"
[meta]
app_name = "x"

[contexts.main]
name = "Board"
description = "d"
bindings = []
"#;
        let err = HelpRegistry::from_toml_str(content).unwrap_err();
        assert!(err.to_string().contains("'drag'"));
    }
}
