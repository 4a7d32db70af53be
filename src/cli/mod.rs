//! Headless CLI commands.
//!
//! Scriptable access to pricing and configuration without opening the
//! interactive board.

pub mod catalog;
pub mod common;
pub mod config;
pub mod quote;

// Re-export types used by main.rs and tests
pub use catalog::CatalogArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use quote::QuoteArgs;
