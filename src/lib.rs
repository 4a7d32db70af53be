//! Plan Configurator library
//!
//! Core of the tiered protection-plan configurator: the feature catalog,
//! the card board, pricing, the save and reset flows, and the terminal UI
//! that drives them.

pub mod app;
pub mod board;
pub mod cli;
pub mod config;
pub mod constants;
pub mod engine;
pub mod logging;
pub mod models;
pub mod shortcuts;
pub mod tui;
