// Save and reset action handlers

use anyhow::Result;
use std::time::Instant;

use crate::tui::{AppState, ConfirmChoice};

/// Handle save action: starts the simulated save
pub fn handle_save(state: &mut AppState, now: Instant) -> Result<bool> {
    if state.configurator.save_flow().is_none() {
        state.set_status("Saving is not available");
    } else if state.configurator.request_save(now) {
        state.set_status("Saving configuration...");
    }
    Ok(false)
}

/// Handle reset action: opens the confirmation dialog
pub fn handle_request_reset(state: &mut AppState) -> Result<bool> {
    if state.configurator.reset_flow().is_none() {
        state.set_status("Reset is not available");
    } else if state.configurator.request_reset() {
        state.drag = None;
        state.reset_choice = ConfirmChoice::default();
    }
    Ok(false)
}
