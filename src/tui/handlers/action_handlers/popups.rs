// Help and notification action handlers

use anyhow::Result;
use std::time::Instant;

use crate::tui::AppState;

/// Handle toggle help action
pub fn handle_toggle_help(state: &mut AppState) -> Result<bool> {
    if state.help.is_some() {
        state.close_help_overlay();
    } else {
        state.open_help_overlay();
    }
    Ok(false)
}

/// Handle dismiss toast action: starts fading the newest notification
pub fn handle_dismiss_toast(state: &mut AppState, now: Instant) -> Result<bool> {
    state.configurator.close_latest_toast(now);
    Ok(false)
}
