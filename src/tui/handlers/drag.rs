//! Input handler while a card is lifted.

use anyhow::Result;
use crossterm::event;
use std::time::Instant;

use crate::shortcuts::DRAG_CONTEXT;
use crate::tui::AppState;

/// Handle input while a card is being moved with the keyboard
pub fn handle_drag_input(state: &mut AppState, key: event::KeyEvent, now: Instant) -> Result<bool> {
    if let Some(action) = state.shortcuts.lookup(DRAG_CONTEXT, key) {
        super::dispatch_action(state, action, now)
    } else {
        Ok(false)
    }
}
