// Navigation action handlers

use anyhow::Result;

use crate::board::CardLocation;
use crate::models::Tier;
use crate::tui::AppState;

fn move_to_tier(state: &mut AppState, tier: Tier) {
    state.cursor = CardLocation::new(tier, state.cursor.index);
    state.clamp_cursor();
    state.clear_error();
}

/// Handle navigate up action
pub fn handle_navigate_up(state: &mut AppState) -> Result<bool> {
    state.cursor.index = state.cursor.index.saturating_sub(1);
    state.clear_error();
    Ok(false)
}

/// Handle navigate down action
pub fn handle_navigate_down(state: &mut AppState) -> Result<bool> {
    let len = state.configurator.board().zone(state.cursor.tier).len();
    if state.cursor.index + 1 < len {
        state.cursor.index += 1;
    }
    state.clear_error();
    Ok(false)
}

/// Handle navigate left action; stops at the first column
pub fn handle_navigate_left(state: &mut AppState) -> Result<bool> {
    let index = state.cursor.tier.index();
    if let Some(tier) = index.checked_sub(1).and_then(Tier::from_index) {
        move_to_tier(state, tier);
    }
    Ok(false)
}

/// Handle navigate right action; stops at the last column
pub fn handle_navigate_right(state: &mut AppState) -> Result<bool> {
    if let Some(tier) = Tier::from_index(state.cursor.tier.index() + 1) {
        move_to_tier(state, tier);
    }
    Ok(false)
}

/// Handle jump to first card of the column
pub fn handle_jump_to_first(state: &mut AppState) -> Result<bool> {
    state.cursor.index = 0;
    Ok(false)
}

/// Handle jump to last card of the column
pub fn handle_jump_to_last(state: &mut AppState) -> Result<bool> {
    let len = state.configurator.board().zone(state.cursor.tier).len();
    state.cursor.index = len.saturating_sub(1);
    Ok(false)
}

/// Handle next column action (wraps around)
pub fn handle_next_column(state: &mut AppState) -> Result<bool> {
    move_to_tier(state, state.cursor.tier.next());
    Ok(false)
}

/// Handle previous column action (wraps around)
pub fn handle_previous_column(state: &mut AppState) -> Result<bool> {
    move_to_tier(state, state.cursor.tier.previous());
    Ok(false)
}
