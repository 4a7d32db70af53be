// Drag and drop action handlers

use anyhow::Result;
use std::time::Instant;

use crate::board::{CardLocation, DragSession};
use crate::tui::AppState;

/// Display name of a feature, falling back to its ID.
fn feature_title(state: &AppState, feature: &str) -> String {
    state
        .configurator
        .catalog()
        .feature(feature)
        .map_or_else(|| feature.to_string(), |f| f.title.clone())
}

/// Handle pick up action: lifts the selected card
pub fn handle_pick_up_card(state: &mut AppState) -> Result<bool> {
    let Some(session) = DragSession::begin(state.configurator.board(), state.cursor) else {
        state.set_status("No card selected");
        return Ok(false);
    };
    let title = state
        .configurator
        .board()
        .card(session.card())
        .map(|card| feature_title(state, &card.feature))
        .unwrap_or_default();
    state.drag = Some(session);
    state.set_status(format!("Moving {title} - arrows choose a slot, Enter drops"));
    Ok(false)
}

/// Handle move card up action
pub fn handle_move_card_up(state: &mut AppState) -> Result<bool> {
    if let Some(session) = state.drag.as_mut() {
        session.move_up();
    }
    Ok(false)
}

/// Handle move card down action
pub fn handle_move_card_down(state: &mut AppState) -> Result<bool> {
    if let Some(session) = state.drag.as_mut() {
        session.move_down(state.configurator.board());
    }
    Ok(false)
}

/// Handle move card left action
pub fn handle_move_card_left(state: &mut AppState) -> Result<bool> {
    if let Some(session) = state.drag.as_mut() {
        session.move_left(state.configurator.board());
    }
    Ok(false)
}

/// Handle move card right action
pub fn handle_move_card_right(state: &mut AppState) -> Result<bool> {
    if let Some(session) = state.drag.as_mut() {
        session.move_right(state.configurator.board());
    }
    Ok(false)
}

/// Finishes a drag and follows the card with the cursor.
pub(crate) fn drop_session(state: &mut AppState, session: DragSession, now: Instant) {
    match state.configurator.finish_drag(session, now) {
        Some(event) => {
            state.cursor = CardLocation::new(event.to, event.index);
            let title = state
                .configurator
                .board()
                .card(event.card)
                .map(|card| feature_title(state, &card.feature))
                .unwrap_or_default();
            state.set_status(format!("Moved {title} to {}", event.to.label()));
        }
        None => {
            state.clamp_cursor();
            state.set_status("Card is no longer on the board");
        }
    }
}

/// Handle drop action: moves the lifted card to its target
pub fn handle_drop_card(state: &mut AppState, now: Instant) -> Result<bool> {
    if let Some(session) = state.drag.take() {
        drop_session(state, session, now);
    }
    Ok(false)
}

/// Handle cancel drag action: the board is left untouched
pub fn handle_cancel_drag(state: &mut AppState) -> Result<bool> {
    if state.drag.take().is_some() {
        state.set_status("Move cancelled");
    }
    Ok(false)
}
