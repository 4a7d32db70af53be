//! Mouse input: dragging cards between columns and clicking the controls.

use anyhow::Result;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use std::time::Instant;

use super::action_handlers::{cards, plan};
use crate::board::{CardLocation, DragSession};
use crate::tui::{AppState, ControlButton};

/// Drop-zone slot under the pointer, if it is over a column.
fn slot_under(state: &AppState, column: u16, row: u16) -> Option<CardLocation> {
    let layout = state.board_layout();
    layout.slot_at(column, row, |tier| {
        state.scroll_offset(tier, layout.column(tier).visible_slots())
    })
}

/// Handle a mouse event
pub fn handle_mouse_event(state: &mut AppState, mouse: MouseEvent, now: Instant) -> Result<()> {
    // Popups and the error overlay are keyboard-only
    if state.error_message.is_some() || state.popup().is_some() {
        return Ok(());
    }

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => handle_press(state, mouse.column, mouse.row, now),
        MouseEventKind::Drag(MouseButton::Left) => {
            if state.drag.is_some() {
                if let Some(location) = slot_under(state, mouse.column, mouse.row) {
                    let board = state.configurator.board();
                    if let Some(session) = state.drag.as_mut() {
                        session.set_target(board, location);
                    }
                }
            }
            Ok(())
        }
        MouseEventKind::Up(MouseButton::Left) => {
            let Some(mut session) = state.drag.take() else {
                return Ok(());
            };
            match slot_under(state, mouse.column, mouse.row) {
                Some(location) => {
                    session.set_target(state.configurator.board(), location);
                    cards::drop_session(state, session, now);
                }
                // Released outside every column: the card stays put
                None => state.set_status("Move cancelled"),
            }
            Ok(())
        }
        _ => Ok(()),
    }
}

fn handle_press(state: &mut AppState, column: u16, row: u16, now: Instant) -> Result<()> {
    if let Some(button) = state.controls_layout().button_at(column, row) {
        state.drag = None;
        match button {
            ControlButton::Save => plan::handle_save(state, now)?,
            ControlButton::Reset => plan::handle_request_reset(state)?,
        };
        return Ok(());
    }

    let Some(location) = slot_under(state, column, row) else {
        return Ok(());
    };
    state.cursor = location;
    state.clamp_cursor();
    // A press on an empty part of a zone only moves the cursor
    state.drag = DragSession::begin(state.configurator.board(), location);
    Ok(())
}
