//! Popup input handlers: help overlay, reset confirmation and summary.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use std::time::Instant;

use crate::app::ToastKind;
use crate::tui::{AppState, ConfirmChoice, KeyOutcome, Overlay, PopupType};

/// Route input to the popup on top
pub fn handle_popup_input(
    state: &mut AppState,
    popup: PopupType,
    key: KeyEvent,
    now: Instant,
) -> Result<bool> {
    match popup {
        PopupType::HelpOverlay => handle_help_input(state, key),
        PopupType::ResetConfirm => handle_reset_confirm_input(state, key, now),
        PopupType::Summary => handle_summary_input(state, key, now),
    }
}

fn handle_help_input(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    let outcome = state.help.as_mut().map(|help| help.handle_key(key));
    if outcome == Some(KeyOutcome::Closed) {
        state.close_help_overlay();
    }
    Ok(false)
}

fn handle_reset_confirm_input(state: &mut AppState, key: KeyEvent, now: Instant) -> Result<bool> {
    let choice = match key.code {
        KeyCode::Left
        | KeyCode::Right
        | KeyCode::Tab
        | KeyCode::BackTab
        | KeyCode::Char('h' | 'l') => {
            state.reset_choice = state.reset_choice.toggled();
            return Ok(false);
        }
        KeyCode::Enter => state.reset_choice,
        KeyCode::Char('y' | 'Y') => ConfirmChoice::Confirm,
        KeyCode::Char('n' | 'N') | KeyCode::Esc => ConfirmChoice::Cancel,
        _ => return Ok(false),
    };

    match choice {
        ConfirmChoice::Confirm => {
            if state.configurator.confirm_reset(now) {
                state.clamp_cursor();
                state.set_status("Configuration reset to default");
            }
        }
        ConfirmChoice::Cancel => {
            if state.configurator.cancel_reset(now) {
                state.set_status("Reset cancelled");
            }
        }
    }
    state.reset_choice = ConfirmChoice::default();
    Ok(false)
}

fn handle_summary_input(state: &mut AppState, key: KeyEvent, now: Instant) -> Result<bool> {
    match key.code {
        // Ctrl+C arrives with the same code
        KeyCode::Char('c') => copy_summary(state, now),
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q') => {
            state.configurator.dismiss_summary();
        }
        _ => {}
    }
    Ok(false)
}

fn copy_summary(state: &mut AppState, now: Instant) {
    let Some(text) = state
        .configurator
        .save_flow()
        .and_then(|flow| flow.summary())
        .map(crate::app::PlanSummary::to_text)
    else {
        return;
    };

    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text)) {
        Ok(()) => {
            state.configurator.show_toast(
                "Copied",
                "Plan summary copied to the clipboard.",
                ToastKind::Success,
                now,
            );
        }
        Err(e) => {
            tracing::warn!(error = %e, "clipboard unavailable");
            state.set_error(format!("Failed to copy to clipboard: {e}"));
        }
    }
}
