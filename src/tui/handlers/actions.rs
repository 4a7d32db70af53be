//! Action dispatch for the board and drag contexts.

use anyhow::Result;
use std::time::Instant;

use crate::shortcuts::Action;
use crate::tui::AppState;

use super::action_handlers::{cards, navigation, plan, popups};

/// Dispatch action to appropriate handler
pub fn dispatch_action(state: &mut AppState, action: Action, now: Instant) -> Result<bool> {
    match action {
        // Navigation (8 actions)
        Action::NavigateUp => navigation::handle_navigate_up(state),
        Action::NavigateDown => navigation::handle_navigate_down(state),
        Action::NavigateLeft => navigation::handle_navigate_left(state),
        Action::NavigateRight => navigation::handle_navigate_right(state),
        Action::JumpToFirst => navigation::handle_jump_to_first(state),
        Action::JumpToLast => navigation::handle_jump_to_last(state),
        Action::NextColumn => navigation::handle_next_column(state),
        Action::PreviousColumn => navigation::handle_previous_column(state),

        // Drag and drop (7 actions)
        Action::PickUpCard => cards::handle_pick_up_card(state),
        Action::MoveCardUp => cards::handle_move_card_up(state),
        Action::MoveCardDown => cards::handle_move_card_down(state),
        Action::MoveCardLeft => cards::handle_move_card_left(state),
        Action::MoveCardRight => cards::handle_move_card_right(state),
        Action::DropCard => cards::handle_drop_card(state, now),
        Action::CancelDrag => cards::handle_cancel_drag(state),

        // Plan (2 actions)
        Action::SaveConfiguration => plan::handle_save(state, now),
        Action::RequestReset => plan::handle_request_reset(state),

        // Notifications and help (2 actions)
        Action::DismissToast => popups::handle_dismiss_toast(state, now),
        Action::ToggleHelp => popups::handle_toggle_help(state),

        // General (2 actions)
        Action::Quit => {
            state.should_quit = true;
            Ok(true)
        }
        Action::Cancel => {
            state.set_status("");
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CardLocation;
    use crate::models::Tier;
    use crate::tui::handle_key_event;
    use crate::tui::tests::test_state;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn press(state: &mut AppState, code: KeyCode, now: Instant) -> bool {
        handle_key_event(state, KeyEvent::new(code, KeyModifiers::NONE), now).unwrap()
    }

    #[test]
    fn test_keyboard_move_reprices() {
        let mut state = test_state();
        let now = Instant::now();
        let silver_before = state.configurator.price(Tier::Silver);
        let bronze_before = state.configurator.price(Tier::Bronze);

        state.cursor = CardLocation::new(Tier::Bronze, 0);
        press(&mut state, KeyCode::Enter, now);
        assert!(state.drag.is_some());

        press(&mut state, KeyCode::Left, now);
        press(&mut state, KeyCode::Enter, now);
        assert!(state.drag.is_none());

        let board = state.configurator.board();
        assert_eq!(board.zone(Tier::Bronze).len(), 1);
        assert_eq!(board.zone(Tier::Silver).len(), 4);
        assert_eq!(state.cursor, CardLocation::new(Tier::Silver, 0));

        let moved = state.configurator.price(Tier::Silver) - silver_before;
        assert_eq!(bronze_before - state.configurator.price(Tier::Bronze), moved);
    }

    #[test]
    fn test_escape_cancels_drag() {
        let mut state = test_state();
        let now = Instant::now();
        let before = state.configurator.configuration().clone();

        state.cursor = CardLocation::new(Tier::Gold, 1);
        press(&mut state, KeyCode::Char(' '), now);
        press(&mut state, KeyCode::Right, now);
        press(&mut state, KeyCode::Esc, now);

        assert!(state.drag.is_none());
        assert_eq!(state.configurator.configuration(), &before);
    }

    #[test]
    fn test_pick_up_on_empty_slot() {
        let mut state = test_state();
        state.cursor = CardLocation::new(Tier::Bronze, 40);
        press(&mut state, KeyCode::Enter, Instant::now());
        assert!(state.drag.is_none());
    }

    #[test]
    fn test_reset_dialog_by_keys() {
        let mut state = test_state();
        let now = Instant::now();
        state.configurator.move_card(
            CardLocation::new(Tier::Bronze, 0),
            CardLocation::new(Tier::Platinum, 0),
            now,
        );
        let moved = state.configurator.configuration().clone();

        press(&mut state, KeyCode::Char('r'), now);
        assert!(state.configurator.reset_flow().unwrap().is_pending());

        // Enter on the default (Cancel) button keeps the board
        press(&mut state, KeyCode::Enter, now);
        assert_eq!(state.configurator.configuration(), &moved);

        press(&mut state, KeyCode::Char('r'), now);
        press(&mut state, KeyCode::Char('y'), now);
        assert_eq!(
            state.configurator.configuration(),
            state.configurator.catalog().default_plan()
        );
        assert_eq!(state.configurator.toasts().len(), 1);
    }

    #[test]
    fn test_save_then_dismiss_summary() {
        let mut state = test_state();
        let now = Instant::now();
        press(&mut state, KeyCode::Char('s'), now);
        assert!(state.configurator.save_flow().unwrap().is_saving());

        let later = now + state.configurator.timing().save_delay();
        state.configurator.tick(later);
        assert_eq!(state.popup(), Some(crate::tui::PopupType::Summary));

        press(&mut state, KeyCode::Esc, later);
        assert_eq!(state.popup(), None);
    }

    #[test]
    fn test_quit() {
        let mut state = test_state();
        assert!(press(&mut state, KeyCode::Char('q'), Instant::now()));
        assert!(state.should_quit);
    }
}
