//! Centralized shortcut and action system.
//!
//! This module provides a unified system for keyboard shortcuts and actions,
//! connecting help text definitions with actual event handling logic.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Context used while browsing the board.
pub const MAIN_CONTEXT: &str = "main";

/// Context used while a card is lifted.
pub const DRAG_CONTEXT: &str = "drag";

/// All possible actions in the application.
///
/// This enum represents every action a user can take. It serves as the
/// bridge between keyboard shortcuts and application behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // === NAVIGATION ===
    NavigateUp,
    NavigateDown,
    NavigateLeft,
    NavigateRight,
    JumpToFirst,
    JumpToLast,
    NextColumn,
    PreviousColumn,

    // === DRAG & DROP ===
    PickUpCard,
    MoveCardUp,
    MoveCardDown,
    MoveCardLeft,
    MoveCardRight,
    DropCard,
    CancelDrag,

    // === PLAN ===
    SaveConfiguration,
    RequestReset,

    // === NOTIFICATIONS ===
    DismissToast,

    // === HELP ===
    ToggleHelp,

    // === GENERAL ===
    Quit,
    Cancel,
}

impl Action {
    /// Get the action ID string used in help.toml
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            // Navigation
            Self::NavigateUp => "navigate_up",
            Self::NavigateDown => "navigate_down",
            Self::NavigateLeft => "navigate_left",
            Self::NavigateRight => "navigate_right",
            Self::JumpToFirst => "jump_first",
            Self::JumpToLast => "jump_last",
            Self::NextColumn => "next_column",
            Self::PreviousColumn => "previous_column",

            // Drag & drop
            Self::PickUpCard => "pick_up_card",
            Self::MoveCardUp => "move_card_up",
            Self::MoveCardDown => "move_card_down",
            Self::MoveCardLeft => "move_card_left",
            Self::MoveCardRight => "move_card_right",
            Self::DropCard => "drop_card",
            Self::CancelDrag => "cancel_drag",

            // Plan
            Self::SaveConfiguration => "save_configuration",
            Self::RequestReset => "request_reset",

            // Notifications
            Self::DismissToast => "dismiss_toast",

            // Help
            Self::ToggleHelp => "toggle_help",

            // General
            Self::Quit => "quit",
            Self::Cancel => "cancel",
        }
    }
}

/// Shortcut registry that maps key events to actions for a given context.
///
/// This is the central source of truth for all keyboard shortcuts in the application.
pub struct ShortcutRegistry {
    /// Maps (context, key_binding) to Action
    bindings: HashMap<(String, KeyBinding), Action>,
}

/// A key binding (key + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a new key binding.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a key binding from a KeyEvent.
    #[must_use]
    pub const fn from_event(event: KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers,
        }
    }
}

impl ShortcutRegistry {
    /// Create a new shortcut registry with default bindings.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            bindings: HashMap::new(),
        };

        registry.register_main_shortcuts();
        registry.register_drag_shortcuts();
        registry
    }

    /// Register all shortcuts for the main context.
    fn register_main_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = MAIN_CONTEXT;

        // === NAVIGATION ===
        self.register(ctx, K::Up, M::NONE, Action::NavigateUp);
        self.register(ctx, K::Down, M::NONE, Action::NavigateDown);
        self.register(ctx, K::Left, M::NONE, Action::NavigateLeft);
        self.register(ctx, K::Right, M::NONE, Action::NavigateRight);
        self.register(ctx, K::Char('k'), M::NONE, Action::NavigateUp);
        self.register(ctx, K::Char('j'), M::NONE, Action::NavigateDown);
        self.register(ctx, K::Char('h'), M::NONE, Action::NavigateLeft);
        self.register(ctx, K::Char('l'), M::NONE, Action::NavigateRight);
        self.register(ctx, K::Home, M::NONE, Action::JumpToFirst);
        self.register(ctx, K::End, M::NONE, Action::JumpToLast);
        self.register(ctx, K::Tab, M::NONE, Action::NextColumn);
        self.register(ctx, K::BackTab, M::SHIFT, Action::PreviousColumn);
        self.register(ctx, K::BackTab, M::NONE, Action::PreviousColumn);

        // === DRAG & DROP ===
        self.register(ctx, K::Enter, M::NONE, Action::PickUpCard);
        self.register(ctx, K::Char(' '), M::NONE, Action::PickUpCard);

        // === PLAN ===
        self.register(ctx, K::Char('s'), M::NONE, Action::SaveConfiguration);
        self.register(ctx, K::Char('s'), M::CONTROL, Action::SaveConfiguration);
        self.register(ctx, K::Char('r'), M::NONE, Action::RequestReset);
        self.register(ctx, K::Char('r'), M::CONTROL, Action::RequestReset);

        // === NOTIFICATIONS ===
        self.register(ctx, K::Char('x'), M::NONE, Action::DismissToast);

        // === HELP ===
        self.register(ctx, K::Char('?'), M::NONE, Action::ToggleHelp);

        // === GENERAL ===
        self.register(ctx, K::Char('q'), M::NONE, Action::Quit);
        self.register(ctx, K::Char('q'), M::CONTROL, Action::Quit);
        self.register(ctx, K::Esc, M::NONE, Action::Cancel);
    }

    /// Register all shortcuts used while a card is lifted.
    fn register_drag_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = DRAG_CONTEXT;

        self.register(ctx, K::Up, M::NONE, Action::MoveCardUp);
        self.register(ctx, K::Down, M::NONE, Action::MoveCardDown);
        self.register(ctx, K::Left, M::NONE, Action::MoveCardLeft);
        self.register(ctx, K::Right, M::NONE, Action::MoveCardRight);
        self.register(ctx, K::Char('k'), M::NONE, Action::MoveCardUp);
        self.register(ctx, K::Char('j'), M::NONE, Action::MoveCardDown);
        self.register(ctx, K::Char('h'), M::NONE, Action::MoveCardLeft);
        self.register(ctx, K::Char('l'), M::NONE, Action::MoveCardRight);
        self.register(ctx, K::Tab, M::NONE, Action::MoveCardRight);
        self.register(ctx, K::BackTab, M::SHIFT, Action::MoveCardLeft);
        self.register(ctx, K::BackTab, M::NONE, Action::MoveCardLeft);

        self.register(ctx, K::Enter, M::NONE, Action::DropCard);
        self.register(ctx, K::Char(' '), M::NONE, Action::DropCard);
        self.register(ctx, K::Esc, M::NONE, Action::CancelDrag);

        self.register(ctx, K::Char('?'), M::NONE, Action::ToggleHelp);
        self.register(ctx, K::Char('q'), M::CONTROL, Action::Quit);
    }

    /// Register a shortcut binding.
    fn register(&mut self, context: &str, code: KeyCode, modifiers: KeyModifiers, action: Action) {
        let binding = KeyBinding::new(code, modifiers);
        self.bindings.insert((context.to_string(), binding), action);
    }

    /// Look up an action for a given context and key event.
    #[must_use]
    pub fn lookup(&self, context: &str, event: KeyEvent) -> Option<Action> {
        let binding = KeyBinding::from_event(event);
        self.bindings.get(&(context.to_string(), binding)).copied()
    }

    /// Check if a key event matches a specific action in the given context.
    #[must_use]
    pub fn matches(&self, context: &str, event: KeyEvent, action: Action) -> bool {
        self.lookup(context, event) == Some(action)
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_lookup() {
        let registry = ShortcutRegistry::new();

        let event = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(registry.lookup(MAIN_CONTEXT, event), Some(Action::NavigateUp));

        let event = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert_eq!(
            registry.lookup(MAIN_CONTEXT, event),
            Some(Action::SaveConfiguration)
        );

        let event = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE);
        assert!(registry.matches(MAIN_CONTEXT, event, Action::RequestReset));
    }

    #[test]
    fn test_contexts_are_separate() {
        let registry = ShortcutRegistry::new();
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(registry.lookup(MAIN_CONTEXT, enter), Some(Action::PickUpCard));
        assert_eq!(registry.lookup(DRAG_CONTEXT, enter), Some(Action::DropCard));

        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(registry.lookup(DRAG_CONTEXT, esc), Some(Action::CancelDrag));

        // plain q must not quit mid-drag
        let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(registry.lookup(DRAG_CONTEXT, q), None);
    }

    #[test]
    fn test_vim_navigation() {
        let registry = ShortcutRegistry::new();

        assert_eq!(
            registry.lookup(
                MAIN_CONTEXT,
                KeyEvent::new(KeyCode::Char('h'), KeyModifiers::NONE)
            ),
            Some(Action::NavigateLeft)
        );
        assert_eq!(
            registry.lookup(
                DRAG_CONTEXT,
                KeyEvent::new(KeyCode::Char('l'), KeyModifiers::NONE)
            ),
            Some(Action::MoveCardRight)
        );
    }
}
