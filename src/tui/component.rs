//! Overlays that own their state and take every key until they close.

use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

use crate::tui::Theme;

/// What an overlay did with a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Handled inside the overlay
    Consumed,
    /// Not bound in the overlay; swallowed so the board stays still
    Ignored,
    /// The overlay is done and should be dropped
    Closed,
}

/// A modal layer drawn over the board.
pub trait Overlay {
    /// Reacts to a key press.
    fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome;

    /// Draws the overlay inside `area` (usually the whole frame).
    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme);
}
