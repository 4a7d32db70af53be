//! An in-progress drag of one card.
//!
//! Nothing on the board changes while a card is lifted; the move happens in
//! one step on drop, and cancelling simply discards the session.

use uuid::Uuid;

use super::{Board, CardLocation, DropEvent};
use crate::models::Tier;

/// State of a lifted card and where it would land.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    card: Uuid,
    origin: CardLocation,
    target: CardLocation,
}

impl DragSession {
    /// Lifts the card at `location`. Returns `None` for an empty slot.
    #[must_use]
    pub fn begin(board: &Board, location: CardLocation) -> Option<Self> {
        let card = board.card_at(location)?;
        Some(Self {
            card: card.id,
            origin: location,
            target: location,
        })
    }

    /// Instance ID of the lifted card.
    #[must_use]
    pub const fn card(&self) -> Uuid {
        self.card
    }

    /// Where the card was lifted from.
    #[must_use]
    pub const fn origin(&self) -> CardLocation {
        self.origin
    }

    /// Where the card would be dropped.
    #[must_use]
    pub const fn target(&self) -> CardLocation {
        self.target
    }

    /// Largest valid insertion index in `tier` while this card is lifted.
    fn max_index(&self, board: &Board, tier: Tier) -> usize {
        let len = board.zone(tier).len();
        if tier == self.origin.tier {
            len.saturating_sub(1)
        } else {
            len
        }
    }

    /// Points the drop target at `location`, clamping the index.
    pub fn set_target(&mut self, board: &Board, location: CardLocation) {
        let index = location.index.min(self.max_index(board, location.tier));
        self.target = CardLocation::new(location.tier, index);
    }

    /// Moves the target one zone to the left, keeping the row if possible.
    pub fn move_left(&mut self, board: &Board) {
        let tier = self.target.tier.previous();
        self.set_target(board, CardLocation::new(tier, self.target.index));
    }

    /// Moves the target one zone to the right, keeping the row if possible.
    pub fn move_right(&mut self, board: &Board) {
        let tier = self.target.tier.next();
        self.set_target(board, CardLocation::new(tier, self.target.index));
    }

    /// Moves the target one slot up within its zone.
    pub fn move_up(&mut self) {
        self.target.index = self.target.index.saturating_sub(1);
    }

    /// Moves the target one slot down within its zone.
    pub fn move_down(&mut self, board: &Board) {
        let next = self.target.index + 1;
        self.set_target(board, CardLocation::new(self.target.tier, next));
    }

    /// Drops the card at the target.
    ///
    /// Returns `None` if the card is no longer on the board (e.g. a reset
    /// happened while it was lifted).
    pub fn finish(self, board: &mut Board) -> Option<DropEvent> {
        let from = board.locate(self.card)?;
        board.move_card(from, self.target)
    }
}
