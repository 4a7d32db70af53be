//! The drag surface: four drop zones holding feature cards.
//!
//! The board is the visual arrangement the live configuration is rebuilt
//! from. All four zones form a single exchange group, so a card can move
//! from any zone to any other or reorder within its own zone. Moving is a
//! transfer: the card is removed from its source before it is inserted.

pub mod drag;

use uuid::Uuid;

use crate::models::{Configuration, PlanCatalog, Tier};

pub use drag::DragSession;

/// A rendered feature card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// Instance identifier, unique across the board
    pub id: Uuid,
    /// Feature identifier this card represents
    pub feature: String,
    /// Category marker (the tier whose color the card wears)
    pub marker: Tier,
    /// Transient drop highlight
    pub highlighted: bool,
}

impl Card {
    /// Creates a card wearing the marker of `tier`.
    #[must_use]
    pub fn new(feature: impl Into<String>, tier: Tier) -> Self {
        Self {
            id: Uuid::new_v4(),
            feature: feature.into(),
            marker: tier,
            highlighted: false,
        }
    }
}

/// Position of a card (or an insertion point) on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardLocation {
    /// Zone
    pub tier: Tier,
    /// Index within the zone
    pub index: usize,
}

impl CardLocation {
    /// Creates a location.
    #[must_use]
    pub const fn new(tier: Tier, index: usize) -> Self {
        Self { tier, index }
    }
}

/// Notification that a drag finished with a drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropEvent {
    /// The moved card
    pub card: Uuid,
    /// Zone the card left
    pub from: Tier,
    /// Zone the card landed in
    pub to: Tier,
    /// Final index in the destination zone
    pub index: usize,
}

/// Ordered cards of one tier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropZone {
    cards: Vec<Card>,
}

impl DropZone {
    /// Cards in display order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the zone holds no card.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Four drop zones sharing one exchange group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    zones: [DropZone; 4],
}

impl Board {
    /// Creates a board with every zone empty.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board showing `config`.
    #[must_use]
    pub fn from_configuration(config: &Configuration, catalog: &PlanCatalog) -> Self {
        let mut board = Self::new();
        board.populate(config, catalog);
        board
    }

    /// Appends a card for every catalog feature in `config`, each in its
    /// tier's zone and wearing that tier's marker.
    ///
    /// Identifiers missing from the catalog have no card template and are
    /// skipped.
    pub fn populate(&mut self, config: &Configuration, catalog: &PlanCatalog) {
        for (tier, ids) in config.iter() {
            for id in ids {
                if catalog.contains(id) {
                    self.zones[tier.index()].cards.push(Card::new(id.as_str(), tier));
                } else {
                    tracing::debug!(%tier, feature = %id, "no card template, skipping");
                }
            }
        }
    }

    /// Removes every card from every zone.
    pub fn clear(&mut self) {
        for zone in &mut self.zones {
            zone.cards.clear();
        }
    }

    /// Appends a card for `feature` to a zone regardless of the catalog and
    /// returns its instance ID.
    pub fn place(&mut self, tier: Tier, feature: impl Into<String>) -> Uuid {
        let card = Card::new(feature, tier);
        let id = card.id;
        self.zones[tier.index()].cards.push(card);
        id
    }

    /// A zone.
    #[must_use]
    pub fn zone(&self, tier: Tier) -> &DropZone {
        &self.zones[tier.index()]
    }

    /// Card at a location.
    #[must_use]
    pub fn card_at(&self, location: CardLocation) -> Option<&Card> {
        self.zone(location.tier).cards.get(location.index)
    }

    /// Finds where a card currently sits.
    #[must_use]
    pub fn locate(&self, id: Uuid) -> Option<CardLocation> {
        Tier::ALL.into_iter().find_map(|tier| {
            self.zone(tier)
                .cards
                .iter()
                .position(|c| c.id == id)
                .map(|index| CardLocation::new(tier, index))
        })
    }

    /// Finds the first card showing `feature` in a zone.
    #[must_use]
    pub fn find_feature(&self, tier: Tier, feature: &str) -> Option<CardLocation> {
        self.zone(tier)
            .cards
            .iter()
            .position(|c| c.feature == feature)
            .map(|index| CardLocation::new(tier, index))
    }

    /// Looks up a card by instance ID.
    #[must_use]
    pub fn card(&self, id: Uuid) -> Option<&Card> {
        self.locate(id).and_then(|loc| self.card_at(loc))
    }

    /// Mutable lookup by instance ID.
    pub fn card_mut(&mut self, id: Uuid) -> Option<&mut Card> {
        let loc = self.locate(id)?;
        self.zones[loc.tier.index()].cards.get_mut(loc.index)
    }

    /// Moves the card at `from` so that it ends up at `to`.
    ///
    /// `to.index` is the insertion index in the destination zone as it looks
    /// after the card has been lifted out, clamped to the zone length. A
    /// drop onto the card's own position is still a completed drop.
    ///
    /// Returns `None` when there is no card at `from`.
    pub fn move_card(&mut self, from: CardLocation, to: CardLocation) -> Option<DropEvent> {
        let source = &mut self.zones[from.tier.index()].cards;
        if from.index >= source.len() {
            return None;
        }
        let card = source.remove(from.index);
        let id = card.id;

        let dest = &mut self.zones[to.tier.index()].cards;
        let index = to.index.min(dest.len());
        dest.insert(index, card);

        Some(DropEvent {
            card: id,
            from: from.tier,
            to: to.tier,
            index,
        })
    }

    /// Feature identifiers of a zone in board order.
    #[must_use]
    pub fn scan(&self, tier: Tier) -> Vec<String> {
        self.zone(tier)
            .cards
            .iter()
            .map(|c| c.feature.clone())
            .collect()
    }

    /// Total number of cards on the board.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.zones.iter().map(DropZone::len).sum()
    }
}
