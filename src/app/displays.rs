//! Price display locations.
//!
//! Every tier has a header display. Footer and summary displays exist only
//! when enabled; writes to an absent location are skipped.

use crate::models::Tier;

/// Kind of display location for a tier's payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplaySlot {
    /// Column header
    Header,
    /// Box under the column
    Footer,
    /// Row in the summary panel
    Summary,
}

impl DisplaySlot {
    /// All slots in render order.
    pub const ALL: [Self; 3] = [Self::Header, Self::Footer, Self::Summary];
}

/// Text and emphasis of one display location.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceDisplay {
    /// Formatted payment
    pub text: String,
    /// Set on update, cleared by a timer
    pub emphasized: bool,
}

/// All display locations, indexed by tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceDisplays {
    header: [PriceDisplay; 4],
    footer: Option<[PriceDisplay; 4]>,
    summary: Option<[PriceDisplay; 4]>,
}

impl PriceDisplays {
    /// Creates blank displays with the optional locations present or not.
    #[must_use]
    pub fn new(footer: bool, summary: bool) -> Self {
        Self {
            header: Default::default(),
            footer: footer.then(Default::default),
            summary: summary.then(Default::default),
        }
    }

    fn row(&self, slot: DisplaySlot) -> Option<&[PriceDisplay; 4]> {
        match slot {
            DisplaySlot::Header => Some(&self.header),
            DisplaySlot::Footer => self.footer.as_ref(),
            DisplaySlot::Summary => self.summary.as_ref(),
        }
    }

    fn row_mut(&mut self, slot: DisplaySlot) -> Option<&mut [PriceDisplay; 4]> {
        match slot {
            DisplaySlot::Header => Some(&mut self.header),
            DisplaySlot::Footer => self.footer.as_mut(),
            DisplaySlot::Summary => self.summary.as_mut(),
        }
    }

    /// Whether a location exists.
    #[must_use]
    pub fn has(&self, slot: DisplaySlot) -> bool {
        self.row(slot).is_some()
    }

    /// A tier's display at `slot`, if that location exists.
    #[must_use]
    pub fn get(&self, tier: Tier, slot: DisplaySlot) -> Option<&PriceDisplay> {
        self.row(slot).map(|row| &row[tier.index()])
    }

    /// Writes `text` to every present location of `tier` and emphasizes them.
    ///
    /// Returns the slots that were written.
    pub fn write(&mut self, tier: Tier, text: &str) -> Vec<DisplaySlot> {
        DisplaySlot::ALL
            .into_iter()
            .filter(|&slot| self.write_slot(tier, slot, text, true))
            .collect()
    }

    /// Writes `text` to one location. Returns `false` if it does not exist.
    pub fn write_slot(&mut self, tier: Tier, slot: DisplaySlot, text: &str, emphasize: bool) -> bool {
        let Some(row) = self.row_mut(slot) else {
            return false;
        };
        let display = &mut row[tier.index()];
        text.clone_into(&mut display.text);
        display.emphasized = emphasize;
        true
    }

    /// Removes emphasis from one location.
    pub fn clear_emphasis(&mut self, tier: Tier, slot: DisplaySlot) {
        if let Some(row) = self.row_mut(slot) {
            row[tier.index()].emphasized = false;
        }
    }
}
