//! Rebuilding the live configuration from the board.

use crate::board::Board;
use crate::models::{Configuration, Tier};

/// Reconstructs a configuration by scanning every zone in tier order.
///
/// The result is always built from scratch; the previous live state is never
/// patched.
#[must_use]
pub fn rebuild_configuration(board: &Board) -> Configuration {
    let mut config = Configuration::empty();
    for tier in Tier::ALL {
        *config.features_mut(tier) = board.scan(tier);
    }
    tracing::debug!(features = config.len(), "configuration rebuilt from board");
    config
}
