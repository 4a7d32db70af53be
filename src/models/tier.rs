//! The four coverage tiers and their category markers.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::RgbColor;

/// One of the four named coverage levels.
///
/// Tiers always appear in the fixed order of [`Tier::ALL`]: every scan,
/// price refresh and rendered column walks them in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Most complete coverage
    Platinum,
    /// Second tier
    Gold,
    /// Third tier
    Silver,
    /// Entry tier
    Bronze,
}

impl Tier {
    /// All tiers in display and scan order.
    pub const ALL: [Self; 4] = [Self::Platinum, Self::Gold, Self::Silver, Self::Bronze];

    /// Lowercase identifier used in files and on the command line.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Platinum => "platinum",
            Self::Gold => "gold",
            Self::Silver => "silver",
            Self::Bronze => "bronze",
        }
    }

    /// Human-readable column title.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Platinum => "Platinum",
            Self::Gold => "Gold",
            Self::Silver => "Silver",
            Self::Bronze => "Bronze",
        }
    }

    /// Position of the tier in [`Tier::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Platinum => 0,
            Self::Gold => 1,
            Self::Silver => 2,
            Self::Bronze => 3,
        }
    }

    /// Tier at a position in [`Tier::ALL`], if any.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Tier to the left, wrapping around.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Platinum => Self::Bronze,
            Self::Gold => Self::Platinum,
            Self::Silver => Self::Gold,
            Self::Bronze => Self::Silver,
        }
    }

    /// Tier to the right, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Platinum => Self::Gold,
            Self::Gold => Self::Silver,
            Self::Silver => Self::Bronze,
            Self::Bronze => Self::Platinum,
        }
    }

    /// Category marker color applied to cards sitting in this tier.
    #[must_use]
    pub const fn marker_color(self) -> RgbColor {
        match self {
            Self::Platinum => RgbColor::new(180, 190, 205),
            Self::Gold => RgbColor::new(212, 175, 55),
            Self::Silver => RgbColor::new(160, 160, 170),
            Self::Bronze => RgbColor::new(205, 127, 50),
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Tier {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let lowered = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|tier| tier.id() == lowered)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown tier '{s}' (expected one of: platinum, gold, silver, bronze)"
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_and_index_agree() {
        for (i, tier) in Tier::ALL.iter().enumerate() {
            assert_eq!(tier.index(), i);
            assert_eq!(Tier::from_index(i), Some(*tier));
        }
        assert_eq!(Tier::from_index(4), None);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("Gold".parse::<Tier>().unwrap(), Tier::Gold);
        assert_eq!(" bronze ".parse::<Tier>().unwrap(), Tier::Bronze);
        assert!("diamond".parse::<Tier>().is_err());
    }

    #[test]
    fn test_neighbours_wrap() {
        assert_eq!(Tier::Platinum.previous(), Tier::Bronze);
        assert_eq!(Tier::Bronze.next(), Tier::Platinum);
        for tier in Tier::ALL {
            assert_eq!(tier.next().previous(), tier);
        }
    }
}
