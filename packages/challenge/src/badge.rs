//! Badge tiers earned from accumulated points.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Badge awarded for a point total.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum Badge {
    /// Under 100 points
    Seedling,
    /// 100 points or more
    Sprout,
    /// 250 points or more
    Sapling,
    /// 500 points or more
    Evergreen,
    /// 1000 points or more
    EarthGuardian,
}

impl Badge {
    /// Returns all badges from lowest to highest.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Seedling,
            Self::Sprout,
            Self::Sapling,
            Self::Evergreen,
            Self::EarthGuardian,
        ]
    }

    /// Points needed to earn this badge.
    #[must_use]
    pub const fn threshold(self) -> u64 {
        match self {
            Self::Seedling => 0,
            Self::Sprout => 100,
            Self::Sapling => 250,
            Self::Evergreen => 500,
            Self::EarthGuardian => 1000,
        }
    }

    /// Returns the highest badge whose threshold `points` reaches.
    #[must_use]
    pub fn for_points(points: u64) -> Self {
        Self::all()
            .iter()
            .rev()
            .copied()
            .find(|badge| points >= badge.threshold())
            .unwrap_or(Self::Seedling)
    }

    /// Returns the next badge up, or `None` at the top tier.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Seedling => Some(Self::Sprout),
            Self::Sprout => Some(Self::Sapling),
            Self::Sapling => Some(Self::Evergreen),
            Self::Evergreen => Some(Self::EarthGuardian),
            Self::EarthGuardian => None,
        }
    }

    /// Points still missing to reach the next badge, or `None` at the top
    /// tier.
    #[must_use]
    pub fn points_to_next(points: u64) -> Option<u64> {
        Self::for_points(points)
            .next()
            .map(|next| next.threshold().saturating_sub(points))
    }
}
