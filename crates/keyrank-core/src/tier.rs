//! Discrete relevance tiers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::RankError;

/// How strongly a candidate keyword relates to a target keyword.
///
/// Tiers are ordered by their score. Only [`Weak`](Self::Weak) and above are reportable;
/// [`Unrelated`](Self::Unrelated) marks rows that are discarded during aggregation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum RelevanceTier {
    /// No relation (score 0).
    Unrelated,
    /// Weak topical overlap (score 3).
    Weak,
    /// Strong partial overlap (score 4).
    Strong,
    /// Near-identical or high purchase intent (score 5).
    Exact,
}

impl RelevanceTier {
    /// Reportable tiers in display order, highest first.
    pub const REPORTABLE: [Self; 3] = [Self::Exact, Self::Strong, Self::Weak];

    /// Returns the integer score of this tier.
    pub const fn score(self) -> u8 {
        match self {
            Self::Unrelated => 0,
            Self::Weak => 3,
            Self::Strong => 4,
            Self::Exact => 5,
        }
    }

    /// Returns true for tiers that may appear in a result set.
    pub const fn is_reportable(self) -> bool {
        !matches!(self, Self::Unrelated)
    }

    /// Returns a short description of what the tier means.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Exact => "synonym, or a keyword likely to convert directly to a purchase",
            Self::Strong => "competitor keyword or closely related keyword",
            Self::Weak => "searched by people likely to buy the product",
            Self::Unrelated => "unrelated",
        }
    }
}

impl TryFrom<u8> for RelevanceTier {
    type Error = RankError;

    fn try_from(score: u8) -> Result<Self, Self::Error> {
        match score {
            0 => Ok(Self::Unrelated),
            3 => Ok(Self::Weak),
            4 => Ok(Self::Strong),
            5 => Ok(Self::Exact),
            other => Err(RankError::InvalidTier(other)),
        }
    }
}

impl From<RelevanceTier> for u8 {
    fn from(tier: RelevanceTier) -> Self {
        tier.score()
    }
}

impl fmt::Display for RelevanceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.score())
    }
}
