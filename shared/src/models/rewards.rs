//! Loyalty Rewards Models

use crate::types::Timestamp;
use serde::{Deserialize, Serialize};

/// Points needed to reach Gold
pub const GOLD_THRESHOLD: u64 = 1000;
/// Points needed to reach Platinum
pub const PLATINUM_THRESHOLD: u64 = 2500;

/// Loyalty tier derived from the point total
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tier {
    Silver,
    Gold,
    Platinum,
}

impl Tier {
    /// Silver < 1000 ≤ Gold < 2500 ≤ Platinum
    pub fn from_points(points: u64) -> Self {
        if points >= PLATINUM_THRESHOLD {
            Self::Platinum
        } else if points >= GOLD_THRESHOLD {
            Self::Gold
        } else {
            Self::Silver
        }
    }

    /// Points at which the next tier starts (`None` at the top)
    pub fn next_threshold(&self) -> Option<u64> {
        match self {
            Self::Silver => Some(GOLD_THRESHOLD),
            Self::Gold => Some(PLATINUM_THRESHOLD),
            Self::Platinum => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Silver => "Silver",
            Self::Gold => "Gold",
            Self::Platinum => "Platinum",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Most recent award for a user (only the last one is kept)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardEntry {
    pub amount: u64,
    pub reason: String,
    pub at: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(Tier::from_points(0), Tier::Silver);
        assert_eq!(Tier::from_points(999), Tier::Silver);
        assert_eq!(Tier::from_points(1000), Tier::Gold);
        assert_eq!(Tier::from_points(2499), Tier::Gold);
        assert_eq!(Tier::from_points(2500), Tier::Platinum);
    }

    #[test]
    fn test_next_threshold() {
        assert_eq!(Tier::Silver.next_threshold(), Some(1000));
        assert_eq!(Tier::Gold.next_threshold(), Some(2500));
        assert_eq!(Tier::Platinum.next_threshold(), None);
    }
}
