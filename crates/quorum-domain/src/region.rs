//! Regions - geometric clusters produced by the substrate builder
//!
//! Regions are consumed read-only. This core never re-clusters; it only
//! traces claim evidence back into the regions the substrate already built.

use crate::ids::{RegionId, StatementId};
use serde::{Deserialize, Serialize};

/// Density tier of a region in embedding space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionTier {
    /// Dense core cluster
    Peak,

    /// Mid-density cluster
    Hill,

    /// Sparse remainder
    Floor,
}

impl RegionTier {
    /// Get the tier name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            RegionTier::Peak => "peak",
            RegionTier::Hill => "hill",
            RegionTier::Floor => "floor",
        }
    }

    /// Parse a tier from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "peak" => Some(RegionTier::Peak),
            "hill" => Some(RegionTier::Hill),
            "floor" => Some(RegionTier::Floor),
            _ => None,
        }
    }
}

impl std::str::FromStr for RegionTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid region tier: {}", s))
    }
}

/// A geometric cluster of statements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    /// Region identifier
    pub id: RegionId,

    /// Statements belonging to this region
    pub member_statement_ids: Vec<StatementId>,

    /// Density tier
    pub tier: RegionTier,

    /// Count of distinct models contributing members to this region
    pub model_diversity: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_parse_roundtrip() {
        for tier in [RegionTier::Peak, RegionTier::Hill, RegionTier::Floor] {
            assert_eq!(RegionTier::parse(tier.as_str()), Some(tier));
        }
    }

    #[test]
    fn test_tier_parse_rejects_unknown() {
        assert_eq!(RegionTier::parse("summit"), None);
        assert!("summit".parse::<RegionTier>().is_err());
    }

    #[test]
    fn test_tier_serde_is_lowercase() {
        let json = serde_json::to_string(&RegionTier::Peak).unwrap();
        assert_eq!(json, "\"peak\"");
    }
}
