//! Edge module - pairwise relations between claims

use crate::ids::ClaimId;
use serde::{Deserialize, Serialize};

/// Type of relation between two claims
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    /// One claim supports another
    Supports,

    /// The claims conflict
    Conflicts,

    /// The claims trade off against each other
    Tradeoff,

    /// One claim is a prerequisite of another
    Prerequisite,
}

impl EdgeKind {
    /// Get the kind name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeKind::Supports => "supports",
            EdgeKind::Conflicts => "conflicts",
            EdgeKind::Tradeoff => "tradeoff",
            EdgeKind::Prerequisite => "prerequisite",
        }
    }
}

/// A pairwise relation between two claims
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Source claim
    pub from: ClaimId,

    /// Target claim
    pub to: ClaimId,

    /// Relation type
    pub kind: EdgeKind,
}

impl Edge {
    /// Create a new edge
    pub fn new(from: impl Into<ClaimId>, to: impl Into<ClaimId>, kind: EdgeKind) -> Self {
        Self { from: from.into(), to: to.into(), kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_kind_serde_is_lowercase() {
        let json = serde_json::to_string(&EdgeKind::Tradeoff).unwrap();
        assert_eq!(json, "\"tradeoff\"");
        let back: EdgeKind = serde_json::from_str("\"conflicts\"").unwrap();
        assert_eq!(back, EdgeKind::Conflicts);
    }

    #[test]
    fn test_edge_construction() {
        let edge = Edge::new("c1", "c2", EdgeKind::Prerequisite);
        assert_eq!(edge.from.as_str(), "c1");
        assert_eq!(edge.to.as_str(), "c2");
        assert_eq!(edge.kind.as_str(), "prerequisite");
    }
}
