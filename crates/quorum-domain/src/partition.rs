//! Partition module - binary decision points over statement sets
//!
//! A partition separates statements arguing two sides of a hinge question.
//! Each side has plain exemplar members; a side may additionally carry
//! advocacy statements that actively argue for it. Advocacy lists may
//! overlap across partitions - the traversal engine resolves that overlap
//! deterministically.

use crate::ids::{PartitionId, StatementId};
use serde::{Deserialize, Serialize};

/// One side of a partition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Side A
    A,
    /// Side B
    B,
}

impl Side {
    /// The opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

/// A user's answer to one partition question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartitionChoice {
    /// The user chose side A
    #[serde(rename = "A")]
    SideA,

    /// The user chose side B
    #[serde(rename = "B")]
    SideB,

    /// The user declined to decide; contributes nothing
    Unknown,
}

impl PartitionChoice {
    /// The decided side, if any
    pub fn decided_side(&self) -> Option<Side> {
        match self {
            PartitionChoice::SideA => Some(Side::A),
            PartitionChoice::SideB => Some(Side::B),
            PartitionChoice::Unknown => None,
        }
    }
}

/// A binary decision point over two statement sets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Partition {
    /// Partition identifier
    pub id: PartitionId,

    /// Origin of this partition (which upstream analysis produced it)
    pub source: String,

    /// Statement the partition pivots on, if any
    #[serde(default)]
    pub focal_statement_id: Option<StatementId>,

    /// The question separating the two sides
    pub hinge_question: String,

    /// Side assumed when the user does not decide
    pub default_side: Side,

    /// Plain exemplar members of side A
    pub side_a_statement_ids: Vec<StatementId>,

    /// Plain exemplar members of side B
    pub side_b_statement_ids: Vec<StatementId>,

    /// Statements actively arguing side A, when distinguished upstream
    #[serde(default)]
    pub side_a_advocacy_statement_ids: Option<Vec<StatementId>>,

    /// Statements actively arguing side B, when distinguished upstream
    #[serde(default)]
    pub side_b_advocacy_statement_ids: Option<Vec<StatementId>>,
}

impl Partition {
    /// Plain exemplar members of the given side
    pub fn exemplar_ids(&self, side: Side) -> &[StatementId] {
        match side {
            Side::A => &self.side_a_statement_ids,
            Side::B => &self.side_b_statement_ids,
        }
    }

    /// Advocacy members of the given side, if distinguished
    pub fn advocacy_ids(&self, side: Side) -> Option<&[StatementId]> {
        match side {
            Side::A => self.side_a_advocacy_statement_ids.as_deref(),
            Side::B => self.side_b_advocacy_statement_ids.as_deref(),
        }
    }
}
