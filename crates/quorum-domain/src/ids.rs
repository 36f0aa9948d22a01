//! Identifier newtypes for the records exchanged with upstream stages
//!
//! Identifiers are minted by the semantic mapper and the substrate builder,
//! not by this core, so they are opaque strings rather than locally-generated
//! UUIDs. Wrapping them keeps a statement id from being handed to a function
//! expecting a claim id, which matters in the traversal engine where both
//! flow through the same prune sets.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an extracted statement
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatementId(String);

/// Identifier of a claim
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimId(String);

/// Identifier of a geometric region
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionId(String);

/// Identifier of a partition-style decision point
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartitionId(String);

/// Identifier of a conditional gate
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GateId(String);

/// Identifier of a traversal question
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(String);

macro_rules! impl_string_id {
    ($name:ident) => {
        impl $name {
            /// Wrap an upstream identifier
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Get the identifier as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

impl_string_id!(StatementId);
impl_string_id!(ClaimId);
impl_string_id!(RegionId);
impl_string_id!(PartitionId);
impl_string_id!(GateId);
impl_string_id!(QuestionId);
