//! Statements and paragraphs - the atomic evidence units
//!
//! Statements are extracted upstream and immutable once extracted. The
//! originating model is recorded on the paragraph, not the statement, so
//! tracing a statement to its model goes statement -> paragraph -> model.

use crate::ids::StatementId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A paragraph of one model's answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Paragraph identifier
    pub id: String,

    /// Index of the model that produced this paragraph
    pub model_index: u32,
}

/// An atomic extracted sentence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    /// Statement identifier
    pub id: StatementId,

    /// The sentence text
    pub text: String,

    /// Identifier of the paragraph this statement belongs to
    pub paragraph_id: String,
}

/// Build the statement -> model-index map consumed by the diagnostics and
/// triage contracts
///
/// Statements whose paragraph is unknown are left out of the map; consumers
/// treat missing entries as untraceable rather than erroring.
pub fn model_index_by_statement(
    statements: &[Statement],
    paragraphs: &[Paragraph],
) -> HashMap<StatementId, u32> {
    let paragraph_models: HashMap<&str, u32> = paragraphs
        .iter()
        .map(|p| (p.id.as_str(), p.model_index))
        .collect();

    statements
        .iter()
        .filter_map(|s| {
            paragraph_models
                .get(s.paragraph_id.as_str())
                .map(|&model| (s.id.clone(), model))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn statement(id: &str, paragraph_id: &str) -> Statement {
        Statement {
            id: StatementId::new(id),
            text: format!("text for {id}"),
            paragraph_id: paragraph_id.to_string(),
        }
    }

    #[test]
    fn test_model_index_traced_through_paragraph() {
        let paragraphs = vec![
            Paragraph { id: "p1".into(), model_index: 0 },
            Paragraph { id: "p2".into(), model_index: 2 },
        ];
        let statements = vec![statement("s1", "p1"), statement("s2", "p2")];

        let map = model_index_by_statement(&statements, &paragraphs);
        assert_eq!(map.get(&StatementId::new("s1")), Some(&0));
        assert_eq!(map.get(&StatementId::new("s2")), Some(&2));
    }

    #[test]
    fn test_unknown_paragraph_is_skipped() {
        let paragraphs = vec![Paragraph { id: "p1".into(), model_index: 0 }];
        let statements = vec![statement("s1", "p1"), statement("s2", "missing")];

        let map = model_index_by_statement(&statements, &paragraphs);
        assert_eq!(map.len(), 1);
        assert!(!map.contains_key(&StatementId::new("s2")));
    }
}
