// src/domain/tag/reconcile.rs
//
// Pure half of tag reconciliation: turn the raw wire value (comma-joined
// string or explicit list) into the canonical list of trimmed, non-empty
// names. Applying the result to the store is the repository's job.
use serde::Deserialize;

/// Raw tag value as accepted on the wire.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TagInput {
    List(Vec<String>),
    Csv(String),
}

impl TagInput {
    /// Canonical target names: split on commas for the string form, trim
    /// every element, drop empties. Duplicates are kept — find-or-create
    /// maps them onto the same row, so the relation set dedups naturally.
    pub fn resolve_names(&self) -> Vec<String> {
        match self {
            Self::List(items) => items
                .iter()
                .map(|item| item.trim().to_string())
                .filter(|item| !item.is_empty())
                .collect(),
            Self::Csv(raw) => raw
                .split(',')
                .map(|item| item.trim().to_string())
                .filter(|item| !item.is_empty())
                .collect(),
        }
    }
}
