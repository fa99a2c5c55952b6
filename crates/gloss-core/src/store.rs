//! Store — the immutable in-memory collection of glossary entries.
//!
//! The store is the single source of truth: it is built once from a JSON
//! source (the embedded data file by default), validated eagerly, and read-only
//! for the life of the process. Malformed records fail the load rather than
//! rendering partial content later.

use std::collections::HashMap;
use std::path::Path;

use crate::types::GlossaryEntry;

/// The bundled glossary data, compiled into the binary so the application
/// works without any files on disk.
const BUILTIN_DATA: &str = include_str!("../../../data/glossary.json");

/// Errors surfaced while loading or validating the record collection.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read glossary data: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse glossary data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("entry {index} has an empty `{field}` field")]
    EmptyField { index: usize, field: &'static str },
    #[error("duplicate entry id: {0}")]
    DuplicateId(String),
}

/// Immutable entry store with O(1) id lookup.
///
/// Entries keep their source-file order; that order is the "collection order"
/// the query engine's tie-break and no-query-with-filter rules refer to.
#[derive(Debug, Clone)]
pub struct Store {
    entries: Vec<GlossaryEntry>,
    by_id: HashMap<String, usize>,
}

impl Store {
    /// Validate and index a collection of entries.
    ///
    /// Fails fast on empty `id`/`term`/`definition` fields and on duplicate
    /// ids. Duplicate terms are permitted — the data keeps them unique in
    /// practice but nothing relies on it.
    pub fn from_entries(entries: Vec<GlossaryEntry>) -> Result<Self, StoreError> {
        let mut by_id = HashMap::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            for (field, value) in [
                ("id", &entry.id),
                ("term", &entry.term),
                ("definition", &entry.definition),
            ] {
                if value.trim().is_empty() {
                    return Err(StoreError::EmptyField { index, field });
                }
            }
            if by_id.insert(entry.id.clone(), index).is_some() {
                return Err(StoreError::DuplicateId(entry.id.clone()));
            }
        }
        tracing::debug!(entries = entries.len(), "store loaded");
        Ok(Self { entries, by_id })
    }

    /// Parse a JSON array of entries and build a store from it.
    pub fn from_json_str(json: &str) -> Result<Self, StoreError> {
        let entries: Vec<GlossaryEntry> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    /// Load a store from a JSON file on disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Build the store from the embedded data file.
    ///
    /// # Panics
    ///
    /// Panics if the embedded data is malformed; the bundled file is covered
    /// by tests, so this should never happen in practice.
    pub fn builtin() -> Self {
        Self::from_json_str(BUILTIN_DATA).expect("embedded glossary data must be valid")
    }

    /// Look up an entry by its stable id.
    pub fn get(&self, id: &str) -> Option<&GlossaryEntry> {
        self.by_id.get(id).map(|&i| &self.entries[i])
    }

    /// Position of an entry in collection order, if present.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    /// All entries in collection order.
    pub fn entries(&self) -> &[GlossaryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
