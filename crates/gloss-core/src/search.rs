//! Search layer — fuzzy index builder and ranked query evaluation.
//!
//! The index is built exactly once per collection (the collection is immutable,
//! so one build suffices for the process lifetime) and carries no mutable
//! state. Three fields are searchable, with weights biasing relevance toward
//! the display term:
//!
//! | Field        | Weight |
//! |--------------|--------|
//! | `term`       | 2.0    |
//! | `definition` | 1.0    |
//! | `example`    | 0.5    |
//!
//! # Matching model
//!
//! Each field gets a distance in `[0, 1]` against the lowercased query:
//! `0.0` for an exact field match, near-zero for a substring hit, otherwise
//! the best Jaro–Winkler distance across the field's words (and the whole
//! field text). A field is accepted when its distance is at or below the
//! threshold; the default of 0.3 tolerates small typos and substrings without
//! admitting loose similarity. Relevance is the weighted sum of
//! `(1 - distance)` over accepted fields; ties rank in collection order.

use crate::types::GlossaryEntry;

/// Default fuzzy tolerance: 0.0 accepts exact matches only, 1.0 accepts
/// almost anything.
pub const DEFAULT_THRESHOLD: f32 = 0.3;

const WEIGHT_TERM: f32 = 2.0;
const WEIGHT_DEFINITION: f32 = 1.0;
const WEIGHT_EXAMPLE: f32 = 0.5;

/// Distance assigned to a substring hit that is not an exact field match.
/// Non-zero so a threshold of exactly 0.0 keeps its "exact only" meaning.
const SUBSTRING_DISTANCE: f32 = 0.05;

/// A ranked query result: collection index plus relevance score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub index: usize,
    pub score: f32,
}

struct Field {
    weight: f32,
    /// Full field text, lowercased at build time.
    text: String,
    /// Lowercased word tokens of `text`.
    words: Vec<String>,
}

struct Doc {
    fields: Vec<Field>,
}

/// Read-only fuzzy search structure over a glossary collection.
pub struct SearchIndex {
    docs: Vec<Doc>,
    threshold: f32,
}

impl SearchIndex {
    /// Build an index over `entries` with the default threshold. An empty
    /// collection yields an index that matches nothing.
    pub fn build(entries: &[GlossaryEntry]) -> Self {
        Self::with_threshold(entries, DEFAULT_THRESHOLD)
    }

    /// Build an index with an explicit fuzzy threshold, clamped to `[0, 1]`.
    pub fn with_threshold(entries: &[GlossaryEntry], threshold: f32) -> Self {
        let docs = entries
            .iter()
            .map(|entry| {
                let mut fields = vec![
                    Field::new(WEIGHT_TERM, &entry.term),
                    Field::new(WEIGHT_DEFINITION, &entry.definition),
                ];
                if let Some(example) = &entry.example {
                    fields.push(Field::new(WEIGHT_EXAMPLE, example));
                }
                Doc { fields }
            })
            .collect();
        tracing::debug!(entries = entries.len(), threshold, "search index built");
        Self {
            docs,
            threshold: threshold.clamp(0.0, 1.0),
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Evaluate a free-text query, returning hits ordered by descending
    /// relevance, ties broken by collection order. An empty or whitespace-only
    /// query returns no hits — the engine layer handles that case separately.
    pub fn query(&self, query: &str) -> Vec<Hit> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        let mut hits: Vec<Hit> = self
            .docs
            .iter()
            .enumerate()
            .filter_map(|(index, doc)| {
                let mut score = 0.0;
                let mut accepted = false;
                for field in &doc.fields {
                    let d = field.distance(&needle);
                    if d <= self.threshold {
                        accepted = true;
                        score += field.weight * (1.0 - d);
                    }
                }
                accepted.then_some(Hit { index, score })
            })
            .collect();

        hits.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.index.cmp(&b.index))
        });
        hits
    }
}

impl Field {
    fn new(weight: f32, text: &str) -> Self {
        let text = text.to_lowercase();
        let words = text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect();
        Self { weight, text, words }
    }

    /// Distance of this field from the (lowercased) query needle.
    fn distance(&self, needle: &str) -> f32 {
        if self.text == needle {
            return 0.0;
        }
        if self.text.contains(needle) {
            return SUBSTRING_DISTANCE;
        }
        let whole = 1.0 - strsim::jaro_winkler(needle, &self.text) as f32;
        self.words
            .iter()
            .map(|w| 1.0 - strsim::jaro_winkler(needle, w) as f32)
            .fold(whole, f32::min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, GlossaryEntry};

    fn entry(id: &str, term: &str, definition: &str, example: Option<&str>) -> GlossaryEntry {
        GlossaryEntry {
            id: id.to_string(),
            term: term.to_string(),
            definition: definition.to_string(),
            category: Category::CoreConcepts,
            related_terms: Vec::new(),
            metaphor: None,
            example: example.map(str::to_string),
            article: None,
        }
    }

    fn fixture() -> Vec<GlossaryEntry> {
        vec![
            entry("agent", "Agent", "An autonomous system that plans its own steps.", None),
            entry(
                "rag",
                "RAG",
                "Retrieval before generation, grounding answers in documents.",
                Some("Answering questions over internal wikis."),
            ),
            entry("prompt", "Prompt", "The instruction text sent to a model.", None),
        ]
    }

    #[test]
    fn exact_term_match_comes_first() {
        let index = SearchIndex::build(&fixture());
        let hits = index.query("prompt");
        assert_eq!(hits[0].index, 2);
    }

    #[test]
    fn query_is_case_insensitive() {
        let index = SearchIndex::build(&fixture());
        assert_eq!(index.query("RAG")[0].index, 1);
        assert_eq!(index.query("rag")[0].index, 1);
    }

    #[test]
    fn small_typo_still_matches() {
        let index = SearchIndex::build(&fixture());
        let hits = index.query("promt");
        assert!(hits.iter().any(|h| h.index == 2), "typo'd query missed Prompt");
    }

    #[test]
    fn term_weight_outranks_definition_match() {
        // "grounding" appears in rag's definition; an entry *named* Grounding
        // must still outrank it on the term weight.
        let mut entries = fixture();
        entries.push(entry("grounding", "Grounding", "Tying model output to sources.", None));
        let index = SearchIndex::build(&entries);
        let hits = index.query("grounding");
        assert_eq!(hits[0].index, 3, "term match should outrank definition match");
        assert!(hits.iter().any(|h| h.index == 1));
    }

    #[test]
    fn example_field_is_searchable() {
        let index = SearchIndex::build(&fixture());
        let hits = index.query("wikis");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].index, 1);
    }

    #[test]
    fn threshold_zero_is_exact_only() {
        let index = SearchIndex::with_threshold(&fixture(), 0.0);
        assert_eq!(index.query("prompt").len(), 1);
        assert!(index.query("promt").is_empty());
        // Substring of a longer field is not an exact match.
        assert!(index.query("autonomous system").is_empty());
    }

    #[test]
    fn whitespace_query_returns_no_hits() {
        let index = SearchIndex::build(&fixture());
        assert!(index.query("   ").is_empty());
        assert!(index.query("").is_empty());
    }

    #[test]
    fn empty_collection_matches_nothing() {
        let index = SearchIndex::build(&[]);
        assert!(index.query("anything").is_empty());
    }

    #[test]
    fn equal_scores_keep_collection_order() {
        let entries = vec![
            entry("a", "Webhook", "Inbound HTTP callback.", None),
            entry("b", "Webhook", "Inbound HTTP callback.", None),
        ];
        let index = SearchIndex::build(&entries);
        let hits = index.query("webhook");
        assert_eq!(hits.len(), 2);
        assert_eq!((hits[0].index, hits[1].index), (0, 1));
    }

    #[test]
    fn scores_are_descending() {
        let index = SearchIndex::build(&fixture());
        let hits = index.query("model");
        for pair in hits.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }
}
