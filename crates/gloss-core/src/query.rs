//! Query engine — filter state plus the pure results computation.
//!
//! The browse/search inputs live in an explicit [`QueryState`] rather than in
//! any UI layer; [`Glossary::results`] is a pure function of that state and
//! the immutable collection, so every caller (TUI, CLI, tests) sees identical
//! ordering rules:
//!
//! 1. a non-empty trimmed query yields fuzzy hits in relevance order;
//! 2. an empty or whitespace-only query yields the full collection;
//! 3. an active category filter narrows the result *without* re-sorting;
//! 4. only when there is no query AND no category is the list re-sorted
//!    alphabetically by term — the default browse ordering.

use crate::search::SearchIndex;
use crate::store::Store;
use crate::types::{Category, GlossaryEntry};

use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Maximum number of entries in an "explore more" suggestion strip.
pub const SUGGESTION_CAP: usize = 9;

/// The user's current filter inputs. Plain data; updating it never touches
/// the collection or the index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryState {
    pub query: String,
    pub category: Option<Category>,
}

impl QueryState {
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Set or clear the category filter. `None` clears.
    pub fn set_category(&mut self, category: Option<Category>) {
        self.category = category;
    }

    /// True when the trimmed query is empty — the engine treats whitespace-only
    /// input identically to no input.
    pub fn is_browsing(&self) -> bool {
        self.query.trim().is_empty()
    }
}

/// The glossary façade: the store plus its search index, built once.
pub struct Glossary {
    store: Store,
    index: SearchIndex,
}

impl Glossary {
    /// Wrap a store, building the fuzzy index with the default threshold.
    pub fn new(store: Store) -> Self {
        let index = SearchIndex::build(store.entries());
        Self { store, index }
    }

    /// Wrap a store with an explicit fuzzy threshold.
    pub fn with_threshold(store: Store, threshold: f32) -> Self {
        let index = SearchIndex::with_threshold(store.entries(), threshold);
        Self { store, index }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Collection indices of the entries matching `state`, in display order.
    /// An empty result is a valid outcome, never an error.
    pub fn result_indices(&self, state: &QueryState) -> Vec<usize> {
        let entries = self.store.entries();
        let browsing = state.is_browsing();

        let mut indices: Vec<usize> = if browsing {
            (0..entries.len()).collect()
        } else {
            self.index.query(&state.query).iter().map(|h| h.index).collect()
        };

        if let Some(category) = state.category {
            indices.retain(|&i| entries[i].category == category);
        }

        // Default browse ordering only — search order and filtered collection
        // order are preserved everywhere else.
        if browsing && state.category.is_none() {
            indices.sort_by(|&a, &b| entries[a].term.cmp(&entries[b].term));
        }

        tracing::debug!(
            query = %state.query,
            category = state.category.map(|c| c.name()),
            results = indices.len(),
            "query evaluated"
        );
        indices
    }

    /// The entries matching `state`, in display order.
    pub fn results(&self, state: &QueryState) -> Vec<&GlossaryEntry> {
        let entries = self.store.entries();
        self.result_indices(state).into_iter().map(|i| &entries[i]).collect()
    }

    /// Look up a single entry for a detail view. `None` is the "not found"
    /// signal for unknown ids.
    pub fn entry(&self, id: &str) -> Option<&GlossaryEntry> {
        self.store.get(id)
    }

    /// Resolve the related entries of `id` by scanning the collection and
    /// keeping every entry whose id OR lowercase term appears in the source
    /// entry's related-terms list. The comparison is case-insensitive on the
    /// term side, so `"Prompt"` in the list still resolves the entry named
    /// `Prompt`. Unresolvable references are dropped silently, and the entry
    /// itself is never included. An unknown `id` resolves to nothing.
    pub fn related(&self, id: &str) -> Vec<&GlossaryEntry> {
        let Some(source) = self.store.get(id) else {
            return Vec::new();
        };
        self.store
            .entries()
            .iter()
            .filter(|e| e.id != id)
            .filter(|e| {
                source.related_terms.iter().any(|r| {
                    *r == e.id || r.to_lowercase() == e.term.to_lowercase()
                })
            })
            .collect()
    }

    /// Up to [`SUGGESTION_CAP`] other entries in collection order, for the
    /// "explore more" strip. Excludes the current entry; `id` need not exist.
    pub fn suggestions(&self, id: &str) -> Vec<&GlossaryEntry> {
        self.store
            .entries()
            .iter()
            .filter(|e| e.id != id)
            .take(SUGGESTION_CAP)
            .collect()
    }

    /// The shuffled variant, deterministic for a given seed.
    pub fn suggestions_shuffled(&self, id: &str, seed: u64) -> Vec<&GlossaryEntry> {
        let mut others: Vec<&GlossaryEntry> =
            self.store.entries().iter().filter(|e| e.id != id).collect();
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        others.shuffle(&mut rng);
        others.truncate(SUGGESTION_CAP);
        others
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    fn entry(id: &str, term: &str, category: Category) -> GlossaryEntry {
        GlossaryEntry {
            id: id.to_string(),
            term: term.to_string(),
            definition: format!("definition of {term}"),
            category,
            related_terms: Vec::new(),
            metaphor: None,
            example: None,
            article: None,
        }
    }

    fn glossary() -> Glossary {
        let mut rag = entry("rag", "RAG", Category::AiModels);
        rag.related_terms = vec!["agent".to_string(), "Prompt".to_string(), "ghost".to_string()];
        Glossary::new(
            Store::from_entries(vec![
                entry("webhook", "Webhook", Category::Integrations),
                entry("agent", "Agent", Category::AiModels),
                rag,
                entry("prompt", "Prompt", Category::AiModels),
            ])
            .unwrap(),
        )
    }

    fn terms<'a>(results: &[&'a GlossaryEntry]) -> Vec<&'a str> {
        results.iter().map(|e| e.term.as_str()).collect()
    }

    #[test]
    fn default_browse_is_alphabetical() {
        let g = glossary();
        let results = g.results(&QueryState::default());
        assert_eq!(terms(&results), vec!["Agent", "Prompt", "RAG", "Webhook"]);
    }

    #[test]
    fn whitespace_query_is_browsing() {
        let g = glossary();
        let mut state = QueryState::default();
        state.set_query("   \t");
        assert!(state.is_browsing());
        assert_eq!(terms(&g.results(&state)), vec!["Agent", "Prompt", "RAG", "Webhook"]);
    }

    #[test]
    fn category_without_query_keeps_collection_order() {
        let g = glossary();
        let state = QueryState {
            query: String::new(),
            category: Some(Category::AiModels),
        };
        // Collection order, NOT alphabetical — Agent precedes RAG precedes
        // Prompt in the source data.
        assert_eq!(terms(&g.results(&state)), vec!["Agent", "RAG", "Prompt"]);
    }

    #[test]
    fn category_narrows_query_results_without_resorting() {
        let g = glossary();
        let mut state = QueryState::default();
        state.set_query("agent");
        let unfiltered = g.result_indices(&state);
        state.set_category(Some(Category::AiModels));
        let filtered = g.result_indices(&state);
        let surviving: Vec<usize> = unfiltered
            .into_iter()
            .filter(|&i| g.store().entries()[i].category == Category::AiModels)
            .collect();
        assert_eq!(filtered, surviving);
    }

    #[test]
    fn query_hits_come_in_relevance_order() {
        let g = glossary();
        let mut state = QueryState::default();
        state.set_query("rag");
        assert_eq!(terms(&g.results(&state)), vec!["RAG"]);
    }

    #[test]
    fn no_match_is_an_empty_result_not_an_error() {
        let g = glossary();
        let mut state = QueryState::default();
        state.set_query("zzzzqqqq");
        assert!(g.results(&state).is_empty());
    }

    #[test]
    fn entry_lookup_is_stable() {
        let g = glossary();
        assert_eq!(g.entry("rag").unwrap().term, "RAG");
        assert_eq!(g.entry("rag"), g.entry("rag"));
        assert!(g.entry("missing").is_none());
    }

    #[test]
    fn related_resolves_by_id_and_by_term_name() {
        let g = glossary();
        let related = g.related("rag");
        // "agent" resolves by id, "Prompt" by case-insensitive term match,
        // "ghost" dangles and is dropped.
        assert_eq!(terms(&related), vec!["Agent", "Prompt"]);
    }

    #[test]
    fn related_never_includes_self_or_unknown_source() {
        let g = glossary();
        assert!(g.related("rag").iter().all(|e| e.id != "rag"));
        assert!(g.related("missing").is_empty());
    }

    #[test]
    fn suggestions_exclude_current_and_cap_at_nine() {
        let entries: Vec<GlossaryEntry> = (0..12)
            .map(|i| entry(&format!("t{i}"), &format!("Term {i}"), Category::CoreConcepts))
            .collect();
        let g = Glossary::new(Store::from_entries(entries).unwrap());
        let suggested = g.suggestions("t0");
        assert_eq!(suggested.len(), SUGGESTION_CAP);
        assert!(suggested.iter().all(|e| e.id != "t0"));

        let shuffled = g.suggestions_shuffled("t0", 7);
        assert_eq!(shuffled.len(), SUGGESTION_CAP);
        assert!(shuffled.iter().all(|e| e.id != "t0"));
        // Deterministic for a fixed seed.
        assert_eq!(terms(&shuffled), terms(&g.suggestions_shuffled("t0", 7)));
    }

    #[test]
    fn empty_collection_never_errors() {
        let g = Glossary::new(Store::from_entries(Vec::new()).unwrap());
        let mut state = QueryState::default();
        assert!(g.results(&state).is_empty());
        state.set_query("anything");
        state.set_category(Some(Category::AiModels));
        assert!(g.results(&state).is_empty());
        assert!(g.related("x").is_empty());
        assert!(g.suggestions("x").is_empty());
    }
}
