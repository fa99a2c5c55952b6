//! Query engine integration harness.
//!
//! # What this covers
//!
//! The ordering precedence rules are the contract every surface (TUI, CLI)
//! renders through, so they get pinned here end to end:
//!
//! - **Default browse**: no query, no filter → alphabetical by term.
//! - **Whitespace query**: treated exactly like no query.
//! - **Category without query**: collection order, NOT alphabetical.
//! - **Category with query**: the filter narrows the relevance-ordered hits
//!   without re-sorting them — filtering is a `retain`, never a sort.
//! - **Related terms**: dual resolution by id or case-insensitive term name;
//!   dangling references drop silently; an entry never relates to itself.
//! - **Suggestions**: capped at nine, never include the current entry, and
//!   the shuffled variant is deterministic per seed.
//! - **Property (proptest)**: for arbitrary queries and any category, the
//!   filtered result is always an order-preserving subset of the unfiltered
//!   result, and nothing ever panics.
//!
//! # What this does NOT cover
//!
//! - Raw fuzzy scoring (see search_harness)
//! - Load-time validation (see store_harness)
//!
//! # Running
//!
//! ```sh
//! cargo test --test query_harness
//! ```

mod common;
use common::*;

use gloss_core::{Category, Glossary, QueryState, Store, SUGGESTION_CAP};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

fn state(query: &str, category: Option<Category>) -> QueryState {
    QueryState { query: query.to_string(), category }
}

// ---------------------------------------------------------------------------
// Ordering precedence
// ---------------------------------------------------------------------------

#[test]
fn default_browse_is_alphabetical_by_term() {
    let g = ai_glossary();
    assert_eq!(
        terms(&g.results(&QueryState::default())),
        vec!["Agent", "Prompt", "RAG", "Variable", "Webhook"]
    );
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t \n")]
fn whitespace_query_is_browsing(#[case] query: &str) {
    let g = ai_glossary();
    assert_eq!(
        g.results(&state(query, None)),
        g.results(&QueryState::default())
    );
}

#[test]
fn category_without_query_keeps_collection_order() {
    let g = ai_glossary();
    // Agent, RAG, Prompt is the fixture's source order — alphabetical would
    // be Agent, Prompt, RAG, so this catches accidental re-sorting.
    assert_eq!(
        terms(&g.results(&state("", Some(Category::AiModels)))),
        vec!["Agent", "RAG", "Prompt"]
    );
}

#[test]
fn category_narrows_query_hits_without_resorting() {
    let g = ai_glossary();
    let unfiltered = g.result_indices(&state("a", None));
    let filtered = g.result_indices(&state("a", Some(Category::AiModels)));

    let expected: Vec<usize> = unfiltered
        .into_iter()
        .filter(|&i| g.store().entries()[i].category == Category::AiModels)
        .collect();
    assert_eq!(filtered, expected);
}

#[test]
fn query_hits_are_relevance_ordered_not_alphabetical() {
    let g = ai_glossary();
    let results = g.results(&state("rag", None));
    assert_eq!(results[0].id, "rag");
}

#[test]
fn no_match_is_an_empty_result() {
    let g = ai_glossary();
    assert!(g.results(&state("qqqqzzzz", None)).is_empty());
    assert!(g
        .results(&state("qqqqzzzz", Some(Category::Integrations)))
        .is_empty());
}

#[test]
fn filter_on_an_unrepresented_category_is_empty_not_an_error() {
    let g = Glossary::new(
        Store::from_entries(vec![EntryBuilder::new("a", "Agent")
            .category(Category::AiModels)
            .build()])
        .unwrap(),
    );
    assert!(g.results(&state("", Some(Category::Integrations))).is_empty());
}

// ---------------------------------------------------------------------------
// Related terms
// ---------------------------------------------------------------------------

#[test]
fn related_resolves_ids_and_term_names_and_drops_dangling() {
    let g = ai_glossary();
    // rag's list is ["agent", "Prompt", "ghost"]: one id reference, one term
    // name (case differs from the stored term's id), one dangling.
    assert_eq!(terms(&g.related("rag")), vec!["Agent", "Prompt"]);
}

#[test]
fn related_is_in_collection_order() {
    let mut entries = ai_entries();
    entries.push(
        EntryBuilder::new("embedding", "Embedding")
            .category(Category::AiModels)
            .build(),
    );
    // Reference them in reverse of collection order; resolution must not
    // preserve the reference order.
    entries[2].related_terms = vec!["embedding".to_string(), "agent".to_string()];
    let g = Glossary::new(Store::from_entries(entries).unwrap());
    assert_eq!(terms(&g.related("rag")), vec!["Agent", "Embedding"]);
}

#[test]
fn related_never_includes_self() {
    let mut entries = ai_entries();
    // Self-reference by both id and term name.
    entries[2].related_terms = vec!["rag".to_string(), "RAG".to_string()];
    let g = Glossary::new(Store::from_entries(entries).unwrap());
    assert!(g.related("rag").is_empty());
}

#[test]
fn related_of_unknown_id_is_empty() {
    assert!(ai_glossary().related("missing").is_empty());
}

// ---------------------------------------------------------------------------
// Suggestions
// ---------------------------------------------------------------------------

#[test]
fn suggestions_cap_at_nine_and_exclude_current() {
    let g = Glossary::new(Store::from_entries(numbered_entries(15)).unwrap());
    let suggested = g.suggestions("t03");
    assert_eq!(suggested.len(), SUGGESTION_CAP);
    assert!(suggested.iter().all(|e| e.id != "t03"));
}

#[test]
fn small_collection_suggests_everything_else() {
    let g = ai_glossary();
    let suggested = g.suggestions("rag");
    assert_eq!(suggested.len(), g.store().len() - 1);
}

#[test]
fn shuffled_suggestions_are_deterministic_per_seed() {
    let g = Glossary::new(Store::from_entries(numbered_entries(15)).unwrap());
    let a = terms(&g.suggestions_shuffled("t00", 42));
    let b = terms(&g.suggestions_shuffled("t00", 42));
    assert_eq!(a, b);
    assert_eq!(a.len(), SUGGESTION_CAP);
    assert!(!a.contains(&"Term 00"));
}

#[test]
fn different_seeds_can_reorder_suggestions() {
    let g = Glossary::new(Store::from_entries(numbered_entries(30)).unwrap());
    // 30 entries shuffled to 9: two seeds agreeing on the full order would be
    // an astronomically unlikely accident, so treat agreement as a bug.
    let a = terms(&g.suggestions_shuffled("t00", 1));
    let b = terms(&g.suggestions_shuffled("t00", 2));
    assert_ne!(a, b);
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn category_filter_is_an_order_preserving_subset(
        query in ".{0,24}",
        pick in 0usize..5,
    ) {
        let g = ai_glossary();
        let category = gloss_core::CATEGORIES[pick];

        let unfiltered = g.result_indices(&state(&query, None));
        let filtered = g.result_indices(&state(&query, Some(category)));

        // Every filtered index appears unfiltered, in the same relative order
        // — except in the browse case, where the unfiltered list re-sorts
        // alphabetically and the filtered one keeps collection order.
        if !query.trim().is_empty() {
            let expected: Vec<usize> = unfiltered
                .iter()
                .copied()
                .filter(|&i| g.store().entries()[i].category == category)
                .collect();
            prop_assert_eq!(filtered.clone(), expected);
        }
        for &i in &filtered {
            prop_assert!(i < g.store().len());
            prop_assert_eq!(g.store().entries()[i].category, category);
        }
    }

    #[test]
    fn any_state_evaluates_without_panicking(query in ".{0,40}") {
        let g = ai_glossary();
        let _ = g.results(&state(&query, None));
        let _ = g.results(&state(&query, Some(Category::AiModels)));
        let _ = g.related(&query);
        let _ = g.suggestions(&query);
        let _ = g.suggestions_shuffled(&query, 0);
    }
}
