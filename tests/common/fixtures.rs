//! Static glossary fixtures shared across harnesses.
//!
//! `ai_collection` is the canonical small fixture: an AI cluster whose
//! relations mix id references, term-name references (with mismatched case),
//! and one dangling reference, plus entries from other categories so filters
//! have something to exclude.

use super::builders::EntryBuilder;
use gloss_core::{Category, Glossary, GlossaryEntry, Store};

/// Agent / RAG / Prompt cluster plus non-AI padding.
///
/// Deliberate collection order: RAG and Prompt are NOT alphabetical within
/// their category, so any test asserting collection order actually detects
/// accidental re-sorting.
pub fn ai_entries() -> Vec<GlossaryEntry> {
    vec![
        EntryBuilder::new("webhook", "Webhook")
            .category(Category::Integrations)
            .definition("A callback URL invoked when something happens elsewhere.")
            .build(),
        EntryBuilder::new("agent", "Agent")
            .category(Category::AiModels)
            .definition("A model loop that plans steps and calls tools.")
            .build(),
        EntryBuilder::new("rag", "RAG")
            .category(Category::AiModels)
            .definition("Retrieval grounded generation over your own documents.")
            .related(["agent", "Prompt", "ghost"])
            .build(),
        EntryBuilder::new("prompt", "Prompt")
            .category(Category::AiModels)
            .definition("The instructions handed to a model before it replies.")
            .build(),
        EntryBuilder::new("variable", "Variable")
            .category(Category::DataVariables)
            .definition("A named slot holding a value between steps.")
            .build(),
    ]
}

pub fn ai_store() -> Store {
    Store::from_entries(ai_entries()).expect("fixture collection must validate")
}

pub fn ai_glossary() -> Glossary {
    Glossary::new(ai_store())
}

/// A larger uniform collection for cap / pagination behaviour.
pub fn numbered_entries(n: usize) -> Vec<GlossaryEntry> {
    (0..n)
        .map(|i| {
            EntryBuilder::new(format!("t{i:02}"), format!("Term {i:02}"))
                .category(Category::CoreConcepts)
                .build()
        })
        .collect()
}

/// Terms of `results`, for compact order assertions.
pub fn terms<'a>(results: &[&'a GlossaryEntry]) -> Vec<&'a str> {
    results.iter().map(|e| e.term.as_str()).collect()
}
