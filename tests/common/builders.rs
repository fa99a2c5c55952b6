//! Test builders — ergonomic constructors for `GlossaryEntry` fixtures.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use gloss_core::{Article, Category, GlossaryEntry};

/// Fluent builder for [`GlossaryEntry`] test fixtures.
///
/// # Example
///
/// ```rust
/// let entry = EntryBuilder::new("rag", "RAG")
///     .definition("Retrieval-Augmented Generation.")
///     .category(Category::AiModels)
///     .related(["agent", "Prompt"])
///     .build();
/// ```
pub struct EntryBuilder {
    id: String,
    term: String,
    definition: String,
    category: Category,
    related_terms: Vec<String>,
    metaphor: Option<String>,
    example: Option<String>,
    article: Option<Article>,
}

impl EntryBuilder {
    pub fn new(id: impl Into<String>, term: impl Into<String>) -> Self {
        let term = term.into();
        Self {
            id: id.into(),
            definition: format!("definition of {term}"),
            term,
            category: Category::CoreConcepts,
            related_terms: Vec::new(),
            metaphor: None,
            example: None,
            article: None,
        }
    }

    pub fn definition(mut self, definition: impl Into<String>) -> Self {
        self.definition = definition.into();
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn related<I, S>(mut self, related: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.related_terms = related.into_iter().map(Into::into).collect();
        self
    }

    pub fn metaphor(mut self, metaphor: impl Into<String>) -> Self {
        self.metaphor = Some(metaphor.into());
        self
    }

    pub fn example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self
    }

    pub fn article(mut self, article: Article) -> Self {
        self.article = Some(article);
        self
    }

    pub fn build(self) -> GlossaryEntry {
        GlossaryEntry {
            id: self.id,
            term: self.term,
            definition: self.definition,
            category: self.category,
            related_terms: self.related_terms,
            metaphor: self.metaphor,
            example: self.example,
            article: self.article,
        }
    }
}
