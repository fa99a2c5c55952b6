//! Core types for gloss — the glossary record model.
//!
//! This module defines the fundamental data structures shared across all
//! layers: the immutable [`GlossaryEntry`], its closed [`Category`] set, and
//! the optional long-form [`Article`] content.
//!
//! Field names serialise as camelCase (`relatedTerms`, `keyConcepts`) so the
//! bundled data file stays compatible with the original glossary JSON format.

use serde::{Deserialize, Serialize};

/// A single glossary record, loaded once at startup and never mutated.
///
/// `id` is the stable lookup and route key. `term` is the display name —
/// unique in practice but not enforced at load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlossaryEntry {
    pub id: String,
    pub term: String,
    pub definition: String,
    pub category: Category,
    /// References to other entries, either by `id` or by lowercase term name.
    /// Dangling references are dropped at resolution time, not rejected.
    #[serde(default)]
    pub related_terms: Vec<String>,
    /// Short "think of it this way" analogy shown on the detail view.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metaphor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article: Option<Article>,
}

/// The closed set of glossary categories. No other value is valid; unknown
/// category strings in the data file fail deserialisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Core Concepts")]
    CoreConcepts,
    #[serde(rename = "Workflows & Actions")]
    WorkflowsActions,
    #[serde(rename = "Integrations")]
    Integrations,
    #[serde(rename = "Data & Variables")]
    DataVariables,
    #[serde(rename = "AI & Models")]
    AiModels,
}

/// All categories in canonical display order.
pub const CATEGORIES: [Category; 5] = [
    Category::CoreConcepts,
    Category::WorkflowsActions,
    Category::Integrations,
    Category::DataVariables,
    Category::AiModels,
];

impl Category {
    /// The display name, identical to the serialised form.
    pub fn name(&self) -> &'static str {
        match self {
            Category::CoreConcepts => "Core Concepts",
            Category::WorkflowsActions => "Workflows & Actions",
            Category::Integrations => "Integrations",
            Category::DataVariables => "Data & Variables",
            Category::AiModels => "AI & Models",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    /// Parse a category from its display name or a CLI-friendly slug
    /// (`core`, `workflows`, `integrations`, `data`, `ai`). Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "core concepts" | "core-concepts" | "core" => Ok(Category::CoreConcepts),
            "workflows & actions" | "workflows-actions" | "workflows" => {
                Ok(Category::WorkflowsActions)
            }
            "integrations" => Ok(Category::Integrations),
            "data & variables" | "data-variables" | "data" => Ok(Category::DataVariables),
            "ai & models" | "ai-models" | "ai" => Ok(Category::AiModels),
            other => Err(format!("unknown category: {other}")),
        }
    }
}

/// Optional long-form article content attached to an entry. Every section is
/// optional; empty sequences are simply not rendered.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    // The original data files call this field `marketerUseCases`; accept both
    // spellings so those files load unmodified.
    #[serde(default, alias = "marketerUseCases", skip_serializing_if = "Vec::is_empty")]
    pub use_cases: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub key_concepts: Vec<KeyConcept>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub benefits: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparison: Option<Comparison>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<Tool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub challenges: Vec<Challenge>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub faq: Vec<Faq>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyConcept {
    pub title: String,
    pub description: String,
}

/// A single "X vs Y" comparison; `term` names the other side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub term: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Challenge {
    pub challenge: String,
    pub solution: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_roundtrips_through_display_name() {
        for cat in CATEGORIES {
            let parsed: Category = cat.name().parse().unwrap();
            assert_eq!(parsed, cat);
        }
    }

    #[test]
    fn category_parses_slugs() {
        assert_eq!("ai".parse::<Category>().unwrap(), Category::AiModels);
        assert_eq!("core".parse::<Category>().unwrap(), Category::CoreConcepts);
        assert_eq!(
            "workflows-actions".parse::<Category>().unwrap(),
            Category::WorkflowsActions
        );
    }

    #[test]
    fn category_rejects_unknown() {
        assert!("observability".parse::<Category>().is_err());
    }

    #[test]
    fn entry_deserialises_from_camel_case_json() {
        let json = r#"{
            "id": "rag",
            "term": "RAG",
            "definition": "Retrieval-Augmented Generation.",
            "category": "AI & Models",
            "relatedTerms": ["agent", "prompt"],
            "example": "Answering questions over internal docs.",
            "article": {
                "keyConcepts": [{"title": "Retrieval", "description": "Find relevant chunks."}],
                "benefits": ["Grounded answers"],
                "faq": [{"question": "Why?", "answer": "Fewer hallucinations."}]
            }
        }"#;
        let entry: GlossaryEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.category, Category::AiModels);
        assert_eq!(entry.related_terms, vec!["agent", "prompt"]);
        let article = entry.article.unwrap();
        assert_eq!(article.key_concepts.len(), 1);
        assert!(article.comparison.is_none());
    }

    #[test]
    fn use_cases_accepts_the_legacy_field_name() {
        let json = r#"{
            "id": "rag",
            "term": "RAG",
            "definition": "Retrieval-Augmented Generation.",
            "category": "AI & Models",
            "article": {
                "marketerUseCases": ["Answer questions over docs"]
            }
        }"#;
        let entry: GlossaryEntry = serde_json::from_str(json).unwrap();
        assert_eq!(
            entry.article.unwrap().use_cases,
            vec!["Answer questions over docs"]
        );
    }

    #[test]
    fn unknown_category_string_fails_deserialisation() {
        let json = r#"{
            "id": "x", "term": "X", "definition": "d", "category": "Nonsense"
        }"#;
        assert!(serde_json::from_str::<GlossaryEntry>(json).is_err());
    }
}
