//! Contribution collaborator — turns a suggested term into a pre-filled
//! GitHub issue link. Nothing is persisted locally; the issue tracker is the
//! only sink.

use crate::types::Category;

/// Validation failures that block a submission.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ContributionError {
    #[error("please fill in the term field")]
    EmptyTerm,
    #[error("please fill in the definition field")]
    EmptyDefinition,
}

/// A draft glossary suggestion, as collected from the contribution form.
#[derive(Debug, Clone)]
pub struct Contribution {
    pub term: String,
    pub category: Category,
    pub definition: String,
    pub example: Option<String>,
    /// Free-form related term names, comma-joined in the issue body.
    pub related_terms: Vec<String>,
}

impl Contribution {
    /// `term` and `definition` must be non-empty; everything else is optional.
    pub fn validate(&self) -> Result<(), ContributionError> {
        if self.term.trim().is_empty() {
            return Err(ContributionError::EmptyTerm);
        }
        if self.definition.trim().is_empty() {
            return Err(ContributionError::EmptyDefinition);
        }
        Ok(())
    }

    /// Build the pre-filled new-issue URL for `repo` (an `owner/name` slug).
    ///
    /// Validates first, so a URL is only ever produced for a submittable
    /// draft. The body mirrors the structured text the original contribution
    /// form generated, and the issue is tagged `new-term` for triage.
    pub fn issue_url(&self, repo: &str) -> Result<String, ContributionError> {
        self.validate()?;

        let title = format!("[New Term] {}", self.term.trim());
        let example = match self.example.as_deref().map(str::trim) {
            Some(e) if !e.is_empty() => e,
            _ => "N/A",
        };
        let related = if self.related_terms.is_empty() {
            "N/A".to_string()
        } else {
            self.related_terms.join(", ")
        };
        let body = format!(
            "## New Glossary Term Suggestion\n\n\
             **Term:** {}\n\n\
             **Category:** {}\n\n\
             **Definition:**\n{}\n\n\
             **Example (optional):**\n{}\n\n\
             **Related Terms (optional):**\n{}\n\n\
             ---\n\
             *Submitted via the gloss contribution form*",
            self.term.trim(),
            self.category,
            self.definition.trim(),
            example,
            related,
        );

        Ok(format!(
            "https://github.com/{repo}/issues/new?title={}&body={}&labels=new-term",
            urlencoding::encode(&title),
            urlencoding::encode(&body),
        ))
    }
}
