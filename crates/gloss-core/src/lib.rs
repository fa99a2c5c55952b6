//! gloss-core — glossary record store, fuzzy search, and query engine.
//!
//! This crate holds everything below the presentation layer, as pure
//! synchronous modules:
//!
//! ```text
//! Store ──► SearchIndex ──► Glossary (query engine) ──► UI / CLI
//!   │
//!   └──► Contribution (issue-link builder)
//! ```
//!
//! The store is built once from a static JSON source and is read-only for the
//! process lifetime; every query recomputation is cheap and side-effect free.

pub mod config;
pub mod contribute;
pub mod query;
pub mod search;
pub mod store;
pub mod types;

pub use contribute::{Contribution, ContributionError};
pub use query::{Glossary, QueryState, SUGGESTION_CAP};
pub use search::{SearchIndex, DEFAULT_THRESHOLD};
pub use store::{Store, StoreError};
pub use types::{Article, Category, GlossaryEntry, CATEGORIES};
