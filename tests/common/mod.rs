//! Shared test utilities for gloss integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file.

// Each harness binary compiles its own copy of this module and uses a
// different subset of it.
#![allow(dead_code)]

pub mod builders;
pub mod fixtures;

#[allow(unused_imports)]
pub use builders::*;
#[allow(unused_imports)]
pub use fixtures::*;
