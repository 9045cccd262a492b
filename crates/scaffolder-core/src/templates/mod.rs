//! Template classification, substitution and materialization
//!
//! This module provides:
//! - Binary/text classification by extension
//! - Placeholder tokens and the ordered substitution map
//! - The tree copy that instantiates a template into a new project

pub mod classify;
pub mod materializer;
pub mod substitution;

pub use classify::{classify, DirectoryEntry, EntryKind, FileClass, BINARY_EXTENSIONS};
pub use materializer::{materialize, MaterializeOptions, MaterializeReport};
pub use substitution::{PlaceholderTokens, SubstitutionMap};
