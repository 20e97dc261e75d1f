//! Core domain types for taxonomy trees
//!
//! Tree representation, the builder that normalizes nested source data, the
//! name map used for presentation, and ancestry queries.

mod ancestry;
mod builder;
mod error;
mod names;
mod tree;

pub use ancestry::{AncestryIndex, Ancestors};
pub use builder::{TaxonNode, build_tree};
pub use error::{SolverError, TreeError};
pub use names::NameMap;
pub use tree::{PreOrderIter, Tree};
