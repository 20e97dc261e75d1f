//! Embedded taxonomy data
//!
//! A small metazoan tree compiled into the binary, used when no tree file is given.

/// Demo taxonomy in the nested JSON tree format (36 species)
pub const DEMO_TREE: &str = include_str!("../../data/demo_tree.json");
