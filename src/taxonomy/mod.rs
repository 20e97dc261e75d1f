//! Taxonomy trees for the guessing game
//!
//! Loading from JSON files and the embedded demo tree.

mod embedded;
pub mod loader;

pub use embedded::DEMO_TREE;
pub use loader::{BUILTIN, LoadError, load_builtin, load_from_file, load_source};
