//! Taxonomy tree loading utilities
//!
//! Reads the nested JSON tree produced by the tree generator, from a file or
//! from the embedded demo tree.

use super::embedded::DEMO_TREE;
use crate::core::{NameMap, TaxonNode, Tree, TreeError, build_tree};
use serde::de::DeserializeOwned;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, instrument};

/// Source name selecting the embedded demo tree
pub const BUILTIN: &str = "builtin";

/// Errors while loading a taxonomy tree
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid tree JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed tree: {0}")]
    Tree(#[from] TreeError),
}

/// Parse the nested JSON form into a source node
///
/// Accepts a single object, or an array holding exactly one object.
///
/// # Errors
///
/// Returns `LoadError::Json` for invalid JSON or node shapes and
/// `TreeError::MultipleRoots` for an array of several roots.
///
/// # Examples
/// ```
/// use metazooa_solver::taxonomy::loader::parse_json;
///
/// let node = parse_json(r#"{"scientific": "Hydra vulgaris", "name": "Hydra"}"#).unwrap();
/// assert_eq!(node.identifier.as_deref(), Some("Hydra vulgaris"));
///
/// assert!(parse_json("[{}, {}]").is_err());
/// ```
pub fn parse_json(content: &str) -> Result<TaxonNode, LoadError> {
    if !content.trim_start().starts_with('[') {
        return Ok(from_str_unbounded(content)?);
    }

    let mut roots: Vec<TaxonNode> = from_str_unbounded(content)?;
    if roots.len() != 1 {
        return Err(TreeError::MultipleRoots(roots.len()).into());
    }
    Ok(roots.swap_remove(0))
}

/// Deserialize without serde_json's nesting limit
///
/// Every taxon nests two levels deep (object and children array), so real
/// taxonomies exceed the default limit of 128. The stack grows on demand
/// instead.
fn from_str_unbounded<T: DeserializeOwned>(content: &str) -> Result<T, serde_json::Error> {
    let mut json = serde_json::Deserializer::from_str(content);
    json.disable_recursion_limit();

    let value = T::deserialize(serde_stacker::Deserializer::new(&mut json))?;
    json.end()?;
    Ok(value)
}

/// Parse JSON content and build the tree and name map
///
/// # Errors
///
/// Returns a `LoadError` if the JSON is invalid or the tree is malformed.
pub fn tree_from_json(content: &str) -> Result<(Tree, NameMap), LoadError> {
    let source = parse_json(content)?;
    Ok(build_tree(&source)?)
}

/// Load a tree from a JSON file
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read, or any parse error.
#[instrument(level = "debug", skip_all, fields(path = %path.as_ref().display()))]
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<(Tree, NameMap), LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(bytes = content.len(), "read tree file");
    tree_from_json(&content)
}

/// Load the embedded demo tree
///
/// # Errors
///
/// Only fails if the embedded data is corrupt.
pub fn load_builtin() -> Result<(Tree, NameMap), LoadError> {
    tree_from_json(DEMO_TREE)
}

/// Load `"builtin"` or a path to a JSON file
///
/// # Errors
///
/// Returns a `LoadError` from the chosen source.
pub fn load_source(source: &str) -> Result<(Tree, NameMap), LoadError> {
    match source {
        BUILTIN => load_builtin(),
        path => load_from_file(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tree_loads() {
        let (tree, names) = load_builtin().unwrap();

        assert_eq!(tree.root(), Some("Metazoa"));
        assert_eq!(tree.len(), 60);
        assert_eq!(tree.leaves().len(), 36);
        assert_eq!(names.display("Panthera leo"), "Lion");
        assert_eq!(names.resolve("Giant panda", &tree), "Ailuropoda melanoleuca");
    }

    #[test]
    fn load_source_builtin() {
        let (tree, _) = load_source(BUILTIN).unwrap();
        assert!(tree.contains("Hydra vulgaris"));
    }

    #[test]
    fn single_element_array_is_accepted() {
        let (tree, _) = tree_from_json(
            r#"[{"scientific": "Cnidaria", "children": [{"scientific": "Hydra vulgaris"}]}]"#,
        )
        .unwrap();

        assert_eq!(tree.leaves(), ["Hydra vulgaris"]);
    }

    #[test]
    fn multiple_roots_are_rejected() {
        let result = tree_from_json(r#"[{"scientific": "A"}, {"scientific": "B"}]"#);
        assert!(matches!(
            result,
            Err(LoadError::Tree(TreeError::MultipleRoots(2)))
        ));

        let empty = tree_from_json("[]");
        assert!(matches!(
            empty,
            Err(LoadError::Tree(TreeError::MultipleRoots(0)))
        ));
    }

    #[test]
    fn duplicate_nodes_are_rejected() {
        let result = tree_from_json(
            r#"{"scientific": "A", "children": [{"scientific": "B"}, {"scientific": "B"}]}"#,
        );
        assert!(matches!(
            result,
            Err(LoadError::Tree(TreeError::DuplicateNode(id))) if id == "B"
        ));
    }

    #[test]
    fn deep_tree_loads() {
        const DEPTH: usize = 2_000;

        let mut json = String::new();
        for level in 0..DEPTH {
            json.push_str(&format!(r#"{{"scientific": "n{level}", "children": ["#));
        }
        json.push_str(r#"{"scientific": "leaf", "name": "Deep one"}"#);
        json.push_str(&"]}".repeat(DEPTH));

        let (tree, names) = tree_from_json(&json).unwrap();

        assert_eq!(tree.root(), Some("n0"));
        assert_eq!(tree.len(), DEPTH + 1);
        assert_eq!(tree.leaves(), ["leaf"]);
        assert_eq!(names.display("leaf"), "Deep one");
    }

    #[test]
    fn trailing_content_is_rejected() {
        assert!(matches!(
            tree_from_json(r#"{"scientific": "A"} {"scientific": "B"}"#),
            Err(LoadError::Json(_))
        ));
    }

    #[test]
    fn invalid_json_is_rejected() {
        assert!(matches!(tree_from_json("{not json"), Err(LoadError::Json(_))));
        assert!(matches!(
            tree_from_json(r#"{"scientific": 42}"#),
            Err(LoadError::Json(_))
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_from_file("/nonexistent/commontree.json").unwrap_err();

        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/commontree.json"));
    }
}
