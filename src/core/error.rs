//! Error types for tree construction and queries

use thiserror::Error;

/// Structural problems found while normalizing a source tree
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// A node carried no identifier. `parent` is `None` for the root itself.
    #[error("node without identifier under {}", parent.as_deref().unwrap_or("<root>"))]
    MissingIdentifier { parent: Option<String> },

    #[error("duplicate node identifier: {0}")]
    DuplicateNode(String),

    #[error("expected a single root node, found {0}")]
    MultipleRoots(usize),
}

/// Errors that abort a guess query
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    #[error("malformed tree: {0}")]
    MalformedTree(#[from] TreeError),

    #[error("unknown clade: {0}")]
    UnknownClade(String),

    #[error("unknown species: {0}")]
    UnknownSpecies(String),

    /// The named node exists but is a clade, not a guessable species
    #[error("not a species: {0}")]
    NotASpecies(String),

    /// The species exists but was already ruled out for this clade
    #[error("{species} is not a remaining candidate in {clade}")]
    NotACandidate { species: String, clade: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_identifier_names_parent() {
        let err = TreeError::MissingIdentifier {
            parent: Some("Canidae".to_string()),
        };
        assert_eq!(err.to_string(), "node without identifier under Canidae");

        let root = TreeError::MissingIdentifier { parent: None };
        assert_eq!(root.to_string(), "node without identifier under <root>");
    }

    #[test]
    fn tree_error_converts_into_malformed_tree() {
        let err: SolverError = TreeError::DuplicateNode("Felis".to_string()).into();
        assert_eq!(err, SolverError::MalformedTree(TreeError::DuplicateNode("Felis".into())));
        assert_eq!(err.to_string(), "malformed tree: duplicate node identifier: Felis");
    }
}
