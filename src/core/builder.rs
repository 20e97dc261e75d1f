//! Tree normalization
//!
//! Turns the nested taxonomy structure produced by the tree generator into a
//! [`Tree`] plus a [`NameMap`].

use super::error::TreeError;
use super::names::NameMap;
use super::tree::Tree;
use rustc_hash::FxHashMap;
use serde::Deserialize;
use tracing::{debug, instrument};

/// One node of the nested source structure
///
/// Wire form: `{"scientific": "...", "name": "...", "children": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TaxonNode {
    /// Unique scientific name
    #[serde(rename = "scientific", default)]
    pub identifier: Option<String>,

    /// Common name, shown to the player
    #[serde(rename = "name", default)]
    pub label: Option<String>,

    #[serde(default)]
    pub children: Vec<TaxonNode>,
}

impl TaxonNode {
    /// Node with an identifier and no label or children
    #[must_use]
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: Some(identifier.into()),
            label: None,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_children(mut self, children: Vec<Self>) -> Self {
        self.children = children;
        self
    }

    /// Identifier if present and non-blank
    fn id(&self) -> Option<&str> {
        self.identifier
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }
}

impl Drop for TaxonNode {
    // Flatten descendants onto a heap stack so deep chains never recurse
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

/// Build a tree and name map from a nested source node
///
/// # Errors
///
/// Returns `TreeError::MissingIdentifier` if any node lacks an identifier and
/// `TreeError::DuplicateNode` if an identifier occurs more than once.
#[instrument(level = "debug", skip(source))]
pub fn build_tree(source: &TaxonNode) -> Result<(Tree, NameMap), TreeError> {
    let mut children: FxHashMap<String, Vec<String>> = FxHashMap::default();
    let mut names = NameMap::new();

    let root = source
        .id()
        .ok_or(TreeError::MissingIdentifier { parent: None })?
        .to_string();

    let mut worklist: Vec<(&TaxonNode, Option<&str>)> = vec![(source, None)];

    while let Some((node, parent)) = worklist.pop() {
        let id = node.id().ok_or_else(|| TreeError::MissingIdentifier {
            parent: parent.map(str::to_string),
        })?;

        if children.contains_key(id) {
            return Err(TreeError::DuplicateNode(id.to_string()));
        }
        children.insert(id.to_string(), Vec::with_capacity(node.children.len()));

        // Parents are always registered before their children are popped
        if let Some(siblings) = parent.and_then(|p| children.get_mut(p)) {
            siblings.push(id.to_string());
        }

        if let Some(label) = &node.label {
            names.insert(id, label.as_str());
        }

        // Reverse so children are registered in declared order
        worklist.extend(node.children.iter().rev().map(|child| (child, Some(id))));
    }

    debug!(root = %root, nodes = children.len(), labels = names.len(), "built tree");

    Ok((Tree::from_adjacency(root, children), names))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn from_json(value: serde_json::Value) -> TaxonNode {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn builds_tree_and_names() {
        let source = from_json(json!({
            "scientific": "Carnivora",
            "name": "Carnivorans",
            "children": [
                {
                    "scientific": "Canidae",
                    "children": [
                        {"scientific": "Canis lupus", "name": "Gray wolf"},
                        {"scientific": "Vulpes vulpes", "name": "Red fox"}
                    ]
                },
                {"scientific": "Felis catus", "name": "House cat"}
            ]
        }));

        let (tree, names) = build_tree(&source).unwrap();

        assert_eq!(tree.root(), Some("Carnivora"));
        assert_eq!(tree.children("Carnivora"), ["Canidae", "Felis catus"]);
        assert_eq!(tree.children("Canidae"), ["Canis lupus", "Vulpes vulpes"]);
        assert_eq!(tree.leaves(), ["Canis lupus", "Vulpes vulpes", "Felis catus"]);

        assert_eq!(names.label("Carnivora"), Some("Carnivorans"));
        assert_eq!(names.label("Canidae"), None);
        assert_eq!(names.display("Felis catus"), "House cat");
        assert_eq!(names.len(), 4);
    }

    #[test]
    fn single_node_is_a_leaf() {
        let (tree, names) = build_tree(&TaxonNode::new("Hydra vulgaris")).unwrap();

        assert_eq!(tree.len(), 1);
        assert_eq!(tree.leaves(), ["Hydra vulgaris"]);
        assert!(names.is_empty());
    }

    #[test]
    fn missing_identifier_is_rejected() {
        let source = from_json(json!({
            "scientific": "Aves",
            "children": [{"name": "Mystery bird"}]
        }));

        assert_eq!(
            build_tree(&source),
            Err(TreeError::MissingIdentifier {
                parent: Some("Aves".to_string())
            })
        );
    }

    #[test]
    fn blank_root_identifier_is_rejected() {
        let source = from_json(json!({"scientific": "  ", "children": []}));
        assert_eq!(
            build_tree(&source),
            Err(TreeError::MissingIdentifier { parent: None })
        );
    }

    #[test]
    fn duplicate_identifier_is_rejected() {
        let source = TaxonNode::new("Felidae").with_children(vec![
            TaxonNode::new("Panthera").with_children(vec![TaxonNode::new("Felidae")]),
        ]);

        assert_eq!(
            build_tree(&source),
            Err(TreeError::DuplicateNode("Felidae".to_string()))
        );
    }

    #[test]
    fn duplicate_across_branches_is_rejected() {
        let source = TaxonNode::new("Root").with_children(vec![
            TaxonNode::new("A").with_children(vec![TaxonNode::new("x")]),
            TaxonNode::new("B").with_children(vec![TaxonNode::new("x")]),
        ]);

        assert_eq!(
            build_tree(&source),
            Err(TreeError::DuplicateNode("x".to_string()))
        );
    }

    #[test]
    fn deep_chain_does_not_overflow() {
        let mut node = TaxonNode::new("leaf");
        for depth in 0..50_000 {
            node = TaxonNode::new(format!("n{depth}")).with_children(vec![node]);
        }

        let (tree, _) = build_tree(&node).unwrap();
        assert_eq!(tree.len(), 50_001);
        assert_eq!(tree.leaves(), ["leaf"]);

        drop(node);
    }
}
