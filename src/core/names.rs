//! Display labels for taxa
//!
//! Maps scientific identifiers to common names. Only used for presentation and
//! for resolving user input; the guessing algorithms never consult it.

use super::tree::Tree;
use rustc_hash::FxHashMap;

/// Identifier → common name mapping
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameMap {
    labels: FxHashMap<String, String>,
}

impl NameMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the display label of `id`, replacing any earlier one
    pub fn insert(&mut self, id: impl Into<String>, label: impl Into<String>) {
        self.labels.insert(id.into(), label.into());
    }

    /// Label for `id`, if one was recorded
    #[inline]
    pub fn label(&self, id: &str) -> Option<&str> {
        self.labels.get(id).map(String::as_str)
    }

    /// Label for `id`, falling back to the identifier itself
    #[inline]
    #[must_use]
    pub fn display<'a>(&'a self, id: &'a str) -> &'a str {
        self.label(id).unwrap_or(id)
    }

    /// Resolve user input to an identifier of `tree`
    ///
    /// Input naming a node of `tree` is returned as is, even when another
    /// node carries it as a common name. Otherwise a common name
    /// (case-insensitive) resolves to its identifier, and anything else is
    /// returned unchanged.
    #[must_use]
    pub fn resolve<'a>(&'a self, input: &'a str, tree: &Tree) -> &'a str {
        let needle = input.trim();
        if tree.contains(needle) {
            return needle;
        }

        self.labels
            .iter()
            .find(|(_, label)| label.eq_ignore_ascii_case(needle))
            .map_or(needle, |(id, _)| id.as_str())
    }

    /// Split a comma-separated list and resolve every non-empty entry
    #[must_use]
    pub fn resolve_list(&self, input: &str, tree: &Tree) -> Vec<String> {
        input
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| self.resolve(s, tree).to_string())
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{TaxonNode, build_tree};

    fn carnivores() -> (Tree, NameMap) {
        let source = TaxonNode::new("Carnivora").with_children(vec![
            TaxonNode::new("Canis lupus").with_label("Gray wolf"),
            TaxonNode::new("Felis catus").with_label("House cat"),
            TaxonNode::new("Panthera leo"),
        ]);
        build_tree(&source).unwrap()
    }

    #[test]
    fn display_falls_back_to_identifier() {
        let (_, names) = carnivores();
        assert_eq!(names.display("Canis lupus"), "Gray wolf");
        assert_eq!(names.display("Panthera leo"), "Panthera leo");
    }

    #[test]
    fn resolve_common_names() {
        let (tree, names) = carnivores();
        assert_eq!(names.resolve("house cat", &tree), "Felis catus");
        assert_eq!(names.resolve("  Gray wolf ", &tree), "Canis lupus");
        assert_eq!(names.resolve("Panthera leo", &tree), "Panthera leo");
        assert_eq!(names.resolve("Dragon", &tree), "Dragon");
    }

    #[test]
    fn identifier_wins_over_colliding_label() {
        let source = TaxonNode::new("Hippopotamidae").with_children(vec![
            TaxonNode::new("Hippopotamus").with_children(vec![
                TaxonNode::new("Hippopotamus amphibius").with_label("Hippopotamus"),
            ]),
            TaxonNode::new("Choeropsis liberiensis").with_label("Pygmy hippopotamus"),
        ]);
        let (tree, names) = build_tree(&source).unwrap();

        assert_eq!(names.resolve("Hippopotamus", &tree), "Hippopotamus");
        // Only an exact identifier match takes precedence
        assert_eq!(names.resolve("hippopotamus", &tree), "Hippopotamus amphibius");
        assert_eq!(
            names.resolve_list("Hippopotamus, Pygmy hippopotamus", &tree),
            ["Hippopotamus", "Choeropsis liberiensis"]
        );
    }

    #[test]
    fn resolve_list_skips_blanks() {
        let (tree, names) = carnivores();
        assert_eq!(
            names.resolve_list("Gray wolf, ,Panthera leo,", &tree),
            ["Canis lupus", "Panthera leo"]
        );
        assert!(names.resolve_list("", &tree).is_empty());
    }
}
