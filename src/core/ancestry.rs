//! Ancestry queries over a tree snapshot
//!
//! Builds the child → parent map once so parent lookups are O(1) instead of a
//! scan over every adjacency list.

use super::tree::Tree;
use rustc_hash::{FxHashMap, FxHashSet};

/// Parent, ancestor and LCA lookups for one tree
///
/// Borrows the tree it was built from; rebuild it after pruning.
#[derive(Debug, Clone)]
pub struct AncestryIndex<'a> {
    parents: FxHashMap<&'a str, &'a str>,
}

impl<'a> AncestryIndex<'a> {
    #[must_use]
    pub fn new(tree: &'a Tree) -> Self {
        let mut parents = FxHashMap::default();
        parents.reserve(tree.len());

        for parent in tree.nodes() {
            for child in tree.children(parent) {
                parents.insert(child.as_str(), parent);
            }
        }

        Self { parents }
    }

    /// Parent of `node`, or `None` for the root and unknown nodes
    #[inline]
    #[must_use]
    pub fn parent_of(&self, node: &str) -> Option<&'a str> {
        self.parents.get(node).copied()
    }

    /// Proper ancestors of `node`, nearest first, ending with the root
    #[must_use]
    pub fn ancestors(&self, node: &str) -> Ancestors<'_, 'a> {
        Ancestors {
            index: self,
            next: self.parent_of(node),
        }
    }

    /// Check if `ancestor` is a proper ancestor of `descendant`
    #[must_use]
    pub fn is_ancestor(&self, ancestor: &str, descendant: &str) -> bool {
        self.ancestors(descendant).any(|node| node == ancestor)
    }

    /// Lowest common ancestor of `a` and `b`
    ///
    /// Either node may itself be the answer (`lca(x, x) == x`). Both nodes must
    /// belong to the indexed tree; that is a precondition, not checked here.
    #[must_use]
    pub fn lca<'q>(&self, a: &'q str, b: &'q str) -> &'q str
    where
        'a: 'q,
    {
        let mut seen: FxHashSet<&'q str> = FxHashSet::default();
        seen.insert(a);
        for ancestor in self.ancestors(a) {
            seen.insert(ancestor);
        }

        let mut current = b;
        while !seen.contains(current) {
            match self.parent_of(current) {
                Some(parent) => current = parent,
                // Only reachable if `b` is outside the tree
                None => break,
            }
        }
        current
    }
}

/// Iterator over the proper ancestors of a node
pub struct Ancestors<'i, 'a> {
    index: &'i AncestryIndex<'a>,
    next: Option<&'a str>,
}

impl<'a> Iterator for Ancestors<'_, 'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.index.parent_of(current);
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fixtures::mammals;
    use rstest::rstest;

    #[test]
    fn parent_lookup() {
        let tree = mammals();
        let index = AncestryIndex::new(&tree);

        assert_eq!(index.parent_of("Husky"), Some("Dogs"));
        assert_eq!(index.parent_of("Dogs"), Some("Mammals"));
        assert_eq!(index.parent_of("Mammals"), None);
        assert_eq!(index.parent_of("Unicorn"), None);
    }

    #[test]
    fn ancestors_walk_to_root() {
        let tree = mammals();
        let index = AncestryIndex::new(&tree);

        assert_eq!(index.ancestors("Tiger").collect::<Vec<_>>(), ["Cats", "Mammals"]);
        assert_eq!(index.ancestors("Mammals").count(), 0);
    }

    #[test]
    fn ancestor_test_is_proper() {
        let tree = mammals();
        let index = AncestryIndex::new(&tree);

        assert!(index.is_ancestor("Mammals", "Husky"));
        assert!(index.is_ancestor("Dogs", "Corgi"));
        assert!(!index.is_ancestor("Cats", "Corgi"));
        assert!(!index.is_ancestor("Husky", "Husky"));
        assert!(!index.is_ancestor("Husky", "Dogs"));
    }

    #[rstest]
    #[case("Husky", "Husky", "Husky")]
    #[case("Husky", "Corgi", "Dogs")]
    #[case("Husky", "Lion", "Mammals")]
    #[case("Chimp", "Gorilla", "Primates")]
    #[case("Dogs", "Bulldog", "Dogs")]
    #[case("Bulldog", "Dogs", "Dogs")]
    #[case("Mammals", "Tiger", "Mammals")]
    fn lca_cases(#[case] a: &str, #[case] b: &str, #[case] expected: &str) {
        let tree = mammals();
        let index = AncestryIndex::new(&tree);

        assert_eq!(index.lca(a, b), expected);
        assert_eq!(index.lca(b, a), expected);
    }

    #[test]
    fn lca_is_lowest_common_ancestor_for_all_leaf_pairs() {
        let tree = mammals();
        let index = AncestryIndex::new(&tree);
        let leaves = tree.leaves();

        let covers = |node: &str, leaf: &str| node == leaf || index.is_ancestor(node, leaf);

        for &a in &leaves {
            for &b in &leaves {
                let lca = index.lca(a, b);
                assert!(covers(lca, a) && covers(lca, b), "lca({a}, {b}) = {lca}");

                // No proper descendant of the LCA covers both leaves
                for child in tree.children(lca) {
                    assert!(!(covers(child, a) && covers(child, b)));
                }
            }
        }
    }
}
