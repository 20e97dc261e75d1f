//! Rooted taxonomy tree
//!
//! Adjacency-list representation keyed by node identifier. Every node maps to
//! its ordered children; a node with no children is a leaf (a guessable
//! species). Iteration order is pre-order from the root with children in
//! declared order, which is the candidate order used by the guesser.

use rustc_hash::FxHashMap;

/// A rooted tree of taxa
///
/// An empty tree (no root) only arises from pruning every branch of a clade.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    root: Option<String>,
    children: FxHashMap<String, Vec<String>>,
}

impl Tree {
    /// Create a tree from a root and a complete adjacency map
    ///
    /// The caller guarantees the adjacency map is a single tree rooted at `root`.
    pub(crate) fn from_adjacency(root: String, children: FxHashMap<String, Vec<String>>) -> Self {
        debug_assert!(children.contains_key(&root), "root must be registered");
        Self {
            root: Some(root),
            children,
        }
    }

    /// The tree with no nodes at all
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Root identifier, or `None` for an empty tree
    #[inline]
    #[must_use]
    pub fn root(&self) -> Option<&str> {
        self.root.as_deref()
    }

    /// Number of nodes (leaves and clades)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.children.contains_key(id)
    }

    /// Ordered children of a node
    ///
    /// Returns an empty slice for leaves and for unknown identifiers.
    #[inline]
    pub fn children(&self, id: &str) -> &[String] {
        self.children.get(id).map_or(&[], Vec::as_slice)
    }

    /// Check if a node is present and has no children
    #[inline]
    #[must_use]
    pub fn is_leaf(&self, id: &str) -> bool {
        self.children.get(id).is_some_and(Vec::is_empty)
    }

    /// All nodes in pre-order
    #[must_use]
    pub fn nodes(&self) -> PreOrderIter<'_> {
        PreOrderIter::new(self, self.root())
    }

    /// A node and all of its descendants in pre-order
    ///
    /// Yields nothing if `id` is not part of the tree.
    #[must_use]
    pub fn subtree(&self, id: &str) -> PreOrderIter<'_> {
        let start = self.children.get_key_value(id).map(|(key, _)| key.as_str());
        PreOrderIter::new(self, start)
    }

    /// All leaves in candidate order
    #[must_use]
    pub fn leaves(&self) -> Vec<&str> {
        self.root().map_or_else(Vec::new, |root| self.leaves_under(root))
    }

    /// Leaves below (or equal to) `id` in candidate order
    #[must_use]
    pub fn leaves_under(&self, id: &str) -> Vec<&str> {
        self.subtree(id).filter(|node| self.is_leaf(node)).collect()
    }

    /// Remove a node and its entire descendant subtree
    ///
    /// Does not touch the parent's child list; see [`Tree::detach`].
    /// Returns the number of nodes removed.
    pub(crate) fn remove_subtree(&mut self, id: &str) -> usize {
        let mut removed = 0;
        let mut worklist = vec![id.to_string()];

        while let Some(node) = worklist.pop() {
            if let Some(children) = self.children.remove(&node) {
                removed += 1;
                worklist.extend(children);
            }
        }

        if self.root.as_deref() == Some(id) {
            self.root = None;
        }

        removed
    }

    /// Drop `child` from the child list of `parent`
    pub(crate) fn detach(&mut self, parent: &str, child: &str) {
        if let Some(children) = self.children.get_mut(parent) {
            children.retain(|c| c != child);
        }
    }
}

/// Iterator for pre-order traversal (parents before children).
///
/// Stack-based, so arbitrarily deep trees are traversed without recursion.
pub struct PreOrderIter<'a> {
    tree: &'a Tree,
    stack: Vec<&'a str>,
}

impl<'a> PreOrderIter<'a> {
    fn new(tree: &'a Tree, start: Option<&'a str>) -> Self {
        Self {
            tree,
            stack: start.into_iter().collect(),
        }
    }
}

impl<'a> Iterator for PreOrderIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;

        // Push children in reverse so the first child is visited first
        self.stack
            .extend(self.tree.children(node).iter().rev().map(String::as_str));

        Some(node)
    }
}
