//! Restricting a tree to the live candidates of one query
//!
//! Elimination feedback applies to whole branches: once a guess is known to be
//! wrong below `clade`, the entire child branch of `clade` containing that
//! guess cannot hold the answer and is removed.

use crate::core::{AncestryIndex, SolverError, Tree};
use rustc_hash::FxHashMap;
use tracing::{debug, instrument, trace};

/// Prune `tree` to the subtree of `clade` minus every excluded branch
///
/// The returned tree owns its own adjacency lists and is rooted at `clade`.
/// Exclusions that are not strict descendants of `clade` are ignored. If every
/// branch of an internal clade is excluded the result is empty, and pruning an
/// empty tree again yields the empty tree.
///
/// # Errors
///
/// Returns `SolverError::UnknownClade` if `clade` is not in a non-empty `tree`.
#[instrument(level = "debug", skip(tree, excluded), fields(excluded = excluded.len()))]
pub fn prune<S: AsRef<str>>(tree: &Tree, clade: &str, excluded: &[S]) -> Result<Tree, SolverError> {
    if tree.is_empty() {
        return Ok(Tree::empty());
    }
    if !tree.contains(clade) {
        return Err(SolverError::UnknownClade(clade.to_string()));
    }

    let restricted = restrict_to_clade(tree, clade);
    let index = AncestryIndex::new(&restricted);
    let was_internal = !restricted.is_leaf(clade);
    let mut pruned = restricted.clone();

    for species in excluded {
        let species = species.as_ref();

        // A branch that is already gone removes nothing and detaches nothing
        let Some(branch) = branch_of(&index, clade, species) else {
            trace!(species, "exclusion outside clade, skipped");
            continue;
        };

        let removed = pruned.remove_subtree(branch);
        pruned.detach(clade, branch);
        trace!(species, branch, removed, "removed branch");
    }

    if was_internal && pruned.is_leaf(clade) {
        debug!(clade, "every branch excluded");
        return Ok(Tree::empty());
    }

    debug!(clade, nodes = pruned.len(), "pruned tree");
    Ok(pruned)
}

/// Copy `clade` and its descendants into a new tree rooted at `clade`
fn restrict_to_clade(tree: &Tree, clade: &str) -> Tree {
    let children: FxHashMap<String, Vec<String>> = tree
        .subtree(clade)
        .map(|node| (node.to_string(), tree.children(node).to_vec()))
        .collect();

    Tree::from_adjacency(clade.to_string(), children)
}

/// Direct child of `clade` whose branch contains `species`
///
/// `None` when `species` is `clade` itself or not below it.
fn branch_of<'a>(index: &AncestryIndex<'a>, clade: &str, species: &'a str) -> Option<&'a str> {
    let mut node = species;
    let mut parent = index.parent_of(node)?;
    while parent != clade {
        node = parent;
        parent = index.parent_of(node)?;
    }

    Some(node)
}
