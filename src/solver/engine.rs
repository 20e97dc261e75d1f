//! Main solver interface

use super::outcome::GuessOutcome;
use super::pruner::prune;
use super::strategy::Strategy;
use crate::core::{SolverError, Tree};

/// Taxonomy guessing solver
///
/// Holds the full source tree; every query prunes its own copy, so queries
/// never observe each other.
pub struct Solver<'a, S: Strategy> {
    strategy: S,
    tree: &'a Tree,
}

impl<'a, S: Strategy> Solver<'a, S> {
    /// Create a new solver over the full taxonomy tree
    pub const fn new(strategy: S, tree: &'a Tree) -> Self {
        Self { strategy, tree }
    }

    /// The unpruned source tree
    #[must_use]
    pub const fn tree(&self) -> &'a Tree {
        self.tree
    }

    /// Root clade of the source tree, where every game starts
    #[must_use]
    pub fn root(&self) -> Option<&'a str> {
        self.tree.root()
    }

    /// Best next guesses for an answer known to lie in `clade`
    ///
    /// # Errors
    ///
    /// Returns `SolverError::UnknownClade` if `clade` is not in the tree.
    pub fn next_guess<E: AsRef<str>>(
        &self,
        clade: &str,
        excluded: &[E],
    ) -> Result<GuessOutcome, SolverError> {
        let pruned = prune(self.tree, clade, excluded)?;
        Ok(self.strategy.select_guesses(&pruned))
    }

    /// Species still possible for `clade` and `excluded`, in candidate order
    ///
    /// # Errors
    ///
    /// Returns `SolverError::UnknownClade` if `clade` is not in the tree.
    pub fn candidates<E: AsRef<str>>(
        &self,
        clade: &str,
        excluded: &[E],
    ) -> Result<Vec<String>, SolverError> {
        let pruned = prune(self.tree, clade, excluded)?;
        Ok(pruned.leaves().into_iter().map(str::to_string).collect())
    }

    /// Count how many species remain possible
    ///
    /// # Errors
    ///
    /// Returns `SolverError::UnknownClade` if `clade` is not in the tree.
    pub fn count_candidates<E: AsRef<str>>(
        &self,
        clade: &str,
        excluded: &[E],
    ) -> Result<usize, SolverError> {
        Ok(prune(self.tree, clade, excluded)?.leaves().len())
    }
}
