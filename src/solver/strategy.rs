//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::minimax::{calculate_worst_case, select_best_guesses, select_best_guesses_parallel};
use super::outcome::{BestGuesses, GuessOutcome};
use crate::core::{AncestryIndex, Tree};

/// A strategy for choosing guesses from a pruned tree
pub trait Strategy {
    /// Select the best guesses among the leaves of `tree`
    ///
    /// Returns `GuessOutcome::NoCandidates` if the tree has no leaves.
    fn select_guesses(&self, tree: &Tree) -> GuessOutcome;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Sequential minimax with early termination (default)
    Minimax(MinimaxStrategy),
    /// Minimax evaluated on the rayon thread pool
    Parallel(ParallelMinimaxStrategy),
    /// Random candidate, as a baseline
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn select_guesses(&self, tree: &Tree) -> GuessOutcome {
        match self {
            Self::Minimax(s) => s.select_guesses(tree),
            Self::Parallel(s) => s.select_guesses(tree),
            Self::Random(s) => s.select_guesses(tree),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "minimax", "parallel", "random".
    /// Defaults to minimax if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "parallel" => Self::Parallel(ParallelMinimaxStrategy),
            "random" => Self::Random(RandomStrategy),
            _ => Self::Minimax(MinimaxStrategy),
        }
    }
}

/// Pure minimax strategy
///
/// Selects the guesses that minimize the worst-case remaining candidates.
pub struct MinimaxStrategy;

impl Strategy for MinimaxStrategy {
    fn select_guesses(&self, tree: &Tree) -> GuessOutcome {
        select_best_guesses(tree)
    }
}

/// Minimax strategy with guesses scored in parallel
///
/// Same result as [`MinimaxStrategy`]; worth it only on large trees.
pub struct ParallelMinimaxStrategy;

impl Strategy for ParallelMinimaxStrategy {
    fn select_guesses(&self, tree: &Tree) -> GuessOutcome {
        select_best_guesses_parallel(tree)
    }
}

/// Random selection from candidates
///
/// Baseline for comparing against minimax; reports the true worst case of the
/// randomly chosen species.
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_guesses(&self, tree: &Tree) -> GuessOutcome {
        use rand::prelude::IndexedRandom;

        let candidates = tree.leaves();

        let Some(&guess) = candidates.choose(&mut rand::rng()) else {
            return GuessOutcome::NoCandidates;
        };

        let index = AncestryIndex::new(tree);
        let worst_case = calculate_worst_case(guess, &candidates, &index);

        GuessOutcome::Best(BestGuesses::new(
            vec![guess.to_string()],
            worst_case,
            candidates.len(),
        ))
    }
}
