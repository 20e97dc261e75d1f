//! Species solving command
//!
//! Plays a full game against a known target species and records every turn.

use crate::core::{AncestryIndex, SolverError};
use crate::solver::{GuessOutcome, Solver, Strategy, TieBreak};
use tracing::debug;

/// Guess limit of the web game
pub const DEFAULT_MAX_GUESSES: usize = 20;

/// Configuration for solving a species
pub struct SolveConfig {
    /// Scientific name of the answer
    pub target: String,
    pub max_guesses: usize,
    pub tie_break: TieBreak,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: DEFAULT_MAX_GUESSES,
            tie_break: TieBreak::First,
        }
    }
}

/// Result of solving a species
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

/// A single turn of the game
pub struct GuessStep {
    pub guess: String,
    /// Clade the answer was known to be in when guessing
    pub clade: String,
    /// Revealed common ancestor of guess and answer; `None` when correct
    pub feedback: Option<String>,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub worst_case: usize,
}

/// Solve a specific species using the given solver
///
/// Each wrong guess reveals the lowest common ancestor of the guess and the
/// target. That clade becomes the next query's clade and the guess joins the
/// exclusions, which removes the guess's whole branch below it.
///
/// # Errors
///
/// Returns an error if:
/// - The target is not in the tree (`UnknownSpecies`)
/// - The target is a clade (`NotASpecies`)
pub fn solve_species<S: Strategy>(
    config: SolveConfig,
    solver: &Solver<S>,
) -> Result<SolveResult, SolverError> {
    let tree = solver.tree();
    let target = config.target.as_str();

    if !tree.contains(target) {
        return Err(SolverError::UnknownSpecies(config.target));
    }
    if !tree.is_leaf(target) {
        return Err(SolverError::NotASpecies(config.target));
    }

    let index = AncestryIndex::new(tree);
    let mut clade = solver.root().unwrap_or(target).to_string();
    let mut excluded: Vec<String> = Vec::new();
    let mut guesses: Vec<GuessStep> = Vec::new();

    for _ in 0..config.max_guesses {
        let GuessOutcome::Best(best) = solver.next_guess(&clade, &excluded)? else {
            // The target is never pruned, so this only happens on a broken strategy
            break;
        };

        let guess = best.pick(config.tie_break).to_string();
        let candidates_before = best.candidate_count();

        if guess == target {
            guesses.push(GuessStep {
                guess,
                clade,
                feedback: None,
                candidates_before,
                candidates_after: 1,
                worst_case: best.worst_case(),
            });

            return Ok(SolveResult {
                success: true,
                guesses,
                target: config.target,
            });
        }

        let feedback = index.lca(&guess, target).to_string();
        excluded.push(guess.clone());
        let candidates_after = solver.count_candidates(&feedback, &excluded)?;

        debug!(guess = %guess, feedback = %feedback, candidates_after, "wrong guess");

        guesses.push(GuessStep {
            guess,
            clade: std::mem::replace(&mut clade, feedback.clone()),
            feedback: Some(feedback),
            candidates_before,
            candidates_after,
            worst_case: best.worst_case(),
        });
    }

    Ok(SolveResult {
        success: false,
        guesses,
        target: config.target,
    })
}
