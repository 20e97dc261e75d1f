//! Minimax-based guess selection
//!
//! Selects every leaf whose worst-case bucket is as small as possible.

use super::calculator::{calculate_worst_case, worst_case_within};
use crate::core::{AncestryIndex, Tree};
use crate::solver::outcome::{BestGuesses, GuessOutcome};
use rayon::prelude::*;
use std::cmp::Ordering;
use tracing::{debug, instrument};

/// Select all leaves tied for the smallest worst case
///
/// Guesses are evaluated in candidate order. A guess is abandoned as soon as
/// one of its buckets grows past the best worst case found so far.
///
/// # Examples
/// ```
/// use metazooa_solver::core::{TaxonNode, build_tree};
/// use metazooa_solver::solver::minimax::select_best_guesses;
///
/// let source = TaxonNode::new("Felidae").with_children(vec![
///     TaxonNode::new("Panthera").with_children(vec![
///         TaxonNode::new("Panthera leo"),
///         TaxonNode::new("Panthera tigris"),
///     ]),
///     TaxonNode::new("Felis catus"),
/// ]);
/// let (tree, _) = build_tree(&source).unwrap();
///
/// let best = select_best_guesses(&tree).best().unwrap();
/// assert_eq!(best.guesses(), ["Panthera leo", "Panthera tigris"]);
/// assert_eq!(best.worst_case(), 1);
/// ```
#[must_use]
#[instrument(level = "debug", skip(tree), fields(root = tree.root()))]
pub fn select_best_guesses(tree: &Tree) -> GuessOutcome {
    let candidates = tree.leaves();
    if candidates.is_empty() {
        return GuessOutcome::NoCandidates;
    }

    let index = AncestryIndex::new(tree);
    let mut best_worst_case = usize::MAX;
    let mut best_guesses: Vec<&str> = Vec::new();

    for &guess in &candidates {
        let Some(worst_case) = worst_case_within(guess, &candidates, &index, best_worst_case)
        else {
            continue;
        };

        match worst_case.cmp(&best_worst_case) {
            Ordering::Less => {
                best_worst_case = worst_case;
                best_guesses.clear();
                best_guesses.push(guess);
            }
            Ordering::Equal => best_guesses.push(guess),
            Ordering::Greater => {}
        }
    }

    debug!(
        candidates = candidates.len(),
        worst_case = best_worst_case,
        tied = best_guesses.len(),
        "selected best guesses"
    );

    GuessOutcome::Best(BestGuesses::new(
        best_guesses.into_iter().map(str::to_string).collect(),
        best_worst_case,
        candidates.len(),
    ))
}

/// Parallel variant of [`select_best_guesses`]
///
/// Computes every guess's full worst case independently on the rayon pool.
/// Returns the same tied set in the same order as the sequential version.
#[must_use]
#[instrument(level = "debug", skip(tree), fields(root = tree.root()))]
pub fn select_best_guesses_parallel(tree: &Tree) -> GuessOutcome {
    let candidates = tree.leaves();
    if candidates.is_empty() {
        return GuessOutcome::NoCandidates;
    }

    let index = AncestryIndex::new(tree);

    let scored: Vec<(&str, usize)> = candidates
        .par_iter()
        .map(|&guess| (guess, calculate_worst_case(guess, &candidates, &index)))
        .collect();

    let best_worst_case = scored
        .iter()
        .map(|&(_, worst)| worst)
        .min()
        .unwrap_or(0);

    let best_guesses = scored
        .into_iter()
        .filter(|&(_, worst)| worst == best_worst_case)
        .map(|(guess, _)| guess.to_string())
        .collect();

    GuessOutcome::Best(BestGuesses::new(
        best_guesses,
        best_worst_case,
        candidates.len(),
    ))
}
