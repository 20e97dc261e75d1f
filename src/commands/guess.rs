//! Next-guess command
//!
//! Answers one query: the best species to guess for a clade, given species
//! already ruled out.

use crate::core::{NameMap, SolverError};
use crate::solver::{GuessOutcome, Solver, Strategy, TieBreak};

/// A single guess query, before name resolution
pub struct GuessQuery {
    /// Clade known to hold the answer (common or scientific name)
    pub clade: String,
    /// Comma-separated species already guessed (common or scientific names)
    pub without: String,
    pub tie_break: TieBreak,
}

impl GuessQuery {
    #[must_use]
    pub fn new(clade: impl Into<String>, without: impl Into<String>) -> Self {
        Self {
            clade: clade.into(),
            without: without.into(),
            tie_break: TieBreak::Random,
        }
    }
}

/// Suggested guess with the equally good alternatives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessReport {
    /// Resolved clade identifier
    pub clade: String,
    /// Resolved exclusion identifiers
    pub excluded: Vec<String>,
    pub guess: String,
    pub alternatives: Vec<String>,
    pub worst_case: usize,
    pub candidates: usize,
}

/// Find the best guess for a query
///
/// Returns `Ok(None)` when every species of the clade has been ruled out.
///
/// # Errors
///
/// Returns `SolverError::UnknownClade` if the clade does not resolve to a
/// node of the tree.
pub fn suggest_guess<S: Strategy>(
    query: &GuessQuery,
    solver: &Solver<S>,
    names: &NameMap,
) -> Result<Option<GuessReport>, SolverError> {
    let tree = solver.tree();
    let clade = names.resolve(&query.clade, tree).to_string();
    let excluded = names.resolve_list(&query.without, tree);

    let GuessOutcome::Best(best) = solver.next_guess(&clade, &excluded)? else {
        return Ok(None);
    };

    let guess = best.pick(query.tie_break).to_string();
    let alternatives = best.alternatives(&guess).map(str::to_string).collect();

    Ok(Some(GuessReport {
        clade,
        excluded,
        guess,
        alternatives,
        worst_case: best.worst_case(),
        candidates: best.candidate_count(),
    }))
}
