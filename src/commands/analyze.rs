//! Species analysis command
//!
//! Shows how guessing one species would split the remaining candidates.

use crate::core::{AncestryIndex, NameMap, SolverError};
use crate::solver::minimax::bucket_breakdown;
use crate::solver::{GuessOutcome, Solver, Strategy, prune};

/// Result of analyzing one guess
pub struct AnalysisResult {
    pub species: String,
    pub clade: String,
    /// Feedback clade → number of candidates, largest first
    pub buckets: Vec<(String, usize)>,
    pub worst_case: usize,
    pub total_candidates: usize,
    /// Worst case of the optimal guesses, for comparison
    pub best_worst_case: Option<usize>,
}

impl AnalysisResult {
    /// Check if the analyzed species is among the optimal guesses
    #[must_use]
    pub fn is_optimal(&self) -> bool {
        self.best_worst_case == Some(self.worst_case)
    }
}

/// Analyze guessing `species` for an answer in `clade`
///
/// All names may be common or scientific; `without` is comma-separated.
///
/// # Errors
///
/// Returns an error if:
/// - The clade is not in the tree
/// - The species is not in the tree or is a clade rather than a species
/// - The species was already ruled out by the clade or exclusions
pub fn analyze_species<S: Strategy>(
    species: &str,
    clade: &str,
    without: &str,
    solver: &Solver<S>,
    names: &NameMap,
) -> Result<AnalysisResult, SolverError> {
    let tree = solver.tree();
    let species = names.resolve(species, tree);
    let clade = names.resolve(clade, tree);
    let excluded = names.resolve_list(without, tree);

    if !tree.contains(species) {
        return Err(SolverError::UnknownSpecies(species.to_string()));
    }
    if !tree.is_leaf(species) {
        return Err(SolverError::NotASpecies(species.to_string()));
    }

    let pruned = prune(tree, clade, &excluded)?;
    let candidates = pruned.leaves();
    if !candidates.contains(&species) {
        return Err(SolverError::NotACandidate {
            species: species.to_string(),
            clade: clade.to_string(),
        });
    }

    let index = AncestryIndex::new(&pruned);
    let buckets: Vec<(String, usize)> = bucket_breakdown(species, &candidates, &index)
        .into_iter()
        .map(|(feedback, count)| (feedback.to_string(), count))
        .collect();
    let worst_case = buckets.first().map_or(0, |&(_, count)| count);

    let best_worst_case = match solver.next_guess(clade, &excluded)? {
        GuessOutcome::Best(best) => Some(best.worst_case()),
        GuessOutcome::NoCandidates => None,
    };

    Ok(AnalysisResult {
        species: species.to_string(),
        clade: clade.to_string(),
        buckets,
        worst_case,
        total_candidates: candidates.len(),
        best_worst_case,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::MinimaxStrategy;
    use crate::taxonomy::load_builtin;

    #[test]
    fn analyze_optimal_opening() {
        let (tree, names) = load_builtin().unwrap();
        let solver = Solver::new(MinimaxStrategy, &tree);

        let result = analyze_species("Gray wolf", "Metazoa", "", &solver, &names).unwrap();

        assert_eq!(result.species, "Canis lupus");
        assert_eq!(result.worst_case, 11);
        assert_eq!(result.total_candidates, 36);
        // Arthropods, molluscs and cnidarians only share Metazoa with the wolf
        assert_eq!(result.buckets[0], ("Metazoa".to_string(), 11));
        assert!(result.buckets.contains(&("Chordata".to_string(), 9)));
        assert_eq!(result.buckets.iter().map(|(_, n)| n).sum::<usize>(), 36);
        assert!(result.is_optimal());
    }

    #[test]
    fn analyze_suboptimal_guess() {
        let (tree, names) = load_builtin().unwrap();
        let solver = Solver::new(MinimaxStrategy, &tree);

        let result = analyze_species("Hydra", "Metazoa", "", &solver, &names).unwrap();

        // Everything outside Cnidaria stays lumped together
        assert_eq!(result.buckets[0], ("Metazoa".to_string(), 34));
        assert_eq!(result.worst_case, 34);
        assert!(!result.is_optimal());
    }

    #[test]
    fn analyze_rejects_clade_names() {
        let (tree, names) = load_builtin().unwrap();
        let solver = Solver::new(MinimaxStrategy, &tree);

        assert_eq!(
            analyze_species("Felidae", "Metazoa", "", &solver, &names).err(),
            Some(SolverError::NotASpecies("Felidae".to_string()))
        );
        assert_eq!(
            analyze_species("Nessie", "Metazoa", "", &solver, &names).err(),
            Some(SolverError::UnknownSpecies("Nessie".to_string()))
        );
    }

    #[test]
    fn analyze_rejects_eliminated_species() {
        let (tree, names) = load_builtin().unwrap();
        let solver = Solver::new(MinimaxStrategy, &tree);

        let outside = analyze_species("Lion", "Aves", "", &solver, &names);
        assert!(matches!(outside, Err(SolverError::NotACandidate { .. })));

        let excluded = analyze_species("Lion", "Carnivora", "Tiger", &solver, &names);
        assert!(matches!(excluded, Err(SolverError::NotACandidate { .. })));
    }
}
