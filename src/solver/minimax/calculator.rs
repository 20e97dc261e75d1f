//! Minimax worst-case calculation over LCA feedback
//!
//! Guessing a species reveals the lowest common ancestor of the guess and the
//! answer. Candidates sharing that ancestor stay indistinguishable, so they
//! form one bucket; the worst case of a guess is its largest bucket.

use crate::core::AncestryIndex;
use rustc_hash::FxHashMap;

/// Count how many candidates fall into each feedback clade for `guess`
///
/// The guess itself is bucketed too (its own LCA with itself is the guess).
#[must_use]
pub fn bucket_by_clade<'t>(
    guess: &'t str,
    candidates: &[&'t str],
    index: &AncestryIndex<'t>,
) -> FxHashMap<&'t str, usize> {
    let mut buckets = FxHashMap::default();

    for &leaf in candidates {
        *buckets.entry(index.lca(guess, leaf)).or_insert(0) += 1;
    }

    buckets
}

/// Maximum number of candidates left after guessing `guess`
///
/// # Examples
/// ```
/// use metazooa_solver::core::{AncestryIndex, TaxonNode, build_tree};
/// use metazooa_solver::solver::minimax::calculate_worst_case;
///
/// let source = TaxonNode::new("Canidae").with_children(vec![
///     TaxonNode::new("Canis").with_children(vec![
///         TaxonNode::new("Canis lupus"),
///         TaxonNode::new("Canis latrans"),
///     ]),
///     TaxonNode::new("Vulpes vulpes"),
/// ]);
/// let (tree, _) = build_tree(&source).unwrap();
/// let index = AncestryIndex::new(&tree);
/// let candidates = tree.leaves();
///
/// // Wolf splits {wolf}, {coyote}, {fox}
/// assert_eq!(calculate_worst_case("Canis lupus", &candidates, &index), 1);
/// // Fox leaves wolf and coyote together
/// assert_eq!(calculate_worst_case("Vulpes vulpes", &candidates, &index), 2);
/// ```
#[must_use]
pub fn calculate_worst_case<'t>(
    guess: &'t str,
    candidates: &[&'t str],
    index: &AncestryIndex<'t>,
) -> usize {
    bucket_by_clade(guess, candidates, index)
        .values()
        .max()
        .copied()
        .unwrap_or(0)
}

/// Worst case of `guess`, abandoning as soon as a bucket exceeds `limit`
///
/// Returns `None` once some bucket holds more than `limit` candidates; such a
/// guess can neither beat nor tie a guess whose worst case is `limit`.
#[must_use]
pub fn worst_case_within<'t>(
    guess: &'t str,
    candidates: &[&'t str],
    index: &AncestryIndex<'t>,
    limit: usize,
) -> Option<usize> {
    let mut buckets: FxHashMap<&str, usize> = FxHashMap::default();
    let mut worst = 0;

    for &leaf in candidates {
        let count = buckets.entry(index.lca(guess, leaf)).or_insert(0);
        *count += 1;

        if *count > limit {
            return None;
        }
        worst = worst.max(*count);
    }

    Some(worst)
}

/// Bucket sizes for `guess`, largest first, ties by clade name
#[must_use]
pub fn bucket_breakdown<'t>(
    guess: &'t str,
    candidates: &[&'t str],
    index: &AncestryIndex<'t>,
) -> Vec<(&'t str, usize)> {
    let mut buckets: Vec<(&str, usize)> = bucket_by_clade(guess, candidates, index)
        .into_iter()
        .collect();
    buckets.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fixtures::mammals;

    #[test]
    fn husky_buckets() {
        let tree = mammals();
        let index = AncestryIndex::new(&tree);
        let candidates = tree.leaves();

        let buckets = bucket_by_clade("Husky", &candidates, &index);

        assert_eq!(buckets.get("Husky"), Some(&1));
        assert_eq!(buckets.get("Dogs"), Some(&2));
        assert_eq!(buckets.get("Mammals"), Some(&5));
        assert_eq!(buckets.values().sum::<usize>(), candidates.len());
        assert_eq!(calculate_worst_case("Husky", &candidates, &index), 5);
    }

    #[test]
    fn chimp_worst_case() {
        let tree = mammals();
        let index = AncestryIndex::new(&tree);
        let candidates = tree.leaves();

        assert_eq!(calculate_worst_case("Chimp", &candidates, &index), 6);
        assert_eq!(
            bucket_breakdown("Chimp", &candidates, &index),
            [("Mammals", 6), ("Chimp", 1), ("Primates", 1)]
        );
    }

    #[test]
    fn single_candidate_worst_case_is_one() {
        let tree = mammals();
        let index = AncestryIndex::new(&tree);

        assert_eq!(calculate_worst_case("Lion", &["Lion"], &index), 1);
    }

    #[test]
    fn empty_candidates() {
        let tree = mammals();
        let index = AncestryIndex::new(&tree);

        assert_eq!(calculate_worst_case("Lion", &[], &index), 0);
        assert_eq!(worst_case_within("Lion", &[], &index, 3), Some(0));
    }

    #[test]
    fn within_limit_matches_full_pass() {
        let tree = mammals();
        let index = AncestryIndex::new(&tree);
        let candidates = tree.leaves();

        assert_eq!(worst_case_within("Husky", &candidates, &index, 5), Some(5));
        assert_eq!(worst_case_within("Husky", &candidates, &index, usize::MAX), Some(5));
    }

    #[test]
    fn exceeding_limit_abandons() {
        let tree = mammals();
        let index = AncestryIndex::new(&tree);
        let candidates = tree.leaves();

        assert_eq!(worst_case_within("Chimp", &candidates, &index, 5), None);
        assert_eq!(worst_case_within("Husky", &candidates, &index, 4), None);
    }
}
