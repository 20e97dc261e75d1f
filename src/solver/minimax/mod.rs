//! Minimax guessing over LCA feedback
//!
//! Implements worst-case minimization for taxonomy guessing.

mod calculator;
mod selector;

pub use calculator::{bucket_breakdown, bucket_by_clade, calculate_worst_case, worst_case_within};
pub use selector::{select_best_guesses, select_best_guesses_parallel};
