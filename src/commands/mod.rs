//! Command implementations

pub mod analyze;
pub mod guess;
pub mod simple;
pub mod solve;
pub mod test_all;

pub use analyze::{AnalysisResult, analyze_species};
pub use guess::{GuessQuery, GuessReport, suggest_guess};
pub use simple::{GameState, run_simple};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_species};
pub use test_all::{TestAllConfig, TestAllStatistics, print_test_all_statistics, run_test_all};
