//! Guess solving
//!
//! Pruning a tree to the live candidates and choosing guesses among them.

mod engine;
pub mod minimax;
mod outcome;
pub mod pruner;
pub mod strategy;

pub use engine::Solver;
pub use outcome::{BestGuesses, GuessOutcome, TieBreak};
pub use pruner::prune;
pub use strategy::{MinimaxStrategy, ParallelMinimaxStrategy, RandomStrategy, Strategy, StrategyType};
