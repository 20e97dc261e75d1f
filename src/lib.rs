//! Metazooa Solver
//!
//! A minimax guesser for the taxonomy game: the answer is a hidden species,
//! and every wrong guess reveals the lowest clade it shares with the answer.
//!
//! # Quick Start
//!
//! ```rust
//! use metazooa_solver::solver::{MinimaxStrategy, Solver};
//! use metazooa_solver::taxonomy::load_builtin;
//!
//! let (tree, names) = load_builtin().unwrap();
//! let solver = Solver::new(MinimaxStrategy, &tree);
//!
//! // Answer is a carnivoran, and the gray wolf was a miss
//! let wolf = names.resolve("Gray wolf", &tree);
//! let best = solver.next_guess("Carnivora", &[wolf]).unwrap().best().unwrap();
//!
//! assert_eq!(best.first(), "Panthera leo");
//! assert_eq!(best.worst_case(), 2);
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Taxonomy trees
pub mod taxonomy;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
