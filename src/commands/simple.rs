//! Simple interactive CLI mode
//!
//! Text-based assistant for a live game: suggests a guess, then asks for the
//! clade the game revealed.

use crate::core::{AncestryIndex, NameMap, Tree};
use crate::output::formatters::format_taxon;
use crate::solver::{Solver, Strategy, TieBreak};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, Write};
use thiserror::Error;

/// Feedback that cannot follow from the suggested guess
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    #[error("'{0}' is not a clade of this tree")]
    UnknownClade(String),

    #[error("{clade} does not contain {guess}")]
    NotAnAncestor { clade: String, guess: String },

    #[error("{clade} lies outside the current clade {current}")]
    OutsideClade { clade: String, current: String },
}

/// Progress of one game: the clade known to hold the answer and the misses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    root: String,
    clade: String,
    excluded: Vec<String>,
    /// Clade before each miss, for undo
    previous: Vec<String>,
}

impl GameState {
    #[must_use]
    pub fn new(root: impl Into<String>) -> Self {
        let root = root.into();
        Self {
            clade: root.clone(),
            root,
            excluded: Vec::new(),
            previous: Vec::new(),
        }
    }

    #[must_use]
    pub fn clade(&self) -> &str {
        &self.clade
    }

    #[must_use]
    pub fn excluded(&self) -> &[String] {
        &self.excluded
    }

    /// One-based number of the turn being played
    #[must_use]
    pub fn turn(&self) -> usize {
        self.excluded.len() + 1
    }

    /// Record a wrong guess and the clade the game revealed for it
    ///
    /// # Errors
    ///
    /// Rejects feedback that is not in the tree, does not contain the guess,
    /// or is not inside the current clade. The state is left unchanged.
    pub fn record_miss(
        &mut self,
        guess: &str,
        revealed: &str,
        tree: &Tree,
        index: &AncestryIndex<'_>,
    ) -> Result<(), FeedbackError> {
        if !tree.contains(revealed) || tree.is_leaf(revealed) {
            return Err(FeedbackError::UnknownClade(revealed.to_string()));
        }
        if !index.is_ancestor(revealed, guess) {
            return Err(FeedbackError::NotAnAncestor {
                clade: revealed.to_string(),
                guess: guess.to_string(),
            });
        }
        if revealed != self.clade && !index.is_ancestor(&self.clade, revealed) {
            return Err(FeedbackError::OutsideClade {
                clade: revealed.to_string(),
                current: self.clade.clone(),
            });
        }

        self.excluded.push(guess.to_string());
        self.previous
            .push(std::mem::replace(&mut self.clade, revealed.to_string()));
        Ok(())
    }

    /// Take back the last miss; `false` if there is none
    pub fn undo(&mut self) -> bool {
        match self.previous.pop() {
            Some(clade) => {
                self.clade = clade;
                self.excluded.pop();
                true
            }
            None => false,
        }
    }

    pub fn reset(&mut self) {
        self.clade.clone_from(&self.root);
        self.excluded.clear();
        self.previous.clear();
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error on I/O failure reading user input, or if the solver
/// rejects the current clade.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_simple<S: Strategy>(
    solver: &Solver<S>,
    names: &NameMap,
    tie_break: TieBreak,
) -> Result<()> {
    let tree = solver.tree();
    let root = solver.root().context("taxonomy tree is empty")?;
    let index = AncestryIndex::new(tree);
    let mut state = GameState::new(root);

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║             Metazooa Solver - Interactive Mode               ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("I'll suggest guesses that keep the worst case as small as possible.");
    println!("After each guess, enter the clade the game revealed");
    println!("(common or scientific name), or type 'win' if you got it right!\n");
    println!("Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last guess\n");

    loop {
        let outcome = solver.next_guess(state.clade(), state.excluded())?;

        let Some(best) = outcome.best() else {
            println!(
                "\n❌ No candidates remain in {}! Your feedback may be incorrect.",
                format_taxon(names, state.clade())
            );
            println!("Type 'undo' to go back, or 'new' to start over.\n");

            match get_user_input("Command")?.as_deref().map(Command::parse) {
                Some(Some(Command::Undo)) => {
                    if state.undo() {
                        println!("✓ Undone! Back to turn {}\n", state.turn());
                    } else {
                        println!("Nothing to undo!\n");
                    }
                }
                Some(Some(Command::New)) => {
                    state.reset();
                    println!("\n🔄 New game started!\n");
                }
                None | Some(Some(Command::Quit)) => return Ok(()),
                Some(_) => {}
            }
            continue;
        };

        let guess = best.pick(tie_break).to_string();

        println!("────────────────────────────────────────────────────────────");
        println!(
            "Turn {}: {} candidates remaining in {}",
            state.turn(),
            best.candidate_count(),
            format_taxon(names, state.clade())
        );
        println!("────────────────────────────────────────────────────────────");

        println!(
            "\n📊 Suggested guess: {}",
            format_taxon(names, &guess).bright_white().bold()
        );
        println!("   Worst case:       {} candidates", best.worst_case());

        let alternatives: Vec<&str> = best.alternatives(&guess).collect();
        if !alternatives.is_empty() && alternatives.len() <= 5 {
            println!("   Equally good:     {}", describe(names, &alternatives));
        }
        println!();

        if best.candidate_count() <= 10 {
            println!("Remaining candidates:");
            for candidate in solver.candidates(state.clade(), state.excluded())? {
                println!("  • {}", format_taxon(names, &candidate));
            }
            println!();
        }

        loop {
            let Some(input) = get_user_input("Revealed clade ('win', or command)")? else {
                return Ok(());
            };

            match Command::parse(&input) {
                Some(Command::Quit) => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                Some(Command::New) => {
                    state.reset();
                    println!("\n🔄 New game started!\n");
                    break;
                }
                Some(Command::Undo) => {
                    if state.undo() {
                        println!("✓ Undone! Back to turn {}\n", state.turn());
                        break;
                    }
                    println!("Nothing to undo!\n");
                }
                Some(Command::Win) => {
                    print_victory(&state, &guess, names);

                    let again = get_user_input("Play again? (yes/no)")?.map(|a| a.to_lowercase());
                    match again.as_deref() {
                        Some("yes" | "y") => {
                            state.reset();
                            println!("\n🔄 New game started!\n");
                            break;
                        }
                        _ => {
                            println!("\n👋 Thanks for playing!\n");
                            return Ok(());
                        }
                    }
                }
                None if input.is_empty() => {}
                None => {
                    let revealed = names.resolve(&input, tree);
                    match state.record_miss(&guess, revealed, tree, &index) {
                        Ok(()) => break,
                        Err(err) => println!("❌ {err}\n"),
                    }
                }
            }
        }
    }
}

/// Keywords accepted at the prompts, in any letter case
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Quit,
    New,
    Undo,
    Win,
}

impl Command {
    fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "quit" | "q" | "exit" => Some(Self::Quit),
            "new" | "n" => Some(Self::New),
            "undo" | "u" => Some(Self::Undo),
            "win" | "correct" | "yes" | "solved" => Some(Self::Win),
            _ => None,
        }
    }
}

fn describe(names: &NameMap, ids: &[&str]) -> String {
    ids.iter()
        .map(|id| names.display(id))
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_victory(state: &GameState, guess: &str, names: &NameMap) {
    let turn = state.turn();

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!(
        "{}",
        "    🎉 🎊 ✨  S P E C I E S   F O U N D !  ✨ 🎊 🎉    "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(70).bright_cyan());

    let performance = match turn {
        1 => ("🏆 Perfect!", "Incredible hole-in-one!"),
        2 | 3 => ("⭐ Excellent!", "Outstanding performance!"),
        4 | 5 => ("💫 Great!", "Very well played!"),
        _ => ("✓ Complete!", "Success!"),
    };

    println!("\n  {}", performance.0.bright_yellow().bold());
    println!("  {}", performance.1.bright_white());
    println!(
        "\n  {} found in {} {}",
        format_taxon(names, guess).bright_white().bold(),
        turn.to_string().bright_cyan().bold(),
        if turn == 1 { "guess" } else { "guesses" }
    );

    if !state.excluded().is_empty() {
        println!("\n  Misses:");
        for (i, miss) in state.excluded().iter().enumerate() {
            println!(
                "    {}. {}",
                (i + 1).to_string().bright_black(),
                names.display(miss)
            );
        }
    }

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!();
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
