//! Metazooa Solver - CLI
//!
//! Suggests species guesses for the taxonomy guessing game by minimizing the
//! worst-case number of remaining candidates.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use metazooa_solver::{
    commands::{
        GuessQuery, SolveConfig, TestAllConfig, analyze_species, print_test_all_statistics,
        run_simple, run_test_all, solve_species, suggest_guess,
    },
    core::{NameMap, Tree},
    output::{print_analysis_result, print_guess_report, print_solve_result},
    solver::{Solver, StrategyType, TieBreak},
    taxonomy::load_source,
};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

#[derive(Parser)]
#[command(
    name = "metazooa_solver",
    about = "Minimax species guesser for the Metazooa taxonomy game",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Taxonomy tree: 'builtin' (default, demo tree) or path to a JSON file
    #[arg(short, long, global = true, default_value = "builtin")]
    tree: String,

    /// Strategy: minimax (default), parallel, random
    #[arg(short, long, global = true, default_value = "minimax")]
    strategy: String,

    /// Tie-break between equally good guesses: random (default) or first
    #[arg(long, global = true, default_value = "random")]
    tie_break: String,

    /// Log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short = 'v', long = "verbose", global = true, action = clap::ArgAction::Count)]
    verbosity: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest the next guess (default: opening guess from the root)
    Guess {
        /// Clade known to contain the answer (default: tree root)
        #[arg(short, long)]
        clade: Option<String>,

        /// Comma-separated species already guessed
        #[arg(short = 'x', long, default_value = "")]
        without: String,
    },

    /// Show how a guess would split the remaining candidates
    Analyze {
        /// Species to analyze (common or scientific name)
        species: String,

        /// Clade known to contain the answer (default: tree root)
        #[arg(short, long)]
        clade: Option<String>,

        /// Comma-separated species already guessed
        #[arg(short = 'x', long, default_value = "")]
        without: String,
    },

    /// Play a full game against a known answer
    Solve {
        /// The answer species (common or scientific name)
        species: String,

        /// Show clade and candidate counts for every turn
        #[arg(short = 'd', long)]
        details: bool,

        /// Give up after this many guesses
        #[arg(short, long, default_value = "20")]
        max_guesses: usize,
    },

    /// Interactive assistant for a live game
    Simple,

    /// Play a game against every species in the tree
    TestAll {
        /// Limit number of species to test
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbosity);

    if let Err(e) = execute_command(cli) {
        eprintln!("{}", format!("Error: {e:#}").red());
        std::process::exit(1);
    }
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level.into()));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();

    tracing::debug!(%level, "logging initialised");
}

fn execute_command(cli: Cli) -> Result<()> {
    let (tree, names) = load_source(&cli.tree)
        .with_context(|| format!("failed to load taxonomy tree '{}'", cli.tree))?;
    tracing::info!(nodes = tree.len(), species = tree.leaves().len(), "tree loaded");

    let solver = Solver::new(StrategyType::from_name(&cli.strategy), &tree);
    let tie_break = TieBreak::from_name(&cli.tie_break);
    let root = root_of(&tree)?;

    match cli.command.unwrap_or(Commands::Guess {
        clade: None,
        without: String::new(),
    }) {
        Commands::Guess { clade, without } => {
            let query = GuessQuery {
                tie_break,
                ..GuessQuery::new(clade.as_deref().unwrap_or(root), without)
            };
            guess_command(&query, &solver, &names)
        }
        Commands::Analyze {
            species,
            clade,
            without,
        } => {
            let clade = clade.as_deref().unwrap_or(root);
            let result = analyze_species(&species, clade, &without, &solver, &names)?;
            print_analysis_result(&result, &names);
            Ok(())
        }
        Commands::Solve {
            species,
            details,
            max_guesses,
        } => {
            let config = SolveConfig {
                max_guesses,
                tie_break,
                ..SolveConfig::new(names.resolve(&species, &tree).to_string())
            };
            let result = solve_species(config, &solver)?;
            print_solve_result(&result, &names, details);
            Ok(())
        }
        Commands::Simple => run_simple(&solver, &names, tie_break),
        Commands::TestAll { limit } => {
            println!("\n{}", "═".repeat(70));
            println!(" Comprehensive Metazooa Solver Test ");
            println!("{}", "═".repeat(70));
            println!("\nTesting against {} species", tree.leaves().len());
            println!("Strategy: {}", cli.strategy);
            println!();

            let config = TestAllConfig {
                limit,
                tie_break,
                ..TestAllConfig::default()
            };
            let stats = run_test_all(&solver, &config)?;
            print_test_all_statistics(&stats, &names);
            Ok(())
        }
    }
}

fn guess_command(
    query: &GuessQuery,
    solver: &Solver<StrategyType>,
    names: &NameMap,
) -> Result<()> {
    match suggest_guess(query, solver, names)? {
        Some(report) => {
            print_guess_report(&report, names);
            Ok(())
        }
        None => {
            let clade = names.resolve(&query.clade, solver.tree());
            anyhow::bail!(
                "No valid candidates found in clade {}",
                names.display(clade)
            )
        }
    }
}

fn root_of(tree: &Tree) -> Result<&str> {
    tree.root().context("taxonomy tree has no root")
}
