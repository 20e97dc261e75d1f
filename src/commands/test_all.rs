//! Test all species - comprehensive solver evaluation
//!
//! Runs the solver against every species in the tree and generates statistics.

use super::solve::{DEFAULT_MAX_GUESSES, SolveConfig, solve_species};
use crate::core::{NameMap, SolverError};
use crate::solver::{Solver, Strategy, TieBreak};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result from testing a single species
#[derive(Debug, Clone)]
pub struct SpeciesTestResult {
    pub species: String,
    pub guesses: Vec<String>,
    pub num_guesses: usize,
    pub success: bool,
}

/// Statistics from testing all species
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_species: usize,
    pub solved: usize,
    pub failed: usize,
    pub guess_distribution: BTreeMap<usize, usize>,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    /// Species needing the most guesses, hardest first
    pub hardest: Vec<(String, usize)>,
    pub results: Vec<SpeciesTestResult>,
}

/// Options for a full evaluation run
pub struct TestAllConfig {
    pub limit: Option<usize>,
    pub max_guesses: usize,
    pub tie_break: TieBreak,
    pub show_progress: bool,
}

impl Default for TestAllConfig {
    fn default() -> Self {
        Self {
            limit: None,
            max_guesses: DEFAULT_MAX_GUESSES,
            tie_break: TieBreak::First,
            show_progress: true,
        }
    }
}

/// Run the solver on every species (or a limited subset)
///
/// # Errors
///
/// Propagates solver errors; with a valid tree none are expected.
pub fn run_test_all<S: Strategy>(
    solver: &Solver<S>,
    config: &TestAllConfig,
) -> Result<TestAllStatistics, SolverError> {
    let species: Vec<&str> = solver
        .tree()
        .leaves()
        .into_iter()
        .take(config.limit.unwrap_or(usize::MAX))
        .collect();

    let pb = if config.show_progress {
        ProgressBar::new(species.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let total_start = Instant::now();
    let mut results = Vec::with_capacity(species.len());

    for (idx, &target) in species.iter().enumerate() {
        let solve_config = SolveConfig {
            target: target.to_string(),
            max_guesses: config.max_guesses,
            tie_break: config.tie_break,
        };
        let result = solve_species(solve_config, solver)?;

        results.push(SpeciesTestResult {
            species: result.target,
            num_guesses: result.guesses.len(),
            guesses: result.guesses.into_iter().map(|step| step.guess).collect(),
            success: result.success,
        });

        if idx % 10 == 0 {
            let avg = results.iter().map(|r| r.num_guesses).sum::<usize>() as f64
                / results.len() as f64;
            pb.set_message(format!("Avg: {avg:.2}"));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    Ok(summarize(results, total_start.elapsed()))
}

fn summarize(results: Vec<SpeciesTestResult>, total_time: Duration) -> TestAllStatistics {
    let solved_results: Vec<&SpeciesTestResult> = results.iter().filter(|r| r.success).collect();
    let solved = solved_results.len();

    let mut guess_distribution = BTreeMap::new();
    for result in &solved_results {
        *guess_distribution.entry(result.num_guesses).or_insert(0) += 1;
    }

    let average_guesses = if solved == 0 {
        0.0
    } else {
        solved_results.iter().map(|r| r.num_guesses).sum::<usize>() as f64 / solved as f64
    };

    let max_guesses = solved_results.iter().map(|r| r.num_guesses).max().unwrap_or(0);
    let min_guesses = solved_results.iter().map(|r| r.num_guesses).min().unwrap_or(0);

    let mut hardest: Vec<(String, usize)> = solved_results
        .iter()
        .map(|r| (r.species.clone(), r.num_guesses))
        .collect();
    hardest.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    hardest.truncate(10);

    TestAllStatistics {
        total_species: results.len(),
        solved,
        failed: results.len() - solved,
        guess_distribution,
        total_time,
        average_guesses,
        max_guesses,
        min_guesses,
        hardest,
        results,
    }
}

/// Print comprehensive statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics, names: &NameMap) {
    println!("\n{}", "═".repeat(70));
    println!(" {} ", "RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(70));

    let rate = if stats.total_species == 0 {
        0.0
    } else {
        stats.solved as f64 / stats.total_species as f64 * 100.0
    };

    println!("\n📊 {}", "Overall:".bright_cyan().bold());
    println!("   Species tested:   {}", stats.total_species);
    println!(
        "   Solved:           {} ({})",
        stats.solved.to_string().green(),
        format!("{rate:.1}%").bright_yellow()
    );
    if stats.failed > 0 {
        println!("   Failed:           {}", stats.failed.to_string().red());
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.3}", stats.average_guesses).bright_yellow().bold()
    );
    println!("   Best case:        {}", stats.min_guesses.to_string().green());
    println!("   Worst case:       {}", stats.max_guesses.to_string().yellow());
    println!("   Total time:       {:.2}s", stats.total_time.as_secs_f64());

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&guesses, &count) in &stats.guess_distribution {
        let pct = count as f64 / stats.total_species.max(1) as f64 * 100.0;
        let bar_width = (pct / 2.5) as usize;
        println!(
            "   {guesses:2}: {}{} {count:4} ({pct:5.1}%)",
            "█".repeat(bar_width).green(),
            "░".repeat(40_usize.saturating_sub(bar_width)).bright_black()
        );
    }

    if !stats.hardest.is_empty() {
        println!("\n🐢 {}", "Hardest species:".bright_cyan().bold());
        for (species, guesses) in stats.hardest.iter().take(5) {
            println!("   {guesses:2} guesses  {}", names.display(species));
        }
    }

    let failures: Vec<&SpeciesTestResult> = stats.results.iter().filter(|r| !r.success).collect();
    if !failures.is_empty() {
        println!("\n❌ {}", "Not solved:".red().bold());
        for failure in failures.iter().take(10) {
            println!("   {}", names.display(&failure.species));
        }
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::MinimaxStrategy;
    use crate::taxonomy::load_builtin;

    fn quiet() -> TestAllConfig {
        TestAllConfig {
            show_progress: false,
            ..TestAllConfig::default()
        }
    }

    #[test]
    fn solves_every_demo_species() {
        let (tree, _) = load_builtin().unwrap();
        let solver = Solver::new(MinimaxStrategy, &tree);

        let stats = run_test_all(&solver, &quiet()).unwrap();

        assert_eq!(stats.total_species, 36);
        assert_eq!(stats.solved, 36);
        assert_eq!(stats.failed, 0);
        assert_eq!(stats.min_guesses, 1);
        assert_eq!(stats.max_guesses, 5);
        assert_eq!(stats.guess_distribution.values().sum::<usize>(), 36);
        assert!((stats.average_guesses - 119.0 / 36.0).abs() < 1e-9);
        assert_eq!(stats.hardest[0].1, 5);
    }

    #[test]
    fn limit_restricts_species() {
        let (tree, _) = load_builtin().unwrap();
        let solver = Solver::new(MinimaxStrategy, &tree);

        let config = TestAllConfig {
            limit: Some(4),
            ..quiet()
        };
        let stats = run_test_all(&solver, &config).unwrap();

        assert_eq!(stats.total_species, 4);
        assert_eq!(stats.results[0].species, "Canis lupus");
        assert_eq!(stats.results[0].guesses, ["Canis lupus"]);
    }

    #[test]
    fn tight_guess_limit_counts_failures() {
        let (tree, _) = load_builtin().unwrap();
        let solver = Solver::new(MinimaxStrategy, &tree);

        let config = TestAllConfig {
            max_guesses: 1,
            ..quiet()
        };
        let stats = run_test_all(&solver, &config).unwrap();

        assert_eq!(stats.solved, 1);
        assert_eq!(stats.failed, 35);
        assert_eq!(stats.max_guesses, 1);
    }

    #[test]
    fn summarize_empty_run() {
        let stats = summarize(Vec::new(), Duration::ZERO);

        assert_eq!(stats.total_species, 0);
        assert_eq!(stats.average_guesses, 0.0);
        assert!(stats.hardest.is_empty());
    }
}
