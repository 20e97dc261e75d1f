//! Display functions for command results

use super::formatters::{bucket_bar, format_taxon};
use crate::commands::{AnalysisResult, GuessReport, SolveResult};
use crate::core::NameMap;
use colored::Colorize;

/// Print the suggested next guess
pub fn print_guess_report(report: &GuessReport, names: &NameMap) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Clade: {}",
        format_taxon(names, &report.clade).bright_yellow().bold()
    );
    if !report.excluded.is_empty() {
        let excluded: Vec<&str> = report.excluded.iter().map(|id| names.display(id)).collect();
        println!("Without: {}", excluded.join(", "));
    }
    println!("{}", "─".repeat(60).cyan());

    println!(
        "\n🎯 Best guess: {}",
        format_taxon(names, &report.guess).bright_white().bold()
    );
    println!("   Candidates:  {}", report.candidates);
    println!(
        "   Worst case:  {}",
        format!("{} remaining", report.worst_case).bright_yellow()
    );

    if !report.alternatives.is_empty() {
        println!("\n   Equally good ({}):", report.alternatives.len());
        for alternative in &report.alternatives {
            println!("     • {}", format_taxon(names, alternative));
        }
    }
}

/// Print the result of solving a species
pub fn print_solve_result(result: &SolveResult, names: &NameMap, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        format_taxon(names, &result.target).bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        let turn = i + 1;
        let verdict = match &step.feedback {
            None => "✅".to_string(),
            Some(feedback) => format!("→ {}", names.display(feedback)),
        };
        println!(
            "\nTurn {}: {} {}",
            turn,
            format_taxon(names, &step.guess),
            verdict
        );

        if verbose {
            println!("  Clade:      {}", format_taxon(names, &step.clade));
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!("  Worst case: {}", step.worst_case);
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print how a guess splits the candidates
pub fn print_analysis_result(result: &AnalysisResult, names: &NameMap) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "GUESS ANALYSIS:".bright_cyan().bold(),
        format_taxon(names, &result.species).bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 Against {} candidates in {}:",
        result.total_candidates,
        format_taxon(names, &result.clade)
    );

    for (feedback, count) in &result.buckets {
        let bar = bucket_bar(*count, result.total_candidates, 30);
        println!(
            "   [{}] {count:4}  {}",
            bar.green(),
            format_taxon(names, feedback)
        );
    }

    println!(
        "\n   Worst case:  {}",
        format!("{} remaining", result.worst_case).bright_yellow()
    );
    match result.best_worst_case {
        Some(_) if result.is_optimal() => {
            println!("   {}", "Optimal: no guess has a smaller worst case".green());
        }
        Some(best) => {
            println!(
                "   {}",
                format!("Suboptimal: the best guesses leave at most {best}").yellow()
            );
        }
        None => {}
    }
}
