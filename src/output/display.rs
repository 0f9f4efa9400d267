//! Display functions for command results

use super::formatters::{frequency_bar, percentage, relation_line};
use crate::commands::inspect::FAMILY_TOP_SYMBOLS;
use crate::commands::{DeriveResult, InspectReport, SampleResult};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner shown while data files are decoded
///
/// # Panics
/// Will not panic - the template is a fixed valid string.
#[must_use]
pub fn loading_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("static template"),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Print the structural scan report
pub fn print_inspect_report(report: &InspectReport) {
    for path in &report.missing {
        println!("{} missing {}", "[warn]".yellow(), path.display());
    }

    println!("\n{}", "═".repeat(70).cyan());
    println!(" {} ", "WORDNET STRUCTURE SUMMARY".bright_cyan().bold());
    println!("{}", "═".repeat(70).cyan());

    for family in &report.families {
        println!(
            "   {:9} synsets: {:>7}  lemma tokens: {:>7}  avg lemmas/synset: {}",
            family.pos.to_string().bright_yellow(),
            family.synsets,
            family.lemma_tokens,
            format!("{:.2}", family.average_lemmas()).green()
        );
        if family.stats.malformed > 0 {
            println!(
                "   {:9} {} malformed line(s) dropped",
                "",
                family.stats.malformed.to_string().red()
            );
        }
    }

    println!(
        "\n📊 {} {}",
        "Distinct pointer symbols:".bright_cyan().bold(),
        report.distinct_symbols()
    );

    let top = report.top_symbols();
    if top.is_empty() {
        println!("   No pointer symbols parsed.");
    } else {
        let max = top.first().map_or(0, |(_, count)| *count);
        println!("\n📈 {}", format!("Top {} symbols:", top.len()).bright_cyan().bold());
        for (symbol, count) in &top {
            println!(
                "   {symbol:3} {} {count:>8}",
                frequency_bar(*count, max, 30).green()
            );
        }
    }

    println!(
        "\n{}",
        format!("Per-family top {FAMILY_TOP_SYMBOLS}:")
            .bright_cyan()
            .bold()
    );
    for family in &report.families {
        println!("   {}:", family.pos.to_string().bright_yellow());
        for (symbol, count) in family.top_symbols(FAMILY_TOP_SYMBOLS) {
            println!("     {symbol:3} {count}");
        }
    }
}

/// Print the relations found by a derive run
pub fn print_derive_result(result: &DeriveResult) {
    println!(
        "{}s with >={} {} matches: {}\n",
        result.query.source_pos,
        result.min_targets,
        result.query.target_pos,
        result.filtered.len().to_string().bright_yellow().bold()
    );

    for (source, targets) in result.shown() {
        println!("{}", relation_line(source, targets));
    }

    let stats = &result.materialize_stats;
    let dropped = stats.pairs_in - stats.emitted;
    println!(
        "\n{}",
        format!(
            "{} pointer pairs, {} kept, {} dropped ({:.1}%)",
            stats.pairs_in,
            stats.emitted,
            dropped,
            percentage(dropped, stats.pairs_in)
        )
        .bright_black()
    );
}

/// Print a random sample of relations
pub fn print_sample(result: &SampleResult) {
    println!("\n{}", "─".repeat(60).cyan());
    print!(
        "Sampled {} of {} sources",
        result.entries.len().to_string().bright_yellow().bold(),
        result.pool_size
    );
    match result.seed {
        Some(seed) => println!(" (seed {seed})"),
        None => println!(),
    }
    println!("{}", "─".repeat(60).cyan());

    for (source, targets) in &result.entries {
        println!(
            "  {} {} {}",
            source.bright_yellow(),
            "→".cyan(),
            targets.join(", ")
        );
    }
}
