//! Display functions for command results

use super::formatters::{create_progress_bar, format_ladder, format_no_path, steps_label};
use crate::commands::{BenchmarkResult, FindOutcome, FindResult, GraphReport};
use colored::Colorize;

/// Print the result of a single ladder query
pub fn print_find_result(result: &FindResult) {
    match result.outcome {
        FindOutcome::Found => {
            let steps = result.steps().unwrap_or(0);
            println!("{}", format_ladder(&result.ladder).bright_green().bold());
            println!(
                "{}",
                format!("{steps} {}", steps_label(steps)).bright_black()
            );
        }
        FindOutcome::UnknownStart => {
            println!("{}", format_no_path(&result.start, &result.end).red());
            println!("  '{}' is not in the dictionary", result.start.yellow());
        }
        FindOutcome::UnknownEnd => {
            println!("{}", format_no_path(&result.start, &result.end).red());
            println!("  '{}' is not in the dictionary", result.end.yellow());
        }
        FindOutcome::Unreachable => {
            println!("{}", format_no_path(&result.start, &result.end).red());
        }
    }
}

/// Print how a graph was built and its shape
pub fn print_graph_report(report: &GraphReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "WORD GRAPH".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📖 {}", "Dictionary:".bright_cyan().bold());
    println!("   Source:           {}", report.source);
    println!("   Words read:       {}", report.words_read);
    println!(
        "   Load time:        {:.2}ms",
        report.load_duration.as_secs_f64() * 1000.0
    );
    println!(
        "   Distinct words:   {}",
        report.stats.words.to_string().bright_yellow().bold()
    );

    println!("\n🔧 {}", "Rules:".bright_cyan().bold());
    for rule in &report.rules {
        println!(
            "   {:<12} {:>8} edges  {:>8.2}ms",
            rule.rule,
            rule.edges_added,
            rule.duration.as_secs_f64() * 1000.0
        );
    }

    println!("\n🕸  {}", "Graph:".bright_cyan().bold());
    println!(
        "   Edges:            {}",
        report.stats.edges.to_string().bright_yellow().bold()
    );
    println!("   Max out-degree:   {}", report.stats.max_out_degree);
    println!("   Isolated words:   {}", report.stats.isolated);

    if !report.hubs.is_empty() {
        println!("\n⭐ {}", "Best connected:".bright_cyan().bold());
        for (word, degree) in &report.hubs {
            println!("   {:<12} {degree}", word.bright_white());
        }
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Queries:          {}", result.total_queries);
    println!("   Ladders found:    {}", format!("{}", result.found).green());
    println!(
        "   Unreachable:      {}",
        format!("{}", result.unreachable).yellow()
    );
    println!(
        "   Average length:   {}",
        format!("{:.2} words", result.average_length)
            .bright_yellow()
            .bold()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Queries/second:   {:.1}", result.queries_per_second);

    if !result.longest.is_empty() {
        println!("\n🪜 {}", "Longest ladder:".bright_cyan().bold());
        println!("   {}", format_ladder(&result.longest));
    }

    if result.found > 0 {
        println!("\n📈 {}", "Distribution (words per ladder):".bright_cyan().bold());
        for (&length, &count) in &result.distribution {
            let pct = (count as f64 / result.found as f64) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {length:>2}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }
}
