//! Display functions for command results

use super::formatters::{create_progress_bar, ladder_to_string, length_distribution};
use crate::commands::{GenerateResult, NeighborsResult, StatsResult};
use colored::Colorize;

/// Number of sample ladders shown after generation
const SAMPLE_LADDERS: usize = 5;

/// Print the summary of a generation run
pub fn print_generate_result(result: &GenerateResult, destination: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "LADDER GENERATION".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Pipeline:".bright_cyan().bold());
    println!("   Records read:       {}", result.record_count);
    println!("   Words of length:    {}", result.word_count);
    println!("   Connected words:    {}", result.connected_count);
    println!("   Raw ladders:        {}", result.raw_count);
    println!(
        "   Final ladders:      {}",
        result.ladders.len().to_string().bright_yellow().bold()
    );
    println!(
        "   Graph time:         {:.2}s",
        result.graph_duration.as_secs_f64()
    );
    println!(
        "   Enumeration time:   {:.2}s",
        result.enumerate_duration.as_secs_f64()
    );
    println!(
        "   Total time:         {:.2}s",
        result.total_duration.as_secs_f64()
    );

    let distribution = length_distribution(&result.ladders);
    if !distribution.is_empty() {
        println!("\n📈 {}", "Length Distribution:".bright_cyan().bold());
        let max_count = distribution.values().copied().max().unwrap_or(1);
        for (length, count) in &distribution {
            let bar = create_progress_bar(*count as f64, max_count as f64, 40);
            println!("   {length} words: {} {count:6}", bar.green());
        }
    }

    if !result.ladders.is_empty() {
        println!("\n🪜 {}", "Shortest Ladders:".bright_cyan().bold());
        for ladder in result.ladders.iter().take(SAMPLE_LADDERS) {
            println!("   {}", ladder_to_string(ladder));
        }
        if let Some(longest) = result.ladders.last() {
            println!("\n🏔  {}", "Longest Ladder:".bright_cyan().bold());
            println!("   {}", ladder_to_string(longest).bright_green());
        }
    }

    println!();
    println!(
        "{}",
        format!("✅ Saved {} ladders to {destination}", result.ladders.len())
            .green()
            .bold()
    );
}

/// Print the neighbors of a word
pub fn print_neighbors_result(result: &NeighborsResult) {
    println!(
        "\n{} {}",
        "Neighbors of".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );

    if result.neighbors.is_empty() {
        println!("   {}", "(no single-letter neighbors)".bright_black());
        return;
    }

    for neighbor in &result.neighbors {
        println!("   {}", neighbor.to_uppercase());
    }
    println!("\n   {} neighbors", result.neighbors.len());
}

/// Print graph statistics
pub fn print_stats_result(result: &StatsResult) {
    let stats = &result.graph;

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "GRAPH STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Lexicon:".bright_cyan().bold());
    println!("   Records read:       {}", result.record_count);
    println!(
        "   Words of length {}:  {}",
        result.word_length, stats.words
    );
    println!(
        "   Connected words:    {}",
        stats.connected.to_string().green()
    );
    println!(
        "   Isolated words:     {}",
        stats.isolated.to_string().yellow()
    );

    println!("\n🔗 {}", "Adjacency:".bright_cyan().bold());
    println!("   Strategy:           {}", result.strategy.name());
    println!("   Directed edges:     {}", stats.edges);
    println!("   Mean degree:        {:.2}", stats.mean_degree);
    if let Some((word, degree)) = &stats.max_degree {
        println!(
            "   Max degree:         {} ({})",
            degree,
            word.text().to_uppercase().bright_yellow()
        );
    }
    println!("   Build time:         {:.3}s", result.duration.as_secs_f64());
}
