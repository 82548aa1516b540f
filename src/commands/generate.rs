//! Ladder generation command
//!
//! Runs the whole pipeline: length filter, graph, enumeration, selection.

use crate::core::{Ladder, Word};
use crate::graph::{GraphStrategy, LadderGraph};
use crate::ladder::{ConfigError, LadderConfig, LadderEnumerator, select};
use crate::wordlists::loader::filter_by_length;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Options for a generation run
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    pub config: LadderConfig,
    pub strategy: GraphStrategy,
    /// Suppress progress output
    pub quiet: bool,
}

/// Result of a generation run
#[derive(Debug)]
pub struct GenerateResult {
    pub ladders: Vec<Ladder>,
    pub record_count: usize,
    pub word_count: usize,
    pub connected_count: usize,
    pub raw_count: usize,
    pub graph_duration: Duration,
    pub enumerate_duration: Duration,
    pub total_duration: Duration,
}

/// Filter records to the configured length and build the graph
///
/// # Errors
///
/// Returns `ConfigError` if the configuration is invalid.
pub fn build_graph<S: AsRef<str>>(
    records: &[S],
    config: &LadderConfig,
    strategy: GraphStrategy,
) -> Result<(Vec<Word>, LadderGraph), ConfigError> {
    config.validate()?;

    let words = filter_by_length(records, config.word_length);
    let graph = LadderGraph::build(&words, strategy);
    Ok((words, graph))
}

/// Generate the final ladder list from raw records
///
/// # Errors
///
/// Returns `ConfigError` if the configuration is invalid. The pipeline itself cannot fail.
pub fn run_generate<S: AsRef<str>>(
    records: &[S],
    options: &GenerateOptions,
) -> Result<GenerateResult, ConfigError> {
    let total_start = Instant::now();

    let (words, graph) = build_graph(records, &options.config, options.strategy)?;
    let graph_duration = total_start.elapsed();

    if !options.quiet {
        println!(
            "🔤 Found {} words that are {} characters long",
            words.len().to_string().bright_yellow(),
            options.config.word_length
        );
        println!(
            "🔗 Found {} words with at least one neighbor ({} graph)",
            graph.len().to_string().bright_yellow(),
            options.strategy.name()
        );
    }

    let progress = if options.quiet {
        ProgressBar::hidden()
    } else {
        progress_bar(graph.len())
    };

    let enumerate_start = Instant::now();
    let raw = LadderEnumerator::new(&graph, options.config.max_length).enumerate_parallel(&progress);
    let enumerate_duration = enumerate_start.elapsed();
    let raw_count = raw.len();

    progress.finish_with_message(format!("{raw_count} ladders"));

    let ladders = select(raw, &options.config.selection);

    Ok(GenerateResult {
        ladders,
        record_count: records.len(),
        word_count: words.len(),
        connected_count: graph.len(),
        raw_count,
        graph_duration,
        enumerate_duration,
        total_duration: total_start.elapsed(),
    })
}

fn progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} start words ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );
    pb
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::SAMPLE;

    fn quiet() -> GenerateOptions {
        GenerateOptions {
            quiet: true,
            ..GenerateOptions::default()
        }
    }

    #[test]
    fn generates_chain_ladders() {
        let records = ["hello", "cello", "cells", "hippo", "hi"];
        let result = run_generate(&records, &quiet()).unwrap();

        assert_eq!(result.record_count, 5);
        assert_eq!(result.word_count, 4);
        assert_eq!(result.connected_count, 3);
        assert_eq!(result.raw_count, 9);

        let rendered: Vec<String> = result.ladders.iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            vec!["cells → cello → hello", "hello → cello → cells"]
        );
    }

    #[test]
    fn six_word_ladders_survive_default_bound() {
        let records = ["bolts", "belts", "bells", "cells", "calls", "halls", "hills"];
        let result = run_generate(&records, &quiet()).unwrap();
        let rendered: Vec<String> = result.ladders.iter().map(ToString::to_string).collect();

        for expected in [
            "bolts → belts → bells → cells → calls → halls",
            "hills → halls → calls → cells → bells → belts",
            "belts → bells → cells → calls → halls → hills",
            "halls → calls → cells → bells → belts → bolts",
            "bolts → belts → bells → cells → calls → halls → hills",
        ] {
            assert!(rendered.iter().any(|l| l == expected), "missing {expected}");
        }
    }

    #[test]
    fn triangle_collapses_to_single_steps() {
        // Every pair is directly adjacent, so only two-word ladders survive dedup
        let result = run_generate(&["hello", "cello", "jello"], &quiet()).unwrap();

        assert_eq!(result.raw_count, 15);
        assert!(result.ladders.is_empty());
    }

    #[test]
    fn output_is_filtered_and_sorted() {
        let result = run_generate(SAMPLE, &quiet()).unwrap();

        assert!(!result.ladders.is_empty());
        for ladder in &result.ladders {
            assert_ne!(ladder.len(), 2, "{ladder}");
            assert!(!ladder.keeps_first_letter(), "{ladder}");
            assert!(ladder.len() <= 7, "{ladder}");
        }
        for pair in result.ladders.windows(2) {
            assert!(
                (pair[0].len(), pair[0].first()) <= (pair[1].len(), pair[1].first()),
                "{} before {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn strategies_produce_identical_output() {
        let pairwise = run_generate(SAMPLE, &quiet()).unwrap();
        let bucketed = run_generate(
            SAMPLE,
            &GenerateOptions {
                strategy: GraphStrategy::Bucketed,
                ..quiet()
            },
        )
        .unwrap();

        assert_eq!(pairwise.ladders, bucketed.ladders);
        assert_eq!(pairwise.raw_count, bucketed.raw_count);
    }

    #[test]
    fn empty_input_yields_no_ladders() {
        let records: [&str; 0] = [];
        let result = run_generate(&records, &quiet()).unwrap();

        assert!(result.ladders.is_empty());
        assert_eq!(result.raw_count, 0);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let options = GenerateOptions {
            config: LadderConfig {
                max_length: 1,
                ..LadderConfig::default()
            },
            ..quiet()
        };
        assert_eq!(
            run_generate(&["hello"], &options).unwrap_err(),
            ConfigError::MaxLengthTooSmall(1)
        );
    }

    #[test]
    fn word_length_selects_other_lexicon() {
        let options = GenerateOptions {
            config: LadderConfig {
                word_length: 3,
                ..LadderConfig::default()
            },
            ..quiet()
        };
        let result = run_generate(&["cat", "cot", "dot", "hello"], &options).unwrap();

        let rendered: Vec<String> = result.ladders.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, vec!["cat → cot → dot", "dot → cot → cat"]);
    }
}
