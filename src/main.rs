//! Word Ladders - CLI
//!
//! Generates word ladders from a word list and saves them as JSON.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use word_ladders::{
    commands::{GenerateOptions, build_graph, find_neighbors, run_generate, run_stats},
    graph::GraphStrategy,
    ladder::{
        LadderConfig, SelectionConfig,
        config::{DEFAULT_MAX_LENGTH, DEFAULT_WORD_LENGTH},
    },
    output::{print_generate_result, print_neighbors_result, print_stats_result, save_ladders},
    wordlists::{SAMPLE, loader::load_records},
};

#[derive(Parser)]
#[command(
    name = "word_ladders",
    about = "Enumerate word ladders: chains of words that change one letter at a time",
    version,
    author
)]
struct Cli {
    /// Word list: path to a file with one word per line, or 'sample' for the embedded list.
    /// Lines that are not valid UTF-8 are skipped
    wordlist: String,

    #[command(subcommand)]
    command: Option<Commands>,

    /// Length of the words to link
    #[arg(short = 'l', long, global = true, default_value_t = DEFAULT_WORD_LENGTH)]
    word_length: usize,

    /// Maximum number of words in a ladder
    #[arg(short = 'm', long, global = true, default_value_t = DEFAULT_MAX_LENGTH)]
    max_length: usize,

    /// Graph construction: pairwise (default) or bucketed
    #[arg(short, long, global = true, default_value = "pairwise")]
    graph: String,

    /// Keep two-word ladders
    #[arg(long, global = true)]
    keep_single_step: bool,

    /// Keep ladders whose first and last words share a leading letter
    #[arg(long, global = true)]
    allow_same_first_letter: bool,

    /// Suppress progress and summary output
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate ladders and save them as JSON (default)
    Generate {
        /// Output file, or '-' for stdout
        #[arg(short, long, default_value = "ladders.json")]
        output: PathBuf,

        /// Write indented JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Show the single-letter neighbors of a word
    Neighbors {
        /// Word to look up
        word: String,
    },

    /// Show adjacency graph statistics
    Stats,
}

impl Cli {
    const fn ladder_config(&self) -> LadderConfig {
        LadderConfig {
            word_length: self.word_length,
            max_length: self.max_length,
            selection: SelectionConfig {
                skip_single_step: !self.keep_single_step,
                require_first_letter_change: !self.allow_same_first_letter,
            },
        }
    }
}

/// Load records based on the wordlist argument
///
/// - "sample": the embedded sample lexicon
/// - "<path>": records read from a file
fn load_wordlist(wordlist: &str) -> Result<Vec<String>> {
    match wordlist {
        "sample" => Ok(SAMPLE.iter().map(ToString::to_string).collect()),
        path => load_records(path).with_context(|| format!("Failed to read word list {path}")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let records = load_wordlist(&cli.wordlist)?;
    let config = cli.ladder_config();
    let strategy = GraphStrategy::from_name(&cli.graph);

    // Default to Generate if no command given
    let command = cli.command.unwrap_or(Commands::Generate {
        output: PathBuf::from("ladders.json"),
        pretty: false,
    });

    match command {
        Commands::Generate { output, pretty } => {
            // Keep stdout clean when it carries the JSON
            let options = GenerateOptions {
                config,
                strategy,
                quiet: cli.quiet || output.as_os_str() == "-",
            };
            run_generate_command(&records, &options, &output, pretty)
        }
        Commands::Neighbors { word } => run_neighbors_command(&records, &config, strategy, &word),
        Commands::Stats => run_stats_command(&records, &config, strategy, cli.quiet),
    }
}

fn run_generate_command(
    records: &[String],
    options: &GenerateOptions,
    output: &Path,
    pretty: bool,
) -> Result<()> {
    let result = run_generate(records, options)?;
    save_ladders(&result.ladders, output, pretty)?;

    if !options.quiet {
        print_generate_result(&result, &output.display().to_string());
    }
    Ok(())
}

fn run_neighbors_command(
    records: &[String],
    config: &LadderConfig,
    strategy: GraphStrategy,
    word: &str,
) -> Result<()> {
    let (words, graph) = build_graph(records, config, strategy)?;
    let result = find_neighbors(word, &words, &graph).map_err(|e| anyhow::anyhow!(e))?;
    print_neighbors_result(&result);
    Ok(())
}

fn run_stats_command(
    records: &[String],
    config: &LadderConfig,
    strategy: GraphStrategy,
    quiet: bool,
) -> Result<()> {
    let result = run_stats(records, config, strategy)?;
    if !quiet {
        print_stats_result(&result);
    }
    Ok(())
}
