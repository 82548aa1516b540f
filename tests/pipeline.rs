//! End-to-end tests: load a word list from disk, generate ladders, save JSON.

use std::fs;

use word_ladders::commands::{GenerateOptions, build_graph, find_neighbors, run_generate};
use word_ladders::graph::GraphStrategy;
use word_ladders::ladder::{LadderConfig, SelectionConfig};
use word_ladders::output::save_ladders;
use word_ladders::wordlists::loader::load_records;

fn quiet() -> GenerateOptions {
    GenerateOptions {
        quiet: true,
        ..GenerateOptions::default()
    }
}

fn write_wordlist(dir: &tempfile::TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("words.txt");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn crlf_word_list_to_json() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_wordlist(&dir, "hello\r\ncello\r\ncells\r\nhippo\r\nhi\r\n");
    let output = dir.path().join("ladders.json");

    let records = load_records(&input).unwrap();
    let result = run_generate(&records, &quiet()).unwrap();
    save_ladders(&result.ladders, &output, false).unwrap();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        r#"[["cells","cello","hello"],["hello","cello","cells"]]"#
    );
}

#[test]
fn longer_ladders_sort_after_shorter_ones() {
    let dir = tempfile::tempdir().unwrap();
    // bolts - belts - bells - cells - calls
    let input = write_wordlist(&dir, "calls\nbells\nbolts\ncells\nbelts\n");

    let records = load_records(&input).unwrap();
    let result = run_generate(&records, &quiet()).unwrap();
    let rendered: Vec<String> = result.ladders.iter().map(ToString::to_string).collect();

    assert_eq!(
        rendered,
        vec![
            "bells → cells → calls",
            "belts → bells → cells",
            "calls → cells → bells",
            "cells → bells → belts",
            "belts → bells → cells → calls",
            "bolts → belts → bells → cells",
            "calls → cells → bells → belts",
            "cells → bells → belts → bolts",
            "bolts → belts → bells → cells → calls",
            "calls → cells → bells → belts → bolts",
        ]
    );
}

#[test]
fn relaxed_filters_keep_more_ladders() {
    let records = ["hello", "cello", "jello"];
    let options = GenerateOptions {
        config: LadderConfig {
            selection: SelectionConfig {
                skip_single_step: false,
                require_first_letter_change: true,
            },
            ..LadderConfig::default()
        },
        ..quiet()
    };

    let result = run_generate(&records, &options).unwrap();
    // Six directed single steps, no self-loops
    assert_eq!(result.ladders.len(), 6);
    assert!(result.ladders.iter().all(|l| l.len() == 2));
}

#[test]
fn repeated_runs_write_identical_files() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_wordlist(
        &dir,
        "tolls\ntells\nbells\ncells\nhells\nhello\ncello\njello\nbulls\nballs\ncalls\nhalls\npulls\npolls\n",
    );
    let first = dir.path().join("first.json");
    let second = dir.path().join("second.json");

    let records = load_records(&input).unwrap();
    let options = GenerateOptions {
        strategy: GraphStrategy::Bucketed,
        ..quiet()
    };
    save_ladders(&run_generate(&records, &options).unwrap().ladders, &first, true).unwrap();
    save_ladders(&run_generate(&records, &options).unwrap().ladders, &second, true).unwrap();

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn missing_word_list_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_records(dir.path().join("nope.txt")).is_err());
}

#[test]
fn neighbors_lookup_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_wordlist(&dir, "hello\ncello\njello\nhippo\n");

    let records = load_records(&input).unwrap();
    let (words, graph) =
        build_graph(&records, &LadderConfig::default(), GraphStrategy::Pairwise).unwrap();
    let result = find_neighbors("cello", &words, &graph).unwrap();

    assert_eq!(result.neighbors, vec!["hello", "jello"]);
}
