//! Tests for CLI argument parsing and the filmprep binary

use std::path::PathBuf;

use assert_cmd::Command;
use clap::Parser;
use filmprep::cli::Cli;
use filmprep::pipeline::{ChartKind, MalformedPolicy, DEFAULT_SCATTER_LIMIT};
use predicates::prelude::*;

#[path = "common/mod.rs"]
mod common;

use common::*;

#[test]
fn test_defaults() {
    let cli = Cli::parse_from(["filmprep", "-i", "data/movies.csv"]);

    assert_eq!(cli.input, vec![PathBuf::from("data/movies.csv")]);
    assert_eq!(cli.chart, ChartKind::All);
    assert_eq!(cli.top_n, DEFAULT_SCATTER_LIMIT);
    assert_eq!(cli.on_malformed, MalformedPolicy::Abort);
    assert!(!cli.quiet);

    let config = cli.to_config().unwrap();
    assert_eq!(config.rules.first_year, 2000);
    assert_eq!(config.rules.last_year, 2009);
    assert_eq!(cli.output_path(), PathBuf::from("data/movies_charts.json"));
}

#[test]
fn test_overrides() {
    let cli = Cli::parse_from([
        "filmprep",
        "-i",
        "a.csv,b.json",
        "-o",
        "out.json",
        "-c",
        "scatter",
        "--first-year",
        "1990",
        "--last-year",
        "1999",
        "--top-n",
        "25",
        "--on-malformed",
        "skip",
        "-q",
    ]);

    assert_eq!(cli.input, vec![PathBuf::from("a.csv"), PathBuf::from("b.json")]);
    assert_eq!(cli.output_path(), PathBuf::from("out.json"));

    let config = cli.to_config().unwrap();
    assert_eq!(config.charts, ChartKind::Scatter);
    assert_eq!(config.rules.first_year, 1990);
    assert_eq!(config.rules.last_year, 1999);
    assert_eq!(config.scatter_limit, 25);
    assert_eq!(config.policy, MalformedPolicy::Skip);
    assert!(cli.quiet);
}

#[test]
fn test_inverted_year_window_rejected() {
    let cli = Cli::parse_from([
        "filmprep",
        "-i",
        "m.csv",
        "--first-year",
        "2010",
        "--last-year",
        "2000",
    ]);
    let err = cli.to_config().unwrap_err();
    assert!(err.to_string().contains("--first-year (2010)"));
}

#[test]
fn test_zero_top_n_rejected() {
    let result = Cli::try_parse_from(["filmprep", "-i", "m.csv", "--top-n", "0"]);
    assert!(result.is_err());
}

#[test]
fn test_unknown_chart_rejected() {
    let result = Cli::try_parse_from(["filmprep", "-i", "m.csv", "-c", "pie"]);
    assert!(result.is_err());
}

#[test]
fn test_input_is_required() {
    assert!(Cli::try_parse_from(["filmprep"]).is_err());
}

#[test]
fn test_binary_writes_chart_json() {
    let (temp_dir, csv_path) = create_temp_csv(&sample_rows());

    Command::cargo_bin("filmprep")
        .unwrap()
        .arg("-i")
        .arg(&csv_path)
        .arg("--quiet")
        .assert()
        .success();

    let output = temp_dir.path().join("movies_charts.json");
    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(output).unwrap()).unwrap();

    assert_eq!(json["summary"]["rows_loaded"], 9);
    assert_eq!(json["summary"]["rows_kept"], 3);
    assert_eq!(json["charts"]["bar"]["data"][0]["genre"], "Action");
    assert_eq!(json["charts"]["scatter"]["data"]["points"][0]["title"], "Avatar");
    assert_eq!(json["charts"]["line"]["data"]["dates"][1], "2009-01-01");
}

#[test]
fn test_binary_fails_on_malformed_row() {
    let mut rows = sample_rows();
    rows[0].insert("production_countries", "{oops");
    let (_temp_dir, csv_path) = create_temp_csv(&rows);

    Command::cargo_bin("filmprep")
        .unwrap()
        .arg("-i")
        .arg(&csv_path)
        .arg("-q")
        .assert()
        .failure()
        .stderr(predicate::str::contains("production_countries"));
}

#[test]
fn test_binary_skips_malformed_row_on_request() {
    let mut rows = sample_rows();
    rows[0].insert("production_countries", "{oops");
    let (temp_dir, csv_path) = create_temp_csv(&rows);
    let output = temp_dir.path().join("out.json");

    Command::cargo_bin("filmprep")
        .unwrap()
        .arg("-i")
        .arg(&csv_path)
        .arg("-o")
        .arg(&output)
        .args(["--on-malformed", "skip", "-c", "bar", "-q"])
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(output).unwrap()).unwrap();
    assert_eq!(json["summary"]["rows_skipped"], 1);
    assert_eq!(json["charts"]["bar"]["data"][0]["genre"], "Animation");
    assert!(json["charts"].get("line").is_none());
}

#[test]
fn test_binary_rejects_missing_input() {
    Command::cargo_bin("filmprep")
        .unwrap()
        .args(["-i", "does_not_exist.csv", "-q"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does_not_exist.csv"));
}
