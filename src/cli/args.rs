//! Command-line argument definitions using clap

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::pipeline::{
    ChartKind, FilterRules, MalformedPolicy, PrepConfig, DEFAULT_FIRST_YEAR, DEFAULT_LAST_YEAR,
    DEFAULT_SCATTER_LIMIT,
};

/// filmprep - Prepare movie data for bar, scatter and line charts
#[derive(Parser, Debug)]
#[command(name = "filmprep")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input file path(s) (CSV, JSON, or Parquet).
    /// Several inputs are concatenated in the order given.
    #[arg(short, long, required = true, num_args = 1.., value_delimiter = ',')]
    pub input: Vec<PathBuf>,

    /// Output JSON path for the chart data.
    /// Defaults to the first input's directory with a '_charts.json' suffix
    /// (e.g., movies.csv → movies_charts.json).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Chart aggregate(s) to build.
    /// Options: "bar", "scatter", "line", "all"
    #[arg(short, long, default_value = "all")]
    pub chart: ChartKind,

    /// First release year kept by the filter (inclusive)
    #[arg(long, default_value_t = DEFAULT_FIRST_YEAR)]
    pub first_year: i32,

    /// Last release year kept by the filter (inclusive)
    #[arg(long, default_value_t = DEFAULT_LAST_YEAR)]
    pub last_year: i32,

    /// Number of biggest-budget movies kept for the scatter chart
    #[arg(long, default_value_t = DEFAULT_SCATTER_LIMIT, value_parser = validate_top_n)]
    pub top_n: usize,

    /// What to do with records whose embedded JSON fields do not parse.
    /// Options: "abort" (default) or "skip"
    #[arg(long, default_value = "abort")]
    pub on_malformed: MalformedPolicy,

    /// Suppress banner, spinners and summary tables
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

impl Cli {
    /// Get the output path, deriving it from the first input if not explicitly provided.
    pub fn output_path(&self) -> PathBuf {
        if let Some(output) = &self.output {
            return output.clone();
        }

        let first = self.input.first();
        let parent = first
            .and_then(|p| p.parent())
            .unwrap_or_else(|| std::path::Path::new("."));
        let stem = first
            .and_then(|p| p.file_stem())
            .and_then(|s| s.to_str())
            .unwrap_or("movies");
        parent.join(format!("{}_charts.json", stem))
    }

    /// Input paths as display strings, for export metadata
    pub fn input_names(&self) -> Vec<String> {
        self.input.iter().map(|p| p.display().to_string()).collect()
    }

    /// Validate the arguments and turn them into a pipeline configuration
    pub fn to_config(&self) -> Result<PrepConfig> {
        if self.first_year > self.last_year {
            anyhow::bail!(
                "--first-year ({}) must not be after --last-year ({})",
                self.first_year,
                self.last_year
            );
        }

        Ok(PrepConfig {
            rules: FilterRules::new(self.first_year, self.last_year),
            scatter_limit: self.top_n,
            policy: self.on_malformed,
            charts: self.chart,
        })
    }
}

/// Validator for top_n parameter
fn validate_top_n(s: &str) -> Result<usize, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid count", s))?;

    if value == 0 {
        Err("top_n must be at least 1".to_string())
    } else {
        Ok(value)
    }
}
