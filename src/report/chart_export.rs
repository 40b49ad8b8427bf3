//! Chart aggregate export for the rendering layer

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use crate::pipeline::{
    ChartSet, FilterRules, GenreRevenue, LineChartData, PrepConfig, PreparedCharts,
    ScatterChartData, StageCounts,
};

pub const BAR_TITLE: &str = "Total revenue by genre in $US";
pub const SCATTER_TITLE: &str = "Budget vs. Revenue in $US";
pub const LINE_TITLE: &str = "Budget and Revenue over time in $US";

/// Metadata about the preparation run
#[derive(Serialize)]
pub struct ExportMetadata {
    /// Timestamp of the run (ISO 8601 format)
    pub timestamp: String,
    /// filmprep version
    pub filmprep_version: String,
    /// Input files, in load order
    pub input_files: Vec<String>,
    /// First release year kept
    pub first_year: i32,
    /// Last release year kept
    pub last_year: i32,
    /// Maximum number of scatter points
    pub scatter_limit: usize,
    /// Handling of malformed records
    pub on_malformed: String,
}

/// Row counts per stage
#[derive(Serialize)]
pub struct ExportSummary {
    pub rows_loaded: usize,
    pub rows_skipped: usize,
    pub rows_converted: usize,
    pub rows_kept: usize,
}

impl From<StageCounts> for ExportSummary {
    fn from(counts: StageCounts) -> Self {
        Self {
            rows_loaded: counts.loaded,
            rows_skipped: counts.skipped,
            rows_converted: counts.converted,
            rows_kept: counts.kept,
        }
    }
}

/// One chart's data with its header text
#[derive(Serialize)]
pub struct ChartDocument<T> {
    pub title: String,
    pub subtitle: String,
    pub data: T,
}

/// The aggregates that were requested; absent charts are omitted from JSON
#[derive(Serialize)]
pub struct ChartsExport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bar: Option<ChartDocument<Vec<GenreRevenue>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scatter: Option<ChartDocument<ScatterChartData>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<ChartDocument<LineChartData>>,
}

/// Complete export document
#[derive(Serialize)]
pub struct ChartExport {
    pub metadata: ExportMetadata,
    pub summary: ExportSummary,
    pub charts: ChartsExport,
}

/// Parameters for export metadata
pub struct ExportParams<'a> {
    pub input_files: &'a [String],
    pub config: &'a PrepConfig,
}

fn document<T>(title: &str, subtitle: String, data: T) -> ChartDocument<T> {
    ChartDocument {
        title: title.to_string(),
        subtitle,
        data,
    }
}

fn year_span(rules: &FilterRules) -> String {
    format!("{} - {}", rules.first_year, rules.last_year)
}

/// Attach titles and subtitles to each requested chart
pub fn chart_documents(charts: ChartSet, config: &PrepConfig) -> ChartsExport {
    let span = year_span(&config.rules);
    ChartsExport {
        bar: charts.bar.map(|bars| {
            document(
                BAR_TITLE,
                format!("Films w/ budget & revenue figures, {}", span),
                bars,
            )
        }),
        scatter: charts.scatter.map(|scatter| {
            document(
                SCATTER_TITLE,
                format!("Top {} films by budget, {}", config.scatter_limit, span),
                scatter,
            )
        }),
        line: charts.line.map(|line| {
            document(
                LINE_TITLE,
                format!("Films with budget & revenue figures, {}", span),
                line,
            )
        }),
    }
}

/// Assemble the export document for a finished run
pub fn build_export(prepared: PreparedCharts, params: &ExportParams) -> ChartExport {
    let config = params.config;
    ChartExport {
        metadata: ExportMetadata {
            timestamp: Utc::now().to_rfc3339(),
            filmprep_version: env!("CARGO_PKG_VERSION").to_string(),
            input_files: params.input_files.to_vec(),
            first_year: config.rules.first_year,
            last_year: config.rules.last_year,
            scatter_limit: config.scatter_limit,
            on_malformed: config.policy.to_string(),
        },
        summary: prepared.counts.into(),
        charts: chart_documents(prepared.charts, config),
    }
}

/// Write the chart export to a JSON file
///
/// # Arguments
/// * `prepared` - Counts and aggregates from the run
/// * `output_path` - Path to write the JSON file
/// * `params` - Export parameters for metadata
pub fn export_charts(
    prepared: PreparedCharts,
    output_path: &Path,
    params: &ExportParams,
) -> Result<()> {
    let export = build_export(prepared, params);

    let json = serde_json::to_string_pretty(&export)
        .context("Failed to serialize chart data to JSON")?;

    std::fs::write(output_path, json)
        .with_context(|| format!("Failed to write chart data to {}", output_path.display()))?;

    Ok(())
}
