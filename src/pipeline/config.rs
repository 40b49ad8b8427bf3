//! Run configuration and the end-to-end chart preparation entry point

use std::fmt;
use std::str::FromStr;

use super::bar::{prepare_bar_chart_data, GenreRevenue};
use super::convert::{convert_records, Conversion, MalformedPolicy};
use super::error::ConvertError;
use super::filter::{filter_data, FilterRules};
use super::line::{prepare_line_chart_data, LineChartData};
use super::record::{MovieRecord, RawRecord};
use super::scatter::{prepare_scatter_chart_data, ScatterChartData, DEFAULT_SCATTER_LIMIT};

/// Which chart aggregates to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartKind {
    Bar,
    Scatter,
    Line,
    #[default]
    All,
}

impl ChartKind {
    /// Whether this selection asks for `chart`.
    pub fn includes(self, chart: ChartKind) -> bool {
        self == ChartKind::All || self == chart
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartKind::Bar => write!(f, "bar"),
            ChartKind::Scatter => write!(f, "scatter"),
            ChartKind::Line => write!(f, "line"),
            ChartKind::All => write!(f, "all"),
        }
    }
}

impl FromStr for ChartKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bar" => Ok(ChartKind::Bar),
            "scatter" => Ok(ChartKind::Scatter),
            "line" => Ok(ChartKind::Line),
            "all" => Ok(ChartKind::All),
            other => Err(format!(
                "unknown chart '{}'. Options: bar, scatter, line, all",
                other
            )),
        }
    }
}

/// Everything a pipeline run needs besides the input rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrepConfig {
    pub rules: FilterRules,
    pub scatter_limit: usize,
    pub policy: MalformedPolicy,
    pub charts: ChartKind,
}

impl Default for PrepConfig {
    fn default() -> Self {
        Self {
            rules: FilterRules::default(),
            scatter_limit: DEFAULT_SCATTER_LIMIT,
            policy: MalformedPolicy::default(),
            charts: ChartKind::default(),
        }
    }
}

/// The requested aggregates; unrequested charts stay `None`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSet {
    pub bar: Option<Vec<GenreRevenue>>,
    pub scatter: Option<ScatterChartData>,
    pub line: Option<LineChartData>,
}

/// Row counts for each stage of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StageCounts {
    pub loaded: usize,
    pub skipped: usize,
    pub converted: usize,
    pub kept: usize,
}

/// Result of [`prepare_charts`]
#[derive(Debug, Clone, Default)]
pub struct PreparedCharts {
    pub counts: StageCounts,
    pub charts: ChartSet,
}

/// Build the aggregates `config.charts` asks for from already filtered movies.
pub fn aggregate_charts(movies: &[MovieRecord], config: &PrepConfig) -> ChartSet {
    let selection = config.charts;
    ChartSet {
        bar: selection
            .includes(ChartKind::Bar)
            .then(|| prepare_bar_chart_data(movies)),
        scatter: selection
            .includes(ChartKind::Scatter)
            .then(|| prepare_scatter_chart_data(movies, config.scatter_limit)),
        line: selection
            .includes(ChartKind::Line)
            .then(|| prepare_line_chart_data(movies)),
    }
}

/// Filter converted movies, counting the rows that reached each stage.
///
/// `loaded` is the number of raw rows the conversion started from.
pub fn filter_stage(
    loaded: usize,
    conversion: Conversion,
    rules: &FilterRules,
) -> (Vec<MovieRecord>, StageCounts) {
    let converted = conversion.movies.len();
    let kept = filter_data(conversion.movies, rules);
    let counts = StageCounts {
        loaded,
        skipped: conversion.skipped,
        converted,
        kept: kept.len(),
    };
    (kept, counts)
}

/// Run convert → filter → aggregate over a loaded table.
pub fn prepare_charts(
    raws: &[RawRecord],
    config: &PrepConfig,
) -> Result<PreparedCharts, ConvertError> {
    let conversion = convert_records(raws, config.policy)?;
    let (kept, counts) = filter_stage(raws.len(), conversion, &config.rules);

    Ok(PreparedCharts {
        counts,
        charts: aggregate_charts(&kept, config),
    })
}
