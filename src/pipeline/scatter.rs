//! Scatter chart selection: the biggest-budget movies

use serde::Serialize;

use super::record::{MovieRecord, Numeric};

/// Number of points plotted by default
pub const DEFAULT_SCATTER_LIMIT: usize = 100;

/// Padding factors applied to the budget extent (x axis)
const BUDGET_PADDING: (f64, f64) = (0.95, 1.05);
/// Padding factors applied to the revenue extent (y axis)
const REVENUE_PADDING: (f64, f64) = (0.1, 1.1);

/// Selected movies plus padded axis domains for the plot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterChartData {
    /// Full records, sorted by budget descending
    pub points: Vec<MovieRecord>,
    /// `[min * 0.95, max * 1.05]` over the valid budgets
    pub budget_domain: Option<(f64, f64)>,
    /// `[min * 0.1, max * 1.1]` over the valid revenues
    pub revenue_domain: Option<(f64, f64)>,
}

impl ScatterChartData {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

fn padded_extent(
    values: impl Iterator<Item = Numeric>,
    (low, high): (f64, f64),
) -> Option<(f64, f64)> {
    values
        .filter_map(Numeric::value)
        .fold(None, |extent, v| match extent {
            None => Some((v, v)),
            Some((min, max)) => Some((min.min(v), max.max(v))),
        })
        .map(|(min, max)| (min * low, max * high))
}

/// Sort by budget descending and keep the first `limit` movies.
///
/// Equal budgets keep their input order. Invalid budgets sort last.
pub fn prepare_scatter_chart_data(movies: &[MovieRecord], limit: usize) -> ScatterChartData {
    let mut points = movies.to_vec();
    points.sort_by(|a, b| a.budget.cmp_descending(b.budget));
    points.truncate(limit);

    let budget_domain = padded_extent(points.iter().map(|m| m.budget), BUDGET_PADDING);
    let revenue_domain = padded_extent(points.iter().map(|m| m.revenue), REVENUE_PADDING);

    ScatterChartData {
        points,
        budget_domain,
        revenue_domain,
    }
}
