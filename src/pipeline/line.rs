//! Line chart aggregation: revenue and budget summed per release year

use chrono::NaiveDate;
use serde::Serialize;

use super::group::GroupSum;
use super::record::{MovieRecord, Numeric};

pub const REVENUE_SERIES: &str = "Revenue";
pub const BUDGET_SERIES: &str = "Budget";
pub const REVENUE_COLOR: &str = "dodgerblue";
pub const BUDGET_COLOR: &str = "darkorange";

/// One point of a series; `date` is January 1st of the year
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinePoint {
    pub date: NaiveDate,
    pub value: Numeric,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineSeries {
    pub name: String,
    pub color: String,
    pub values: Vec<LinePoint>,
}

/// Both series plus the shared x axis and y maximum
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChartData {
    pub series: Vec<LineSeries>,
    /// Sorted years present in the input, shared by every series
    pub dates: Vec<NaiveDate>,
    /// Largest valid yearly sum across all series
    pub y_max: Option<f64>,
}

impl LineChartData {
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn series(&self, name: &str) -> Option<&LineSeries> {
        self.series.iter().find(|s| s.name == name)
    }
}

fn year_start(year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 1, 1)
}

fn to_series(name: &str, color: &str, sums: GroupSum<i32>) -> LineSeries {
    let mut entries = sums.into_entries();
    entries.sort_by_key(|(year, _)| *year);

    LineSeries {
        name: name.to_string(),
        color: color.to_string(),
        values: entries
            .into_iter()
            .filter_map(|(year, value)| year_start(year).map(|date| LinePoint { date, value }))
            .collect(),
    }
}

/// Sum revenue and budget per release year into two year-ordered series.
///
/// Years with no movies are absent rather than zero. Movies with an invalid
/// release date have no year and are left out.
pub fn prepare_line_chart_data(movies: &[MovieRecord]) -> LineChartData {
    let mut revenue_by_year = GroupSum::new();
    let mut budget_by_year = GroupSum::new();

    for movie in movies {
        match movie.release_year() {
            Some(year) => {
                revenue_by_year.add(year, movie.revenue);
                budget_by_year.add(year, movie.budget);
            }
            None => log::debug!("Line chart: skipping movie without a valid release date"),
        }
    }

    let y_max = revenue_by_year
        .iter()
        .chain(budget_by_year.iter())
        .filter_map(|(_, sum)| sum.value())
        .reduce(f64::max);

    let revenue = to_series(REVENUE_SERIES, REVENUE_COLOR, revenue_by_year);
    let budget = to_series(BUDGET_SERIES, BUDGET_COLOR, budget_by_year);
    let dates = revenue.values.iter().map(|p| p.date).collect();

    LineChartData {
        series: vec![revenue, budget],
        dates,
        y_max,
    }
}
