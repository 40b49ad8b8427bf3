//! Bar chart aggregation: total revenue per genre

use serde::Serialize;

use super::group::GroupSum;
use super::record::{MovieRecord, Numeric};

/// One bar: a genre and its summed revenue
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenreRevenue {
    pub genre: String,
    pub revenue: Numeric,
}

/// Sum revenue per genre and sort the bars by revenue, largest first.
///
/// Ties keep the order in which the genres first appeared. Movies without a
/// genre cannot be placed on the genre axis and are left out.
pub fn prepare_bar_chart_data(movies: &[MovieRecord]) -> Vec<GenreRevenue> {
    let mut revenue_by_genre = GroupSum::new();
    for movie in movies {
        match &movie.genre {
            Some(genre) => revenue_by_genre.add(genre.clone(), movie.revenue),
            None => log::debug!("Bar chart: skipping movie without genre"),
        }
    }

    let mut bars: Vec<GenreRevenue> = revenue_by_genre
        .into_entries()
        .into_iter()
        .map(|(genre, revenue)| GenreRevenue { genre, revenue })
        .collect();

    // sort_by is stable
    bars.sort_by(|a, b| a.revenue.cmp_descending(b.revenue));
    bars
}
