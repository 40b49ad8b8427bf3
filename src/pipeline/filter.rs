//! Inclusion rules applied before any chart aggregation

use super::record::MovieRecord;

/// First release year kept by default
pub const DEFAULT_FIRST_YEAR: i32 = 2000;
/// Last release year kept by default
pub const DEFAULT_LAST_YEAR: i32 = 2009;

/// Rules a movie must satisfy to reach the charts.
///
/// A movie passes when all of these hold:
/// * its release year lies in `first_year..=last_year`
/// * revenue and budget are both valid and strictly positive
/// * genre and title are present and non-empty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterRules {
    pub first_year: i32,
    pub last_year: i32,
}

impl Default for FilterRules {
    fn default() -> Self {
        Self {
            first_year: DEFAULT_FIRST_YEAR,
            last_year: DEFAULT_LAST_YEAR,
        }
    }
}

impl FilterRules {
    pub fn new(first_year: i32, last_year: i32) -> Self {
        Self {
            first_year,
            last_year,
        }
    }

    /// Check every rule against a single movie.
    pub fn accepts(&self, movie: &MovieRecord) -> bool {
        let in_window = movie
            .release_year()
            .is_some_and(|year| (self.first_year..=self.last_year).contains(&year));

        in_window
            && movie.revenue.exceeds(0.0)
            && movie.budget.exceeds(0.0)
            && is_filled(&movie.genre)
            && is_filled(&movie.title)
    }
}

fn is_filled(text: &Option<String>) -> bool {
    text.as_deref().is_some_and(|t| !t.is_empty())
}

/// Keep the movies that satisfy `rules`, preserving their relative order.
pub fn filter_data(movies: Vec<MovieRecord>, rules: &FilterRules) -> Vec<MovieRecord> {
    let before = movies.len();
    let kept: Vec<MovieRecord> = movies.into_iter().filter(|m| rules.accepts(m)).collect();
    log::debug!(
        "Filter kept {} of {} record(s) ({}-{})",
        kept.len(),
        before,
        rules.first_year,
        rules.last_year
    );
    kept
}
