//! Raw and typed movie records

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::iter::Sum;
use std::ops::Add;

use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Serializer};
use serde_json::Value as JsonValue;

/// One untyped row from the input table: field name → text, exactly as read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    fields: BTreeMap<String, String>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Value of `field`, or the empty string when the source had no such column.
    pub fn get(&self, field: &str) -> &str {
        self.fields.get(field).map(String::as_str).unwrap_or("")
    }

}

impl<K, V> FromIterator<(K, V)> for RawRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Numeric – a coerced number that remembers whether coercion succeeded
// ---------------------------------------------------------------------------

/// A numeric field coerced from text.
///
/// `Invalid` marks input that did not parse (including the empty string).
/// It propagates through sums and never satisfies a threshold comparison.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Numeric {
    Valid(f64),
    #[default]
    Invalid,
}

impl Numeric {
    pub const ZERO: Numeric = Numeric::Valid(0.0);

    /// Coerce a raw string. Surrounding whitespace is ignored and only finite
    /// values are valid, so `inf`, `infinity` and `NaN` are all `Invalid`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => Numeric::Valid(v),
            _ => Numeric::Invalid,
        }
    }

    pub fn value(self) -> Option<f64> {
        match self {
            Numeric::Valid(v) => Some(v),
            Numeric::Invalid => None,
        }
    }

    pub fn is_valid(self) -> bool {
        matches!(self, Numeric::Valid(_))
    }

    /// `true` only for a valid value strictly greater than `threshold`.
    pub fn exceeds(self, threshold: f64) -> bool {
        matches!(self, Numeric::Valid(v) if v > threshold)
    }

    /// Descending order with invalid values placed after every valid one.
    pub fn cmp_descending(self, other: Self) -> Ordering {
        match (self, other) {
            (Numeric::Valid(a), Numeric::Valid(b)) => b.total_cmp(&a),
            (Numeric::Valid(_), Numeric::Invalid) => Ordering::Less,
            (Numeric::Invalid, Numeric::Valid(_)) => Ordering::Greater,
            (Numeric::Invalid, Numeric::Invalid) => Ordering::Equal,
        }
    }
}

impl From<f64> for Numeric {
    fn from(v: f64) -> Self {
        if v.is_nan() {
            Numeric::Invalid
        } else {
            Numeric::Valid(v)
        }
    }
}

impl Add for Numeric {
    type Output = Numeric;

    fn add(self, rhs: Numeric) -> Numeric {
        match (self, rhs) {
            (Numeric::Valid(a), Numeric::Valid(b)) => Numeric::Valid(a + b),
            _ => Numeric::Invalid,
        }
    }
}

impl Sum for Numeric {
    fn sum<I: Iterator<Item = Numeric>>(iter: I) -> Self {
        iter.fold(Numeric::ZERO, |acc, v| acc + v)
    }
}

impl Serialize for Numeric {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Numeric::Valid(v) => serializer.serialize_f64(*v),
            Numeric::Invalid => serializer.serialize_none(),
        }
    }
}

// ---------------------------------------------------------------------------
// MovieRecord – one fully typed row
// ---------------------------------------------------------------------------

/// A typed movie derived from a [`RawRecord`].
///
/// Optional text fields are `None` where the source held the `"NA"` sentinel.
/// `release_date` is `None` when the raw date did not parse.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MovieRecord {
    pub budget: Numeric,
    pub genre: Option<String>,
    pub genres: Vec<String>,
    pub homepage: String,
    pub id: Numeric,
    pub imdb_id: Option<String>,
    pub original_language: Option<String>,
    pub overview: Option<String>,
    pub popularity: Numeric,
    pub poster_path: Option<String>,
    pub production_countries: JsonValue,
    pub release_date: Option<NaiveDate>,
    pub revenue: Numeric,
    pub runtime: Numeric,
    pub status: String,
    pub tagline: Option<String>,
    pub title: Option<String>,
    pub video: String,
    pub vote_average: Numeric,
    pub vote_count: Numeric,
}

impl MovieRecord {
    /// Calendar year of the release date; `None` when the date is invalid.
    pub fn release_year(&self) -> Option<i32> {
        self.release_date.map(|d| d.year())
    }
}
