//! Type conversion from raw text rows to [`MovieRecord`]s

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value as JsonValue;

use super::error::ConvertError;
use super::record::{MovieRecord, Numeric, RawRecord};

/// Raw value that marks a text field as absent.
pub const NA_SENTINEL: &str = "NA";

/// Format of `release_date` in the source table.
pub const RELEASE_DATE_FORMAT: &str = "%Y-%m-%d";

/// What to do with a record whose embedded JSON fields do not parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedPolicy {
    /// Stop at the first malformed record and return its error
    #[default]
    Abort,
    /// Drop malformed records and keep going
    Skip,
}

impl fmt::Display for MalformedPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedPolicy::Abort => write!(f, "abort"),
            MalformedPolicy::Skip => write!(f, "skip"),
        }
    }
}

impl FromStr for MalformedPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "abort" => Ok(MalformedPolicy::Abort),
            "skip" => Ok(MalformedPolicy::Skip),
            other => Err(format!(
                "unknown malformed-record policy '{}'. Options: abort, skip",
                other
            )),
        }
    }
}

/// Outcome of converting a whole table
#[derive(Debug, Clone, Default)]
pub struct Conversion {
    pub movies: Vec<MovieRecord>,
    /// Records dropped under [`MalformedPolicy::Skip`]
    pub skipped: usize,
}

/// Map the `"NA"` sentinel to `None`, pass every other string through.
pub fn parse_na(raw: &str) -> Option<String> {
    if raw == NA_SENTINEL {
        None
    } else {
        Some(raw.to_string())
    }
}

/// Parse a `YYYY-MM-DD` date; `None` marks an invalid date.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, RELEASE_DATE_FORMAT).ok()
}

#[derive(Deserialize)]
struct NamedEntry {
    name: String,
}

fn parse_genres(row: usize, raw: &str) -> Result<Vec<String>, ConvertError> {
    let entries: Vec<NamedEntry> =
        serde_json::from_str(raw).map_err(|source| ConvertError::MalformedField {
            row,
            field: "genres",
            source,
        })?;
    Ok(entries.into_iter().map(|e| e.name).collect())
}

fn parse_json(row: usize, field: &'static str, raw: &str) -> Result<JsonValue, ConvertError> {
    serde_json::from_str(raw).map_err(|source| ConvertError::MalformedField { row, field, source })
}

/// Convert one raw row into a typed record.
///
/// `row` is the zero-based position of the record and only feeds error messages.
pub fn type_conversion(row: usize, raw: &RawRecord) -> Result<MovieRecord, ConvertError> {
    Ok(MovieRecord {
        budget: Numeric::parse(raw.get("budget")),
        genre: parse_na(raw.get("genre")),
        genres: parse_genres(row, raw.get("genres"))?,
        homepage: raw.get("homepage").to_string(),
        id: Numeric::parse(raw.get("id")),
        imdb_id: parse_na(raw.get("imdb_id")),
        original_language: parse_na(raw.get("original_language")),
        overview: parse_na(raw.get("overview")),
        popularity: Numeric::parse(raw.get("popularity")),
        poster_path: parse_na(raw.get("poster_path")),
        production_countries: parse_json(row, "production_countries", raw.get("production_countries"))?,
        release_date: parse_date(raw.get("release_date")),
        revenue: Numeric::parse(raw.get("revenue")),
        runtime: Numeric::parse(raw.get("runtime")),
        status: raw.get("status").to_string(),
        tagline: parse_na(raw.get("tagline")),
        title: parse_na(raw.get("title")),
        video: raw.get("video").to_string(),
        vote_average: Numeric::parse(raw.get("vote_average")),
        vote_count: Numeric::parse(raw.get("vote_count")),
    })
}

/// Convert every raw row, applying `policy` to malformed records.
pub fn convert_records(
    raws: &[RawRecord],
    policy: MalformedPolicy,
) -> Result<Conversion, ConvertError> {
    let mut conversion = Conversion {
        movies: Vec::with_capacity(raws.len()),
        skipped: 0,
    };

    for (row, raw) in raws.iter().enumerate() {
        match type_conversion(row, raw) {
            Ok(movie) => conversion.movies.push(movie),
            Err(err) => match policy {
                MalformedPolicy::Abort => return Err(err),
                MalformedPolicy::Skip => {
                    log::warn!("Skipping record: {}", err);
                    conversion.skipped += 1;
                }
            },
        }
    }

    log::debug!(
        "Converted {} record(s), skipped {}",
        conversion.movies.len(),
        conversion.skipped
    );

    Ok(conversion)
}
