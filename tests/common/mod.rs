//! Shared test utilities and fixture generators
#![allow(dead_code)]

use chrono::NaiveDate;
use filmprep::pipeline::{MovieRecord, Numeric, RawRecord};
use std::path::PathBuf;
use tempfile::TempDir;

/// Column order of the movie table
pub const MOVIE_COLUMNS: [&str; 20] = [
    "budget",
    "genre",
    "genres",
    "homepage",
    "id",
    "imdb_id",
    "original_language",
    "overview",
    "popularity",
    "poster_path",
    "production_countries",
    "release_date",
    "revenue",
    "runtime",
    "status",
    "tagline",
    "title",
    "video",
    "vote_average",
    "vote_count",
];

/// Build a typed movie with only the fields the filter and aggregators read
pub fn movie(year: i32, revenue: f64, budget: f64, genre: &str, title: &str) -> MovieRecord {
    MovieRecord {
        release_date: NaiveDate::from_ymd_opt(year, 6, 15),
        revenue: Numeric::Valid(revenue),
        budget: Numeric::Valid(budget),
        genre: Some(genre.to_string()),
        title: Some(title.to_string()),
        ..Default::default()
    }
}

/// The three-record example: two 2005 Action films and one 1995 Drama
pub fn scenario_movies() -> Vec<MovieRecord> {
    vec![
        movie(2005, 100.0, 50.0, "Action", "A"),
        movie(2005, 200.0, 80.0, "Action", "B"),
        movie(1995, 300.0, 90.0, "Drama", "C"),
    ]
}

/// A full raw row with sensible defaults; override fields with `set`
pub fn raw_movie(title: &str, genre: &str, release_date: &str, budget: &str, revenue: &str) -> RawRecord {
    let mut raw = RawRecord::new();
    raw.insert("budget", budget);
    raw.insert("genre", genre);
    raw.insert(
        "genres",
        format!(r#"[{{"id": 1, "name": "{}"}}, {{"id": 2, "name": "Drama"}}]"#, genre),
    );
    raw.insert("homepage", "http://example.com");
    raw.insert("id", "19995");
    raw.insert("imdb_id", "tt0499549");
    raw.insert("original_language", "en");
    raw.insert("overview", "An overview.");
    raw.insert("popularity", "150.437577");
    raw.insert("poster_path", "/poster.jpg");
    raw.insert(
        "production_countries",
        r#"[{"iso_3166_1": "US", "name": "United States of America"}]"#,
    );
    raw.insert("release_date", release_date);
    raw.insert("revenue", revenue);
    raw.insert("runtime", "162");
    raw.insert("status", "Released");
    raw.insert("tagline", "NA");
    raw.insert("title", title);
    raw.insert("video", "FALSE");
    raw.insert("vote_average", "7.2");
    raw.insert("vote_count", "11800");
    raw
}

/// Quote a CSV field, doubling embedded quotes
fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Render raw rows as CSV text with the standard movie header
pub fn to_csv(rows: &[RawRecord]) -> String {
    let mut text = MOVIE_COLUMNS.join(",");
    text.push('\n');
    for row in rows {
        let line: Vec<String> = MOVIE_COLUMNS.iter().map(|c| csv_field(row.get(c))).collect();
        text.push_str(&line.join(","));
        text.push('\n');
    }
    text
}

/// Render raw rows as a JSON array of objects
pub fn to_json(rows: &[RawRecord]) -> String {
    let values: Vec<serde_json::Value> = rows
        .iter()
        .map(|row| {
            let obj: serde_json::Map<String, serde_json::Value> = MOVIE_COLUMNS
                .iter()
                .map(|c| (c.to_string(), serde_json::Value::String(row.get(c).to_string())))
                .collect();
            serde_json::Value::Object(obj)
        })
        .collect();
    serde_json::to_string(&values).unwrap()
}

/// A small table covering each filter rule
///
/// Only "Avatar", "Up" and "Juno" qualify for the default 2000-2009 window.
pub fn sample_rows() -> Vec<RawRecord> {
    vec![
        raw_movie("Avatar", "Action", "2009-12-10", "237000000", "2787965087"),
        raw_movie("Up", "Animation", "2009-05-28", "175000000", "735099082"),
        raw_movie("Juno", "Comedy", "2007-09-01", "7500000", "231411584"),
        raw_movie("Titanic", "Drama", "1997-11-18", "200000000", "1845034188"),
        raw_movie("Unknown Genre", "NA", "2004-01-01", "1000", "2000"),
        raw_movie("NA", "Horror", "2004-01-01", "1000", "2000"),
        raw_movie("No Revenue", "Action", "2004-01-01", "1000", "0"),
        raw_movie("Bad Budget", "Action", "2004-01-01", "n/a", "2000"),
        raw_movie("Bad Date", "Action", "sometime", "1000", "2000"),
    ]
}

/// Write `contents` to `name` inside a fresh temporary directory
pub fn create_temp_file(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    (temp_dir, path)
}

/// Create a temporary directory with a CSV of `rows`
pub fn create_temp_csv(rows: &[RawRecord]) -> (TempDir, PathBuf) {
    create_temp_file("movies.csv", &to_csv(rows))
}
