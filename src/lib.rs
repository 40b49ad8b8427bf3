//! filmprep: Movie Chart Data Preparation Library
//!
//! Loads tabular movie data, converts rows into typed records, filters them
//! and aggregates them into bar, scatter and line chart data.

pub mod cli;
pub mod pipeline;
pub mod report;
pub mod utils;
