//! Pipeline module - load, convert, filter and aggregate movie data
//!
//! ```text
//!  .csv / .json / .parquet
//!        │  loader
//!        ▼
//!   RawRecord*  ──convert──▶  MovieRecord*  ──filter──▶  bar / scatter / line
//! ```

pub mod bar;
pub mod config;
pub mod convert;
pub mod error;
pub mod filter;
pub mod group;
pub mod line;
pub mod loader;
pub mod record;
pub mod scatter;

pub use bar::*;
pub use config::*;
pub use convert::*;
pub use error::*;
pub use filter::*;
pub use group::*;
pub use line::*;
pub use loader::*;
pub use record::*;
pub use scatter::*;
