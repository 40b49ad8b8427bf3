//! Report module - summaries, label formatting and chart export

pub mod chart_export;
pub mod format;
pub mod summary;

pub use chart_export::*;
pub use format::*;
pub use summary::*;
