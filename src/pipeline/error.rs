//! Error types for record conversion.

use thiserror::Error;

/// Errors that abort the conversion of a single raw record.
///
/// Unparseable numbers and dates are not errors; they become
/// [`Numeric::Invalid`](super::Numeric::Invalid) and an invalid release date.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// An embedded JSON field (`genres` or `production_countries`) did not parse.
    #[error("row {row}: field '{field}' does not contain valid JSON")]
    MalformedField {
        /// Zero-based index of the record in the input table
        row: usize,
        /// Name of the offending field
        field: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl ConvertError {
    /// Zero-based index of the record that failed.
    pub fn row(&self) -> usize {
        match self {
            ConvertError::MalformedField { row, .. } => *row,
        }
    }

    /// Name of the field that failed.
    pub fn field(&self) -> &'static str {
        match self {
            ConvertError::MalformedField { field, .. } => *field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_field_display() {
        let source = serde_json::from_str::<serde_json::Value>("[{").unwrap_err();
        let err = ConvertError::MalformedField {
            row: 7,
            field: "genres",
            source,
        };
        assert_eq!(err.to_string(), "row 7: field 'genres' does not contain valid JSON");
        assert_eq!(err.row(), 7);
        assert_eq!(err.field(), "genres");
        assert!(std::error::Error::source(&err).is_some());
    }
}
