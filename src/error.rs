use thiserror::Error;

/// Errors that can occur while aggregating temperature records.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// A record's date does not start with a four-digit year.
    #[error("Malformed record date: {date:?}")]
    MalformedRecord {
        /// The date string that failed to parse.
        date: String,
    },

    /// Too few yearly values to fit a trend line.
    #[error("Insufficient data for a trend fit: need at least {needed} years, got {got}")]
    InsufficientData {
        /// Minimum number of distinct years required.
        needed: usize,
        /// Number of distinct years available.
        got: usize,
    },

    /// A place's first record falls outside the supported recording eras.
    #[error("First record year {year} for {place:?} is outside the supported eras")]
    EraOutOfRange {
        /// Place whose first record could not be classified.
        place: String,
        /// The offending first-record year.
        year: i32,
    },
}
