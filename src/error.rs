use std::fmt;

/// Errors that can occur when parsing the text form of an audit ID.
///
/// Generation never fails; only the strict parse path produces these.
#[derive(Debug, PartialEq, Eq)]
pub enum ParseIdError {
    /// The input does not have the `YYYYMMDD-AUD-QXX-NN` shape
    Malformed {
        /// What the parser expected at the point of failure
        expected: &'static str,
    },
    /// The date field is not a real calendar date
    InvalidDate {
        /// The eight-character date field as found in the input
        field: String,
    },
    /// The quarter field is outside `Q01..Q04`
    InvalidQuarter {
        /// The parsed quarter number
        quarter: u32,
    },
    /// The sequence field is outside `01..99`
    InvalidSequence {
        /// The parsed sequence number
        sequence: u32,
    },
    /// The quarter field disagrees with the date's month
    QuarterMismatch {
        /// The quarter implied by the date field
        expected: u32,
        /// The quarter written in the input
        found: u32,
    },
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseIdError::Malformed { expected } => {
                write!(f, "malformed audit id: expected {}", expected)
            }
            ParseIdError::InvalidDate { field } => {
                write!(f, "invalid calendar date '{}'", field)
            }
            ParseIdError::InvalidQuarter { quarter } => {
                write!(f, "quarter {} outside Q01..Q04", quarter)
            }
            ParseIdError::InvalidSequence { sequence } => {
                write!(f, "sequence {} outside 01..99", sequence)
            }
            ParseIdError::QuarterMismatch { expected, found } => {
                write!(
                    f,
                    "quarter Q{:02} does not match the date's month (expected Q{:02})",
                    found, expected
                )
            }
        }
    }
}

impl std::error::Error for ParseIdError {}
