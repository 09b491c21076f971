use std::fmt::Display;
use std::fmt::Formatter;

/// A record of the bug pattern data file could not be decoded.
///
/// Both variants are fatal for the run: a bad record is never skipped.
#[derive(Debug, PartialEq, Eq)]
pub enum ParseRecordError {
    /// The line does not split into the expected number of tab-separated
    /// fields.
    Malformed { expected: usize, found: usize },
    /// A severity, maturity, or suppressibility field holds text that is not
    /// a member of its enumeration.
    InvalidEnumValue { field: &'static str, value: String },
}

impl std::error::Error for ParseRecordError {}

impl Display for ParseRecordError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed { expected, found } => {
                write!(
                    f,
                    "expected {expected} tab-separated fields, found {found}"
                )
            }
            Self::InvalidEnumValue { field, value } => {
                write!(f, "unrecognized {field} value `{value}`")
            }
        }
    }
}
