use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ParseRecordError;

/// Number of tab-separated fields in one line of the bug pattern data file.
pub const FIELD_COUNT: usize = 10;

/// Severity of a bug pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeverityLevel {
    Error,
    Warning,
    Suggestion,
    NotAProblem,
}

impl SeverityLevel {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
            Self::Suggestion => "SUGGESTION",
            Self::NotAProblem => "NOT_A_PROBLEM",
        }
    }
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SeverityLevel {
    type Err = ParseRecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ERROR" => Ok(Self::Error),
            "WARNING" => Ok(Self::Warning),
            "SUGGESTION" => Ok(Self::Suggestion),
            "NOT_A_PROBLEM" => Ok(Self::NotAProblem),
            _ => Err(ParseRecordError::InvalidEnumValue {
                field: "severity",
                value: s.to_string(),
            }),
        }
    }
}

/// Maturity of a bug pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MaturityLevel {
    Mature,
    Experimental,
}

impl MaturityLevel {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mature => "MATURE",
            Self::Experimental => "EXPERIMENTAL",
        }
    }
}

impl fmt::Display for MaturityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MaturityLevel {
    type Err = ParseRecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MATURE" => Ok(Self::Mature),
            "EXPERIMENTAL" => Ok(Self::Experimental),
            _ => Err(ParseRecordError::InvalidEnumValue {
                field: "maturity",
                value: s.to_string(),
            }),
        }
    }
}

/// How end users may silence a bug pattern. Closed set: the suppression
/// section of a page is chosen by an exhaustive match on this enum, so a new
/// member is a compile-time-visible gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Suppressibility {
    /// Suppressed with the standard `@SuppressWarnings` annotation, keyed by
    /// the pattern name.
    SuppressWarnings,
    /// Suppressed with a dedicated annotation named in the record.
    CustomAnnotation,
    /// Cannot be suppressed.
    Unsuppressible,
}

impl Suppressibility {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SuppressWarnings => "SUPPRESS_WARNINGS",
            Self::CustomAnnotation => "CUSTOM_ANNOTATION",
            Self::Unsuppressible => "UNSUPPRESSIBLE",
        }
    }
}

impl fmt::Display for Suppressibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Suppressibility {
    type Err = ParseRecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SUPPRESS_WARNINGS" => Ok(Self::SuppressWarnings),
            "CUSTOM_ANNOTATION" => Ok(Self::CustomAnnotation),
            "UNSUPPRESSIBLE" => Ok(Self::Unsuppressible),
            _ => Err(ParseRecordError::InvalidEnumValue {
                field: "suppressibility",
                value: s.to_string(),
            }),
        }
    }
}

/// One bug pattern description, parsed from one line of the data file.
///
/// Records are constructed once per line, rendered to a page, and collected
/// in the result list of the run. They are never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BugPattern {
    /// Dotted identifier of the checker, e.g. `com.example.bugpatterns.ArrayEquals`.
    /// Both the example lookup directory and the example filename prefix are
    /// derived from it.
    pub qualified_checker_id: String,
    /// Display name; also the output filename stem, with spaces replaced by
    /// underscores.
    pub name: String,
    /// Possibly-empty alternate names. Presence toggles the alternate names
    /// line of the page.
    pub alt_names: String,
    pub category: String,
    pub severity: SeverityLevel,
    pub maturity: MaturityLevel,
    pub suppressibility: Suppressibility,
    /// Only meaningful when `suppressibility` is `CustomAnnotation`.
    pub custom_suppression_annotation: String,
    pub summary: String,
    /// Free-text body. Literal `\n` escapes of the data file are already
    /// resolved to real line breaks here.
    pub explanation: String,
}

impl BugPattern {
    pub fn output_filename(&self) -> String {
        format!("{}.md", self.name.replace(' ', "_"))
    }
}

/// Decode one line of the data file into a [`BugPattern`].
///
/// The line must split on tabs into exactly [`FIELD_COUNT`] fields, in fixed
/// order: qualified checker id, name, alternate names, category, severity,
/// maturity, suppressibility, custom suppression annotation, summary,
/// explanation.
pub fn parse_line(line: &str) -> Result<BugPattern, ParseRecordError> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() != FIELD_COUNT {
        return Err(ParseRecordError::Malformed {
            expected: FIELD_COUNT,
            found: fields.len(),
        });
    }

    Ok(BugPattern {
        qualified_checker_id: fields[0].to_string(),
        name: fields[1].to_string(),
        alt_names: fields[2].to_string(),
        category: fields[3].to_string(),
        severity: fields[4].parse()?,
        maturity: fields[5].parse()?,
        suppressibility: fields[6].parse()?,
        custom_suppression_annotation: fields[7].to_string(),
        summary: fields[8].to_string(),
        explanation: fields[9].replace("\\n", "\n"),
    })
}
