//! Core error types for cropcast-core.
//!
//! Uses `thiserror` for structured, matchable error variants. Validation
//! and reply parsing have distinct error types because they fail at
//! different trust boundaries: validation rejects the caller's input,
//! parsing rejects the upstream service's reply.

use thiserror::Error;

/// Input validation failure.
///
/// Carries every defective field grouped by defect class, so callers can
/// report all problems in one pass instead of failing on the first.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", describe_defects(.missing, .invalid))]
pub struct ValidationError {
    /// Fields that were absent or blank.
    pub missing: Vec<&'static str>,
    /// Fields present but not parseable as an acceptable number.
    pub invalid: Vec<&'static str>,
}

fn describe_defects(missing: &[&'static str], invalid: &[&'static str]) -> String {
    let mut parts = Vec::new();
    if !missing.is_empty() {
        parts.push(format!("missing field(s): {}", missing.join(", ")));
    }
    if !invalid.is_empty() {
        parts.push(format!("invalid numeric field(s): {}", invalid.join(", ")));
    }
    parts.join("; ")
}

/// Failure to extract a yield value from the upstream reply string.
///
/// Both variants indicate a contract break with the upstream service, not
/// a caller mistake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum YieldParseError {
    /// The reply did not contain the expected yield marker.
    #[error("could not parse yield from server response")]
    NoMatch,

    /// The matched text did not parse as a finite number.
    #[error("prediction returned an invalid number")]
    NotFinite,
}
