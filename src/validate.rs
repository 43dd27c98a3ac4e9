//! Validation report for the build configuration record.

use std::fmt;

use thiserror::Error;

use crate::output::OutputMode;

/// A single rule violation found while validating a configuration record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    /// `output` set to a value outside the recognized set.
    #[error("unknown output mode '{0}': expected one of {}", OutputMode::wire_names())]
    UnknownOutputMode(String),

    /// An `images.domains` entry is not a bare DNS hostname.
    #[error("malformed image domain '{0}': expected a bare hostname without scheme, path, or port")]
    MalformedDomain(String),

    /// An `images.domains` entry repeats an earlier one (case-insensitive).
    #[error("duplicate image domain '{0}'")]
    DuplicateDomain(String),

    /// A configuration key outside the recognized schema.
    #[error("unrecognized configuration key '{0}'")]
    UnrecognizedKey(String),
}

/// How strictly a violation should be treated by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl Violation {
    /// Unrecognized keys warn so deliberate schema additions surface without
    /// aborting the build; everything else is an authoring error.
    pub fn severity(&self) -> Severity {
        match self {
            Violation::UnknownOutputMode(_)
            | Violation::MalformedDomain(_)
            | Violation::DuplicateDomain(_) => Severity::Error,
            Violation::UnrecognizedKey(_) => Severity::Warning,
        }
    }
}

/// Outcome of one validation pass: every violation found, in check order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    pub fn merge(&mut self, other: ValidationReport) {
        self.violations.extend(other.violations);
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn error_count(&self) -> usize {
        self.violations.iter().filter(|v| v.severity() == Severity::Error).count()
    }

    pub fn warning_count(&self) -> usize {
        self.violations.iter().filter(|v| v.severity() == Severity::Warning).count()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Valid means no error-severity violations; warnings may remain.
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.violations.is_empty() {
            return write!(f, "no violations");
        }
        let rendered: Vec<String> = self.violations.iter().map(|v| v.to_string()).collect();
        write!(f, "{}", rendered.join("; "))
    }
}
