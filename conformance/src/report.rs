//! Validation report types: findings, severity levels, and aggregation.
//!
//! Validators report; they never throw. A report with zero failures means
//! the document is structurally valid; warnings are left to the caller to
//! weigh.

/// Severity level of a validation finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Severity {
    /// The check passed.
    Pass,
    /// A non-fatal inconsistency; the caller decides whether to proceed.
    Warning,
    /// A structural violation.
    Failure,
}

/// A single validation finding.
#[derive(Debug, Clone)]
pub struct Finding {
    /// Short identifier of the check that produced this finding.
    pub check: String,
    /// Human-readable message describing the outcome.
    pub message: String,
    /// Severity of the finding.
    pub severity: Severity,
    /// Optional additional detail lines.
    pub details: Vec<String>,
}

impl Finding {
    /// Creates a passing finding.
    pub fn pass(check: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            check: check.into(),
            message: message.into(),
            severity: Severity::Pass,
            details: Vec::new(),
        }
    }

    /// Creates a warning finding.
    pub fn warn(check: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            check: check.into(),
            message: message.into(),
            severity: Severity::Warning,
            details: Vec::new(),
        }
    }

    /// Creates a violation finding.
    pub fn fail(check: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            check: check.into(),
            message: message.into(),
            severity: Severity::Failure,
            details: Vec::new(),
        }
    }

    /// Creates a violation finding with additional detail lines.
    pub fn fail_with_details(
        check: impl Into<String>,
        message: impl Into<String>,
        details: Vec<String>,
    ) -> Self {
        Self {
            check: check.into(),
            message: message.into(),
            severity: Severity::Failure,
            details,
        }
    }

    /// Returns true if this finding represents a violation.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        self.severity == Severity::Failure
    }

    /// Returns true if this finding represents a warning.
    #[must_use]
    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}

/// Aggregated report from one or more validators.
#[derive(Debug, Default)]
pub struct ValidationReport {
    /// All findings across all validators that contributed.
    pub findings: Vec<Finding>,
}

impl ValidationReport {
    /// Creates a new empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a finding to this report.
    pub fn push(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    /// Extends this report with the findings of another report.
    pub fn extend(&mut self, other: ValidationReport) {
        self.findings.extend(other.findings);
    }

    /// Returns the count of violations.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.findings.iter().filter(|f| f.is_failure()).count()
    }

    /// Returns the count of warnings.
    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.findings.iter().filter(|f| f.is_warning()).count()
    }

    /// Returns true when no violations were found. Warnings do not block.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failure_count() == 0
    }

    /// Iterates over the violations only.
    pub fn failures(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| f.is_failure())
    }
}
