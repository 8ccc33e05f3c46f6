//! The operations a request layer calls.
//!
//! [`StructuredComm`] bundles generation, validation of either notation and
//! identification inside free text. Every call returns a fresh
//! [`CheckResult`] stamped once, when the call starts; nothing is shared
//! between calls.
//!
//! ```rust
//! use ogm::service::StructuredComm;
//!
//! let svc = StructuredComm::new();
//!
//! let r = svc.validate_structured("+++123/4567/89095+++");
//! assert!(r.is_valid());
//! assert_eq!(r.numeric().as_deref(), Some("123456789095"));
//!
//! let r = svc.validate_numeric("123456789000");
//! assert!(!r.is_valid());
//! assert!(r.reason().unwrap().contains("expected 95"));
//! ```

use std::fmt;

use chrono::Utc;
use tracing::debug;

use crate::core::{CheckResult, Notation, parse_numeric, parse_structured, validate};
use crate::extract::identify;
use crate::generate::Generator;
use crate::recovery::{Recovered, recover};

/// Stateless entry point for all operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuredComm;

/// The operations that take a caller-supplied value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    ValidateStructured,
    ValidateNumeric,
    IdentifyStructuredInLine,
    IdentifyNumericInLine,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::ValidateStructured => "validate structured",
            Self::ValidateNumeric => "validate numeric",
            Self::IdentifyStructuredInLine => "identify structured in line",
            Self::IdentifyNumericInLine => "identify numeric in line",
        })
    }
}

impl StructuredComm {
    pub fn new() -> Self {
        Self
    }

    /// A fresh random code. Always valid.
    pub fn generate(&self) -> CheckResult {
        let checked_at = Utc::now();
        CheckResult::new(Ok(Generator::new().generate()), checked_at)
    }

    /// Validate a value expected to be `+++XXX/XXXX/XXXXX+++`.
    pub fn validate_structured(&self, value: &str) -> CheckResult {
        let checked_at = Utc::now();
        CheckResult::new(parse_structured(value).and_then(validate), checked_at)
    }

    /// Validate a value expected to be exactly 12 digits.
    pub fn validate_numeric(&self, value: &str) -> CheckResult {
        let checked_at = Utc::now();
        CheckResult::new(parse_numeric(value).and_then(validate), checked_at)
    }

    /// Find and validate the first structured code in a line.
    pub fn identify_structured_in_line(&self, line: &str) -> CheckResult {
        self.identify_in_line(line, Notation::Structured)
    }

    /// Find and validate the first 12-digit run in a line.
    pub fn identify_numeric_in_line(&self, line: &str) -> CheckResult {
        self.identify_in_line(line, Notation::Numeric)
    }

    pub fn identify_in_line(&self, line: &str, notation: Notation) -> CheckResult {
        let checked_at = Utc::now();
        CheckResult::new(identify(line, notation), checked_at)
    }

    /// Dispatch a value-taking operation.
    pub fn run(&self, op: Operation, value: &str) -> CheckResult {
        match op {
            Operation::ValidateStructured => self.validate_structured(value),
            Operation::ValidateNumeric => self.validate_numeric(value),
            Operation::IdentifyStructuredInLine => self.identify_structured_in_line(value),
            Operation::IdentifyNumericInLine => self.identify_numeric_in_line(value),
        }
    }

    /// Run `op` through the recovery cascade.
    ///
    /// `raw` is an alternate reading of the same input in which a literal
    /// `+` survived decoding; pass `None` when the caller has none.
    pub fn run_recovering(&self, op: Operation, primary: &str, raw: Option<&str>) -> Recovered {
        let recovered = recover(primary, raw, |value| self.run(op, value));
        if let Some(step) = recovered.step {
            debug!(%op, %step, "operation succeeded");
        }
        recovered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RejectionKind;

    #[test]
    fn generate_is_valid_and_renders() {
        let r = StructuredComm::new().generate();
        assert!(r.is_valid());
        let structured = r.structured().unwrap();
        assert_eq!(structured.as_str().len(), 20);
        assert_eq!(
            crate::core::digits_only(structured.as_str()),
            r.numeric().unwrap()
        );
    }

    #[test]
    fn run_dispatches() {
        let svc = StructuredComm::new();
        assert!(svc.run(Operation::ValidateNumeric, "123456789095").is_valid());
        assert!(svc.run(Operation::ValidateStructured, "+++123/4567/89095+++").is_valid());
        assert!(svc.run(Operation::IdentifyNumericInLine, "ref 123456789095").is_valid());
        assert!(
            svc.run(Operation::IdentifyStructuredInLine, "ref +++123/4567/89095+++")
                .is_valid()
        );
    }

    #[test]
    fn format_failure_kinds() {
        let svc = StructuredComm::new();
        let r = svc.validate_numeric("12345");
        assert_eq!(r.rejection().map(|e| e.kind()), Some(RejectionKind::Format));
        assert!(r.structured().is_none());
    }

    #[test]
    fn recovering_structured_from_spaces() {
        let svc = StructuredComm::new();
        let r = svc.run_recovering(Operation::ValidateStructured, "   123/4567/89095   ", None);
        assert!(r.result.is_valid());
        assert_eq!(r.step, Some(crate::recovery::Step::PrimaryPlusRestored));
    }

    #[test]
    fn recovering_in_line_with_raw() {
        let svc = StructuredComm::new();
        let r = svc.run_recovering(
            Operation::IdentifyStructuredInLine,
            "Please pay 123/4567/89095 today",
            Some("Please pay +++123/4567/89095+++ today"),
        );
        assert!(r.result.is_valid());
        assert_eq!(r.step, Some(crate::recovery::Step::Raw));
    }

    #[test]
    fn recovering_keeps_first_reason() {
        let svc = StructuredComm::new();
        let r = svc.run_recovering(Operation::ValidateNumeric, "12345", Some("abc"));
        assert!(!r.result.is_valid());
        assert_eq!(
            r.result.reason().as_deref(),
            Some("numeric value must be exactly 12 digits")
        );
    }
}
