use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::types::{Code, Notation};

/// Errors that can occur outside of a validation verdict.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum OgmError {
    /// A base value does not fit in ten digits.
    #[error("base {0} does not fit in 10 digits")]
    BaseOutOfRange(u64),

    /// A value could not be read as a code.
    #[error("invalid code: {0}")]
    Invalid(#[from] Rejection),
}

/// Why a value was not accepted as a valid structured communication.
///
/// Every core operation reports failure through this type instead of
/// panicking. The `Display` output is the human-readable reason handed to
/// callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Rejection {
    /// The input does not follow the grammar of the expected notation.
    #[error("{}", .notation.format_requirement())]
    Format { notation: Notation },

    /// Twelve well-formed digits whose last two are not the mod-97 check
    /// of the first ten.
    #[error("invalid check digits: expected {:02} for base {}", .expected, .code.base10())]
    ChecksumMismatch { code: Code, expected: u8 },

    /// Free-text search found no occurrence of the requested notation.
    #[error("no {notation} VCS found in input line")]
    NotFound { notation: Notation },

    /// Empty or whitespace-only input.
    #[error("input must not be blank")]
    Blank,
}

/// Discriminant of a [`Rejection`], for callers that map failures onto
/// their own status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum RejectionKind {
    Format,
    ChecksumMismatch,
    NotFound,
    Blank,
}

impl Rejection {
    /// The taxonomy bucket of this rejection.
    pub fn kind(&self) -> RejectionKind {
        match self {
            Self::Format { .. } => RejectionKind::Format,
            Self::ChecksumMismatch { .. } => RejectionKind::ChecksumMismatch,
            Self::NotFound { .. } => RejectionKind::NotFound,
            Self::Blank => RejectionKind::Blank,
        }
    }

    /// The well-formed code carried by a checksum mismatch.
    ///
    /// This is the only rejection that still has something worth
    /// rendering back to the user.
    pub fn code(&self) -> Option<Code> {
        match self {
            Self::ChecksumMismatch { code, .. } => Some(*code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_reasons_name_the_grammar() {
        let numeric = Rejection::Format {
            notation: Notation::Numeric,
        };
        assert_eq!(numeric.to_string(), "numeric value must be exactly 12 digits");

        let structured = Rejection::Format {
            notation: Notation::Structured,
        };
        assert_eq!(structured.to_string(), "format must be +++XXX/XXXX/XXXXX+++");
    }

    #[test]
    fn mismatch_reason_pads_expected_check() {
        let code: Code = "000000000100".parse().unwrap();
        let r = Rejection::ChecksumMismatch { code, expected: 1 };
        assert_eq!(
            r.to_string(),
            "invalid check digits: expected 01 for base 0000000001"
        );
        assert_eq!(r.kind(), RejectionKind::ChecksumMismatch);
        assert_eq!(r.code(), Some(code));
    }

    #[test]
    fn not_found_reasons() {
        let r = Rejection::NotFound {
            notation: Notation::Numeric,
        };
        assert_eq!(r.to_string(), "no numeric 12-digit VCS found in input line");
        let r = Rejection::NotFound {
            notation: Notation::Structured,
        };
        assert_eq!(r.to_string(), "no structured VCS found in input line");
        assert!(r.code().is_none());
    }

    #[test]
    fn crate_error_wraps_rejection() {
        let e = OgmError::from(Rejection::Blank);
        assert_eq!(e.to_string(), "invalid code: input must not be blank");
        assert_eq!(
            OgmError::BaseOutOfRange(10_000_000_000).to_string(),
            "base 10000000000 does not fit in 10 digits"
        );
    }
}
