use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::checksum;
use super::error::{OgmError, Rejection};
use super::notation;

/// Exclusive upper bound of the ten-digit base.
pub const BASE_LIMIT: u64 = 10_000_000_000;

/// A 12-digit structured communication: ten base digits followed by the
/// two check digits.
///
/// Construction only checks the shape. Use [`Code::has_valid_check`] or
/// [`notation::validate`](super::validate) for the checksum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Code(u64);

impl Code {
    /// Build the valid code for a ten-digit base by appending its check.
    pub fn with_check(base: u64) -> Result<Self, OgmError> {
        if base >= BASE_LIMIT {
            return Err(OgmError::BaseOutOfRange(base));
        }
        Ok(Self::sealed(base))
    }

    /// Caller guarantees `base < BASE_LIMIT`.
    pub(crate) fn sealed(base: u64) -> Self {
        debug_assert!(base < BASE_LIMIT);
        Self(base * 100 + u64::from(checksum::check_value(base)))
    }

    /// Caller guarantees `value` has at most 12 digits.
    pub(crate) fn from_value(value: u64) -> Self {
        debug_assert!(value < BASE_LIMIT * 100);
        Self(value)
    }

    /// The first ten digits as a number.
    pub fn base(&self) -> u64 {
        self.0 / 100
    }

    /// The last two digits as a number (0..=99, valid codes use 1..=97).
    pub fn check(&self) -> u8 {
        (self.0 % 100) as u8
    }

    /// The first ten digits, zero padded.
    pub fn base10(&self) -> String {
        format!("{:010}", self.base())
    }

    /// The last two digits, zero padded.
    pub fn check_digits(&self) -> String {
        format!("{:02}", self.check())
    }

    /// All twelve digits, zero padded.
    pub fn digits(&self) -> String {
        format!("{:012}", self.0)
    }

    /// Whether the check digits match the base.
    pub fn has_valid_check(&self) -> bool {
        checksum::check_value(self.base()) == self.check()
    }

    /// Render as `+++XXX/XXXX/XXXXX+++`.
    pub fn to_structured(&self) -> StructuredText {
        notation::render(*self)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:012}", self.0)
    }
}

impl FromStr for Code {
    type Err = Rejection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        notation::parse_numeric(s)
    }
}

impl TryFrom<String> for Code {
    type Error = Rejection;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Code> for String {
    fn from(code: Code) -> Self {
        code.digits()
    }
}

/// The structured rendering of a [`Code`]: `+++XXX/XXXX/XXXXX+++`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StructuredText(String);

impl StructuredText {
    pub(crate) fn new_unchecked(text: String) -> Self {
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The code this text renders.
    pub fn code(&self) -> Code {
        Code::from_value(
            self.0
                .bytes()
                .filter(u8::is_ascii_digit)
                .fold(0, |acc, b| acc * 10 + u64::from(b - b'0')),
        )
    }
}

impl fmt::Display for StructuredText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for StructuredText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Code> for StructuredText {
    fn from(code: Code) -> Self {
        notation::render(code)
    }
}

impl FromStr for StructuredText {
    type Err = Rejection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        notation::parse_structured(s).map(notation::render)
    }
}

impl TryFrom<String> for StructuredText {
    type Error = Rejection;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<StructuredText> for String {
    fn from(text: StructuredText) -> Self {
        text.0
    }
}

/// The two textual notations of a code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Notation {
    /// Bare 12 digits, e.g. `123456789095`.
    Numeric,
    /// `+++123/4567/89095+++`.
    Structured,
}

impl Notation {
    pub(crate) fn format_requirement(&self) -> &'static str {
        match self {
            Self::Numeric => "numeric value must be exactly 12 digits",
            Self::Structured => "format must be +++XXX/XXXX/XXXXX+++",
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Numeric => "numeric 12-digit",
            Self::Structured => "structured",
        })
    }
}

/// Outcome of one validation call, stamped with the time it was taken.
///
/// Valid means the outcome is `Ok`. A checksum mismatch still carries the
/// well-formed code, so [`structured`](Self::structured) and
/// [`numeric`](Self::numeric) stay available for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    outcome: Result<Code, Rejection>,
    checked_at: DateTime<Utc>,
}

impl CheckResult {
    pub fn new(outcome: Result<Code, Rejection>, checked_at: DateTime<Utc>) -> Self {
        Self {
            outcome,
            checked_at,
        }
    }

    /// Stamp an outcome with the current time.
    pub fn now(outcome: Result<Code, Rejection>) -> Self {
        Self::new(outcome, Utc::now())
    }

    pub fn is_valid(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn outcome(&self) -> &Result<Code, Rejection> {
        &self.outcome
    }

    pub fn into_outcome(self) -> Result<Code, Rejection> {
        self.outcome
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        self.outcome.as_ref().err()
    }

    /// The parsed code, if the input was well-formed.
    pub fn code(&self) -> Option<Code> {
        match &self.outcome {
            Ok(code) => Some(*code),
            Err(rejection) => rejection.code(),
        }
    }

    pub fn structured(&self) -> Option<StructuredText> {
        self.code().map(notation::render)
    }

    pub fn numeric(&self) -> Option<String> {
        self.code().map(|c| c.digits())
    }

    pub fn reason(&self) -> Option<String> {
        self.rejection().map(ToString::to_string)
    }

    pub fn checked_at(&self) -> DateTime<Utc> {
        self.checked_at
    }
}

/// Flat shape handed to a request layer for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub structured: Option<String>,
    pub numeric: Option<String>,
    pub valid: bool,
    pub reason: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl From<CheckResult> for Response {
    fn from(result: CheckResult) -> Self {
        Self {
            structured: result.structured().map(String::from),
            numeric: result.numeric(),
            valid: result.is_valid(),
            reason: result.reason(),
            timestamp: result.checked_at,
        }
    }
}

impl From<&CheckResult> for Response {
    fn from(result: &CheckResult) -> Self {
        result.clone().into()
    }
}
