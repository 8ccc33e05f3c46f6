//! Recovering a value whose `+` characters may have been mangled in transit.
//!
//! In `application/x-www-form-urlencoded` data a literal `+` stands for a
//! space. A structured communication typed into a query string therefore
//! often arrives as `   123/4567/89095   ` instead of
//! `+++123/4567/89095+++`. Whether a space was a space or a `+` cannot be
//! told from the decoded value alone, so the operation is re-run over a
//! fixed list of reinterpretations until one of them validates.
//!
//! The order is:
//!
//! 1. the primary (normally decoded) value;
//! 2. the primary value with every space turned into `+`;
//! 3. the raw reading, if the caller has one;
//! 4. the raw reading with every space turned into `+`.
//!
//! If nothing validates, the result of step 1 is returned so the user sees
//! the reason for what they actually sent.

pub mod query;

use std::borrow::Cow;
use std::fmt;

use tracing::debug;

use crate::core::CheckResult;

pub use query::{QueryReadings, normalize_query};

/// One reinterpretation of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Primary,
    PrimaryPlusRestored,
    Raw,
    RawPlusRestored,
}

impl Step {
    /// All steps, in the order they are tried.
    pub const CASCADE: [Step; 4] = [
        Step::Primary,
        Step::PrimaryPlusRestored,
        Step::Raw,
        Step::RawPlusRestored,
    ];

    /// The text this step feeds to the operation, or `None` when it needs a
    /// raw reading that was not supplied.
    pub fn apply<'a>(&self, primary: &'a str, raw: Option<&'a str>) -> Option<Cow<'a, str>> {
        match self {
            Step::Primary => Some(Cow::Borrowed(primary)),
            Step::PrimaryPlusRestored => Some(restore_plus(primary)),
            Step::Raw => raw.map(Cow::Borrowed),
            Step::RawPlusRestored => raw.map(restore_plus),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Step::Primary => "primary",
            Step::PrimaryPlusRestored => "primary, spaces as '+'",
            Step::Raw => "raw",
            Step::RawPlusRestored => "raw, spaces as '+'",
        })
    }
}

fn restore_plus(s: &str) -> Cow<'_, str> {
    if s.contains(' ') {
        Cow::Owned(s.replace(' ', "+"))
    } else {
        Cow::Borrowed(s)
    }
}

/// The texts the cascade would try, in order, paired with their step.
pub fn candidates<'a>(
    primary: &'a str,
    raw: Option<&'a str>,
) -> impl Iterator<Item = (Step, Cow<'a, str>)> + 'a {
    Step::CASCADE
        .into_iter()
        .filter_map(move |step| step.apply(primary, raw).map(|text| (step, text)))
}

/// Outcome of running the cascade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recovered {
    /// The first valid result, or the primary attempt's result.
    pub result: CheckResult,
    /// The step that produced a valid result; `None` if none did.
    pub step: Option<Step>,
    /// How many attempts were made.
    pub attempts: usize,
}

impl Recovered {
    pub fn into_result(self) -> CheckResult {
        self.result
    }
}

/// Run `op` over the cascade and stop at the first valid result.
pub fn recover<F>(primary: &str, raw: Option<&str>, mut op: F) -> Recovered
where
    F: FnMut(&str) -> CheckResult,
{
    let mut first: Option<CheckResult> = None;
    let mut attempts = 0;

    for (step, text) in candidates(primary, raw) {
        attempts += 1;
        let result = op(text.as_ref());
        if result.is_valid() {
            debug!(%step, attempts, "input recovered");
            return Recovered {
                result,
                step: Some(step),
                attempts,
            };
        }
        first.get_or_insert(result);
    }

    debug!(attempts, has_raw = raw.is_some(), "no reinterpretation validated");
    Recovered {
        // Step::Primary always yields a candidate, so `first` is set.
        result: first.unwrap_or_else(|| op(primary)),
        step: None,
        attempts,
    }
}
