use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::core::{Code, Notation, Rejection, parse, validate};

static STRUCTURED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\+\+\+[0-9]{3}/[0-9]{4}/[0-9]{5}\+\+\+").expect("valid regex")
});

// Maximal ASCII digit runs. Length is checked afterwards so that a longer
// run never yields a 12-digit slice of itself.
static DIGIT_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").expect("valid regex"));

/// One occurrence of a notation inside a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'a> {
    text: &'a str,
    start: usize,
    notation: Notation,
}

impl<'a> Match<'a> {
    /// The matched text, verbatim.
    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// Byte offset of the match in the line.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte offset just past the match.
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    pub fn notation(&self) -> Notation {
        self.notation
    }

    /// Parse the matched text in its notation. Checksum is not checked.
    pub fn parse(&self) -> Result<Code, Rejection> {
        parse(self.text, self.notation)
    }
}

/// Every occurrence of `notation` in `line`, left to right.
///
/// Numeric occurrences are whole digit runs of exactly 12 digits.
pub fn find_all(line: &str, notation: Notation) -> Box<dyn Iterator<Item = Match<'_>> + '_> {
    match notation {
        Notation::Structured => Box::new(STRUCTURED.find_iter(line).map(wrap(notation))),
        Notation::Numeric => Box::new(
            DIGIT_RUN
                .find_iter(line)
                .filter(|m| m.as_str().len() == 12)
                .map(wrap(notation)),
        ),
    }
}

fn wrap<'a>(notation: Notation) -> impl Fn(regex::Match<'a>) -> Match<'a> {
    move |m| Match {
        text: m.as_str(),
        start: m.start(),
        notation,
    }
}

/// First occurrence of `notation` in `line`.
///
/// Blank lines are rejected before searching.
pub fn find(line: &str, notation: Notation) -> Result<Match<'_>, Rejection> {
    if line.trim().is_empty() {
        return Err(Rejection::Blank);
    }
    match find_all(line, notation).next() {
        Some(m) => {
            trace!(%notation, start = m.start, text = m.text, "found candidate");
            Ok(m)
        }
        None => {
            trace!(%notation, len = line.len(), "no candidate in line");
            Err(Rejection::NotFound { notation })
        }
    }
}

/// First `+++XXX/XXXX/XXXXX+++` in `line`.
pub fn find_structured(line: &str) -> Result<Match<'_>, Rejection> {
    find(line, Notation::Structured)
}

/// First run of exactly 12 digits in `line`, not touching another digit.
pub fn find_numeric(line: &str) -> Result<Match<'_>, Rejection> {
    find(line, Notation::Numeric)
}

/// Find the first occurrence of `notation`, parse it and check its digits.
pub fn identify(line: &str, notation: Notation) -> Result<Code, Rejection> {
    find(line, notation)?.parse().and_then(validate)
}
