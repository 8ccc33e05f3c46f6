//! Conversion between the numeric and structured notations.

use super::checksum;
use super::error::Rejection;
use super::types::{Code, Notation, StructuredText};

/// Shape of the structured notation; `d` stands for one ASCII digit.
const STRUCTURED_TEMPLATE: &[u8; 20] = b"+++ddd/dddd/ddddd+++";

/// Parse exactly twelve ASCII digits.
pub fn parse_numeric(s: &str) -> Result<Code, Rejection> {
    if s.len() != 12 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Rejection::Format {
            notation: Notation::Numeric,
        });
    }
    Ok(Code::from_value(fold_digits(s.bytes())))
}

/// Parse exactly `+++XXX/XXXX/XXXXX+++`, nothing before or after.
pub fn parse_structured(s: &str) -> Result<Code, Rejection> {
    let matches = s.len() == STRUCTURED_TEMPLATE.len()
        && s.bytes()
            .zip(STRUCTURED_TEMPLATE)
            .all(|(b, &t)| if t == b'd' { b.is_ascii_digit() } else { b == t });
    if !matches {
        return Err(Rejection::Format {
            notation: Notation::Structured,
        });
    }
    Ok(Code::from_value(fold_digits(
        s.bytes().filter(u8::is_ascii_digit),
    )))
}

/// Parse a value in the given notation.
pub fn parse(s: &str, notation: Notation) -> Result<Code, Rejection> {
    match notation {
        Notation::Numeric => parse_numeric(s),
        Notation::Structured => parse_structured(s),
    }
}

/// Render a code as `+++XXX/XXXX/XXXXX+++`.
pub fn render(code: Code) -> StructuredText {
    let d = code.digits();
    StructuredText::new_unchecked(format!("+++{}/{}/{}+++", &d[..3], &d[3..7], &d[7..]))
}

/// Check the two trailing digits against the first ten.
///
/// A mismatch keeps the code so the caller can still show its rendering.
pub fn validate(code: Code) -> Result<Code, Rejection> {
    let base10 = code.base10();
    if checksum::verify(&base10, &code.check_digits()) {
        Ok(code)
    } else {
        Err(Rejection::ChecksumMismatch {
            code,
            expected: checksum::check_value(code.base()),
        })
    }
}

/// Keep only the ASCII digits of `s`.
pub fn digits_only(s: &str) -> String {
    s.chars().filter(char::is_ascii_digit).collect()
}

fn fold_digits(digits: impl Iterator<Item = u8>) -> u64 {
    digits.fold(0, |acc, b| acc * 10 + u64::from(b - b'0'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_requires_exactly_twelve_digits() {
        assert!(parse_numeric("123456789095").is_ok());
        assert!(parse_numeric("12345678909").is_err());
        assert!(parse_numeric("1234567890950").is_err());
        assert!(parse_numeric(" 123456789095").is_err());
        assert!(parse_numeric("12345678909a").is_err());
        assert!(parse_numeric("").is_err());
    }

    #[test]
    fn numeric_rejects_non_ascii_digits() {
        // Arabic-Indic digits are decimal digits, but not ASCII.
        assert!(parse_numeric("١٢٣٤٥٦٧٨٩٠٩٥").is_err());
    }

    #[test]
    fn structured_grammar_is_exact() {
        assert!(parse_structured("+++123/4567/89095+++").is_ok());
        assert!(parse_structured("123/4567/89095").is_err());
        assert!(parse_structured("+++12/3456/789095+++").is_err());
        assert!(parse_structured("++123/4567/89095+++").is_err());
        assert!(parse_structured("+++123/4567/89095+++ ").is_err());
        assert!(parse_structured("+++123-4567-89095+++").is_err());
        assert!(parse_structured("***123/4567/89095***").is_err());
    }

    #[test]
    fn structured_reason_names_the_pattern() {
        let err = parse_structured("123/4567/89095").unwrap_err();
        assert!(err.to_string().contains("+++XXX/XXXX/XXXXX+++"));
    }

    #[test]
    fn render_groups_three_four_five() {
        let code = parse_numeric("123456789095").unwrap();
        let text = render(code);
        assert_eq!(text.as_str(), "+++123/4567/89095+++");
        assert_eq!(text.as_str().len(), 20);
    }

    #[test]
    fn validate_reports_expected_check_and_base() {
        let code = parse_numeric("123456789000").unwrap();
        let err = validate(code).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid check digits: expected 95 for base 1234567890"
        );
        assert_eq!(err.code(), Some(code));
    }

    #[test]
    fn validate_accepts_wrapped_97() {
        for s in ["000000009797", "000000019497", "000000000097"] {
            assert!(validate(parse_numeric(s).unwrap()).is_ok(), "{s}");
        }
    }

    #[test]
    fn digits_only_strips_literals() {
        assert_eq!(digits_only("+++123/4567/89095+++"), "123456789095");
    }
}
