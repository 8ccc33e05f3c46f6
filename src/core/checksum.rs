//! Mod-97 check digits.
//!
//! The check of a ten-digit base is `97 - (base mod 97)`, so it always lies
//! in `1..=97`: a base divisible by 97 gets `97`, never `00`.

/// Check value of a base, in `1..=97`.
pub fn check_value(base: u64) -> u8 {
    from_remainder((base % 97) as u8)
}

fn from_remainder(rem: u8) -> u8 {
    match 97 - rem {
        0 => 97,
        check => check,
    }
}

/// Two-digit check for a ten-digit base string.
///
/// Digits are folded modulo 97 one at a time, so the result is defined for
/// any input; only ten-digit bases are meaningful. Non-digit characters are
/// ignored.
pub fn compute_check(base10: &str) -> String {
    let rem = base10
        .bytes()
        .filter(u8::is_ascii_digit)
        .fold(0u8, |acc, b| ((u16::from(acc) * 10 + u16::from(b - b'0')) % 97) as u8);
    format!("{:02}", from_remainder(rem))
}

/// Whether `given_check` is the check of `base10`.
///
/// Both sides are compared as numbers, so `"5"` and `"05"` are equal.
pub fn verify(base10: &str, given_check: &str) -> bool {
    given_check
        .parse::<u8>()
        .is_ok_and(|given| compute_check(base10).parse::<u8>() == Ok(given))
}
