//! Reading a query parameter twice: once decoded as usual, once keeping `+`.

use url::form_urlencoded;

use super::{Recovered, recover};
use crate::core::CheckResult;

/// Trim whitespace and one pair of matching wrapping quotes.
///
/// Users frequently paste references as `"+++123/4567/89095+++"`.
pub fn normalize_query(value: &str) -> &str {
    let s = value.trim();
    for quote in ['"', '\''] {
        if let Some(inner) = s
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    s
}

/// Both readings of one query parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryReadings {
    /// Decoded the form-urlencoded way (`+` becomes a space), then
    /// normalized with [`normalize_query`].
    pub primary: String,
    /// Percent-escapes decoded, literal `+` preserved, not normalized.
    pub raw: String,
}

impl QueryReadings {
    /// Read parameter `name` from a query string (with or without the
    /// leading `?`). The first occurrence wins.
    pub fn parse(query: &str, name: &str) -> Option<Self> {
        let query = query.strip_prefix('?').unwrap_or(query);
        let primary = lookup(query.as_bytes(), name)?;
        // Escaping `+` first makes the decoder hand it back verbatim.
        let raw = lookup(query.replace('+', "%2B").as_bytes(), name)?;
        Some(Self {
            primary: normalize_query(&primary).to_string(),
            raw,
        })
    }

    /// Run `op` through the recovery cascade over both readings.
    pub fn recover<F>(&self, op: F) -> Recovered
    where
        F: FnMut(&str) -> CheckResult,
    {
        recover(&self.primary, Some(&self.raw), op)
    }
}

fn lookup(query: &[u8], name: &str) -> Option<String> {
    form_urlencoded::parse(query)
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}
