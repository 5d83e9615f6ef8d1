//! Query-string construction for search forms.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters escaped by `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// How filter values are written into the query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryEncoding {
    /// Percent-encode each value as a URI component.
    #[default]
    Percent,
    /// Insert values exactly as typed. Only for servers that rely on it.
    Verbatim,
}

/// Encode a single path segment or query value.
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Build `?a=1&b=2` from `(name, value)` pairs, skipping blank values.
///
/// Returns an empty string when every value is blank. Pair order is kept.
pub fn build_query<'a, I>(pairs: I, encoding: QueryEncoding) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut query = String::new();
    for (name, value) in pairs {
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        query.push(if query.is_empty() { '?' } else { '&' });
        query.push_str(name);
        query.push('=');
        match encoding {
            QueryEncoding::Percent => query.push_str(&encode_component(value)),
            QueryEncoding::Verbatim => query.push_str(value),
        }
    }
    query
}
