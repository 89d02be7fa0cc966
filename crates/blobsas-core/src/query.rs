//! Query-string map with case-insensitive lookups.
//!
//! Keys are stored exactly as they appeared on the wire; lookups that need to
//! ignore case scan every key, which is fine for the handful of parameters a
//! storage URL carries.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::collections::BTreeMap;

/// Characters left unescaped in query keys and values. `&`, `=`, `+`, `#`,
/// `%`, `?` and whitespace are always escaped.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b':')
    .remove(b'@')
    .remove(b'/')
    .remove(b'!')
    .remove(b'$')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b',')
    .remove(b';');

/// Escapes a single query key or value.
pub fn escape_query_component(input: &str) -> String {
    utf8_percent_encode(input, QUERY_COMPONENT).to_string()
}

/// Decoded query parameters, one entry per distinct (case-sensitive) key.
///
/// Encoding emits keys in sorted order; values of a repeated key keep their
/// relative order. Original key order is not retained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryValues {
    entries: BTreeMap<String, Vec<String>>,
}

impl QueryValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a raw query string (a leading `?` is ignored). `+` decodes to a
    /// space and malformed escapes are kept literally.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut values = Self::new();
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            values.append(key.into_owned(), value.into_owned());
        }
        values
    }

    pub fn from_url(url: &url::Url) -> Self {
        url.query().map(Self::parse).unwrap_or_default()
    }

    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries
            .entry(key.into())
            .or_default()
            .push(value.into());
    }

    /// Exact-case lookup.
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    /// Returns the values of the first key equal to `key` ignoring ASCII case.
    pub fn get_ignore_case(&self, key: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_slice())
    }

    pub fn remove(&mut self, key: &str) -> Option<Vec<String>> {
        self.entries.remove(key)
    }

    /// Removes every case variant of `key` and returns the values of the
    /// first one found.
    pub fn remove_ignore_case(&mut self, key: &str) -> Option<Vec<String>> {
        let matching: Vec<String> = self
            .entries
            .keys()
            .filter(|k| k.eq_ignore_ascii_case(key))
            .cloned()
            .collect();
        let mut first = None;
        for k in matching {
            let removed = self.entries.remove(&k);
            if first.is_none() {
                first = removed;
            }
        }
        first
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Encodes as `k=v&k=v`, sorted by key.
    pub fn encode(&self) -> String {
        let mut out = String::new();
        for (key, values) in &self.entries {
            let key = escape_query_component(key);
            for value in values {
                if !out.is_empty() {
                    out.push('&');
                }
                out.push_str(&key);
                out.push('=');
                out.push_str(&escape_query_component(value));
            }
        }
        out
    }
}
