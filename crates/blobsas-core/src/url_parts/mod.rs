//! Storage resource URL decomposition.
//!
//! A blob URL is split into host, optional account (IP endpoint style only),
//! container, blob, snapshot, version id, SAS parameters and whatever other
//! query parameters remain. Printing a [`UrlParts`] puts it back together:
//!
//! ```text
//! {scheme}://{host}[/{account}][/{container}[/{blob}]]?{unparsed}&versionid=..&snapshot=..&{sas}
//! ```
//!
//! Re-parsing the printed URL yields equal parts, but the text can differ from
//! the original: passthrough parameters come back sorted by key.

mod host;

pub use host::is_ip_endpoint_style_host;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::UrlPartsError;
use crate::query::{escape_query_component, QueryValues};
use crate::sas::{format_snapshot_time, SasQueryParameters};

const SNAPSHOT_KEY: &str = "snapshot";
const VERSION_ID_KEY: &str = "versionid";

/// Resolves relative references such as `/container/blob?sv=..`.
const RELATIVE_BASE: &str = "http://relative.invalid/";

/// Characters left unescaped in the path.
const PATH: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b',')
    .remove(b'/')
    .remove(b':')
    .remove(b';')
    .remove(b'=')
    .remove(b'@');

/// Components of a container or blob URL.
///
/// Changing any SAS-related field requires a new signature.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UrlParts {
    /// e.g. `https`.
    pub scheme: String,
    /// DNS name or IP literal, with `:port` when one was given.
    pub host: String,
    /// Only set for IP endpoint style hosts.
    pub account_name: String,
    /// Empty when the URL addresses the account.
    pub container_name: String,
    /// Empty when the URL addresses a container. May contain `/`.
    pub blob_name: String,
    pub snapshot: String,
    pub version_id: String,
    pub sas: SasQueryParameters,
    /// Query parameters that are neither SAS, snapshot nor version id.
    pub unparsed_params: String,
}

impl UrlParts {
    /// Splits `input` into its parts.
    ///
    /// Fails only when `input` is not a valid URL; relative references such as
    /// `/container/blob?sv=..` leave `scheme` and `host` empty. Snapshot, version
    /// id and SAS keys are recognized in any letter case and removed from
    /// `unparsed_params`.
    pub fn parse(input: &str) -> Result<Self, UrlPartsError> {
        let invalid = |source: url::ParseError| UrlPartsError::InvalidUrl {
            url: input.to_string(),
            source,
        };
        let (url, relative) = match url::Url::parse(input) {
            Ok(url) => (url, false),
            // Relative references only borrow the base for their query.
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                let url = url::Url::parse(RELATIVE_BASE)
                    .and_then(|base| base.join(input))
                    .map_err(invalid)?;
                (url, true)
            }
            Err(source) => return Err(invalid(source)),
        };

        let (authority, raw_path) = authority_and_path(input);
        let mut parts = UrlParts::default();
        if !relative {
            parts.scheme = url.scheme().to_string();
        }
        if !relative || authority.is_some() {
            parts.host = host_with_port(&url);
        }

        // Split the path as written: `Url::path` has dot segments removed.
        let path = if relative || authority.is_some() {
            raw_path
        } else {
            url.path()
        };
        let decoded = percent_decode_str(path).decode_utf8_lossy();
        let mut path: &str = decoded.strip_prefix('/').unwrap_or(&*decoded);
        if parts.is_ip_endpoint_style() {
            match path.split_once('/') {
                Some((account, rest)) => {
                    parts.account_name = account.to_string();
                    path = rest;
                }
                None => {
                    parts.account_name = path.to_string();
                    path = "";
                }
            }
        }
        match path.split_once('/') {
            Some((container, blob)) => {
                parts.container_name = container.to_string();
                parts.blob_name = blob.to_string();
            }
            None => parts.container_name = path.to_string(),
        }

        let mut query = QueryValues::from_url(&url);
        if let Some(values) = query.remove_ignore_case(SNAPSHOT_KEY) {
            parts.snapshot = values.into_iter().next().unwrap_or_default();
        }
        if let Some(values) = query.remove_ignore_case(VERSION_ID_KEY) {
            parts.version_id = values.into_iter().next().unwrap_or_default();
        }
        parts.sas = SasQueryParameters::extract_from(&mut query);
        parts.unparsed_params = query.encode();

        tracing::debug!(
            host = %parts.host,
            container = %parts.container_name,
            blob = %parts.blob_name,
            has_sas = !parts.sas.is_empty(),
            "parsed storage URL"
        );
        Ok(parts)
    }

    /// Derived from `host`; decides whether the first path segment is the account.
    pub fn is_ip_endpoint_style(&self) -> bool {
        is_ip_endpoint_style_host(&self.host)
    }

    fn path(&self) -> String {
        let mut path = String::new();
        if self.is_ip_endpoint_style() && !self.account_name.is_empty() {
            path.push('/');
            path.push_str(&self.account_name);
        }
        if !self.container_name.is_empty() {
            path.push('/');
            path.push_str(&self.container_name);
            if !self.blob_name.is_empty() {
                path.push('/');
                path.push_str(&self.blob_name);
            }
        }
        path
    }

    fn query(&self) -> String {
        let mut query: Vec<String> = Vec::new();
        if !self.unparsed_params.is_empty() {
            query.push(self.unparsed_params.clone());
        }
        if !self.version_id.is_empty() {
            query.push(format!(
                "{VERSION_ID_KEY}={}",
                escape_query_component(&self.version_id)
            ));
        }
        // Fall back to the SAS-embedded snapshot time when none was set.
        let snapshot = if self.snapshot.is_empty() {
            self.sas
                .snapshot_time()
                .map(|t| format_snapshot_time(&t))
                .unwrap_or_default()
        } else {
            self.snapshot.clone()
        };
        if !snapshot.is_empty() {
            query.push(format!(
                "{SNAPSHOT_KEY}={}",
                escape_query_component(&snapshot)
            ));
        }
        let sas = self.sas.encode();
        if !sas.is_empty() {
            query.push(sas);
        }
        query.join("&")
    }
}

impl fmt::Display for UrlParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.scheme.is_empty() {
            write!(f, "{}:", self.scheme)?;
        }
        if !self.host.is_empty() {
            write!(f, "//{}", self.host)?;
        }
        for (i, segment) in self.path().split('/').enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            match segment {
                // Written literally these would be resolved away by URL parsers.
                "." => f.write_str("%2E")?,
                ".." => f.write_str("%2E%2E")?,
                _ => write!(f, "{}", utf8_percent_encode(segment, PATH))?,
            }
        }
        let query = self.query();
        if !query.is_empty() {
            write!(f, "?{query}")?;
        }
        Ok(())
    }
}

impl FromStr for UrlParts {
    type Err = UrlPartsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// `Url::host_str` plus an explicit port. Default ports are dropped by the parser.
fn host_with_port(url: &url::Url) -> String {
    let host = url.host_str().unwrap_or_default();
    match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    }
}

/// Optional `//authority` and the raw path of `input`, before any decoding.
fn authority_and_path(input: &str) -> (Option<&str>, &str) {
    let input = input.trim_matches(|c: char| c.is_ascii_control() || c == ' ');
    let end = input.find(['?', '#']).unwrap_or(input.len());
    let mut rest = &input[..end];
    if let Some((scheme, after)) = rest.split_once(':') {
        if is_scheme(scheme) {
            rest = after;
        }
    }
    match rest.strip_prefix("//") {
        Some(tail) => match tail.find('/') {
            Some(i) => (Some(&tail[..i]), &tail[i..]),
            None => (Some(tail), ""),
        },
        None => (None, rest),
    }
}

fn is_scheme(s: &str) -> bool {
    let mut chars = s.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Returns `url` pointing at `snapshot`; an empty snapshot addresses the base blob.
pub fn with_snapshot(url: &str, snapshot: &str) -> Result<String, UrlPartsError> {
    let mut parts = UrlParts::parse(url)?;
    parts.snapshot = snapshot.to_string();
    Ok(parts.to_string())
}

/// Returns `url` pointing at `version_id`; an empty id addresses the base blob.
pub fn with_version_id(url: &str, version_id: &str) -> Result<String, UrlPartsError> {
    let mut parts = UrlParts::parse(url)?;
    parts.version_id = version_id.to_string();
    Ok(parts.to_string())
}

#[cfg(test)]
mod tests;
