//! Decoded SAS token.

use chrono::{DateTime, FixedOffset, Utc};
use serde::Serialize;
use std::fmt;

use super::fields::{field_for_key, SAS_FIELDS};
use super::{IpRange, SasProtocol, SasQueryParametersBuilder, SasTimeFormat};
use crate::query::{escape_query_component, QueryValues};

/// The components of a storage SAS as carried in a URL query string.
///
/// Values are set once, at decode time or through
/// [`SasQueryParametersBuilder`]; changing any of them invalidates the
/// signature. Fields that were missing or could not be parsed read as empty
/// strings or `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SasQueryParameters {
    pub(super) version: String,
    pub(super) services: String,
    pub(super) resource_types: String,
    pub(super) protocol: Option<SasProtocol>,
    pub(super) start_time: Option<DateTime<Utc>>,
    pub(super) expiry_time: Option<DateTime<Utc>>,
    pub(super) snapshot_time: Option<DateTime<FixedOffset>>,
    pub(super) ip_range: IpRange,
    pub(super) identifier: String,
    pub(super) resource: String,
    pub(super) permissions: String,
    pub(super) signature: String,
    pub(super) cache_control: String,
    pub(super) content_disposition: String,
    pub(super) content_encoding: String,
    pub(super) content_language: String,
    pub(super) content_type: String,
    pub(super) signed_oid: String,
    pub(super) signed_tid: String,
    pub(super) signed_start: Option<DateTime<Utc>>,
    pub(super) signed_service: String,
    pub(super) signed_expiry: Option<DateTime<Utc>>,
    pub(super) signed_version: String,
    pub(super) signed_directory_depth: String,
    pub(super) preauthorized_agent_object_id: String,
    pub(super) agent_object_id: String,
    pub(super) correlation_id: String,
    // Text forms `st`/`se` arrived in, reused when encoding.
    #[serde(skip)]
    pub(super) st_time_format: SasTimeFormat,
    #[serde(skip)]
    pub(super) se_time_format: SasTimeFormat,
}

impl SasQueryParameters {
    pub fn builder() -> SasQueryParametersBuilder {
        SasQueryParametersBuilder::default()
    }

    /// Decodes every recognized SAS key in `values`, matching keys without
    /// regard to case. `values` is left untouched.
    pub fn from_query(values: &QueryValues) -> Self {
        let mut params = Self::default();
        for (key, vals) in values.iter() {
            params.apply(key, vals);
        }
        params
    }

    /// Like [`from_query`](Self::from_query) but also removes every
    /// recognized key from `values`, leaving only passthrough parameters.
    /// The caller's map is modified in place; pass a clone to keep it intact.
    pub fn extract_from(values: &mut QueryValues) -> Self {
        let mut params = Self::default();
        let mut matched = Vec::new();
        for (key, vals) in values.iter() {
            if params.apply(key, vals) {
                matched.push(key.to_string());
            }
        }
        for key in matched {
            values.remove(&key);
        }
        params
    }

    /// Decodes a raw token such as `sv=...&sig=...` (leading `?` allowed).
    pub fn parse_token(token: &str) -> Self {
        Self::from_query(&QueryValues::parse(token))
    }

    /// Applies one query entry; returns whether the key is a SAS key.
    fn apply(&mut self, key: &str, vals: &[String]) -> bool {
        let Some(field) = field_for_key(key) else {
            return false;
        };
        let value = vals.first().map(String::as_str).unwrap_or_default();
        (field.decode)(self, value);
        true
    }

    /// Key/value pairs in the service's canonical order.
    ///
    /// The user-delegation key group (`skoid` through `skv`) is emitted as a
    /// whole whenever `skoid` is set, zero-valued members included.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        SAS_FIELDS
            .iter()
            .filter_map(|field| (field.encode)(self).map(|v| (field.key, v)))
            .collect()
    }

    /// URL-encoded query string, in canonical order. Empty when no field is set.
    pub fn encode(&self) -> String {
        self.to_pairs()
            .iter()
            .map(|(k, v)| format!("{k}={}", escape_query_component(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn services(&self) -> &str {
        &self.services
    }

    pub fn resource_types(&self) -> &str {
        &self.resource_types
    }

    pub fn protocol(&self) -> Option<SasProtocol> {
        self.protocol
    }

    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        self.start_time
    }

    pub fn expiry_time(&self) -> Option<DateTime<Utc>> {
        self.expiry_time
    }

    /// Format `st` will be written in.
    pub fn start_time_format(&self) -> SasTimeFormat {
        self.st_time_format
    }

    /// Format `se` will be written in.
    pub fn expiry_time_format(&self) -> SasTimeFormat {
        self.se_time_format
    }

    pub fn snapshot_time(&self) -> Option<DateTime<FixedOffset>> {
        self.snapshot_time
    }

    pub fn ip_range(&self) -> IpRange {
        self.ip_range
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    pub fn permissions(&self) -> &str {
        &self.permissions
    }

    pub fn signature(&self) -> &str {
        &self.signature
    }

    pub fn cache_control(&self) -> &str {
        &self.cache_control
    }

    pub fn content_disposition(&self) -> &str {
        &self.content_disposition
    }

    pub fn content_encoding(&self) -> &str {
        &self.content_encoding
    }

    pub fn content_language(&self) -> &str {
        &self.content_language
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn signed_oid(&self) -> &str {
        &self.signed_oid
    }

    pub fn signed_tid(&self) -> &str {
        &self.signed_tid
    }

    pub fn signed_start(&self) -> Option<DateTime<Utc>> {
        self.signed_start
    }

    pub fn signed_service(&self) -> &str {
        &self.signed_service
    }

    pub fn signed_expiry(&self) -> Option<DateTime<Utc>> {
        self.signed_expiry
    }

    pub fn signed_version(&self) -> &str {
        &self.signed_version
    }

    pub fn signed_directory_depth(&self) -> &str {
        &self.signed_directory_depth
    }

    pub fn preauthorized_agent_object_id(&self) -> &str {
        &self.preauthorized_agent_object_id
    }

    pub fn agent_object_id(&self) -> &str {
        &self.agent_object_id
    }

    pub fn correlation_id(&self) -> &str {
        &self.correlation_id
    }
}

impl fmt::Display for SasQueryParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}
