//! Ordered table of SAS query keys.
//!
//! Table order is the canonical encode order. Decoding looks keys up by their
//! lower-cased form.

use super::time::{parse_sas_time, parse_snapshot_time, ZERO_SAS_TIME};
use super::{IpRange, SasQueryParameters, SasTimeFormat};

pub(super) struct SasField {
    pub key: &'static str,
    pub decode: fn(&mut SasQueryParameters, &str),
    pub encode: fn(&SasQueryParameters) -> Option<String>,
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// Members of the user-delegation key group are all-or-nothing on `skoid`.
fn in_oid_group(p: &SasQueryParameters, value: String) -> Option<String> {
    (!p.signed_oid.is_empty()).then_some(value)
}

fn key_time(t: Option<chrono::DateTime<chrono::Utc>>) -> String {
    // skt/ske always use whole seconds, whatever form they were decoded from.
    t.map(|t| SasTimeFormat::Seconds.format(&t))
        .unwrap_or_else(|| ZERO_SAS_TIME.to_string())
}

fn tolerate<T>(key: &str, value: &str, parsed: Option<T>) -> Option<T> {
    if parsed.is_none() {
        tracing::debug!(key, value, "ignoring unparseable SAS field");
    }
    parsed
}

pub(super) static SAS_FIELDS: &[SasField] = &[
    SasField {
        key: "sv",
        decode: |p, v| p.version = v.to_string(),
        encode: |p| non_empty(&p.version),
    },
    SasField {
        key: "ss",
        decode: |p, v| p.services = v.to_string(),
        encode: |p| non_empty(&p.services),
    },
    SasField {
        key: "srt",
        decode: |p, v| p.resource_types = v.to_string(),
        encode: |p| non_empty(&p.resource_types),
    },
    SasField {
        key: "spr",
        decode: |p, v| p.protocol = tolerate("spr", v, v.parse().ok()),
        encode: |p| p.protocol.map(|proto| proto.as_str().to_string()),
    },
    SasField {
        key: "st",
        decode: |p, v| {
            if let Some((t, format)) = tolerate("st", v, parse_sas_time(v)) {
                p.start_time = Some(t);
                p.st_time_format = format;
            }
        },
        encode: |p| p.start_time.map(|t| p.st_time_format.format(&t)),
    },
    SasField {
        key: "se",
        decode: |p, v| {
            if let Some((t, format)) = tolerate("se", v, parse_sas_time(v)) {
                p.expiry_time = Some(t);
                p.se_time_format = format;
            }
        },
        encode: |p| p.expiry_time.map(|t| p.se_time_format.format(&t)),
    },
    SasField {
        // Surfaced through the URL's own `snapshot` key, never re-encoded here.
        key: "snapshot",
        decode: |p, v| p.snapshot_time = tolerate("snapshot", v, parse_snapshot_time(v)),
        encode: |_| None,
    },
    SasField {
        key: "sip",
        decode: |p, v| p.ip_range = IpRange::parse_lenient(v),
        encode: |p| (!p.ip_range.is_empty()).then(|| p.ip_range.to_string()),
    },
    SasField {
        key: "si",
        decode: |p, v| p.identifier = v.to_string(),
        encode: |p| non_empty(&p.identifier),
    },
    SasField {
        key: "sr",
        decode: |p, v| p.resource = v.to_string(),
        encode: |p| non_empty(&p.resource),
    },
    SasField {
        key: "sp",
        decode: |p, v| p.permissions = v.to_string(),
        encode: |p| non_empty(&p.permissions),
    },
    SasField {
        key: "skoid",
        decode: |p, v| p.signed_oid = v.to_string(),
        encode: |p| non_empty(&p.signed_oid),
    },
    SasField {
        key: "sktid",
        decode: |p, v| p.signed_tid = v.to_string(),
        encode: |p| in_oid_group(p, p.signed_tid.clone()),
    },
    SasField {
        key: "skt",
        decode: |p, v| p.signed_start = tolerate("skt", v, parse_sas_time(v)).map(|(t, _)| t),
        encode: |p| in_oid_group(p, key_time(p.signed_start)),
    },
    SasField {
        key: "ske",
        decode: |p, v| p.signed_expiry = tolerate("ske", v, parse_sas_time(v)).map(|(t, _)| t),
        encode: |p| in_oid_group(p, key_time(p.signed_expiry)),
    },
    SasField {
        key: "sks",
        decode: |p, v| p.signed_service = v.to_string(),
        encode: |p| in_oid_group(p, p.signed_service.clone()),
    },
    SasField {
        key: "skv",
        decode: |p, v| p.signed_version = v.to_string(),
        encode: |p| in_oid_group(p, p.signed_version.clone()),
    },
    SasField {
        key: "sig",
        decode: |p, v| p.signature = v.to_string(),
        encode: |p| non_empty(&p.signature),
    },
    SasField {
        key: "rscc",
        decode: |p, v| p.cache_control = v.to_string(),
        encode: |p| non_empty(&p.cache_control),
    },
    SasField {
        key: "rscd",
        decode: |p, v| p.content_disposition = v.to_string(),
        encode: |p| non_empty(&p.content_disposition),
    },
    SasField {
        key: "rsce",
        decode: |p, v| p.content_encoding = v.to_string(),
        encode: |p| non_empty(&p.content_encoding),
    },
    SasField {
        key: "rscl",
        decode: |p, v| p.content_language = v.to_string(),
        encode: |p| non_empty(&p.content_language),
    },
    SasField {
        key: "rsct",
        decode: |p, v| p.content_type = v.to_string(),
        encode: |p| non_empty(&p.content_type),
    },
    SasField {
        key: "sdd",
        decode: |p, v| p.signed_directory_depth = v.to_string(),
        encode: |p| non_empty(&p.signed_directory_depth),
    },
    SasField {
        key: "saoid",
        decode: |p, v| p.preauthorized_agent_object_id = v.to_string(),
        encode: |p| non_empty(&p.preauthorized_agent_object_id),
    },
    SasField {
        key: "suoid",
        decode: |p, v| p.agent_object_id = v.to_string(),
        encode: |p| non_empty(&p.agent_object_id),
    },
    SasField {
        key: "scid",
        decode: |p, v| p.correlation_id = v.to_string(),
        encode: |p| non_empty(&p.correlation_id),
    },
];

/// Case-insensitive lookup of a query key in the table.
pub(super) fn field_for_key(key: &str) -> Option<&'static SasField> {
    SAS_FIELDS.iter().find(|f| f.key.eq_ignore_ascii_case(key))
}

/// Every recognized SAS key, in canonical order.
pub fn sas_query_keys() -> impl Iterator<Item = &'static str> {
    SAS_FIELDS.iter().map(|f| f.key)
}
