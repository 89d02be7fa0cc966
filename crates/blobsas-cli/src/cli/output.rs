//! Shared rendering for command output.

use anyhow::Result;
use blobsas_core::query::escape_query_component;
use blobsas_core::SasQueryParameters;
use std::fmt::Write;

pub const REDACTED: &str = "<redacted>";

/// Resolved output settings (config merged with command-line flags).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Output {
    pub json: bool,
    pub redact_signature: bool,
}

impl Output {
    /// Pretty JSON; the string at `signature_pointer` is masked when redacting.
    pub fn to_json(&self, mut value: serde_json::Value, signature_pointer: &str) -> Result<String> {
        if self.redact_signature {
            if let Some(sig) = value.pointer_mut(signature_pointer) {
                if sig.as_str().is_some_and(|s| !s.is_empty()) {
                    *sig = serde_json::Value::from(REDACTED);
                }
            }
        }
        Ok(serde_json::to_string_pretty(&value)?)
    }

    /// Canonical SAS pairs with `sig` masked when redacting.
    pub fn sas_pairs(&self, sas: &SasQueryParameters) -> Vec<(&'static str, String)> {
        sas.to_pairs()
            .into_iter()
            .map(|(k, v)| {
                if k == "sig" && self.redact_signature {
                    (k, REDACTED.to_string())
                } else {
                    (k, v)
                }
            })
            .collect()
    }

    /// Canonical encoded token, `sig` masked when redacting.
    pub fn sas_token(&self, sas: &SasQueryParameters) -> String {
        if !self.redact_signature {
            return sas.encode();
        }
        self.sas_pairs(sas)
            .iter()
            .map(|(k, v)| {
                if *k == "sig" {
                    format!("{k}={v}")
                } else {
                    format!("{k}={}", escape_query_component(v))
                }
            })
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Indented `key  value` lines for each SAS pair.
    pub fn write_sas_lines(&self, out: &mut String, sas: &SasQueryParameters) {
        for (k, v) in self.sas_pairs(sas) {
            let _ = writeln!(out, "  {k:<6} {v}");
        }
    }
}
