//! `blobsas sas <token>` – decode a SAS token.

use anyhow::Result;
use blobsas_core::{QueryValues, SasQueryParameters};
use std::fmt::Write;

use crate::cli::output::Output;

pub fn run_sas(token: &str, output: &Output) -> Result<()> {
    println!("{}", render_sas(token, output)?);
    Ok(())
}

pub(crate) fn render_sas(token: &str, output: &Output) -> Result<String> {
    let mut rest = QueryValues::parse(token);
    let sas = SasQueryParameters::extract_from(&mut rest);
    let unrecognized: Vec<&str> = rest.keys().collect();
    if !unrecognized.is_empty() {
        tracing::debug!(?unrecognized, "token carries non-SAS parameters");
    }

    if output.json {
        let value = serde_json::json!({
            "sas": serde_json::to_value(&sas)?,
            "canonical": output.sas_token(&sas),
            "unrecognized": unrecognized,
        });
        return output.to_json(value, "/sas/signature");
    }

    let mut out = String::new();
    if sas.is_empty() {
        let _ = writeln!(out, "no SAS parameters found");
    } else {
        let _ = writeln!(out, "fields:");
        output.write_sas_lines(&mut out, &sas);
        let _ = writeln!(out, "canonical: {}", output.sas_token(&sas));
    }
    if !unrecognized.is_empty() {
        let _ = writeln!(out, "unrecognized: {}", unrecognized.join(" "));
    }
    Ok(out.trim_end().to_string())
}
