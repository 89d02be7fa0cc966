//! `blobsas parse <url>` – show every part of a storage URL.

use anyhow::{Context, Result};
use blobsas_core::UrlParts;
use std::fmt::Write;

use crate::cli::output::Output;

pub fn run_parse(url: &str, output: &Output) -> Result<()> {
    let parts = UrlParts::parse(url).with_context(|| format!("parse {url}"))?;
    println!("{}", render_parts(&parts, output)?);
    Ok(())
}

pub(crate) fn render_parts(parts: &UrlParts, output: &Output) -> Result<String> {
    if output.json {
        let mut value = serde_json::to_value(parts)?;
        if let Some(obj) = value.as_object_mut() {
            obj.insert(
                "ip_endpoint_style".to_string(),
                parts.is_ip_endpoint_style().into(),
            );
        }
        return output.to_json(value, "/sas/signature");
    }

    let style = if parts.is_ip_endpoint_style() { "ip" } else { "dns" };
    let mut out = String::new();
    let _ = writeln!(out, "{:<16} {}", "scheme:", parts.scheme);
    let _ = writeln!(out, "{:<16} {}", "host:", parts.host);
    let _ = writeln!(out, "{:<16} {}", "endpoint style:", style);
    let _ = writeln!(out, "{:<16} {}", "account:", parts.account_name);
    let _ = writeln!(out, "{:<16} {}", "container:", parts.container_name);
    let _ = writeln!(out, "{:<16} {}", "blob:", parts.blob_name);
    let _ = writeln!(out, "{:<16} {}", "snapshot:", parts.snapshot);
    let _ = writeln!(out, "{:<16} {}", "version id:", parts.version_id);
    let _ = writeln!(out, "{:<16} {}", "other params:", parts.unparsed_params);
    if parts.sas.is_empty() {
        let _ = write!(out, "{:<16} -", "sas:");
    } else {
        let _ = writeln!(out, "sas:");
        output.write_sas_lines(&mut out, &parts.sas);
    }
    Ok(out.trim_end().to_string())
}
