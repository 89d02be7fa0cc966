//! `blobsas normalize <url>` – print a URL the way it is re-assembled from its parts.

use anyhow::{Context, Result};
use blobsas_core::sas::format_snapshot_time;
use blobsas_core::{SasQueryParameters, UrlParts};

use crate::cli::output::Output;

pub fn run_normalize(url: &str, output: &Output) -> Result<()> {
    let parts = UrlParts::parse(url).with_context(|| format!("parse {url}"))?;
    println!("{}", render_normalized(&parts, output));
    Ok(())
}

/// The re-assembled URL, with `sig` masked when redacting.
pub(crate) fn render_normalized(parts: &UrlParts, output: &Output) -> String {
    if !output.redact_signature || parts.sas.signature().is_empty() {
        return parts.to_string();
    }
    // The SAS goes last, so print everything else and append the masked token.
    let mut bare = parts.clone();
    if bare.snapshot.is_empty() {
        if let Some(t) = parts.sas.snapshot_time() {
            bare.snapshot = format_snapshot_time(&t);
        }
    }
    bare.sas = SasQueryParameters::default();
    let mut url = bare.to_string();
    url.push(if url.contains('?') { '&' } else { '?' });
    url.push_str(&output.sas_token(&parts.sas));
    url
}
