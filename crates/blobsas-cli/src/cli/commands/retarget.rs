//! `blobsas with-snapshot` / `blobsas with-version` – retarget a blob URL.

use anyhow::{Context, Result};
use blobsas_core::url_parts;

pub fn run_with_snapshot(url: &str, snapshot: &str) -> Result<()> {
    let retargeted =
        url_parts::with_snapshot(url, snapshot).with_context(|| format!("parse {url}"))?;
    tracing::debug!(snapshot, "retargeted URL to snapshot");
    println!("{retargeted}");
    Ok(())
}

pub fn run_with_version(url: &str, version_id: &str) -> Result<()> {
    let retargeted =
        url_parts::with_version_id(url, version_id).with_context(|| format!("parse {url}"))?;
    tracing::debug!(version_id, "retargeted URL to version");
    println!("{retargeted}");
    Ok(())
}
