//! `blobsas constants` – SAS version and accepted time formats.

use blobsas_core::sas::{sas_query_keys, SasTimeFormat, SAS_VERSION};
use std::fmt::Write;

pub fn run_constants() {
    println!("{}", render_constants());
}

pub(crate) fn render_constants() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "sas version:  {SAS_VERSION}");
    let _ = writeln!(out, "time formats (st/se, in decode order):");
    for format in SasTimeFormat::ALL {
        let _ = writeln!(out, "  {}", format.layout());
    }
    let _ = writeln!(out, "snapshot format: yyyy-MM-ddTHH:mm:ss.fffffffZ (or ±hh:mm offset)");
    let keys: Vec<&str> = sas_query_keys().collect();
    let _ = write!(out, "sas keys (encode order): {}", keys.join(" "));
    out
}
