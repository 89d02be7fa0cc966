//! `blobsas host-style <host>`.

use blobsas_core::is_ip_endpoint_style_host;

pub fn run_host_style(host: &str) {
    println!("{}", render_host_style(host));
}

pub(crate) fn render_host_style(host: &str) -> String {
    if is_ip_endpoint_style_host(host) {
        format!("{host}: ip endpoint style (account is the first path segment)")
    } else {
        format!("{host}: dns endpoint style")
    }
}
