//! Endpoint-style detection from a URL host.

use std::net::IpAddr;

/// Whether `host` (optionally with `:port`) is an IP literal.
///
/// For IP hosts the storage account is the first path segment, as with the
/// storage emulator: `http://127.0.0.1:10000/account/container/blob`.
pub fn is_ip_endpoint_style_host(host: &str) -> bool {
    if host.is_empty() {
        return false;
    }
    let host = strip_port(host).unwrap_or(host);
    let host = host
        .strip_prefix('[')
        .and_then(|h| h.strip_suffix(']'))
        .unwrap_or(host);
    host.parse::<IpAddr>().is_ok()
}

/// Host part of `host:port` or `[v6]:port`; `None` if there is no port to strip.
fn strip_port(host: &str) -> Option<&str> {
    if let Some(rest) = host.strip_prefix('[') {
        let (inner, tail) = rest.split_once(']')?;
        tail.strip_prefix(':')?;
        return Some(inner);
    }
    let (name, _port) = host.rsplit_once(':')?;
    // More than one colon without brackets is a bare IPv6 address.
    if name.contains(':') {
        return None;
    }
    Some(name)
}
