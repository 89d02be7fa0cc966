//! Allowed client address range for a SAS (`sip`).

use serde::Serialize;
use std::fmt;
use std::net::IpAddr;

/// A single address or an inclusive `start-end` range. Either bound is `None`
/// when absent or unparseable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct IpRange {
    start: Option<IpAddr>,
    end: Option<IpAddr>,
}

impl IpRange {
    pub fn single(ip: IpAddr) -> Self {
        Self {
            start: Some(ip),
            end: None,
        }
    }

    pub fn new(start: IpAddr, end: IpAddr) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    pub fn start(&self) -> Option<IpAddr> {
        self.start
    }

    pub fn end(&self) -> Option<IpAddr> {
        self.end
    }

    /// Nothing is emitted for a range without a start address.
    pub fn is_empty(&self) -> bool {
        self.start.is_none()
    }

    /// Splits on the first `-`. A half that is not an IP literal becomes `None`.
    pub(crate) fn parse_lenient(value: &str) -> Self {
        match value.split_once('-') {
            None => Self {
                start: value.parse().ok(),
                end: None,
            },
            Some((start, end)) => Self {
                start: start.parse().ok(),
                end: end.parse().ok(),
            },
        }
    }
}

impl fmt::Display for IpRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(start) = self.start else {
            return Ok(());
        };
        match self.end {
            Some(end) => write!(f, "{start}-{end}"),
            None => write!(f, "{start}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_address() {
        let r = IpRange::parse_lenient("168.1.5.60");
        assert_eq!(r.start(), Some("168.1.5.60".parse().unwrap()));
        assert!(r.end().is_none());
        assert_eq!(r.to_string(), "168.1.5.60");
    }

    #[test]
    fn address_range() {
        let r = IpRange::parse_lenient("168.1.5.60-168.1.5.70");
        assert_eq!(r.to_string(), "168.1.5.60-168.1.5.70");
    }

    #[test]
    fn bad_halves_become_none() {
        let r = IpRange::parse_lenient("nope-10.0.0.1");
        assert!(r.is_empty());
        assert_eq!(r.end(), Some("10.0.0.1".parse().unwrap()));
        assert_eq!(r.to_string(), "");

        let r = IpRange::parse_lenient("10.0.0.1-");
        assert_eq!(r.to_string(), "10.0.0.1");
    }

    #[test]
    fn ipv6_single() {
        let r = IpRange::parse_lenient("2001:db8::1");
        assert_eq!(r.to_string(), "2001:db8::1");
    }
}
