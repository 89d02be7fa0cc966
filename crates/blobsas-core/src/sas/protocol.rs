//! Permitted request protocols for a SAS (`spr`).

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// HTTP-only access cannot be expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SasProtocol {
    #[serde(rename = "https")]
    Https,
    #[serde(rename = "https,http")]
    HttpsAndHttp,
}

impl SasProtocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            SasProtocol::Https => "https",
            SasProtocol::HttpsAndHttp => "https,http",
        }
    }
}

impl fmt::Display for SasProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized SAS protocol {0:?}")]
pub struct UnknownSasProtocol(pub String);

impl FromStr for SasProtocol {
    type Err = UnknownSasProtocol;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "https" => Ok(SasProtocol::Https),
            "https,http" => Ok(SasProtocol::HttpsAndHttp),
            other => Err(UnknownSasProtocol(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_variants() {
        assert_eq!("https".parse::<SasProtocol>(), Ok(SasProtocol::Https));
        assert_eq!("https,http".parse::<SasProtocol>(), Ok(SasProtocol::HttpsAndHttp));
        assert_eq!(SasProtocol::HttpsAndHttp.to_string(), "https,http");
    }

    #[test]
    fn http_only_is_not_representable() {
        assert_eq!(
            "http".parse::<SasProtocol>(),
            Err(UnknownSasProtocol("http".to_string()))
        );
    }
}
