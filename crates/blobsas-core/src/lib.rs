pub mod config;
pub mod logging;

pub mod error;
pub mod query;
pub mod sas;
pub mod url_parts;

pub use error::UrlPartsError;
pub use query::QueryValues;
pub use sas::{IpRange, SasProtocol, SasQueryParameters, SasTimeFormat};
pub use url_parts::{is_ip_endpoint_style_host, UrlParts};
