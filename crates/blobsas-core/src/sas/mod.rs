//! Shared Access Signature (SAS) query parameters.
//!
//! Decoding is permissive: unknown keys are ignored and a recognized key whose
//! value cannot be parsed (bad time, bad IP, unknown protocol) reads as absent
//! rather than failing. The service is the one that validates a signature.
//!
//! Encoding writes keys in the service's documented order, not sorted and not
//! in arrival order. Start and expiry times are written back in the format
//! they were decoded from; user-delegation key times (`skt`/`ske`) always use
//! whole seconds.

mod builder;
mod fields;
mod ip_range;
mod params;
mod protocol;
mod time;

pub use builder::SasQueryParametersBuilder;
pub use fields::sas_query_keys;
pub use ip_range::IpRange;
pub use params::SasQueryParameters;
pub use protocol::{SasProtocol, UnknownSasProtocol};
pub use time::{
    format_snapshot_time, format_times_for_sas_signing, parse_sas_time, parse_snapshot_time,
    SasTimeFormat, CANONICAL_FRACTION_DIGITS,
};

/// Service version used when signing new tokens.
pub const SAS_VERSION: &str = "2019-12-12";
