//! Assembles a [`SasQueryParameters`] from already-signed values.
//!
//! Signing itself (computing `sig` over a string-to-sign) happens elsewhere;
//! the builder only carries the results into the query-parameter model.

use chrono::{DateTime, FixedOffset, Utc};

use super::{IpRange, SasProtocol, SasQueryParameters, SasTimeFormat};

#[derive(Debug, Clone, Default)]
pub struct SasQueryParametersBuilder {
    params: SasQueryParameters,
}

macro_rules! string_setters {
    ($($name:ident),* $(,)?) => {
        $(
            pub fn $name(mut self, value: impl Into<String>) -> Self {
                self.params.$name = value.into();
                self
            }
        )*
    };
}

impl SasQueryParametersBuilder {
    string_setters!(
        version,
        services,
        resource_types,
        identifier,
        resource,
        permissions,
        signature,
        cache_control,
        content_disposition,
        content_encoding,
        content_language,
        content_type,
        signed_oid,
        signed_tid,
        signed_service,
        signed_version,
        signed_directory_depth,
        preauthorized_agent_object_id,
        agent_object_id,
        correlation_id,
    );

    pub fn protocol(mut self, protocol: SasProtocol) -> Self {
        self.params.protocol = Some(protocol);
        self
    }

    /// Sets `st`, written in whole seconds.
    pub fn start_time(self, t: DateTime<Utc>) -> Self {
        self.start_time_with_format(t, SasTimeFormat::Seconds)
    }

    pub fn start_time_with_format(mut self, t: DateTime<Utc>, format: SasTimeFormat) -> Self {
        self.params.start_time = Some(t);
        self.params.st_time_format = format;
        self
    }

    /// Sets `se`, written in whole seconds.
    pub fn expiry_time(self, t: DateTime<Utc>) -> Self {
        self.expiry_time_with_format(t, SasTimeFormat::Seconds)
    }

    pub fn expiry_time_with_format(mut self, t: DateTime<Utc>, format: SasTimeFormat) -> Self {
        self.params.expiry_time = Some(t);
        self.params.se_time_format = format;
        self
    }

    pub fn snapshot_time(mut self, t: DateTime<FixedOffset>) -> Self {
        self.params.snapshot_time = Some(t);
        self
    }

    pub fn ip_range(mut self, range: IpRange) -> Self {
        self.params.ip_range = range;
        self
    }

    pub fn signed_start(mut self, t: DateTime<Utc>) -> Self {
        self.params.signed_start = Some(t);
        self
    }

    pub fn signed_expiry(mut self, t: DateTime<Utc>) -> Self {
        self.params.signed_expiry = Some(t);
        self
    }

    pub fn build(self) -> SasQueryParameters {
        self.params
    }
}
