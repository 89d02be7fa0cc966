//! Error type for URL decomposition.
//!
//! Only the outer URL parse can fail. Malformed SAS subfields are tolerated
//! and surface as absent values, never as errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum UrlPartsError {
    /// The input is neither an absolute URL nor a valid relative reference.
    #[error("invalid storage URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}
