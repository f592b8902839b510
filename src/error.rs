//! Filter configuration errors.
//!
//! Everything here is a static configuration mistake surfaced while the
//! pipeline is being set up, before any record is processed. The
//! per-record processing path has no error category at all.

use thiserror::Error;

/// Error raised while constructing a filter from its configuration.
#[derive(Debug, Error)]
pub enum FilterError {
    /// A configured field name is not part of the pipeline's schema.
    #[error("{filter}: unknown field {field:?}")]
    UnknownField { filter: &'static str, field: String },

    /// A supplied configuration omits a required option.
    #[error("{filter}: missing required option {option:?}")]
    MissingOption {
        filter: &'static str,
        option: &'static str,
    },

    /// A required option was supplied but left empty.
    #[error("{filter}: option {option:?} must not be empty")]
    EmptyOption {
        filter: &'static str,
        option: &'static str,
    },

    /// The supplied configuration does not decode into the filter's
    /// configuration shape.
    #[error("{filter}: invalid configuration: {source}")]
    Config {
        filter: &'static str,
        #[source]
        source: toml::de::Error,
    },
}
