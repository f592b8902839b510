//! Decoding of raw stage configuration into typed config structs.
//!
//! The decoding layer, not the filter, enforces the `required` markers in
//! a descriptor's option table: a supplied configuration that omits a
//! required option, or leaves it empty, is rejected before serde runs.
//! A stage carrying no configuration at all gets the filter's default
//! configuration substituted instead of failing, so filters without
//! required options can run unconfigured.

use serde::de::DeserializeOwned;

use crate::error::FilterError;
use crate::filter::ConfigOption;

/// Decode `raw` into `T`, enforcing the required markers in `options`.
pub fn decode<T>(
    filter: &'static str,
    options: &[ConfigOption],
    raw: Option<&toml::Value>,
) -> Result<T, FilterError>
where
    T: DeserializeOwned + Default,
{
    let Some(raw) = raw else {
        return Ok(T::default());
    };
    check_required(filter, options, raw)?;
    raw.clone()
        .try_into()
        .map_err(|source| FilterError::Config { filter, source })
}

fn check_required(
    filter: &'static str,
    options: &[ConfigOption],
    raw: &toml::Value,
) -> Result<(), FilterError> {
    for option in options.iter().filter(|o| o.required) {
        match raw.get(option.name) {
            None => {
                return Err(FilterError::MissingOption {
                    filter,
                    option: option.name,
                });
            }
            Some(toml::Value::Array(values)) if values.is_empty() => {
                return Err(FilterError::EmptyOption {
                    filter,
                    option: option.name,
                });
            }
            Some(toml::Value::String(value)) if value.is_empty() => {
                return Err(FilterError::EmptyOption {
                    filter,
                    option: option.name,
                });
            }
            Some(_) => {}
        }
    }
    Ok(())
}
