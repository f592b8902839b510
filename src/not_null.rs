//! Filter that discards records having null (i.e. empty) fields.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Deserialize;
use tracing::debug;

use crate::config;
use crate::error::FilterError;
use crate::filter::{ConfigOption, Filter, FilterDesc, FilterParams, FilterStats, OptionKind};
use crate::record::{FieldIndex, Record};

/// Descriptor for the `not_null` filter.
pub static NOT_NULL_DESC: FilterDesc = FilterDesc {
    name: "not_null",
    help: "Discard records having null (i.e. empty) fields.",
    options: NOT_NULL_OPTIONS,
    new: NotNull::new,
};

const NOT_NULL_OPTIONS: &[ConfigOption] = &[ConfigOption {
    name: "fields",
    kind: OptionKind::StringList,
    required: true,
    help: "Field names to check for null/empty values",
}];

/// Configuration for [`NotNull`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NotNullConfig {
    /// Names of the fields to check, in check order.
    pub fields: Vec<String>,
}

/// Discards records where any configured field is absent or empty.
pub struct NotNull {
    fields: Vec<FieldIndex>,
    records_processed: AtomicU64,
    records_filtered: AtomicU64,
}

impl NotNull {
    /// Build a `NotNull`, resolving every configured field name against
    /// the pipeline's schema. Fails on the first name the schema does not
    /// know; no partial instance is returned.
    pub fn new(params: FilterParams<'_>) -> Result<Box<dyn Filter>, FilterError> {
        let cfg: NotNullConfig =
            config::decode(NOT_NULL_DESC.name, NOT_NULL_OPTIONS, params.config)?;

        let mut fields = Vec::with_capacity(cfg.fields.len());
        for name in &cfg.fields {
            match params.resolver.resolve(name) {
                Some(index) => fields.push(index),
                None => {
                    return Err(FilterError::UnknownField {
                        filter: NOT_NULL_DESC.name,
                        field: name.clone(),
                    });
                }
            }
        }

        debug!(filter = NOT_NULL_DESC.name, fields = ?cfg.fields, "configured");
        Ok(Box::new(Self {
            fields,
            records_processed: AtomicU64::new(0),
            records_filtered: AtomicU64::new(0),
        }))
    }
}

impl Filter for NotNull {
    fn process(&self, record: &dyn Record, forward: &mut dyn FnMut(&dyn Record)) {
        self.records_processed.fetch_add(1, Ordering::Relaxed);
        for &index in &self.fields {
            if record.get(index).is_none_or(|v| v.is_empty()) {
                self.records_filtered.fetch_add(1, Ordering::Relaxed);
                return;
            }
        }

        forward(record);
    }

    fn stats(&self) -> FilterStats {
        FilterStats {
            records_processed: self.records_processed.load(Ordering::Relaxed),
            records_filtered: self.records_filtered.load(Ordering::Relaxed),
        }
    }
}
