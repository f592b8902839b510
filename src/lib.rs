//! # filters-rs
//!
//! Pluggable per-record filters for record-processing pipelines.
//!
//! A filter is one stage in a pipeline: the engine constructs it once from
//! its stage configuration and the pipeline's field schema, then calls its
//! processing step for every record, concurrently, for the life of the
//! run. Each call either hands the record to the downstream continuation
//! or drops it; two atomic counters track the outcome.
//!
//! ## Overview
//!
//! - [`FilterDesc`] ties a filter's name, help text, configuration schema
//!   and constructor together; [`registry::ALL`] is the ordered list the
//!   engine discovers filters from.
//! - Construction resolves configured field names to indices through the
//!   pipeline's [`FieldResolver`] and fails fast on any unknown name.
//! - [`Filter::process`] is safe under unsynchronized concurrent calls;
//!   [`Filter::stats`] snapshots the counters at any time.
//!
//! ## Example
//!
//! ```
//! use filters_rs::{FilterParams, FlatRecord, Schema, registry};
//!
//! let schema = Schema::new(["user", "action"]);
//! let config: toml::Value = r#"fields = ["user"]"#.parse().unwrap();
//!
//! let desc = registry::find("not_null").unwrap();
//! let filter = desc
//!     .build(FilterParams {
//!         config: Some(&config),
//!         resolver: &schema,
//!     })
//!     .unwrap();
//!
//! let present = FlatRecord::from_values([Some("alice"), Some("login")]);
//! let absent = FlatRecord::from_values([None::<&str>, Some("login")]);
//!
//! let mut kept = 0;
//! filter.process(&present, &mut |_| kept += 1);
//! filter.process(&absent, &mut |_| kept += 1);
//!
//! assert_eq!(kept, 1);
//! let stats = filter.stats();
//! assert_eq!(stats.records_processed, 2);
//! assert_eq!(stats.records_filtered, 1);
//! ```

pub mod config;
pub mod error;
pub mod filter;
pub mod not_null;
pub mod record;
pub mod registry;

#[cfg(test)]
mod testutil;

pub use error::FilterError;
pub use filter::{
    ConfigOption, Filter, FilterDesc, FilterParams, FilterStats, NewFilterFn, OptionKind,
};
pub use not_null::{NOT_NULL_DESC, NotNull, NotNullConfig};
pub use record::{FieldIndex, FieldResolver, FlatRecord, Record, Schema};
pub use registry::{ALL, find};
