//! The filter plugin contract.
//!
//! A filter is one stage of a record pipeline. The engine builds it once
//! from its stage configuration and the pipeline's field resolver, then
//! calls [`Filter::process`] for every record, concurrently, for the life
//! of the run. Each call either hands the record to the downstream
//! continuation exactly once or drops it; nothing else happens to the
//! record in this stage.

use crate::error::FilterError;
use crate::record::{FieldResolver, Record};

/// Snapshot of a filter's counters at the time of the call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterStats {
    /// Records seen by `process`, forwarded or not.
    pub records_processed: u64,
    /// Records dropped.
    pub records_filtered: u64,
}

/// The value type of a configuration option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    Bool,
    Int,
    String,
    StringList,
}

/// One row of a filter's declarative configuration schema.
#[derive(Debug, Clone, Copy)]
pub struct ConfigOption {
    pub name: &'static str,
    pub kind: OptionKind,
    /// A supplied configuration that omits this option, or leaves it
    /// empty, is rejected by the decoding layer.
    pub required: bool,
    pub help: &'static str,
}

/// Construction-time parameters handed to a filter constructor.
pub struct FilterParams<'a> {
    /// Raw stage configuration, if the user supplied any.
    pub config: Option<&'a toml::Value>,
    /// Resolves field names against the pipeline's schema.
    pub resolver: &'a dyn FieldResolver,
}

/// Constructor signature every filter exposes through its descriptor.
pub type NewFilterFn = fn(FilterParams<'_>) -> Result<Box<dyn Filter>, FilterError>;

/// Static metadata tying a filter's name, help text, configuration schema
/// and constructor together. The registry is an ordered list of these.
#[derive(Debug, Clone, Copy)]
pub struct FilterDesc {
    /// Unique registry name.
    pub name: &'static str,
    /// Free-text usage description.
    pub help: &'static str,
    /// Declarative configuration schema.
    pub options: &'static [ConfigOption],
    /// Builds a ready-to-use instance, or fails with a configuration error.
    pub new: NewFilterFn,
}

impl FilterDesc {
    /// Construct a filter instance from this descriptor.
    ///
    /// Either returns a fully-initialized instance or a configuration
    /// error; never a partially-usable one.
    pub fn build(&self, params: FilterParams<'_>) -> Result<Box<dyn Filter>, FilterError> {
        (self.new)(params)
    }
}

/// A pipeline filter stage.
///
/// `process` may be called from any number of worker threads at once with
/// no caller-side locking; implementations keep their mutable state in
/// atomics. The processing path has no failure mode: every record yields a
/// forward-or-drop decision, and a record with absent fields is ordinary
/// input, not an error.
pub trait Filter: Send + Sync {
    /// Decide `record`'s fate: call `forward` exactly once to pass it
    /// downstream unchanged, or return without calling it to drop it.
    fn process(&self, record: &dyn Record, forward: &mut dyn FnMut(&dyn Record));

    /// Snapshot of the counters as of the call.
    fn stats(&self) -> FilterStats;
}
