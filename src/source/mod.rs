//! Read-only access to the cleaned multi-station observation table.

pub mod csv_source;
pub mod error;
pub mod in_memory;

use crate::source::error::SourceError;
use polars::prelude::LazyFrame;

/// Something that yields the cleaned observation table as a lazy frame.
///
/// Implementations must not mutate what they read: every call to [`scan`](Self::scan)
/// sees the same data, which keeps feature builds idempotent.
pub trait ObservationSource {
    /// Opens the table lazily. Column selection happens afterwards, so a source
    /// may expose more columns than any single build needs.
    fn scan(&self) -> Result<LazyFrame, SourceError>;

    /// Short human-readable name used in logs and error messages.
    fn describe(&self) -> String;
}
