//! Command handlers
//!
//! Each handler validates its options, resolves the resource token, talks to
//! the orchestrator through [`FogAtlasApi`](fogatlas_client::FogAtlasApi) and
//! writes its output to the given writer.

pub mod delete;
pub mod delete_all;
pub mod get;
pub mod patch;
pub mod put;
pub mod put_all;

/// Outcome of a bulk command
///
/// Bulk commands keep going past failed items, so a report with failures is
/// still a successful command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BulkReport {
    pub succeeded: usize,
    pub failed: usize,
}

/// Value of an option, treating an empty string as absent
pub(crate) fn given(option: &Option<String>) -> Option<&str> {
    option.as_deref().filter(|value| !value.is_empty())
}
