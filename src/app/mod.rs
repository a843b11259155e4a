//! artsea application module.
//!
//! Owns the TUI runtime (terminal lifecycle, background fetch workers and the
//! event loop) and the non-interactive print mode.

use crate::state::FilterSelection;

/// Non-interactive `--print` mode.
mod print;
/// Runtime event loop and background workers.
mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;

// Re-export the public entrypoints so callers keep using `app::run(...)`.
pub use print::{format_line, run_print};
pub use runtime::run;

/// Startup choices taken from the command line that are not settings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StartOptions {
    /// Server-side search text applied to both browse views.
    pub search: Option<String>,
    /// Initial gallery filters.
    pub filters: FilterSelection,
    /// One-based remote page loaded first.
    pub page: u32,
    /// Open this record's detail page directly (no navigation context).
    pub direct_id: Option<u64>,
}
