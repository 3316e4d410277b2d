//! Clearout - working directory cleaner
//!
//! Clearout empties a working directory in two passes. Pass 1 removes every
//! entry directly under the root: files and symlinks are unlinked, and
//! directories are removed with their entire contents, except one protected
//! subdirectory which is kept in place. Pass 2 then clears the protected
//! subdirectory's own contents, so it ends up present and empty.
//!
//! Failures on individual entries are logged and skipped; the run carries on
//! and always reaches its final confirmation. Only a failure to list the root
//! directory itself aborts a run.

pub mod cleaner;
pub mod config;
pub mod report;

// Re-export commonly used items
pub use cleaner::{clear_workspace, ClearOptions, ClearReport, ClearedEntry, EntryKind};
pub use config::{load_defaults, Defaults};
