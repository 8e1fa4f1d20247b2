//! tally-core: incremental progress reports for long-running operations
//!
//! This crate provides:
//! - `Entry` - typed report entries (text, link sets, separators)
//! - `Report` - append-only entry log with a drain cursor
//! - `Separators` - the four-slot rendering configuration
//! - `Reporter` - the trait job runners write progress through

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod entry;
pub mod report;
pub mod reporter;
pub mod separators;

pub use entry::{normalize_text, Entry, SeparatorChoice, StatusLine, LINE_BREAK_MARKER};
pub use report::Report;
pub use reporter::Reporter;
pub use separators::{ConfigError, Separators, SeparatorsFile, DEFAULT_SEPARATOR, SLOT_COUNT};
