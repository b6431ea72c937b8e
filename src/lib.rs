//! hekate-ini: round-trip parsing of INI files in the hekate bootloader dialect.
//!
//! Besides `[section]` headers and `key=value` options the dialect keeps
//! `{caption}` lines, `;` and `#` comments and blank lines in document order,
//! so a loaded file can be written back without losing its layout.
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod document;
pub mod entry;
pub mod error;
pub mod input;
pub mod section;
pub mod storage;

pub use document::{Document, ParseOptions};
pub use entry::{Entry, EntryKind};
pub use error::{Error, Result};
pub use section::{IniOption, Section};
pub use storage::{load_document, save_document, Commit, NoCommit, SyncAll};
