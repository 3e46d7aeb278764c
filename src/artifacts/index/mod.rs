//! Index file format
//!
//! The index (also called staging area) records which file versions are queued
//! for the next commit. It is a line-oriented text file, one entry per line:
//!
//! ```text
//! <mode> <object-id> <entry-type> <path>
//! ```
//!
//! - `mode`: `100644` for regular files, `100755` for executables
//! - `object-id`: 40-char hex id of the staged blob
//! - `entry-type`: numeric tag, `0` for a regular tracked file
//! - `path`: repository-relative, `/`-separated; everything after the third space

pub mod entry_mode;
pub mod index_entry;

/// Separator between the fields of an index line
pub const FIELD_SEPARATOR: char = ' ';

/// Number of fields in an index line
pub const FIELD_COUNT: usize = 4;
