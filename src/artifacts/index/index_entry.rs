//! Index entry representation
//!
//! Each entry in the index represents a tracked file with:
//! - File path (repository-relative)
//! - Content hash (object ID)
//! - File mode and entry type

use crate::artifacts::index::entry_mode::FileMode;
use crate::artifacts::index::{FIELD_COUNT, FIELD_SEPARATOR};
use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;
use std::path::{Path, PathBuf};

/// Numeric tag stored in the third field of an index line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EntryType(u32);

impl EntryType {
    /// A regular tracked file
    pub const REGULAR: EntryType = EntryType(0);
}

impl std::fmt::Display for EntryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reasons a single index line can fail to parse
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntryParseError {
    #[error("expected 4 fields, found {0}")]
    MissingFields(usize),
    #[error("invalid file mode {0:?}")]
    InvalidMode(String),
    #[error("invalid object id {0:?}")]
    InvalidObjectId(String),
    #[error("invalid entry type {0:?}")]
    InvalidEntryType(String),
    #[error("line is not valid UTF-8")]
    InvalidUtf8,
    #[error("duplicate entry for {0:?}")]
    DuplicatePath(PathBuf),
}

/// Index entry representing a staged file
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct IndexEntry {
    /// File path relative to repository root
    pub name: PathBuf,
    /// SHA-1 hash of file content
    pub oid: ObjectId,
    /// File mode (permissions)
    pub mode: FileMode,
    /// Entry type tag
    pub entry_type: EntryType,
}

impl IndexEntry {
    pub fn path(&self) -> &Path {
        &self.name
    }

    /// Whether staging `other` over this entry would change anything
    pub fn same_version(&self, other: &IndexEntry) -> bool {
        self.oid == other.oid && self.mode == other.mode && self.entry_type == other.entry_type
    }

    /// Render the entry as an index line (without the trailing newline)
    ///
    /// Returns `None` when the path cannot be represented in the line format:
    /// non-UTF-8 names or names containing a line break.
    pub fn to_line(&self) -> Option<String> {
        let name = self.name.to_str()?;
        if name.is_empty() || name.contains(['\n', '\r']) {
            return None;
        }

        Some(format!(
            "{}{sep}{}{sep}{}{sep}{}",
            self.mode,
            self.oid,
            self.entry_type,
            name,
            sep = FIELD_SEPARATOR
        ))
    }

    /// Parse a single index line
    ///
    /// The path is everything after the third separator, so names containing
    /// spaces survive a round trip.
    pub fn parse_line(line: &str) -> Result<Self, EntryParseError> {
        let fields = line.splitn(FIELD_COUNT, FIELD_SEPARATOR).collect::<Vec<_>>();
        let &[mode, oid, entry_type, name] = fields.as_slice() else {
            return Err(EntryParseError::MissingFields(fields.len()));
        };
        if name.is_empty() {
            return Err(EntryParseError::MissingFields(FIELD_COUNT - 1));
        }

        let mode =
            FileMode::try_from(mode).map_err(|_| EntryParseError::InvalidMode(mode.to_string()))?;
        let oid = ObjectId::try_parse(oid.to_string())
            .map_err(|_| EntryParseError::InvalidObjectId(oid.to_string()))?;
        let entry_type = entry_type
            .parse::<u32>()
            .map(EntryType)
            .map_err(|_| EntryParseError::InvalidEntryType(entry_type.to_string()))?;

        Ok(IndexEntry::new(PathBuf::from(name), oid, mode, entry_type))
    }
}
