//! Index (staging area)
//!
//! The index records which file versions are staged for the next commit: one
//! entry per repository-relative path, pointing at the blob holding its content.
//!
//! ## Data Structures
//!
//! - `entries`: Entries in file order; new paths are appended
//! - `positions`: Maps each path to its slot in `entries`, keeping paths unique
//!
//! ## Persistence
//!
//! The whole ledger is loaded with [`Index::rehydrate`] and written back with
//! [`Index::write_updates`]. Writes go to a fresh temporary file which is then
//! renamed over the index, so a reader sees either the old or the new ledger,
//! never a mix of both.

use crate::artifacts::index::entry_mode::FileMode;
use crate::artifacts::index::index_entry::{EntryParseError, EntryType, IndexEntry};
use crate::artifacts::objects::object_id::ObjectId;
use fake::rand;
use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, IndexError>;

/// Errors raised while loading or updating the index
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("corrupt index file {}: line {line}: {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        line: usize,
        #[source]
        source: EntryParseError,
    },

    #[error("path {0:?} cannot be recorded in the index")]
    InvalidPath(PathBuf),

    #[error("{message} {}", .path.display())]
    Io {
        message: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl IndexError {
    fn io(message: &'static str, path: &Path) -> impl FnOnce(std::io::Error) -> IndexError {
        let path = path.to_path_buf();
        move |source| IndexError::Io {
            message,
            path,
            source,
        }
    }
}

/// Outcome of staging a single path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    /// The path was not tracked before
    Added,
    /// The path was tracked with a different version
    Updated,
    /// The path was already tracked with this exact version
    Unchanged,
}

/// Index (staging area)
#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (typically `.ggit/index`)
    path: Box<Path>,
    /// Tracked files in file order
    entries: Vec<IndexEntry>,
    /// Slot of each tracked path in `entries`
    positions: HashMap<PathBuf, usize>,
    /// Flag indicating if the index has been modified since loading
    changed: bool,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            entries: Vec::new(),
            positions: HashMap::new(),
            changed: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of the file used to serialize index updates across processes
    pub fn lock_path(&self) -> PathBuf {
        self.path.with_extension("lock")
    }

    /// Open (creating if needed) the lock file guarding index updates
    ///
    /// Callers hold an exclusive `file_guard` lock on it for as long as they
    /// read-modify-write the index.
    pub fn open_lock_file(&self) -> Result<std::fs::File> {
        let lock_path = self.lock_path();

        std::fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(IndexError::io("Unable to open index lock file", &lock_path))
    }

    #[cfg(test)]
    pub fn entry_by_path(&self, path: &Path) -> Option<&IndexEntry> {
        self.positions.get(path).map(|&slot| &self.entries[slot])
    }

    pub fn entries(&self) -> impl Iterator<Item = &IndexEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_changed(&self) -> bool {
        self.changed
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.positions.clear();
        self.changed = false;
    }

    /// Load the index from disk
    ///
    /// A missing or empty file yields an empty index. Any line that cannot be
    /// parsed fails the whole load: a partially trusted ledger is never used.
    pub fn rehydrate(&mut self) -> Result<()> {
        self.clear();

        let content = match std::fs::read(self.path()) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(IndexError::io("Unable to read index file", self.path())(e)),
        };

        let content = String::from_utf8(content).map_err(|e| {
            let valid = &e.as_bytes()[..e.utf8_error().valid_up_to()];
            self.corrupt(
                valid.iter().filter(|&&b| b == b'\n').count() + 1,
                EntryParseError::InvalidUtf8,
            )
        })?;

        for (line_number, line) in content.lines().enumerate() {
            let line_number = line_number + 1;
            let entry =
                IndexEntry::parse_line(line).map_err(|e| self.corrupt(line_number, e))?;

            if self.positions.contains_key(&entry.name) {
                return Err(self.corrupt(line_number, EntryParseError::DuplicatePath(entry.name)));
            }
            self.store_entry(entry);
        }

        tracing::debug!(path = %self.path.display(), entries = self.len(), "loaded index");

        Ok(())
    }

    fn corrupt(&self, line: usize, source: EntryParseError) -> IndexError {
        IndexError::Corrupt {
            path: self.path.to_path_buf(),
            line,
            source,
        }
    }

    fn store_entry(&mut self, entry: IndexEntry) {
        self.positions.insert(entry.name.clone(), self.entries.len());
        self.entries.push(entry);
    }

    /// Stage `name` at version `oid`
    ///
    /// Replaces the existing entry for `name` in place when its version differs,
    /// appends a new entry when `name` is not tracked yet and leaves the index
    /// untouched when the same version is already staged.
    pub fn upsert(
        &mut self,
        name: PathBuf,
        oid: ObjectId,
        mode: FileMode,
        entry_type: EntryType,
    ) -> Result<Upsert> {
        self.add(IndexEntry::new(name, oid, mode, entry_type))
    }

    pub fn add(&mut self, entry: IndexEntry) -> Result<Upsert> {
        if entry.to_line().is_none() {
            return Err(IndexError::InvalidPath(entry.name));
        }

        let outcome = match self.positions.get(&entry.name) {
            Some(&slot) if self.entries[slot].same_version(&entry) => Upsert::Unchanged,
            Some(&slot) => {
                self.entries[slot] = entry;
                Upsert::Updated
            }
            None => {
                self.store_entry(entry);
                Upsert::Added
            }
        };

        if outcome != Upsert::Unchanged {
            self.changed = true;
        }

        Ok(outcome)
    }

    /// Persist the index if it changed since it was loaded or last written
    pub fn write_updates(&mut self) -> Result<()> {
        if !self.is_changed() {
            return Ok(());
        }

        let temp_path = self.write_temp()?;
        self.replace_with(&temp_path)?;
        self.changed = false;

        tracing::debug!(path = %self.path.display(), entries = self.len(), "wrote index");

        Ok(())
    }

    /// Write the full ledger to a fresh temporary file next to the index
    fn write_temp(&self) -> Result<PathBuf> {
        let temp_path = self.path.with_file_name(Self::generate_temp_name());

        let written = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&temp_path)
            .and_then(|mut file| {
                let mut buffer = String::new();
                for entry in self.entries() {
                    // every entry went through `add` or `parse_line`, both of which
                    // reject names without a line representation
                    if let Some(line) = entry.to_line() {
                        buffer.push_str(&line);
                        buffer.push('\n');
                    }
                }

                file.write_all(buffer.as_bytes())?;
                file.sync_all()
            })
            .map_err(IndexError::io("Unable to write index file", &temp_path));

        match written {
            Ok(()) => Ok(temp_path),
            Err(e) => {
                let _ = std::fs::remove_file(&temp_path);
                Err(e)
            }
        }
    }

    /// Atomically move a fully written temporary file over the index
    fn replace_with(&self, temp_path: &Path) -> Result<()> {
        std::fs::rename(temp_path, self.path()).map_err(|e| {
            let _ = std::fs::remove_file(temp_path);
            IndexError::io("Unable to replace index file", self.path())(e)
        })
    }

    fn generate_temp_name() -> String {
        format!("index.tmp-{}", rand::random::<u32>())
    }
}
