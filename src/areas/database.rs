//! Object database
//!
//! Content-addressed storage for blobs. Each record holds the raw content bytes
//! at `objects/<first-2-hex>/<remaining-38-hex>`. Records are written once and
//! never overwritten: a write to an id that is already present is a no-op.

use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object::{Object, hash};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use bytes::Bytes;
use fake::rand;
use std::io::Write;
use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors raised by the object database
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("object {0} not found")]
    NotFound(ObjectId),

    #[error("object {expected} failed integrity check: stored bytes hash to {actual}")]
    Integrity { expected: ObjectId, actual: ObjectId },

    #[error("{message} {}", .path.display())]
    Io {
        message: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    fn io(message: &'static str, path: &Path) -> impl FnOnce(std::io::Error) -> StoreError {
        let path = path.to_path_buf();
        move |source| StoreError::Io {
            message,
            path,
            source,
        }
    }
}

#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    /// Check whether a record exists for the given id
    pub fn exists(&self, object_id: &ObjectId) -> bool {
        self.path.join(object_id.to_path()).is_file()
    }

    /// Hash and store a blob, returning its id
    pub fn store(&self, blob: &Blob) -> Result<ObjectId> {
        let object_id = blob.object_id();
        self.put(&object_id, blob.content())?;

        Ok(object_id)
    }

    /// Store `content` under `object_id` unless a record is already present
    ///
    /// The content is written to a temporary file in the shard directory, checked
    /// against `object_id` and then renamed into place, so readers never see a
    /// partially written record.
    pub fn put(&self, object_id: &ObjectId, content: &[u8]) -> Result<()> {
        let object_path = self.path.join(object_id.to_path());

        if object_path.exists() {
            tracing::debug!(oid = %object_id, "object already stored");
            return Ok(());
        }

        let object_dir = object_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.path.to_path_buf());
        std::fs::create_dir_all(&object_dir)
            .map_err(StoreError::io("Unable to create object directory", &object_dir))?;

        let temp_object_path = object_dir.join(Self::generate_temp_name());
        let written = self
            .write_temp_object(&temp_object_path, content)
            .and_then(|_| Self::verify_object(&temp_object_path, object_id))
            .and_then(|_| {
                // rename the temp file to the object file to make it atomic
                std::fs::rename(&temp_object_path, &object_path)
                    .map_err(StoreError::io("Unable to rename object file to", &object_path))
            });

        if written.is_err() {
            let _ = std::fs::remove_file(&temp_object_path);
        } else {
            tracing::debug!(oid = %object_id, size = content.len(), "stored object");
        }

        written
    }

    /// Read back the content stored under `object_id`
    pub fn get(&self, object_id: &ObjectId) -> Result<Bytes> {
        let object_path = self.path.join(object_id.to_path());

        match std::fs::read(&object_path) {
            Ok(content) => Ok(Bytes::from(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StoreError::NotFound(object_id.clone()))
            }
            Err(e) => Err(StoreError::io("Unable to read object file", &object_path)(e)),
        }
    }

    fn write_temp_object(&self, temp_object_path: &Path, content: &[u8]) -> Result<()> {
        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(temp_object_path)
            .map_err(StoreError::io("Unable to open object file", temp_object_path))?;

        file.write_all(content)
            .and_then(|_| file.sync_all())
            .map_err(StoreError::io("Unable to write object file", temp_object_path))
    }

    fn verify_object(temp_object_path: &Path, object_id: &ObjectId) -> Result<()> {
        let written = std::fs::read(temp_object_path)
            .map_err(StoreError::io("Unable to read back object file", temp_object_path))?;
        let actual = hash(ObjectType::Blob, &written);

        if &actual != object_id {
            return Err(StoreError::Integrity {
                expected: object_id.clone(),
                actual,
            });
        }

        Ok(())
    }

    fn generate_temp_name() -> String {
        format!("tmp-obj-{}", rand::random::<u32>())
    }

    /// Find all objects whose OID starts with the given prefix.
    ///
    /// Used to resolve abbreviated OIDs to their full form. If multiple matches are
    /// found, all are returned (indicating an ambiguous prefix).
    pub fn find_objects_by_prefix(&self, prefix: &str) -> Result<Vec<ObjectId>> {
        let prefix = prefix.to_ascii_lowercase();
        let mut matches = Vec::new();

        if !prefix.chars().all(|c| c.is_ascii_hexdigit()) {
            return Ok(matches);
        }

        // A prefix of 2+ chars pins the shard directory, otherwise every shard is scanned
        let shards = if prefix.len() >= 2 {
            vec![prefix[..2].to_string()]
        } else {
            (0..=255).map(|i| format!("{:02x}", i)).collect()
        };

        for dir_name in shards {
            let dir_path = self.path.join(&dir_name);
            if !dir_path.is_dir() {
                continue;
            }

            let entries = std::fs::read_dir(&dir_path)
                .map_err(StoreError::io("Unable to list object directory", &dir_path))?;
            for entry in entries {
                let entry =
                    entry.map_err(StoreError::io("Unable to list object directory", &dir_path))?;
                let full_oid = format!("{}{}", dir_name, entry.file_name().to_string_lossy());

                if full_oid.starts_with(&prefix)
                    && let Ok(oid) = ObjectId::try_parse(full_oid)
                {
                    matches.push(oid);
                }
            }
        }

        matches.sort();
        Ok(matches)
    }
}
