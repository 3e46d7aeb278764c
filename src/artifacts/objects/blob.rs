//! Blob object
//!
//! Blobs store file content. They contain only the raw file data,
//! without any metadata like filename or permissions (those live in the index).
//!
//! ## Format
//!
//! Hashed as: `blob <size>\0<content>`
//! Stored as: the raw content bytes

use crate::artifacts::index::entry_mode::FileMode;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_type::ObjectType;
use bytes::Bytes;
use derive_new::new;

/// Blob object representing file content
///
/// Each unique file content is stored once as a blob, identified by its SHA-1 hash.
#[derive(Debug, Clone, new)]
pub struct Blob {
    /// Raw file content
    content: Bytes,
    /// File mode (permissions) of the file the content was read from
    stat: FileMode,
}

impl Blob {
    pub fn mode(&self) -> &FileMode {
        &self.stat
    }
}

impl From<Bytes> for Blob {
    fn from(content: Bytes) -> Self {
        Blob::new(content, FileMode::default())
    }
}

impl Object for Blob {
    fn object_type(&self) -> ObjectType {
        ObjectType::Blob
    }

    fn content(&self) -> &[u8] {
        &self.content
    }
}
