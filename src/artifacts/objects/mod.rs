//! Object types and content hashing
//!
//! Every piece of content is identified by the SHA-1 hash of its typed payload:
//! `<type> <size>\0<content>`. Only blobs are produced today; trees and commits
//! exist as kinds so that identifiers stay compatible once they are built.

pub mod blob;
pub mod object;
pub mod object_id;
pub mod object_type;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;
