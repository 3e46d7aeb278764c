//! Plumbing commands (low-level object access)
//!
//! ## Commands
//!
//! - `hash-object`: Compute an object id and optionally store the blob
//! - `cat-file`: Print the raw content of a stored object

pub mod cat_file;
pub mod hash_object;
