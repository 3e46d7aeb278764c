//! Command implementations
//!
//! Each command is an `impl Repository` block, split following Git's architecture:
//!
//! - `plumbing`: Low-level commands for direct object access (hash-object, cat-file)
//! - `porcelain`: User-facing commands (init, add, status)

pub mod plumbing;
pub mod porcelain;
