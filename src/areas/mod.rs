//! Core repository components
//!
//! This module contains the fundamental building blocks of a repository:
//!
//! - `database`: Content-addressed object store for blobs
//! - `index`: Staging area tracking which file versions go into the next commit
//! - `refs`: Reference management (HEAD, branch skeleton)
//! - `repository`: Repository discovery and coordination of the other areas
//! - `workspace`: Working directory file system operations

pub mod database;
pub mod index;
pub mod refs;
pub mod repository;
pub mod workspace;
