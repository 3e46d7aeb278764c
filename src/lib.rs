//! A minimal Git-like version control core
//!
//! - `areas`: the on-disk areas of a repository (object database, index, refs, workspace)
//! - `artifacts`: the values stored in those areas (objects, index entries)
//! - `commands`: command implementations as `impl Repository` blocks

pub mod areas;
pub mod artifacts;
pub mod commands;
