//! Git data structures
//!
//! - `index`: Index entries and their line format
//! - `objects`: Object types, identifiers and hashing

pub mod index;
pub mod objects;
