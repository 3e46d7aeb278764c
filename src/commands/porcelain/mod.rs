//! Porcelain commands (user-facing operations)
//!
//! ## Commands
//!
//! - `init`: Initialize a new repository
//! - `add`: Stage files for commit
//! - `status`: Show the current branch and staged files

pub mod add;
pub mod init;
pub mod status;
