//! References (HEAD, branches, tags)
//!
//! Only the symbolic `HEAD` reference is interpreted: it names the current branch
//! as `ref: refs/heads/<branch>`. Branch and tag directories are created as an
//! empty skeleton and left for future use.

use anyhow::Context;
use derive_new::new;
use std::path::Path;

/// Regex pattern for parsing a symbolic reference to a branch
const SYMREF_REGEX: &str = r"^ref: refs/heads/(.+)$";

/// Name of the HEAD reference
pub const HEAD_REF_NAME: &str = "HEAD";

/// References manager
#[derive(Debug, new)]
pub struct Refs {
    /// Path to the metadata root (typically `.ggit`)
    path: Box<Path>,
}

impl Refs {
    /// Name of the branch HEAD points to
    ///
    /// Returns `None` when HEAD is missing, empty or not a symbolic reference
    /// to a branch.
    pub fn current_branch(&self) -> anyhow::Result<Option<String>> {
        let head_path = self.head_path();
        if !head_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&head_path)
            .with_context(|| format!("failed to read HEAD at {:?}", head_path))?;

        Self::parse_symref(&content)
    }

    fn parse_symref(content: &str) -> anyhow::Result<Option<String>> {
        let symref_regex = regex::Regex::new(SYMREF_REGEX)?;

        Ok(content
            .lines()
            .find_map(|line| symref_regex.captures(line.trim_end()))
            .map(|captures| captures[1].to_string()))
    }

    /// Point HEAD at `refs/heads/<branch>`
    pub fn set_head(&self, branch: &str) -> anyhow::Result<()> {
        let head_path = self.head_path();

        std::fs::write(&head_path, format!("ref: refs/heads/{branch}\n"))
            .with_context(|| format!("failed to write HEAD at {:?}", head_path))
    }

    pub fn head_path(&self) -> Box<Path> {
        self.path.join(HEAD_REF_NAME).into_boxed_path()
    }

    pub fn refs_path(&self) -> Box<Path> {
        self.path.join("refs").into_boxed_path()
    }

    pub fn heads_path(&self) -> Box<Path> {
        self.refs_path().join("heads").into_boxed_path()
    }

    pub fn tags_path(&self) -> Box<Path> {
        self.refs_path().join("tags").into_boxed_path()
    }
}
