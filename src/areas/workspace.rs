use crate::areas::repository::{INIT_STAGING_PREFIX, METADATA_DIR};
use crate::artifacts::index::entry_mode::FileMode;
use crate::artifacts::objects::blob::Blob;
use anyhow::Context;
use bytes::Bytes;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

const IGNORED_PATHS: [&str; 3] = [METADATA_DIR, ".", ".."];

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Expand a path to the repository-relative files it designates
    ///
    /// A file yields itself, a directory yields every file beneath it in name
    /// order. A symlink is listed under its own name, never under its target's.
    /// Anything under the metadata directory is skipped. Fails when the path
    /// lies outside the workspace.
    pub fn list_files(&self, root_file_path: &Path) -> anyhow::Result<Vec<PathBuf>> {
        let root_file_path = Self::absolute_path(root_file_path)?;

        if !root_file_path.starts_with(&self.path) {
            anyhow::bail!(
                "{:?} is outside repository at {:?}",
                root_file_path,
                self.path
            );
        }

        let metadata = std::fs::symlink_metadata(&root_file_path)
            .with_context(|| format!("The specified path does not exist: {:?}", root_file_path))?;

        if metadata.is_dir() {
            Ok(WalkDir::new(&root_file_path)
                .sort_by_file_name()
                .into_iter()
                .filter_entry(|entry| {
                    !Self::is_ignored_name(&entry.file_name().to_string_lossy())
                })
                .filter_map(|entry| entry.ok())
                .filter(|entry| {
                    // links to directories and dangling links have no content to stage
                    entry.file_type().is_file()
                        || (entry.path_is_symlink() && entry.path().is_file())
                })
                .filter_map(|entry| self.relative_path(entry.path()))
                .collect::<Vec<_>>())
        } else {
            Ok(self
                .relative_path(&root_file_path)
                .into_iter()
                .collect::<Vec<_>>())
        }
    }

    /// Make `path` absolute, resolving every component but the last
    fn absolute_path(path: &Path) -> anyhow::Result<PathBuf> {
        let path = std::path::absolute(path)
            .with_context(|| format!("Unable to resolve path {:?}", path))?;

        let resolved = match (path.parent(), path.file_name()) {
            (Some(parent), Some(name)) => parent.canonicalize().map(|parent| parent.join(name)),
            _ => path.canonicalize(),
        };

        resolved.with_context(|| format!("The specified path does not exist: {:?}", path))
    }

    fn is_ignored_name(name: &str) -> bool {
        IGNORED_PATHS.contains(&name) || name.starts_with(INIT_STAGING_PREFIX)
    }

    fn is_ignored(path: &Path) -> bool {
        // Check if any component of the path is in IGNORED_PATHS
        path.components().any(|component| {
            if let Component::Normal(name) = component {
                Self::is_ignored_name(&name.to_string_lossy())
            } else {
                false
            }
        })
    }

    /// Strip the workspace prefix, rejecting the workspace root itself and ignored paths
    fn relative_path(&self, path: &Path) -> Option<PathBuf> {
        let relative = path.strip_prefix(self.path.as_ref()).ok()?;

        if relative.as_os_str().is_empty() || Self::is_ignored(relative) {
            None
        } else {
            Some(relative.to_path_buf())
        }
    }

    pub fn read_file(&self, file_path: &Path) -> anyhow::Result<Bytes> {
        let file_path = self.path.join(file_path);

        let content = std::fs::read(&file_path)
            .with_context(|| format!("Unable to read file {:?}", file_path))?;

        Ok(Bytes::from(content))
    }

    pub fn file_mode(&self, file_path: &Path) -> FileMode {
        FileMode::of(&self.path.join(file_path))
    }

    pub fn parse_blob(&self, file_path: &Path) -> anyhow::Result<Blob> {
        let data = self.read_file(file_path)?;
        Ok(Blob::new(data, self.file_mode(file_path)))
    }
}
