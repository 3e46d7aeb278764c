use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::refs::Refs;
use crate::areas::workspace::Workspace;
use std::cell::{RefCell, RefMut};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Name of the metadata directory at the root of every repository
pub const METADATA_DIR: &str = ".ggit";

/// Prefix of the sibling directory `init` assembles the metadata skeleton in
pub const INIT_STAGING_PREFIX: &str = ".ggit-init-";

/// Raised when no ancestor of the start directory holds a metadata directory
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("not a ggit repository (or any of the parent directories): {}", .start.display())]
    NotARepository { start: PathBuf },

    #[error("unable to resolve {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Walk `start` and its ancestors until one contains the metadata directory
///
/// Returns the workspace root, i.e. the directory holding `.ggit`.
pub fn resolve_root(start: &Path) -> Result<PathBuf, RepositoryError> {
    let start = start
        .canonicalize()
        .map_err(|source| RepositoryError::Io {
            path: start.to_path_buf(),
            source,
        })?;

    let root = start
        .ancestors()
        .find(|dir| dir.join(METADATA_DIR).is_dir())
        .map(Path::to_path_buf)
        .ok_or_else(|| RepositoryError::NotARepository {
            start: start.clone(),
        })?;

    tracing::debug!(start = %start.display(), root = %root.display(), "resolved repository root");

    Ok(root)
}

pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    index: Arc<Mutex<Index>>,
    database: Database,
    workspace: Workspace,
    refs: Refs,
}

impl Repository {
    /// Open the repository rooted at `path`, creating the directory if needed
    ///
    /// No metadata directory is required: this is the entry point for `init`.
    pub fn new(path: &Path, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        if !path.exists() {
            std::fs::create_dir_all(path)?;
        }
        let path = path.canonicalize()?;
        let git_path = path.join(METADATA_DIR);

        let index = Index::new(git_path.join("index").into_boxed_path());
        let database = Database::new(git_path.join("objects").into_boxed_path());
        let workspace = Workspace::new(path.clone().into_boxed_path());
        let refs = Refs::new(git_path.into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            index: Arc::new(Mutex::new(index)),
            database,
            workspace,
            refs,
        })
    }

    /// Open the repository enclosing `start`
    pub fn discover(start: &Path, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let root = resolve_root(start)?;

        Repository::new(&root, writer)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn git_path(&self) -> PathBuf {
        self.path.join(METADATA_DIR)
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn index(&self) -> Arc<Mutex<Index>> {
        self.index.clone()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }
}
