use crate::areas::index::{Index, Upsert};
use crate::areas::repository::Repository;
use crate::artifacts::index::index_entry::EntryType;
use crate::artifacts::objects::object::Object;
use anyhow::Context;
use std::path::{Path, PathBuf};

/// What happened to each path handed to `add`
#[derive(Debug, Default)]
pub struct AddReport {
    /// Files processed, with what staging them did to the index
    pub staged: Vec<(PathBuf, Upsert)>,
    /// Paths that do not exist
    pub missing: Vec<PathBuf>,
    /// Paths that exist but designate no file to stage
    pub skipped: Vec<PathBuf>,
    /// Paths that could not be staged, with the reason
    pub failed: Vec<(PathBuf, anyhow::Error)>,
}

impl AddReport {
    /// An invocation succeeds when nothing failed and at least one path was staged,
    /// unless every path was accounted for without staging anything
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
            && (!self.staged.is_empty() || (self.missing.is_empty() && self.skipped.is_empty()))
    }
}

impl Repository {
    /// Stage files for the next commit
    ///
    /// Each file is its own unit of work: its blob is stored and the index is
    /// persisted before the next file is looked at, so a failure never undoes
    /// files staged earlier. Missing paths and unreadable files are reported
    /// and skipped; a corrupt or unwritable index aborts the whole call.
    pub async fn add(&mut self, paths: &[PathBuf]) -> anyhow::Result<AddReport> {
        let index = self.index();
        let mut index = index.lock().await;

        // serialize read-modify-write cycles across concurrent processes
        let mut lock_file = index.open_lock_file()?;
        let _lock = file_guard::lock(&mut lock_file, file_guard::Lock::Exclusive, 0, 1)
            .context("Unable to lock the index")?;

        index.rehydrate()?;

        let mut report = AddReport::default();

        for path in paths {
            // a dangling symlink still names a working-tree entry
            if std::fs::symlink_metadata(path).is_err() {
                tracing::debug!(path = %path.display(), "path does not exist");
                eprintln!("warning: path '{}' does not exist", path.display());
                report.missing.push(path.clone());
                continue;
            }

            let files = match self.workspace().list_files(path) {
                Ok(files) if files.is_empty() => {
                    tracing::debug!(path = %path.display(), "path matched no files");
                    eprintln!("warning: path '{}' did not match any files", path.display());
                    report.skipped.push(path.clone());
                    continue;
                }
                Ok(files) => files,
                Err(e) => {
                    Self::report_failure(path, e, &mut report);
                    continue;
                }
            };

            for file in files {
                match self.stage_file(&mut index, &file) {
                    Ok(outcome) => {
                        tracing::info!(path = %file.display(), ?outcome, "staged file");
                        report.staged.push((file, outcome));
                    }
                    Err(e) => Self::report_failure(&file, e, &mut report),
                }

                index.write_updates()?;
            }
        }

        Ok(report)
    }

    fn stage_file(&self, index: &mut Index, file: &Path) -> anyhow::Result<Upsert> {
        let blob = self.workspace().parse_blob(file)?;
        let blob_id = blob.object_id();

        if self.database().exists(&blob_id) {
            tracing::debug!(oid = %blob_id, path = %file.display(), "content already stored");
        } else {
            self.database().put(&blob_id, blob.content())?;
        }

        Ok(index.upsert(
            file.to_path_buf(),
            blob_id,
            *blob.mode(),
            EntryType::REGULAR,
        )?)
    }

    fn report_failure(path: &Path, error: anyhow::Error, report: &mut AddReport) {
        tracing::debug!(path = %path.display(), error = %error, "unable to stage path");
        eprintln!("error: {}: {:#}", path.display(), error);
        report.failed.push((path.to_path_buf(), error));
    }
}
