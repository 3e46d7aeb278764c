use crate::areas::refs::Refs;
use crate::areas::repository::{INIT_STAGING_PREFIX, Repository};
use anyhow::Context;
use fake::rand;
use std::fs;
use std::path::Path;

const DEFAULT_BRANCH: &str = "master";

impl Repository {
    /// Create the metadata directory, or report that it already exists
    ///
    /// The skeleton is assembled in a sibling temp directory and renamed into
    /// place, so an interrupted init never leaves a half-built `.ggit` behind.
    pub fn init(&mut self) -> anyhow::Result<()> {
        let git_path = self.git_path();

        if git_path.exists() {
            writeln!(
                self.writer(),
                "Reinitialized existing Git repository in {}",
                git_path.display()
            )?;
            return Ok(());
        }

        let staging_path = self
            .path()
            .join(format!("{}{}", INIT_STAGING_PREFIX, rand::random::<u32>()));

        let created = Self::build_skeleton(&staging_path).and_then(|_| {
            fs::rename(&staging_path, &git_path)
                .with_context(|| format!("Failed to move repository skeleton to {:?}", git_path))
        });
        if let Err(e) = created {
            let _ = fs::remove_dir_all(&staging_path);
            return Err(e);
        }

        tracing::info!(path = %git_path.display(), "initialized repository");
        writeln!(
            self.writer(),
            "Initialized empty Git repository in {}",
            git_path.display()
        )?;

        Ok(())
    }

    fn build_skeleton(path: &Path) -> anyhow::Result<()> {
        fs::create_dir(path)
            .with_context(|| format!("Failed to create repository skeleton at {:?}", path))?;

        let refs = Refs::new(path.to_path_buf().into_boxed_path());

        fs::create_dir_all(path.join("objects")).context("Failed to create objects directory")?;
        fs::create_dir_all(refs.heads_path()).context("Failed to create refs/heads directory")?;
        fs::create_dir_all(refs.tags_path()).context("Failed to create refs/tags directory")?;
        fs::write(path.join("config"), b"").context("Failed to create config file")?;

        refs.set_head(DEFAULT_BRANCH)
            .context("Failed to create initial HEAD reference")
    }
}
