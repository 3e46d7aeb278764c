use crate::areas::repository::Repository;
use colored::Colorize;

impl Repository {
    /// Print the current branch and the staged paths
    ///
    /// There is no commit history yet, so every staged path is a new file.
    pub async fn status(&mut self) -> anyhow::Result<()> {
        let index = self.index();
        let mut index = index.lock().await;
        index.rehydrate()?;

        match self.refs().current_branch()? {
            Some(branch) => writeln!(self.writer(), "On branch {branch}")?,
            None => writeln!(self.writer(), "Not currently on any branch.")?,
        }
        writeln!(self.writer())?;
        writeln!(self.writer(), "No commits yet")?;

        if index.is_empty() {
            writeln!(self.writer())?;
            writeln!(
                self.writer(),
                "nothing to commit (create/copy files and use \"ggit add\" to track)"
            )?;
            return Ok(());
        }

        writeln!(self.writer())?;
        writeln!(self.writer(), "Changes to be committed:")?;
        for entry in index.entries() {
            let line = format!("new file:   {}", entry.path().display());
            writeln!(self.writer(), "\t{}", line.green())?;
        }

        Ok(())
    }
}
