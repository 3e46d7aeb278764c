use is_executable::IsExecutable;
use std::path::Path;

#[derive(Debug, Clone, Copy, Eq, Ord, Default, PartialEq, PartialOrd)]
pub enum FileMode {
    #[default]
    Regular,
    Executable,
}

impl FileMode {
    /// Detect the mode of a file in the working tree
    pub fn of(path: &Path) -> Self {
        match path.is_executable() {
            true => FileMode::Executable,
            false => FileMode::Regular,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            FileMode::Regular => "100644",
            FileMode::Executable => "100755",
        }
    }
}

impl TryFrom<&str> for FileMode {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> anyhow::Result<Self> {
        match value {
            "100644" => Ok(FileMode::Regular),
            "100755" => Ok(FileMode::Executable),
            _ => Err(anyhow::anyhow!("Invalid file mode")),
        }
    }
}

impl std::fmt::Display for FileMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
