use derive_new::new;
use fake::Fake;
use fake::faker::lorem::en::{Word, Words};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct FileSpec {
    pub path: PathBuf,
    pub content: String,
}

pub fn write_file(file: FileSpec) {
    if let Some(parent) = file.path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }

    std::fs::write(&file.path, &file.content).expect("Failed to write file");
}

pub fn random_content() -> String {
    Words(5..10).fake::<Vec<String>>().join(" ")
}

/// Write `files_count` files with random content named `<index>-<word>.txt`
pub fn write_generated_files(dir: &Path, files_count: usize) -> Vec<FileSpec> {
    (0..files_count)
        .map(|index| {
            let file_name = format!("{index}-{}.txt", Word().fake::<String>());
            let file = FileSpec::new(dir.join(file_name), random_content());
            write_file(file.clone());
            file
        })
        .collect()
}
