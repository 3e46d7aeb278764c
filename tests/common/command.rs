use crate::common::redirect_temp_dir;
use assert_cmd::Command;
use assert_fs::TempDir;
use ggit::artifacts::objects::object::hash;
use ggit::artifacts::objects::object_type::ObjectType;
use rstest::fixture;
use std::path::{Path, PathBuf};

#[fixture]
pub fn repository_dir() -> TempDir {
    redirect_temp_dir();
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_ggit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    repository_dir
}

pub fn run_ggit_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("ggit").expect("Failed to find ggit binary");
    cmd.env_remove("GGIT_LOG");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn git_dir(dir: &Path) -> PathBuf {
    dir.join(".ggit")
}

pub fn read_index(dir: &Path) -> Vec<u8> {
    std::fs::read(git_dir(dir).join("index")).unwrap_or_default()
}

pub fn index_lines(dir: &Path) -> Vec<String> {
    String::from_utf8(read_index(dir))
        .expect("Index should be valid UTF-8")
        .lines()
        .map(String::from)
        .collect()
}

pub fn blob_id(content: &str) -> String {
    hash(ObjectType::Blob, content.as_bytes()).to_string()
}

pub fn object_path(dir: &Path, oid: &str) -> PathBuf {
    git_dir(dir).join("objects").join(&oid[..2]).join(&oid[2..])
}

pub fn object_count(dir: &Path) -> usize {
    walkdir::WalkDir::new(git_dir(dir).join("objects"))
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .count()
}
