use crate::common::command::{blob_id, index_lines, init_repository_dir, run_ggit_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn add_directory_expands_to_nested_files(init_repository_dir: TempDir) {
    let root = init_repository_dir.path();
    write_file(FileSpec::new(root.join("1.txt"), "one".to_string()));
    write_file(FileSpec::new(root.join("a").join("2.txt"), "two".to_string()));
    write_file(FileSpec::new(
        root.join("a").join("b").join("3.txt"),
        "three".to_string(),
    ));

    run_ggit_command(root, &["add", "."]).assert().success();

    assert_eq!(
        index_lines(root),
        vec![
            format!("100644 {} 0 1.txt", blob_id("one")),
            format!("100644 {} 0 a/2.txt", blob_id("two")),
            format!("100644 {} 0 a/b/3.txt", blob_id("three")),
        ]
    );
}

#[rstest]
fn add_subdirectory_stages_only_its_files(init_repository_dir: TempDir) {
    let root = init_repository_dir.path();
    write_file(FileSpec::new(root.join("1.txt"), "one".to_string()));
    write_file(FileSpec::new(root.join("a").join("2.txt"), "two".to_string()));

    run_ggit_command(root, &["add", "a"]).assert().success();

    assert_eq!(
        index_lines(root),
        vec![format!("100644 {} 0 a/2.txt", blob_id("two"))]
    );
}

#[rstest]
fn add_directory_skips_interrupted_init_leftovers(init_repository_dir: TempDir) {
    let root = init_repository_dir.path();
    write_file(FileSpec::new(root.join("1.txt"), "one".to_string()));
    write_file(FileSpec::new(
        root.join(".ggit-init-42").join("HEAD"),
        "ref: refs/heads/master\n".to_string(),
    ));

    run_ggit_command(root, &["add", "."]).assert().success();

    assert_eq!(
        index_lines(root),
        vec![format!("100644 {} 0 1.txt", blob_id("one"))]
    );
}

#[rstest]
fn add_metadata_path_is_reported_as_skipped(init_repository_dir: TempDir) {
    let root = init_repository_dir.path();

    run_ggit_command(root, &["add", ".ggit/HEAD"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("did not match any files"));

    assert!(index_lines(root).is_empty());
}
