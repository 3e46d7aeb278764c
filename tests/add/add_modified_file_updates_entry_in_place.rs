use crate::common::command::{
    blob_id, index_lines, init_repository_dir, object_count, run_ggit_command,
};
use assert_fs::TempDir;
use assert_fs::fixture::{FileWriteStr, PathChild};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn add_modified_file_updates_entry_in_place(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let first = init_repository_dir.child("first.txt");
    let second = init_repository_dir.child("second.txt");
    first.write_str("one")?;
    second.write_str("two")?;

    run_ggit_command(init_repository_dir.path(), &["add", "first.txt", "second.txt"])
        .assert()
        .success();

    first.write_str("one, revised")?;
    run_ggit_command(init_repository_dir.path(), &["add", "first.txt"])
        .assert()
        .success();

    assert_eq!(
        index_lines(init_repository_dir.path()),
        vec![
            format!("100644 {} 0 first.txt", blob_id("one, revised")),
            format!("100644 {} 0 second.txt", blob_id("two")),
        ]
    );
    // the superseded blob stays in the store
    assert_eq!(object_count(init_repository_dir.path()), 3);

    Ok(())
}

#[rstest]
fn paths_with_spaces_round_trip(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = init_repository_dir.child("my notes.txt");
    file.write_str("draft")?;

    run_ggit_command(init_repository_dir.path(), &["add", "my notes.txt"])
        .assert()
        .success();
    file.write_str("final")?;
    run_ggit_command(init_repository_dir.path(), &["add", "my notes.txt"])
        .assert()
        .success();

    assert_eq!(
        index_lines(init_repository_dir.path()),
        vec![format!("100644 {} 0 my notes.txt", blob_id("final"))]
    );

    Ok(())
}
