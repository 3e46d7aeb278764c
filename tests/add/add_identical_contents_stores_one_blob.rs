use crate::common::command::{
    blob_id, index_lines, init_repository_dir, object_count, run_ggit_command,
};
use crate::common::file::random_content;
use assert_fs::TempDir;
use assert_fs::fixture::{FileWriteStr, PathChild};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn add_identical_contents_stores_one_blob(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = random_content();
    init_repository_dir.child("alice.txt").write_str(&content)?;
    init_repository_dir.child("bob.txt").write_str(&content)?;

    run_ggit_command(init_repository_dir.path(), &["add", "alice.txt", "bob.txt"])
        .assert()
        .success();

    let oid = blob_id(&content);
    assert_eq!(object_count(init_repository_dir.path()), 1);
    assert_eq!(
        index_lines(init_repository_dir.path()),
        vec![
            format!("100644 {oid} 0 alice.txt"),
            format!("100644 {oid} 0 bob.txt"),
        ]
    );

    Ok(())
}
