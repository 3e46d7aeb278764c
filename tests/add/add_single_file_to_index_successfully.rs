use crate::common::command::{
    blob_id, index_lines, init_repository_dir, object_count, object_path, run_ggit_command,
};
use crate::common::file::random_content;
use assert_fs::TempDir;
use assert_fs::fixture::{FileWriteStr, PathChild};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case::known_content("hello".to_string())]
#[case::random_content(random_content())]
fn add_single_file_to_index_successfully(
    init_repository_dir: TempDir,
    #[case] content: String,
) -> Result<(), Box<dyn std::error::Error>> {
    init_repository_dir.child("a.txt").write_str(&content)?;

    run_ggit_command(init_repository_dir.path(), &["add", "a.txt"])
        .assert()
        .success()
        .stdout("");

    let oid = blob_id(&content);
    assert_eq!(
        index_lines(init_repository_dir.path()),
        vec![format!("100644 {oid} 0 a.txt")]
    );
    assert_eq!(object_count(init_repository_dir.path()), 1);
    assert_eq!(
        std::fs::read_to_string(object_path(init_repository_dir.path(), &oid))?,
        content
    );

    Ok(())
}

#[rstest]
fn hello_is_stored_under_its_git_blob_id(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    init_repository_dir.child("a.txt").write_str("hello")?;

    run_ggit_command(init_repository_dir.path(), &["add", "a.txt"])
        .assert()
        .success();

    assert!(
        object_path(
            init_repository_dir.path(),
            "b6fc4c620b67d95f953a5c1c1230aaab5db5a1b0"
        )
        .is_file()
    );

    Ok(())
}

#[cfg(unix)]
#[rstest]
fn executable_file_is_staged_with_executable_mode(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    use std::os::unix::fs::PermissionsExt;

    let script = init_repository_dir.child("run.sh");
    script.write_str("#!/bin/sh\necho hi\n")?;
    std::fs::set_permissions(script.path(), std::fs::Permissions::from_mode(0o755))?;

    run_ggit_command(init_repository_dir.path(), &["add", "run.sh"])
        .assert()
        .success();

    assert_eq!(
        index_lines(init_repository_dir.path()),
        vec![format!(
            "100755 {} 0 run.sh",
            blob_id("#!/bin/sh\necho hi\n")
        )]
    );

    Ok(())
}
