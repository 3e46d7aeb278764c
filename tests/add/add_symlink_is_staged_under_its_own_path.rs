use crate::common::command::{blob_id, index_lines, init_repository_dir, run_ggit_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[cfg(unix)]
#[rstest]
fn add_symlink_is_staged_under_its_own_path(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = init_repository_dir.path();
    let outside = TempDir::new()?;
    write_file(FileSpec::new(root.join("a.txt"), "hello".to_string()));
    write_file(FileSpec::new(outside.path().join("o.txt"), "outside".to_string()));
    std::os::unix::fs::symlink("a.txt", root.join("link.txt"))?;
    std::os::unix::fs::symlink(outside.path().join("o.txt"), root.join("ext.txt"))?;

    run_ggit_command(root, &["add", "link.txt", "ext.txt"])
        .assert()
        .success();

    assert_eq!(
        index_lines(root),
        vec![
            format!("100644 {} 0 link.txt", blob_id("hello")),
            format!("100644 {} 0 ext.txt", blob_id("outside")),
        ]
    );

    Ok(())
}
