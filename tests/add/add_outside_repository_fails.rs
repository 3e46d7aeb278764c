use crate::common::command::{index_lines, init_repository_dir, run_ggit_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn add_path_outside_workspace_is_a_per_file_error(init_repository_dir: TempDir) {
    let project = init_repository_dir.path().join("project");
    run_ggit_command(init_repository_dir.path(), &["init", "project"])
        .assert()
        .success();
    write_file(FileSpec::new(
        init_repository_dir.path().join("outer.txt"),
        "outer".to_string(),
    ));
    write_file(FileSpec::new(project.join("inner.txt"), "inner".to_string()));

    run_ggit_command(&project, &["add", "../outer.txt", "inner.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("outside repository"))
        .stderr(predicate::str::contains("failed to add 1 path(s)"));

    // the valid path is still staged
    assert_eq!(index_lines(&project).len(), 1);
    assert!(index_lines(init_repository_dir.path()).is_empty());
}
