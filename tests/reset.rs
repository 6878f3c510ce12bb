use crate::common::command::{
    init_repository_dir, log_commit_ids, log_messages, run_twig_command, twig_add,
    twig_commit_files, twig_output,
};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

mod common;

#[rstest]
fn reset_moves_branch_and_working_tree(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let first = log_commit_ids(dir)[0].clone();

    twig_commit_files(dir, &[("a.txt", "one, revised"), ("c.txt", "three")], "second");
    write_file(FileSpec::new(dir.join("d.txt"), "four".to_string()));
    twig_add(dir, &["d.txt"]);

    run_twig_command(dir, &["reset", &first])
        .assert()
        .success()
        .stdout("");

    assert_eq!(log_messages(dir), vec!["first", "initial commit"]);
    assert_eq!(read_file(&dir.join("a.txt")), "one");
    assert!(!dir.join("c.txt").exists());

    let status = twig_output(dir, &["status"]);
    assert!(status.contains("=== Staged Files ===\n\n"));
    assert!(status.contains("=== Untracked Files ===\nd.txt\n"));

    let second = twig_output(dir, &["find", "second"]);
    assert_eq!(second.lines().count(), 1);

    Ok(())
}

#[rstest]
fn reset_to_unknown_commit_is_refused(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_twig_command(init_repository_dir.path(), &["reset", "0000000000"])
        .assert()
        .success()
        .stdout("No commit with that id exists.\n");

    Ok(())
}
