use crate::common::command::{
    init_repository_dir, log_commit_ids, run_twig_command, twig_add, twig_commit_files,
    twig_output,
};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

mod common;

#[rstest]
fn checkout_file_restores_head_version_without_staging(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("a.txt"), "edited".to_string()));
    twig_add(dir, &["a.txt"]);

    run_twig_command(dir, &["checkout", "--", "a.txt"])
        .assert()
        .success()
        .stdout("");

    assert_eq!(read_file(&dir.join("a.txt")), "one");
    let status = twig_output(dir, &["status"]);
    assert!(status.contains("=== Staged Files ===\na.txt\n"));

    Ok(())
}

#[rstest]
fn checkout_file_from_abbreviated_commit(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    twig_commit_files(dir, &[("a.txt", "one, revised")], "revise a");

    let first = log_commit_ids(dir)[1].clone();
    run_twig_command(dir, &["checkout", &first[..6], "--", "a.txt"])
        .assert()
        .success()
        .stdout("");

    assert_eq!(read_file(&dir.join("a.txt")), "one");

    Ok(())
}

#[rstest]
#[case::unknown_commit(&["checkout", "f00ba4", "--", "a.txt"], "No commit with that id exists.\n")]
#[case::file_not_in_commit(&["checkout", "--", "ghost.txt"], "File does not exist in that commit.\n")]
#[case::unknown_branch(&["checkout", "nowhere"], "No such branch exists.\n")]
#[case::current_branch(&["checkout", "master"], "No need to checkout the current branch.\n")]
fn checkout_failures_are_reported(
    init_repository_dir: TempDir,
    #[case] args: &[&str],
    #[case] message: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    run_twig_command(init_repository_dir.path(), args)
        .assert()
        .success()
        .stdout(message.to_string());

    Ok(())
}

#[rstest]
fn checkout_branch_replaces_the_working_tree(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    run_twig_command(dir, &["branch", "side"]).assert().success();
    twig_commit_files(dir, &[("main_only.txt", "main"), ("a.txt", "one, on master")], "master work");
    write_file(FileSpec::new(dir.join("pending.txt"), "pending".to_string()));
    twig_add(dir, &["pending.txt"]);

    run_twig_command(dir, &["checkout", "side"])
        .assert()
        .success()
        .stdout("");

    assert!(!dir.join("main_only.txt").exists());
    assert_eq!(read_file(&dir.join("a.txt")), "one");
    assert!(dir.join("pending.txt").exists());

    let status = twig_output(dir, &["status"]);
    assert!(status.starts_with("=== Branches ===\nmaster\n*side\n"));
    assert!(status.contains("=== Staged Files ===\n\n"));
    assert!(status.contains("=== Untracked Files ===\npending.txt\n"));

    Ok(())
}

#[rstest]
fn checkout_branch_refuses_to_overwrite_untracked_files(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    run_twig_command(dir, &["branch", "side"]).assert().success();
    run_twig_command(dir, &["checkout", "side"]).assert().success();
    twig_commit_files(dir, &[("x.txt", "from side")], "add x");
    run_twig_command(dir, &["checkout", "master"]).assert().success();
    assert!(!dir.join("x.txt").exists());

    write_file(FileSpec::new(dir.join("x.txt"), "precious".to_string()));

    run_twig_command(dir, &["checkout", "side"])
        .assert()
        .success()
        .stdout("There is an untracked file in the way; delete it, or add and commit it first.\n");

    assert_eq!(read_file(&dir.join("x.txt")), "precious");
    assert!(twig_output(dir, &["status"]).starts_with("=== Branches ===\n*master\nside\n"));

    Ok(())
}

#[rstest]
fn checkout_branch_accepts_untracked_file_matching_the_incoming_blob(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    run_twig_command(dir, &["branch", "side"]).assert().success();
    run_twig_command(dir, &["checkout", "side"]).assert().success();
    twig_commit_files(dir, &[("x.txt", "same")], "add x");
    run_twig_command(dir, &["checkout", "master"]).assert().success();

    write_file(FileSpec::new(dir.join("x.txt"), "same".to_string()));

    run_twig_command(dir, &["checkout", "side"])
        .assert()
        .success()
        .stdout("");

    Ok(())
}
