use crate::common::command::{init_repository_dir, run_twig_command, twig_output};
use assert_fs::TempDir;
use rstest::rstest;

mod common;

#[rstest]
#[case::plain("feature")]
#[case::hierarchical("feature/login")]
#[case::remote_style("master@origin")]
fn valid_branch_names_are_created(
    init_repository_dir: TempDir,
    #[case] name: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    run_twig_command(dir, &["branch", name])
        .assert()
        .success()
        .stdout("");

    assert!(twig_output(dir, &["status"]).contains(&format!("\n{name}\n")));

    Ok(())
}

#[rstest]
#[case::double_dot("a..b")]
#[case::leading_dot(".hidden")]
#[case::lock_suffix("topic.lock")]
#[case::whitespace("with space")]
#[case::reflog_syntax("topic@{1}")]
fn invalid_branch_names_are_refused(
    init_repository_dir: TempDir,
    #[case] name: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    run_twig_command(init_repository_dir.path(), &["branch", name])
        .assert()
        .success()
        .stdout(format!("Invalid branch name: {name}.\n"));

    Ok(())
}

#[rstest]
fn duplicate_branch_is_refused(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    run_twig_command(dir, &["branch", "feature"]).assert().success();

    run_twig_command(dir, &["branch", "feature"])
        .assert()
        .success()
        .stdout("A branch with that name already exists.\n");

    Ok(())
}

#[rstest]
fn rm_branch_keeps_the_active_branch(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    run_twig_command(dir, &["branch", "feature"]).assert().success();

    run_twig_command(dir, &["rm-branch", "master"])
        .assert()
        .success()
        .stdout("Cannot remove the current branch.\n");
    run_twig_command(dir, &["rm-branch", "ghost"])
        .assert()
        .success()
        .stdout("A branch with that name does not exist.\n");
    run_twig_command(dir, &["rm-branch", "feature"])
        .assert()
        .success()
        .stdout("");

    assert!(twig_output(dir, &["status"]).starts_with("=== Branches ===\n*master\n\n"));

    Ok(())
}
