use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Repository with `a.txt` and `docs/b.txt` committed as "first"
#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_twig_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    write_file(FileSpec::new(
        repository_dir.path().join("a.txt"),
        "one".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("docs").join("b.txt"),
        "two".to_string(),
    ));

    twig_add(repository_dir.path(), &["a.txt", "docs/b.txt"]);
    run_twig_command(repository_dir.path(), &["commit", "first"])
        .assert()
        .success();

    repository_dir
}

/// Repository cloned by hand: both share the same initial commit
#[fixture]
pub fn remote_pair() -> (TempDir, TempDir) {
    let local = TempDir::new().expect("Failed to create temp dir");
    let remote = TempDir::new().expect("Failed to create temp dir");

    for dir in [&local, &remote] {
        run_twig_command(dir.path(), &["init"]).assert().success();
    }

    let remote_path = remote.path().display().to_string();
    run_twig_command(local.path(), &["add-remote", "origin", &remote_path])
        .assert()
        .success()
        .stdout("");

    (local, remote)
}

pub fn run_twig_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("twig").expect("Failed to find twig binary");
    cmd.env("NO_COLOR", "1");
    cmd.env_remove("TWIG_COMMIT_DATE");
    cmd.env_remove("RUST_LOG");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

/// Run a command expected to succeed and return its stdout
pub fn twig_output(dir: &Path, args: &[&str]) -> String {
    let output = run_twig_command(dir, args).assert().success();
    String::from_utf8(output.get_output().stdout.clone()).expect("stdout is not UTF-8")
}

pub fn twig_add(dir: &Path, files: &[&str]) {
    for file in files {
        run_twig_command(dir, &["add", file])
            .assert()
            .success()
            .stdout("");
    }
}

/// Write files, stage them and commit
pub fn twig_commit_files(dir: &Path, files: &[(&str, &str)], message: &str) {
    for (path, content) in files {
        write_file(FileSpec::new(dir.join(path), content.to_string()));
    }
    twig_add(dir, &files.iter().map(|(path, _)| *path).collect::<Vec<_>>());

    run_twig_command(dir, &["commit", message])
        .assert()
        .success()
        .stdout("");
}

/// Commit ids printed by `log`, newest first
pub fn log_commit_ids(dir: &Path) -> Vec<String> {
    twig_output(dir, &["log"])
        .lines()
        .filter_map(|line| line.strip_prefix("commit "))
        .map(str::to_string)
        .collect()
}

/// Messages printed by `log`, newest first
pub fn log_messages(dir: &Path) -> Vec<String> {
    let output = twig_output(dir, &["log"]);
    let lines = output.lines().collect::<Vec<_>>();

    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.starts_with("Date: "))
        .filter_map(|(position, _)| lines.get(position + 1))
        .map(|line| line.to_string())
        .collect()
}

pub fn head_commit_id(dir: &Path) -> String {
    log_commit_ids(dir)
        .into_iter()
        .next()
        .expect("log printed no commit")
}

/// Bytes of the persisted repository state
pub fn state_bytes(dir: &Path) -> Vec<u8> {
    std::fs::read(dir.join(".twig").join("state")).expect("Failed to read state file")
}
