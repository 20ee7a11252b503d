//! Integration tests for `GitCli` against a real repository.
//!
//! Skipped when no `git` executable is on PATH.

use std::path::Path;
use std::process::Command;

use git_switch_interactive::{Branch, BranchSource, GitCli, SwitchError};
use tempfile::TempDir;

fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

fn git(dir: &Path, args: &[&str]) {
    let status = Command::new("git")
        .current_dir(dir)
        .env("GIT_CEILING_DIRECTORIES", dir)
        .args([
            "-c",
            "user.name=Test",
            "-c",
            "user.email=test@example.com",
            "-c",
            "commit.gpgsign=false",
        ])
        .args(args)
        .status()
        .unwrap();
    assert!(status.success(), "git {:?} failed", args);
}

fn head(dir: &Path) -> String {
    let output = Command::new("git")
        .current_dir(dir)
        .args(["rev-parse", "--abbrev-ref", "HEAD"])
        .output()
        .unwrap();
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Repository on `main` with extra branches `alpha` and `beta`.
fn repo() -> TempDir {
    let dir = TempDir::new().unwrap();
    git(dir.path(), &["init", "-q"]);
    git(dir.path(), &["symbolic-ref", "HEAD", "refs/heads/main"]);
    git(dir.path(), &["commit", "-q", "--allow-empty", "-m", "init"]);
    git(dir.path(), &["branch", "alpha"]);
    git(dir.path(), &["branch", "beta"]);
    dir
}

#[test]
fn lists_current_and_other_branches() {
    if !git_available() {
        return;
    }
    let dir = repo();
    let listing = GitCli::in_dir(dir.path()).list_branches().unwrap();

    assert_eq!(listing.current, Branch::new("main"));
    assert_eq!(listing.others, vec![Branch::new("alpha"), Branch::new("beta")]);
}

#[test]
fn switch_checks_out_branch() {
    if !git_available() {
        return;
    }
    let dir = repo();
    let source = GitCli::in_dir(dir.path());

    source.switch_to(&Branch::new("beta")).unwrap();

    assert_eq!(head(dir.path()), "beta");
    let listing = source.list_branches().unwrap();
    assert_eq!(listing.current, Branch::new("beta"));
}

#[test]
fn switch_to_missing_branch_fails_with_output() {
    if !git_available() {
        return;
    }
    let dir = repo();
    let err = GitCli::in_dir(dir.path())
        .switch_to(&Branch::new("nope"))
        .unwrap_err();

    match err {
        SwitchError::SwitchFailed { branch, details } => {
            assert_eq!(branch, "nope");
            assert!(!details.is_empty());
        }
        other => panic!("Expected SwitchFailed, got {other:?}"),
    }
}

#[test]
fn delete_removes_branch() {
    if !git_available() {
        return;
    }
    let dir = repo();
    let source = GitCli::in_dir(dir.path());

    source.delete_branch(&Branch::new("alpha")).unwrap();

    let listing = source.list_branches().unwrap();
    assert_eq!(listing.others, vec![Branch::new("beta")]);
}

#[test]
fn delete_current_branch_fails() {
    if !git_available() {
        return;
    }
    let dir = repo();
    let err = GitCli::in_dir(dir.path())
        .delete_branch(&Branch::new("main"))
        .unwrap_err();

    assert!(matches!(err, SwitchError::DeleteFailed { .. }));
}

#[test]
fn repository_without_commits_is_unavailable() {
    if !git_available() {
        return;
    }
    let dir = TempDir::new().unwrap();
    git(dir.path(), &["init", "-q"]);

    let err = GitCli::in_dir(dir.path()).list_branches().unwrap_err();
    assert!(matches!(err, SwitchError::SourceUnavailable(_)));
}
