//! Git CLI adapter
//!
//! Every operation is a blocking subprocess call. Failures are reported with
//! the captured output and never retried.

use std::path::PathBuf;
use std::process::{Command, Output};

use tracing::{debug, info};

use crate::domain::entities::Branch;
use crate::domain::ports::{BranchListing, BranchSource};
use crate::error::{SwitchError, SwitchResult};

/// Branch source that shells out to `git`.
#[derive(Debug, Clone, Default)]
pub struct GitCli {
    /// Working directory for git invocations (process cwd when `None`)
    workdir: Option<PathBuf>,
}

impl GitCli {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run git inside `dir` instead of the process working directory.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: Some(dir.into()),
        }
    }

    fn git(&self) -> Command {
        let mut cmd = Command::new("git");
        if let Some(dir) = &self.workdir {
            cmd.current_dir(dir);
        }
        cmd
    }
}

impl BranchSource for GitCli {
    fn list_branches(&self) -> SwitchResult<BranchListing> {
        let output = self
            .git()
            .args(["branch", "--no-color"])
            .output()
            .map_err(|e| SwitchError::SourceUnavailable(e.to_string()))?;

        if !output.status.success() {
            return Err(SwitchError::SourceUnavailable(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }

        let listing = parse_branch_list(&String::from_utf8_lossy(&output.stdout))?;
        debug!(
            current = %listing.current,
            others = listing.others.len(),
            "listed branches"
        );
        Ok(listing)
    }

    fn switch_to(&self, branch: &Branch) -> SwitchResult<()> {
        let output = self
            .git()
            .args(["switch", branch.name()])
            .output()
            .map_err(|e| SwitchError::SwitchFailed {
                branch: branch.name().to_string(),
                details: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(SwitchError::SwitchFailed {
                branch: branch.name().to_string(),
                details: combined_output(&output),
            });
        }

        info!(branch = %branch, "switched branch");
        Ok(())
    }

    fn delete_branch(&self, branch: &Branch) -> SwitchResult<()> {
        let output = self
            .git()
            .args(["branch", "-D", branch.name()])
            .output()
            .map_err(|e| SwitchError::DeleteFailed {
                branch: branch.name().to_string(),
                details: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(SwitchError::DeleteFailed {
                branch: branch.name().to_string(),
                details: combined_output(&output),
            });
        }

        info!(branch = %branch, "deleted branch");
        Ok(())
    }
}

fn combined_output(output: &Output) -> String {
    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    text.push_str(&String::from_utf8_lossy(&output.stderr));
    text.trim_end().to_string()
}

/// Parse the output of `git branch`.
///
/// The line starting with `*` is the current branch. A leading `+` marks a
/// branch checked out in another worktree and is stripped like `*`.
pub fn parse_branch_list(output: &str) -> SwitchResult<BranchListing> {
    let mut current = None;
    let mut others = Vec::new();

    for line in output.lines() {
        if line.trim().is_empty() {
            continue;
        }

        if let Some(rest) = line.strip_prefix('*') {
            current = Some(Branch::new(rest.trim()));
            continue;
        }

        let name = line.strip_prefix('+').unwrap_or(line).trim();
        others.push(Branch::new(name));
    }

    let current = current.ok_or_else(|| {
        SwitchError::SourceUnavailable("no current branch found".to_string())
    })?;

    Ok(BranchListing { current, others })
}
