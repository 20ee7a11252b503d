//! Branch Source Port
//!
//! Supplies the branch snapshot the menu is built from and carries out the
//! switch and delete operations the user chooses.

use crate::domain::entities::Branch;
use crate::error::SwitchResult;

/// Snapshot of the repository's local branches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchListing {
    /// The checked-out branch
    pub current: Branch,
    /// Every other branch, in the order the source reported them
    pub others: Vec<Branch>,
}

/// Source of branches and executor of branch operations.
///
/// Implementations:
/// - `GitCli`: shells out to the `git` executable
pub trait BranchSource {
    /// List the current branch and all others.
    ///
    /// Fails with `SwitchError::SourceUnavailable`.
    fn list_branches(&self) -> SwitchResult<BranchListing>;

    /// Check out `branch`.
    ///
    /// Fails with `SwitchError::SwitchFailed`.
    fn switch_to(&self, branch: &Branch) -> SwitchResult<()>;

    /// Delete `branch`.
    ///
    /// Fails with `SwitchError::DeleteFailed`.
    fn delete_branch(&self, branch: &Branch) -> SwitchResult<()>;
}
