//! Git Branch Source
//!
//! Implements `BranchSource` by running the `git` executable.

mod cli;

pub use cli::{parse_branch_list, GitCli};
