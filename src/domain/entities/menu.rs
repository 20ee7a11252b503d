//! Menu State
//!
//! Owns the cursor position and the set of branches marked for deletion.
//! Navigation wraps around in both directions.

use std::collections::HashSet;

use super::Branch;

/// What Confirm does in the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuMode {
    /// Nothing marked: Confirm switches to the selected branch
    Browsing,
    /// At least one mark: Confirm asks to delete the marked branches
    MarkingForDelete,
}

/// Mutable state of the branch menu.
///
/// Invariants:
/// - `cursor < others.len()` whenever `others` is non-empty
/// - every marked branch is an element of `others`
#[derive(Debug, Clone)]
pub struct MenuState {
    current: Branch,
    others: Vec<Branch>,
    cursor: usize,
    marked: HashSet<Branch>,
}

impl MenuState {
    /// Create a menu from a branch snapshot. `others` keeps the order given.
    pub fn new(current: Branch, others: Vec<Branch>) -> Self {
        Self {
            current,
            others,
            cursor: 0,
            marked: HashSet::new(),
        }
    }

    pub fn current(&self) -> &Branch {
        &self.current
    }

    pub fn others(&self) -> &[Branch] {
        &self.others
    }

    pub fn cursor_index(&self) -> usize {
        self.cursor
    }

    /// Whether there is anything to navigate, mark, or switch to.
    pub fn is_empty(&self) -> bool {
        self.others.is_empty()
    }

    /// Move the cursor one row up, wrapping to the last row. No-op when empty.
    pub fn cursor_up(&mut self) {
        let n = self.others.len();
        if n == 0 {
            return;
        }
        self.cursor = (self.cursor + n - 1) % n;
    }

    /// Move the cursor one row down, wrapping to the first row. No-op when empty.
    pub fn cursor_down(&mut self) {
        let n = self.others.len();
        if n == 0 {
            return;
        }
        self.cursor = (self.cursor + 1) % n;
    }

    /// Branch under the cursor, `None` when there are no other branches.
    pub fn selected_branch(&self) -> Option<&Branch> {
        self.others.get(self.cursor)
    }

    /// Mark the branch under the cursor for deletion, or unmark it if it is
    /// already marked.
    pub fn toggle_mark_current(&mut self) {
        let Some(branch) = self.others.get(self.cursor) else {
            return;
        };
        if !self.marked.remove(branch) {
            self.marked.insert(branch.clone());
        }
    }

    pub fn is_marked(&self, branch: &Branch) -> bool {
        self.marked.contains(branch)
    }

    pub fn has_marks(&self) -> bool {
        !self.marked.is_empty()
    }

    pub fn mode(&self) -> MenuMode {
        if self.has_marks() {
            MenuMode::MarkingForDelete
        } else {
            MenuMode::Browsing
        }
    }

    /// Marked branches in menu order, which is also the deletion order.
    pub fn marked_in_order(&self) -> Vec<&Branch> {
        self.others
            .iter()
            .filter(|b| self.marked.contains(*b))
            .collect()
    }

    /// Lines occupied by one frame: the current-branch header plus one row per
    /// other branch.
    pub fn visible_row_count(&self) -> usize {
        self.others.len() + 1
    }
}
