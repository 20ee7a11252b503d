//! Property tests for menu navigation and marking.

use proptest::prelude::*;

use git_switch_interactive::{Branch, MenuState};

fn menu_with(n: usize, start: usize) -> MenuState {
    let others = (0..n).map(|i| Branch::new(format!("branch-{i}"))).collect();
    let mut menu = MenuState::new(Branch::new("main"), others);
    for _ in 0..start {
        menu.cursor_down();
    }
    menu
}

#[derive(Debug, Clone, Copy)]
enum Op {
    Up,
    Down,
    Toggle,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![Just(Op::Up), Just(Op::Down), Just(Op::Toggle)]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: n moves in one direction return the cursor to where it started.
    #[test]
    fn property_full_cycle_is_identity(n in 1usize..20, start in 0usize..40) {
        let mut menu = menu_with(n, start);
        let origin = menu.cursor_index();

        for _ in 0..n {
            menu.cursor_down();
        }
        prop_assert_eq!(menu.cursor_index(), origin);

        for _ in 0..n {
            menu.cursor_up();
        }
        prop_assert_eq!(menu.cursor_index(), origin);
    }

    /// PROPERTY: Up then down (and down then up) leaves the cursor unchanged.
    #[test]
    fn property_up_down_cancel(n in 1usize..20, start in 0usize..40) {
        let mut menu = menu_with(n, start);
        let origin = menu.cursor_index();

        menu.cursor_up();
        menu.cursor_down();
        prop_assert_eq!(menu.cursor_index(), origin);

        menu.cursor_down();
        menu.cursor_up();
        prop_assert_eq!(menu.cursor_index(), origin);
    }

    /// PROPERTY: Invariants hold and toggling twice is an involution for any
    /// sequence of operations.
    #[test]
    fn property_reachable_states_keep_invariants(
        n in 1usize..10,
        ops in proptest::collection::vec(op(), 0..64),
    ) {
        let mut menu = menu_with(n, 0);

        for op in ops {
            match op {
                Op::Up => menu.cursor_up(),
                Op::Down => menu.cursor_down(),
                Op::Toggle => {
                    let before: Vec<Branch> =
                        menu.marked_in_order().into_iter().cloned().collect();
                    menu.toggle_mark_current();
                    menu.toggle_mark_current();
                    let after: Vec<Branch> =
                        menu.marked_in_order().into_iter().cloned().collect();
                    prop_assert_eq!(&before, &after);
                    menu.toggle_mark_current();
                }
            }

            prop_assert!(menu.cursor_index() < n);
            let marked = menu.marked_in_order();
            prop_assert_eq!(menu.has_marks(), !marked.is_empty());
            prop_assert!(marked.iter().all(|b| menu.others().contains(*b)));
            prop_assert_eq!(menu.visible_row_count(), n + 1);
        }
    }
}
