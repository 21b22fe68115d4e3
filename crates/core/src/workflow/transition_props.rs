//! Property-based tests for the transition tables and guard.
//!
//! Covers totality, determinism, absence of self-loops, guard consistency,
//! the terminal state and substring role matching, plus the end-to-end
//! approval and return scenarios.

use proptest::prelude::*;

use crate::workflow::capability::{Capability, role_has_capability};
use crate::workflow::guard::{AvailableActions, can_approve, can_return};
use crate::workflow::transition::{
    edge, edges, next_approval_status, next_rejection_status, next_status,
};
use crate::workflow::types::{ExpenseStatus, TransitionKind};

/// Strategy for generating random ExpenseStatus values.
fn arb_status() -> impl Strategy<Value = ExpenseStatus> {
    proptest::sample::select(ExpenseStatus::ALL.to_vec())
}

/// Strategy for generating random TransitionKind values.
fn arb_kind() -> impl Strategy<Value = TransitionKind> {
    prop_oneof![Just(TransitionKind::Approval), Just(TransitionKind::Return)]
}

/// Strategy for generating position strings: known positions, decorated
/// variants and arbitrary text.
fn arb_role() -> impl Strategy<Value = String> {
    let known = proptest::sample::select(vec![
        "supervisor",
        "Supervisor",
        "projectcoordinator",
        "ProjectCoordinator",
        "manager",
        "Manager",
        "director",
        "Director",
        "expenseauditer",
        "ExpenseAuditerSenior",
        "expensemanager",
        "ExpenseManager",
        "expensegeneralmanager",
        "ExpenseGeneralManager",
        "admin",
        "archiveclerk",
    ])
    .prop_map(str::to_string);

    prop_oneof![
        known,
        ("[A-Za-z]{0,6}", proptest::sample::select(Capability::ALL.to_vec()), "[A-Za-z]{0,6}")
            .prop_map(|(pre, cap, post)| format!("{pre}{}{post}", cap.token().to_uppercase())),
        "[A-Za-z ]{0,24}",
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // =========================================================================
    // Totality: pairs outside the tables yield None, never panic
    // =========================================================================

    #[test]
    fn prop_approval_none_outside_table(status in arb_status(), role in arb_role()) {
        let result = next_approval_status(status, &role);
        let in_table = edge(TransitionKind::Approval, status)
            .is_some_and(|(cap, _)| role_has_capability(&role, cap));
        prop_assert_eq!(result.is_some(), in_table);
    }

    #[test]
    fn prop_rejection_none_outside_table(status in arb_status(), role in arb_role()) {
        let result = next_rejection_status(status, &role);
        let in_table = edge(TransitionKind::Return, status)
            .is_some_and(|(cap, _)| role_has_capability(&role, cap));
        prop_assert_eq!(result.is_some(), in_table);
    }

    // =========================================================================
    // Determinism
    // =========================================================================

    #[test]
    fn prop_tables_are_deterministic(
        kind in arb_kind(),
        status in arb_status(),
        role in arb_role()
    ) {
        prop_assert_eq!(next_status(kind, status, &role), next_status(kind, status, &role));
    }

    // =========================================================================
    // No self-loops
    // =========================================================================

    #[test]
    fn prop_no_self_loop(kind in arb_kind(), status in arb_status(), role in arb_role()) {
        if let Some(next) = next_status(kind, status, &role) {
            prop_assert_ne!(next, status);
        }
    }

    // =========================================================================
    // Guard consistency
    // =========================================================================

    #[test]
    fn prop_guard_matches_tables(status in arb_status(), role in arb_role()) {
        prop_assert_eq!(can_approve(status, &role), next_approval_status(status, &role).is_some());
        prop_assert_eq!(can_return(status, &role), next_rejection_status(status, &role).is_some());

        let actions = AvailableActions::for_actor(status, &role);
        prop_assert_eq!(actions.can_approve, can_approve(status, &role));
        prop_assert_eq!(actions.can_return, can_return(status, &role));
        prop_assert_eq!(actions.approval_target, next_approval_status(status, &role));
        prop_assert_eq!(actions.return_target, next_rejection_status(status, &role));
    }

    // =========================================================================
    // Terminal state
    // =========================================================================

    #[test]
    fn prop_completed_is_terminal(role in arb_role()) {
        prop_assert_eq!(next_approval_status(ExpenseStatus::Completed, &role), None);
        prop_assert_eq!(next_rejection_status(ExpenseStatus::Completed, &role), None);
    }

    // =========================================================================
    // Substring role matching
    // =========================================================================

    #[test]
    fn prop_decorated_manager_matches(pre in "[A-Za-z]{0,8}", post in "[A-Za-z]{0,8}") {
        let role = format!("{pre}Manager{post}");
        prop_assert_eq!(
            next_approval_status(ExpenseStatus::SentToManager, &role),
            Some(ExpenseStatus::SentToDirector)
        );
    }

    /// Every edge is reachable by a position that is exactly its token.
    #[test]
    fn prop_token_reaches_its_edges(kind in arb_kind()) {
        for e in edges(kind) {
            prop_assert_eq!(next_status(kind, e.from, e.capability.token()), Some(e.to));
        }
    }
}

#[test]
fn test_approval_round_trip_to_completed() {
    let steps = [
        ("manager", ExpenseStatus::SentToDirector),
        ("director", ExpenseStatus::SentFromDirector),
        ("expenseauditer", ExpenseStatus::SentToExpenseManager),
        ("expensemanager", ExpenseStatus::SentToExpenseGeneralManager),
        ("expensegeneralmanager", ExpenseStatus::RecievedBySupervisor),
        ("supervisor", ExpenseStatus::Completed),
    ];

    let mut status = ExpenseStatus::SentToManager;
    for (role, expected) in steps {
        status = next_approval_status(status, role)
            .unwrap_or_else(|| panic!("{role} should approve from {status}"));
        assert_eq!(status, expected);
    }

    for role in [
        "supervisor",
        "projectcoordinator",
        "manager",
        "director",
        "expenseauditer",
        "expensemanager",
        "expensegeneralmanager",
    ] {
        assert_eq!(next_approval_status(status, role), None);
    }
}

#[test]
fn test_rejection_branch_cycles_back() {
    let returned = next_rejection_status(ExpenseStatus::SentToManager, "manager");
    assert_eq!(returned, Some(ExpenseStatus::ReturnedToProjectCoordinator));

    let resent = next_approval_status(ExpenseStatus::ReturnedToProjectCoordinator, "projectcoordinator");
    assert_eq!(resent, Some(ExpenseStatus::SentToManager));
}

#[test]
fn test_supervisor_has_no_edge_at_manager_step() {
    assert_eq!(next_approval_status(ExpenseStatus::SentToManager, "supervisor"), None);
    assert_eq!(next_rejection_status(ExpenseStatus::SentToManager, "supervisor"), None);
}
