//! Property-based tests for WorkflowService.

use proptest::prelude::*;
use uuid::Uuid;

use crate::workflow::error::WorkflowError;
use crate::workflow::service::WorkflowService;
use crate::workflow::transition::next_status;
use crate::workflow::types::{ActorContext, ExpenseStatus, TransitionKind};

fn arb_status() -> impl Strategy<Value = ExpenseStatus> {
    proptest::sample::select(ExpenseStatus::ALL.to_vec())
}

fn arb_kind() -> impl Strategy<Value = TransitionKind> {
    prop_oneof![Just(TransitionKind::Approval), Just(TransitionKind::Return)]
}

/// Strategy for generating non-nil UUIDs.
fn arb_profile_id() -> impl Strategy<Value = Uuid> {
    (1u128..=u128::MAX).prop_map(Uuid::from_u128)
}

fn arb_position() -> impl Strategy<Value = String> {
    prop_oneof![
        proptest::sample::select(vec![
            "Supervisor",
            "ProjectCoordinator",
            "Manager",
            "Director",
            "ExpenseAuditer",
            "ExpenseManager",
            "ExpenseGeneralManager",
        ])
        .prop_map(str::to_string),
        "[A-Za-z]{1,20}",
    ]
}

/// Strategy for generating notes with at least one visible character.
fn arb_note() -> impl Strategy<Value = String> {
    "[ ]{0,3}[a-zA-Z0-9][a-zA-Z0-9 .,]{0,60}"
}

fn arb_blank_note() -> impl Strategy<Value = String> {
    "[ \t\n]{0,8}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// A plan exists exactly when the table has an edge, and follows it.
    #[test]
    fn prop_plan_follows_table(
        kind in arb_kind(),
        status in arb_status(),
        profile_id in arb_profile_id(),
        position in arb_position(),
        note in arb_note()
    ) {
        let actor = ActorContext::new(profile_id, "Actor", position.clone());
        let result = WorkflowService::plan(kind, status, &actor, &note);

        match next_status(kind, status, &position) {
            Some(to) => {
                let plan = result.expect("edge exists, plan should succeed");
                prop_assert_eq!(plan.from, status);
                prop_assert_eq!(plan.to, to);
                prop_assert_eq!(plan.kind, kind);
                prop_assert_eq!(plan.note, note.trim());
                prop_assert_eq!(plan.actor, actor);
            }
            None => {
                let is_illegal = matches!(result, Err(WorkflowError::IllegalTransition { .. }));
                prop_assert!(is_illegal);
            }
        }
    }

    /// Blank notes are rejected whatever the status or position.
    #[test]
    fn prop_blank_note_rejected(
        kind in arb_kind(),
        status in arb_status(),
        profile_id in arb_profile_id(),
        position in arb_position(),
        note in arb_blank_note()
    ) {
        let actor = ActorContext::new(profile_id, "Actor", position);
        let result = WorkflowService::plan(kind, status, &actor, &note);
        prop_assert!(matches!(result, Err(WorkflowError::MissingNote)));
    }

    /// An actor without a profile is rejected before anything else.
    #[test]
    fn prop_nil_profile_rejected(
        kind in arb_kind(),
        status in arb_status(),
        position in arb_position(),
        note in arb_note()
    ) {
        let actor = ActorContext::new(Uuid::nil(), "Actor", position);
        let result = WorkflowService::plan(kind, status, &actor, &note);
        prop_assert!(matches!(result, Err(WorkflowError::UnauthorizedActor)));
    }

    /// Every audit entry describes exactly the planned edge.
    #[test]
    fn prop_log_entry_matches_plan(
        status in arb_status(),
        profile_id in arb_profile_id(),
        note in arb_note()
    ) {
        let Some((capability, _)) = crate::workflow::transition::approval_edge(status) else {
            return Ok(());
        };
        let actor = ActorContext::new(profile_id, "Actor", capability.token());
        let plan = WorkflowService::approve(status, &actor, &note).expect("token holds capability");
        let record_id = Uuid::new_v4();
        let entry = plan.log_entry(record_id);

        prop_assert_eq!(entry.monthly_expense_id, record_id);
        prop_assert_eq!(entry.from_status, plan.from);
        prop_assert_eq!(entry.to_status, plan.to);
        prop_assert_eq!(entry.actor_profile_id, profile_id);
        prop_assert_eq!(entry.description, plan.description());
    }
}
