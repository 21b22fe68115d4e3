//! Expense approval workflow for Expensa.
//!
//! This module implements the monthly expense status machine: the status
//! enumeration, position capabilities, the approve/return transition
//! tables, the guard used to enable UI actions, and transition planning.
//!
//! # Modules
//!
//! - `types` - Workflow domain types (ExpenseStatus, TransitionKind, ActorContext)
//! - `capability` - Position capability policy
//! - `transition` - Approve and return transition tables
//! - `guard` - Can-approve / can-return derivation
//! - `error` - Workflow-specific error types
//! - `service` - Transition planning

pub mod capability;
pub mod error;
pub mod guard;
pub mod service;
pub mod transition;
pub mod types;

#[cfg(test)]
mod service_props;
#[cfg(test)]
mod transition_props;

pub use capability::{Capability, role_has_capability};
pub use error::WorkflowError;
pub use guard::{AvailableActions, can_approve, can_return};
pub use service::{PlannedTransition, WorkflowService};
pub use transition::{
    next_approval_status, next_rejection_status, next_status, required_capability,
};
pub use types::{ActionLogEntry, ActorContext, ExpenseStatus, TransitionKind};
