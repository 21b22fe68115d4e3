//! Position capabilities for the expense workflow.
//!
//! A user's position is a free-form string coming from the profile store
//! (e.g. "Manager", "ExpenseAuditerSenior"). Each workflow step is owned by
//! one capability token, and a position holds the capability when its
//! lower-cased form contains the token. Substring containment is the
//! established rule for this data and lives only in
//! [`role_has_capability`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// A workflow step owner, identified by a lower-case token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    /// Owns the record and confirms receipt at the end.
    Supervisor,
    /// First reviewer after submission.
    ProjectCoordinator,
    /// Reviews after the project coordinator.
    Manager,
    /// Signs off before the expense department.
    Director,
    /// Audits the record for the expense department.
    ///
    /// The token keeps the spelling used by the profile store.
    #[serde(rename = "expenseauditer")]
    ExpenseAuditor,
    /// Expense department manager.
    ExpenseManager,
    /// Final approver in the expense department.
    ExpenseGeneralManager,
}

impl Capability {
    /// Every capability.
    pub const ALL: [Self; 7] = [
        Self::Supervisor,
        Self::ProjectCoordinator,
        Self::Manager,
        Self::Director,
        Self::ExpenseAuditor,
        Self::ExpenseManager,
        Self::ExpenseGeneralManager,
    ];

    /// Returns the token searched for in a position string.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Supervisor => "supervisor",
            Self::ProjectCoordinator => "projectcoordinator",
            Self::Manager => "manager",
            Self::Director => "director",
            Self::ExpenseAuditor => "expenseauditer",
            Self::ExpenseManager => "expensemanager",
            Self::ExpenseGeneralManager => "expensegeneralmanager",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Returns true if `role` holds `capability`.
///
/// The role is lower-cased and searched for the capability token, so
/// "SeniorManagerX" holds [`Capability::Manager`]. Note that
/// "ExpenseManager" and "ExpenseGeneralManager" also contain "manager".
#[must_use]
pub fn role_has_capability(role: &str, capability: Capability) -> bool {
    role.to_lowercase().contains(capability.token())
}
