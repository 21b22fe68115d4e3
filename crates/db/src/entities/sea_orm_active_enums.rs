//! Database enums and their mapping to workflow types.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use expensa_core::workflow::{ExpenseStatus, TransitionKind};

/// Status column, stored as its wire code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i16", db_type = "SmallInteger")]
pub enum ExpenseStatusCode {
    #[sea_orm(num_value = 0)]
    New,
    #[sea_orm(num_value = 1)]
    SentToProjectCoordinator,
    #[sea_orm(num_value = 2)]
    ReturnedToProjectCoordinator,
    #[sea_orm(num_value = 3)]
    SentToManager,
    #[sea_orm(num_value = 4)]
    ReturnedToManager,
    #[sea_orm(num_value = 5)]
    SentToDirector,
    #[sea_orm(num_value = 6)]
    ReturnedToSupervisor,
    #[sea_orm(num_value = 7)]
    RecievedBySupervisor,
    #[sea_orm(num_value = 8)]
    Completed,
    #[sea_orm(num_value = 9)]
    SentFromDirector,
    #[sea_orm(num_value = 10)]
    ReturnedToExpenseAuditor,
    #[sea_orm(num_value = 11)]
    SentToExpenseManager,
    #[sea_orm(num_value = 12)]
    ReturnedToExpenseManager,
    #[sea_orm(num_value = 13)]
    SentToExpenseGeneralManager,
}

impl From<ExpenseStatus> for ExpenseStatusCode {
    fn from(status: ExpenseStatus) -> Self {
        match status {
            ExpenseStatus::New => Self::New,
            ExpenseStatus::SentToProjectCoordinator => Self::SentToProjectCoordinator,
            ExpenseStatus::ReturnedToProjectCoordinator => Self::ReturnedToProjectCoordinator,
            ExpenseStatus::SentToManager => Self::SentToManager,
            ExpenseStatus::ReturnedToManager => Self::ReturnedToManager,
            ExpenseStatus::SentToDirector => Self::SentToDirector,
            ExpenseStatus::ReturnedToSupervisor => Self::ReturnedToSupervisor,
            ExpenseStatus::RecievedBySupervisor => Self::RecievedBySupervisor,
            ExpenseStatus::Completed => Self::Completed,
            ExpenseStatus::SentFromDirector => Self::SentFromDirector,
            ExpenseStatus::ReturnedToExpenseAuditor => Self::ReturnedToExpenseAuditor,
            ExpenseStatus::SentToExpenseManager => Self::SentToExpenseManager,
            ExpenseStatus::ReturnedToExpenseManager => Self::ReturnedToExpenseManager,
            ExpenseStatus::SentToExpenseGeneralManager => Self::SentToExpenseGeneralManager,
        }
    }
}

impl From<ExpenseStatusCode> for ExpenseStatus {
    fn from(code: ExpenseStatusCode) -> Self {
        match code {
            ExpenseStatusCode::New => Self::New,
            ExpenseStatusCode::SentToProjectCoordinator => Self::SentToProjectCoordinator,
            ExpenseStatusCode::ReturnedToProjectCoordinator => Self::ReturnedToProjectCoordinator,
            ExpenseStatusCode::SentToManager => Self::SentToManager,
            ExpenseStatusCode::ReturnedToManager => Self::ReturnedToManager,
            ExpenseStatusCode::SentToDirector => Self::SentToDirector,
            ExpenseStatusCode::ReturnedToSupervisor => Self::ReturnedToSupervisor,
            ExpenseStatusCode::RecievedBySupervisor => Self::RecievedBySupervisor,
            ExpenseStatusCode::Completed => Self::Completed,
            ExpenseStatusCode::SentFromDirector => Self::SentFromDirector,
            ExpenseStatusCode::ReturnedToExpenseAuditor => Self::ReturnedToExpenseAuditor,
            ExpenseStatusCode::SentToExpenseManager => Self::SentToExpenseManager,
            ExpenseStatusCode::ReturnedToExpenseManager => Self::ReturnedToExpenseManager,
            ExpenseStatusCode::SentToExpenseGeneralManager => Self::SentToExpenseGeneralManager,
        }
    }
}

/// Kind of an audited action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum ActionKind {
    #[sea_orm(string_value = "approval")]
    Approval,
    #[sea_orm(string_value = "return")]
    Return,
}

impl From<TransitionKind> for ActionKind {
    fn from(kind: TransitionKind) -> Self {
        match kind {
            TransitionKind::Approval => Self::Approval,
            TransitionKind::Return => Self::Return,
        }
    }
}

impl From<ActionKind> for TransitionKind {
    fn from(kind: ActionKind) -> Self {
        match kind {
            ActionKind::Approval => Self::Approval,
            ActionKind::Return => Self::Return,
        }
    }
}
