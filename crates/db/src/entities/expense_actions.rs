//! `SeaORM` Entity for expense_actions table.
//!
//! Rows are append-only; the database rejects UPDATE and DELETE.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use expensa_core::workflow::ActionLogEntry;
use sea_orm::Set;

use super::sea_orm_active_enums::{ActionKind, ExpenseStatusCode};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "expense_actions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub monthly_expense_id: Uuid,
    pub actor_profile_id: Uuid,
    pub actor_name: String,
    pub actor_position: String,
    pub kind: ActionKind,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub from_status: ExpenseStatusCode,
    pub to_status: ExpenseStatusCode,
    #[sea_orm(column_type = "Text")]
    pub note: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::monthly_expenses::Entity",
        from = "Column::MonthlyExpenseId",
        to = "super::monthly_expenses::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    MonthlyExpenses,
}

impl Related<super::monthly_expenses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MonthlyExpenses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Converts the row to an audit entry.
    #[must_use]
    pub fn into_log_entry(self) -> ActionLogEntry {
        ActionLogEntry {
            id: self.id,
            monthly_expense_id: self.monthly_expense_id,
            actor_profile_id: self.actor_profile_id,
            actor_name: self.actor_name,
            actor_position: self.actor_position,
            kind: self.kind.into(),
            description: self.description,
            from_status: self.from_status.into(),
            to_status: self.to_status.into(),
            note: self.note,
            created_at: self.created_at.into(),
        }
    }
}

impl From<&ActionLogEntry> for ActiveModel {
    fn from(entry: &ActionLogEntry) -> Self {
        Self {
            id: Set(entry.id),
            monthly_expense_id: Set(entry.monthly_expense_id),
            actor_profile_id: Set(entry.actor_profile_id),
            actor_name: Set(entry.actor_name.clone()),
            actor_position: Set(entry.actor_position.clone()),
            kind: Set(entry.kind.into()),
            description: Set(entry.description.clone()),
            from_status: Set(entry.from_status.into()),
            to_status: Set(entry.to_status.into()),
            note: Set(entry.note.clone()),
            created_at: Set(entry.created_at.into()),
        }
    }
}
