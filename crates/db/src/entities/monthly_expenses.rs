//! `SeaORM` Entity for monthly_expenses table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use expensa_core::expense::{MonthlyExpenseRecord, MonthlyExpenseSummary};

use super::daily_expenses;
use super::sea_orm_active_enums::ExpenseStatusCode;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "monthly_expenses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub status: ExpenseStatusCode,
    pub office: String,
    pub governorate: String,
    pub supervisor_profile_id: Uuid,
    pub supervisor_name: String,
    #[sea_orm(column_type = "Decimal(Some((19, 4)))")]
    pub total_amount: Decimal,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::daily_expenses::Entity")]
    DailyExpenses,
    #[sea_orm(has_many = "super::expense_actions::Entity")]
    ExpenseActions,
}

impl Related<super::daily_expenses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DailyExpenses.def()
    }
}

impl Related<super::expense_actions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExpenseActions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Converts the row to a list summary.
    #[must_use]
    pub fn into_summary(self) -> MonthlyExpenseSummary {
        MonthlyExpenseSummary {
            id: self.id,
            status: self.status.into(),
            office: self.office,
            governorate: self.governorate,
            supervisor_profile_id: self.supervisor_profile_id,
            supervisor_name: self.supervisor_name,
            total_amount: self.total_amount,
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        }
    }

    /// Converts the row and its lines to a full record.
    #[must_use]
    pub fn into_record(self, lines: Vec<daily_expenses::Model>) -> MonthlyExpenseRecord {
        MonthlyExpenseRecord {
            id: self.id,
            status: self.status.into(),
            office: self.office,
            governorate: self.governorate,
            supervisor_profile_id: self.supervisor_profile_id,
            supervisor_name: self.supervisor_name,
            total_amount: self.total_amount,
            daily_expenses: lines
                .into_iter()
                .map(daily_expenses::Model::into_daily_expense)
                .collect(),
            notes: self.notes,
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        }
    }
}
