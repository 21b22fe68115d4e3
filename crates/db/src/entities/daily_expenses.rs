//! `SeaORM` Entity for daily_expenses table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use expensa_core::expense::DailyExpense;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "daily_expenses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub monthly_expense_id: Uuid,
    pub expense_date: Date,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Decimal(Some((19, 4)))")]
    pub amount: Decimal,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::monthly_expenses::Entity",
        from = "Column::MonthlyExpenseId",
        to = "super::monthly_expenses::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
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
    /// Converts the row to a line item.
    #[must_use]
    pub fn into_daily_expense(self) -> DailyExpense {
        DailyExpense {
            id: self.id,
            expense_date: self.expense_date,
            description: self.description,
            amount: self.amount,
        }
    }
}
