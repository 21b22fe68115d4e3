//! Makes the action log append-only.
//!
//! Rejects UPDATE and DELETE on expense_actions at the database level.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(APPEND_ONLY_SQL).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(
            r"
DROP TRIGGER IF EXISTS trg_expense_actions_append_only ON expense_actions;
DROP FUNCTION IF EXISTS reject_expense_action_change();
",
        )
        .await?;
        Ok(())
    }
}

const APPEND_ONLY_SQL: &str = r"
-- ============================================================
-- FUNCTION: reject_expense_action_change
-- ============================================================
CREATE OR REPLACE FUNCTION reject_expense_action_change()
RETURNS TRIGGER AS $$
BEGIN
    RAISE EXCEPTION 'expense_actions is append-only: % is not allowed', TG_OP;
END;
$$ LANGUAGE plpgsql;

CREATE TRIGGER trg_expense_actions_append_only
BEFORE UPDATE OR DELETE ON expense_actions
FOR EACH ROW
EXECUTE FUNCTION reject_expense_action_change();
";
