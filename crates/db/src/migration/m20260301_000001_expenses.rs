//! Initial database migration.
//!
//! Creates the monthly expense tables and the action log.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared(MONTHLY_EXPENSES_SQL).await?;
        db.execute_unprepared(DAILY_EXPENSES_SQL).await?;
        db.execute_unprepared(EXPENSE_ACTIONS_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DROP_ALL_SQL).await?;
        Ok(())
    }
}

const MONTHLY_EXPENSES_SQL: &str = r"
-- ============================================================
-- TABLE: monthly_expenses
-- status holds the wire code, 0 (New) .. 13 (SentToExpenseGeneralManager)
-- ============================================================
CREATE TABLE monthly_expenses (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    status SMALLINT NOT NULL DEFAULT 0,
    office VARCHAR(255) NOT NULL,
    governorate VARCHAR(255) NOT NULL,
    supervisor_profile_id UUID NOT NULL,
    supervisor_name VARCHAR(255) NOT NULL,
    total_amount NUMERIC(19, 4) NOT NULL DEFAULT 0,
    notes TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_monthly_expense_status CHECK (status BETWEEN 0 AND 13),
    CONSTRAINT chk_monthly_expense_total CHECK (total_amount >= 0)
);

CREATE INDEX idx_monthly_expenses_status ON monthly_expenses(status, updated_at);
CREATE INDEX idx_monthly_expenses_office ON monthly_expenses(office);
CREATE INDEX idx_monthly_expenses_supervisor ON monthly_expenses(supervisor_profile_id);
";

const DAILY_EXPENSES_SQL: &str = r"
-- ============================================================
-- TABLE: daily_expenses
-- ============================================================
CREATE TABLE daily_expenses (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    monthly_expense_id UUID NOT NULL REFERENCES monthly_expenses(id) ON DELETE CASCADE,
    expense_date DATE NOT NULL,
    description TEXT NOT NULL,
    amount NUMERIC(19, 4) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_daily_expense_amount CHECK (amount > 0)
);

CREATE INDEX idx_daily_expenses_monthly ON daily_expenses(monthly_expense_id, expense_date);
";

const EXPENSE_ACTIONS_SQL: &str = r"
-- ============================================================
-- TABLE: expense_actions
-- One row per status transition
-- ============================================================
CREATE TABLE expense_actions (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    monthly_expense_id UUID NOT NULL REFERENCES monthly_expenses(id) ON DELETE RESTRICT,
    actor_profile_id UUID NOT NULL,
    actor_name VARCHAR(255) NOT NULL,
    actor_position VARCHAR(255) NOT NULL,
    kind VARCHAR(16) NOT NULL,
    description TEXT NOT NULL,
    from_status SMALLINT NOT NULL,
    to_status SMALLINT NOT NULL,
    note TEXT NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_expense_action_kind CHECK (kind IN ('approval', 'return')),
    CONSTRAINT chk_expense_action_from CHECK (from_status BETWEEN 0 AND 13),
    CONSTRAINT chk_expense_action_to CHECK (to_status BETWEEN 0 AND 13),
    CONSTRAINT chk_expense_action_moves CHECK (from_status <> to_status),
    CONSTRAINT chk_expense_action_note CHECK (length(trim(note)) > 0)
);

CREATE INDEX idx_expense_actions_monthly ON expense_actions(monthly_expense_id, created_at);
CREATE INDEX idx_expense_actions_actor ON expense_actions(actor_profile_id, created_at DESC);
";

const DROP_ALL_SQL: &str = r"
DROP TABLE IF EXISTS expense_actions CASCADE;
DROP TABLE IF EXISTS daily_expenses CASCADE;
DROP TABLE IF EXISTS monthly_expenses CASCADE;
";
