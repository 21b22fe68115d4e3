//! Database seeder for Expensa development and testing.
//!
//! Seeds a handful of monthly expense records at different workflow steps
//! and prints a development token for every position, so the API can be
//! exercised without the identity service.
//!
//! Usage: cargo run --bin seeder

use std::sync::Arc;

use anyhow::Context;
use chrono::{Datelike, Duration, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    sea_query::Expr,
};
use uuid::Uuid;

use expensa_core::expense::{NewDailyExpense, NewMonthlyExpense};
use expensa_core::workflow::{ActorContext, ExpenseStatus, TransitionKind};
use expensa_db::entities::{monthly_expenses, sea_orm_active_enums::ExpenseStatusCode};
use expensa_db::{ExpenseRepository, WorkflowRepository};
use expensa_shared::{AppConfig, JwtConfig, JwtService};

/// Development profile ID shared by the seeded supervisor (consistent for all seeds).
const SUPERVISOR_ID: Uuid = Uuid::from_u128(1);

/// Positions a development token is printed for.
const POSITIONS: [&str; 7] = [
    "Supervisor",
    "ProjectCoordinator",
    "Manager",
    "Director",
    "ExpenseAuditer",
    "ExpenseManager",
    "ExpenseGeneralManager",
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("failed to load configuration")?;

    println!("Connecting to database...");
    let db = Arc::new(
        expensa_db::connect(&config.database.url)
            .await
            .context("failed to connect to database")?,
    );

    println!("Seeding monthly expenses...");
    seed_expenses(&db).await?;

    print_tokens(&JwtService::new(JwtConfig::from(&config.jwt)))?;

    println!("Seeding complete!");
    Ok(())
}

fn demo_expense(office: &str, governorate: &str, cents: &[i64]) -> NewMonthlyExpense {
    // Lines of one record must share a month.
    let today = Utc::now().date_naive();
    let start = today - Duration::days(i64::from(today.day0()));
    let daily_expenses = cents
        .iter()
        .zip(0_i64..)
        .map(|(amount, day)| NewDailyExpense {
            expense_date: start + Duration::days(day),
            description: format!("Field visit {}", day + 1),
            amount: Decimal::new(*amount, 2),
        })
        .collect();

    NewMonthlyExpense {
        office: office.to_string(),
        governorate: governorate.to_string(),
        supervisor_profile_id: SUPERVISOR_ID,
        supervisor_name: "Demo Supervisor".to_string(),
        daily_expenses,
        notes: Some("Seeded for development".to_string()),
    }
}

fn actor(position: &str) -> ActorContext {
    ActorContext::new(Uuid::new_v4(), format!("Demo {position}"), position)
}

/// Puts a freshly created record in front of the project coordinator.
///
/// Deliberately not a workflow transition: submission has no edge in the
/// transition tables and leaves no audit entry, so demo data only.
async fn submit(db: &DatabaseConnection, id: Uuid) -> anyhow::Result<()> {
    monthly_expenses::Entity::update_many()
        .col_expr(
            monthly_expenses::Column::Status,
            Expr::value(ExpenseStatusCode::from(
                ExpenseStatus::SentToProjectCoordinator,
            )),
        )
        .filter(monthly_expenses::Column::Id.eq(id))
        .exec(db)
        .await?;
    Ok(())
}

async fn seed_expenses(db: &Arc<DatabaseConnection>) -> anyhow::Result<()> {
    // Check if records already exist
    if monthly_expenses::Entity::find().count(db.as_ref()).await? > 0 {
        println!("  Expense records already exist, skipping...");
        return Ok(());
    }

    let expenses = ExpenseRepository::new(Arc::clone(db));
    let workflow = WorkflowRepository::new(Arc::clone(db));

    let draft = expenses
        .create(&demo_expense("Central", "Baghdad", &[2500, 1200]))
        .await?;
    println!("  Created draft record {}", draft.id);

    let waiting = expenses
        .create(&demo_expense("North", "Erbil", &[4000, 1550, 990]))
        .await?;
    submit(db, waiting.id).await?;
    println!("  Created record {} waiting for the coordinator", waiting.id);

    let reviewed = expenses
        .create(&demo_expense("South", "Basra", &[12000]))
        .await?;
    submit(db, reviewed.id).await?;
    workflow
        .record_transition(
            reviewed.id,
            TransitionKind::Approval,
            &actor("ProjectCoordinator"),
            "Receipts attached",
            Some(ExpenseStatus::SentToProjectCoordinator),
        )
        .await?;
    println!("  Created record {} waiting for the manager", reviewed.id);

    let returned = expenses
        .create(&demo_expense("West", "Anbar", &[3300, 700]))
        .await?;
    submit(db, returned.id).await?;
    workflow
        .record_transition(
            returned.id,
            TransitionKind::Approval,
            &actor("ProjectCoordinator"),
            "Looks complete",
            None,
        )
        .await?;
    workflow
        .record_transition(
            returned.id,
            TransitionKind::Return,
            &actor("Manager"),
            "Day 2 needs a receipt",
            None,
        )
        .await?;
    println!("  Created record {} returned to the coordinator", returned.id);

    Ok(())
}

fn print_tokens(jwt: &JwtService) -> anyhow::Result<()> {
    println!(
        "Development tokens (valid for {} minutes):",
        jwt.access_token_expires_in() / 60
    );
    for position in POSITIONS {
        let profile_id = if position == "Supervisor" {
            SUPERVISOR_ID
        } else {
            Uuid::new_v4()
        };
        let token =
            jwt.generate_access_token(profile_id, &format!("Demo {position}"), position)?;
        println!("  {position}: {token}");
    }
    Ok(())
}
