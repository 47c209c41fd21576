//! Test utilities and helpers
//!
//! Shared infrastructure for unit tests: in-memory database setup/teardown
//! and wizard-state factories.

use sqlx::SqlitePool;

use crate::state::{LiftEntry, WizardState};

/// ---------------------------------------------------------------------------
/// Database Test Utilities
/// ---------------------------------------------------------------------------

/// Create an in-memory SQLite database with migrations applied.
///
/// Uses max_connections(1) to prevent multiple pool connections from creating
/// isolated in-memory databases, which would cause intermittent test failures
pub async fn setup_test_db() -> SqlitePool {
  let pool = sqlx::sqlite::SqlitePoolOptions::new()
    .max_connections(1)
    .connect("sqlite::memory:")
    .await
    .expect("Failed to create in-memory database");

  sqlx::migrate!("./migrations")
    .run(&pool)
    .await
    .expect("Failed to run migrations");

  pool
}

/// Close a test database pool
pub async fn teardown_test_db(pool: SqlitePool) {
  pool.close().await;
}

/// ---------------------------------------------------------------------------
/// State Factories
/// ---------------------------------------------------------------------------

/// A snapshot with usable 1RMs for all four lifts and everything else at
/// defaults
#[allow(dead_code)]
pub fn state_with_one_rep_maxes() -> WizardState {
  let mut state = WizardState::default();
  state.lifts.press = LiftEntry { one_rep_max: Some(150.0), ..Default::default() };
  state.lifts.deadlift = LiftEntry { one_rep_max: Some(350.0), ..Default::default() };
  state.lifts.bench = LiftEntry { one_rep_max: Some(225.0), ..Default::default() };
  state.lifts.squat = LiftEntry { one_rep_max: Some(300.0), ..Default::default() };
  state
}
