//! Wizard-state snapshot store
//!
//! The only I/O in the crate: snapshots are saved as JSON rows in SQLite,
//! keyed by profile. Reads degrade to "no stored state" - a missing or
//! corrupt row is `Ok(None)`, never an error that could leak into the pure
//! core.

use chrono::Utc;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use sqlx::Row;
use std::fs;
use std::path::Path;

use crate::state::WizardState;

pub type DbPool = SqlitePool;

/// ---------------------------------------------------------------------------
/// Error Handling
/// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
  #[error("Database error: {0}")]
  Database(#[from] sqlx::Error),

  #[error("Migration error: {0}")]
  Migration(#[from] sqlx::migrate::MigrateError),

  #[error("Serialization error: {0}")]
  Serialization(#[from] serde_json::Error),

  #[error("Store path error: {0}")]
  Path(String),
}

impl serde::Serialize for StoreError {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: serde::Serializer,
  {
    serializer.serialize_str(&self.to_string())
  }
}

/// ---------------------------------------------------------------------------
/// Pool Setup
/// ---------------------------------------------------------------------------

/// Open (creating if needed) the snapshot database at `path` and run
/// migrations.
pub async fn open_store(path: &Path) -> Result<DbPool, StoreError> {
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent).map_err(|e| StoreError::Path(e.to_string()))?;
  }
  let db_url = format!("sqlite://{}?mode=rwc", path.display());

  let pool = SqlitePoolOptions::new()
    .max_connections(5)
    .connect(&db_url)
    .await?;

  sqlx::migrate!("./migrations").run(&pool).await?;

  Ok(pool)
}

/// ---------------------------------------------------------------------------
/// Snapshot Operations
/// ---------------------------------------------------------------------------

/// Upsert the snapshot for `profile`
pub async fn save_state(
  pool: &DbPool,
  profile: &str,
  state: &WizardState,
) -> Result<(), StoreError> {
  let state_json = serde_json::to_string(state)?;
  let updated_at = Utc::now().to_rfc3339();

  sqlx::query(
    r#"
    INSERT INTO wizard_snapshots (profile, state_json, updated_at)
    VALUES (?1, ?2, ?3)
    ON CONFLICT(profile) DO UPDATE SET
      state_json = excluded.state_json,
      updated_at = excluded.updated_at
    "#,
  )
  .bind(profile)
  .bind(&state_json)
  .bind(&updated_at)
  .execute(pool)
  .await?;

  Ok(())
}

/// Load the snapshot for `profile`. A missing row or a row that no longer
/// parses both come back as `Ok(None)`.
pub async fn load_state(pool: &DbPool, profile: &str) -> Result<Option<WizardState>, StoreError> {
  let row = sqlx::query("SELECT state_json FROM wizard_snapshots WHERE profile = ?1")
    .bind(profile)
    .fetch_optional(pool)
    .await?;

  Ok(row.and_then(|row| {
    let state_json: String = row.get("state_json");
    serde_json::from_str(&state_json).ok()
  }))
}

/// Delete the snapshot for `profile`; deleting a missing profile is a no-op
pub async fn clear_state(pool: &DbPool, profile: &str) -> Result<(), StoreError> {
  sqlx::query("DELETE FROM wizard_snapshots WHERE profile = ?1")
    .bind(profile)
    .execute(pool)
    .await?;
  Ok(())
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
