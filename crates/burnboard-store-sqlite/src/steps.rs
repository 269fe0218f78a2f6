//! [`SqliteStepStore`]: step-count snapshots.

use std::path::Path;

use burnboard_core::{store::StepStore, tracking::StepSnapshot};
use rusqlite::OptionalExtension as _;

use crate::{
  Result,
  connect::{Location, connect},
  schema,
};

/// Step snapshots, backed by `step_counter.db`.
#[derive(Clone)]
pub struct SqliteStepStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStepStore {
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = connect(Location::File(path.as_ref()), schema::STEPS).await?;
    Ok(Self { conn })
  }

  pub async fn open_in_memory() -> Result<Self> {
    let conn = connect(Location::Memory, schema::STEPS).await?;
    Ok(Self { conn })
  }
}

impl StepStore for SqliteStepStore {
  type Error = crate::Error;

  async fn insert(&self, step_count: u32) -> Result<StepSnapshot> {
    let step_id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO step_counter (step_count) VALUES (?1)",
          rusqlite::params![step_count],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    tracing::trace!(step_id, step_count, "step snapshot");
    Ok(StepSnapshot { step_id, step_count })
  }

  async fn latest(&self) -> Result<Option<StepSnapshot>> {
    let snapshot = self
      .conn
      .call(|conn| {
        Ok(
          conn
            .query_row(
              "SELECT step_id, step_count FROM step_counter
               ORDER BY step_id DESC LIMIT 1",
              [],
              |row| {
                Ok(StepSnapshot {
                  step_id:    row.get(0)?,
                  step_count: row.get(1)?,
                })
              },
            )
            .optional()?,
        )
      })
      .await?;
    Ok(snapshot)
  }
}
