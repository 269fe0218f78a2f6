//! [`SqliteCalorieStore`]: one row per finished calorie session.

use std::path::Path;

use burnboard_core::{
  store::CalorieStore,
  tracking::{CalorieRecord, NewCalorieRecord},
};

use crate::{
  Result,
  connect::{Location, connect},
  encode::{RawCalorieRecord, decode_ms, encode_ms},
  schema,
};

/// Calorie sessions, backed by `calories.db`.
#[derive(Clone)]
pub struct SqliteCalorieStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteCalorieStore {
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = connect(Location::File(path.as_ref()), schema::CALORIES).await?;
    Ok(Self { conn })
  }

  pub async fn open_in_memory() -> Result<Self> {
    let conn = connect(Location::Memory, schema::CALORIES).await?;
    Ok(Self { conn })
  }
}

impl CalorieStore for SqliteCalorieStore {
  type Error = crate::Error;

  async fn insert(&self, input: NewCalorieRecord) -> Result<CalorieRecord> {
    let calories_burned = input.calories_burned;
    let recorded_at_ms  = encode_ms(input.recorded_at);

    let calorie_id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO calorie_records (calories_burned, recorded_at_ms)
           VALUES (?1, ?2)",
          rusqlite::params![calories_burned, recorded_at_ms],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    tracing::debug!(calorie_id, calories_burned, "calorie session recorded");

    // Read back at the stored precision so the result equals what `list`
    // returns later.
    Ok(CalorieRecord {
      calorie_id,
      calories_burned,
      recorded_at: decode_ms(recorded_at_ms)?,
    })
  }

  async fn list(&self) -> Result<Vec<CalorieRecord>> {
    let raws: Vec<RawCalorieRecord> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT calorie_id, calories_burned, recorded_at_ms
           FROM calorie_records
           ORDER BY recorded_at_ms DESC, calorie_id DESC",
        )?;
        let rows = stmt
          .query_map([], RawCalorieRecord::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawCalorieRecord::into_record).collect()
  }
}
