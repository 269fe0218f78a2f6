//! [`SqliteActivityStore`]: labeled activity records for the dashboard.

use std::path::Path;

use burnboard_core::{
  activity::{Activity, NewActivity},
  store::ActivityStore,
};

use crate::{
  Result,
  connect::{Location, connect},
  schema,
};

/// Activities, backed by `activities.db`.
#[derive(Clone)]
pub struct SqliteActivityStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteActivityStore {
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = connect(Location::File(path.as_ref()), schema::ACTIVITIES).await?;
    Ok(Self { conn })
  }

  pub async fn open_in_memory() -> Result<Self> {
    let conn = connect(Location::Memory, schema::ACTIVITIES).await?;
    Ok(Self { conn })
  }
}

impl ActivityStore for SqliteActivityStore {
  type Error = crate::Error;

  async fn insert(&self, input: NewActivity) -> Result<Activity> {
    let title = input.title.clone();
    let value = input.value.clone();

    let activity_id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO activities (title, value) VALUES (?1, ?2)",
          rusqlite::params![title, value],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    tracing::debug!(activity_id, title = %input.title, "activity saved");
    Ok(Activity { activity_id, title: input.title, value: input.value })
  }

  async fn list(&self) -> Result<Vec<Activity>> {
    let rows = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT activity_id, title, value FROM activities ORDER BY activity_id",
        )?;
        let rows = stmt
          .query_map([], |row| {
            Ok(Activity {
              activity_id: row.get(0)?,
              title:       row.get(1)?,
              value:       row.get(2)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(rows)
  }
}
