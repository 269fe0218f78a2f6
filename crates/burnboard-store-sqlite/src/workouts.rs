//! [`SqliteWorkoutStore`]: the workout catalog, with a live feed.

use std::path::Path;

use burnboard_core::{
  live::{Feed, Subscription},
  store::WorkoutStore,
  workout::{NewWorkout, Workout},
};

use crate::{
  Result,
  connect::{Location, connect},
  schema,
};

const SELECT_ALL: &str =
  "SELECT workout_id, title, instructions, duration, category
   FROM workouts ORDER BY workout_id";

fn read_all(conn: &rusqlite::Connection) -> rusqlite::Result<Vec<Workout>> {
  let mut stmt = conn.prepare(SELECT_ALL)?;
  let rows = stmt
    .query_map([], |row| {
      Ok(Workout {
        workout_id:   row.get(0)?,
        title:        row.get(1)?,
        instructions: row.get(2)?,
        duration:     row.get(3)?,
        category:     row.get(4)?,
      })
    })?
    .collect();
  rows
}

/// Workouts, backed by `workouts.db`.
///
/// Clones share both the connection and the live feed, so an insert through
/// any clone reaches every subscriber.
#[derive(Clone)]
pub struct SqliteWorkoutStore {
  conn: tokio_rusqlite::Connection,
  feed: Feed<Vec<Workout>>,
}

impl SqliteWorkoutStore {
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = connect(Location::File(path.as_ref()), schema::WORKOUTS).await?;
    Self::with_connection(conn).await
  }

  pub async fn open_in_memory() -> Result<Self> {
    let conn = connect(Location::Memory, schema::WORKOUTS).await?;
    Self::with_connection(conn).await
  }

  /// Seed the feed with whatever the table already holds.
  async fn with_connection(conn: tokio_rusqlite::Connection) -> Result<Self> {
    let existing = conn.call(|conn| Ok(read_all(conn)?)).await?;
    Ok(Self { conn, feed: Feed::new(existing) })
  }
}

impl WorkoutStore for SqliteWorkoutStore {
  type Error = crate::Error;

  async fn insert(&self, input: NewWorkout) -> Result<Workout> {
    // Publish on the connection thread: calls run one at a time there, so
    // snapshots reach the feed in table order.
    let feed = self.feed.clone();
    let workout = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO workouts (title, instructions, duration, category)
           VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![
            input.title,
            input.instructions,
            input.duration,
            input.category,
          ],
        )?;
        let workout = Workout {
          workout_id:   conn.last_insert_rowid(),
          title:        input.title,
          instructions: input.instructions,
          duration:     input.duration,
          category:     input.category,
        };
        feed.publish(read_all(conn)?);
        Ok(workout)
      })
      .await?;

    tracing::debug!(workout_id = workout.workout_id, category = %workout.category, "workout saved");
    Ok(workout)
  }

  async fn list(&self) -> Result<Vec<Workout>> {
    Ok(self.conn.call(|conn| Ok(read_all(conn)?)).await?)
  }

  fn subscribe(&self) -> Subscription<Vec<Workout>> { self.feed.subscribe() }
}
