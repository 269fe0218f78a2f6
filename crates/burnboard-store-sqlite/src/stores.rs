//! [`SqliteStores`]: every store, opened together at startup.

use std::path::Path;

use crate::{
  Result, SqliteActivityStore, SqliteCalorieStore, SqliteStepStore,
  SqliteUserStore, SqliteWorkoutStore,
};

pub const USERS_DB: &str = "users.db";
pub const STEPS_DB: &str = "step_counter.db";
pub const CALORIES_DB: &str = "calories.db";
pub const WORKOUTS_DB: &str = "workouts.db";
pub const ACTIVITIES_DB: &str = "activities.db";

/// One handle per store. Built once and handed to whichever service needs a
/// store; nothing here is global.
#[derive(Clone)]
pub struct SqliteStores {
  pub users:      SqliteUserStore,
  pub steps:      SqliteStepStore,
  pub calories:   SqliteCalorieStore,
  pub workouts:   SqliteWorkoutStore,
  pub activities: SqliteActivityStore,
}

impl SqliteStores {
  /// Open (or create) all five database files inside `dir`, creating the
  /// directory if needed.
  pub async fn open(dir: impl AsRef<Path>) -> Result<Self> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)?;

    let stores = Self {
      users:      SqliteUserStore::open(dir.join(USERS_DB)).await?,
      steps:      SqliteStepStore::open(dir.join(STEPS_DB)).await?,
      calories:   SqliteCalorieStore::open(dir.join(CALORIES_DB)).await?,
      workouts:   SqliteWorkoutStore::open(dir.join(WORKOUTS_DB)).await?,
      activities: SqliteActivityStore::open(dir.join(ACTIVITIES_DB)).await?,
    };

    tracing::info!(dir = %dir.display(), "stores ready");
    Ok(stores)
  }

  /// Open every store in memory, for tests.
  pub async fn open_in_memory() -> Result<Self> {
    Ok(Self {
      users:      SqliteUserStore::open_in_memory().await?,
      steps:      SqliteStepStore::open_in_memory().await?,
      calories:   SqliteCalorieStore::open_in_memory().await?,
      workouts:   SqliteWorkoutStore::open_in_memory().await?,
      activities: SqliteActivityStore::open_in_memory().await?,
    })
  }
}
