//! The workout catalog: validated appends, read back grouped by category.

use std::sync::Arc;

use burnboard_core::{
  live::MappedSubscription,
  store::WorkoutStore,
  workout::{CategoryGroup, NewWorkout, Workout, group_by_category},
};

use crate::{Error, Result};

/// Live grouped catalog returned by [`WorkoutCatalog::watch`].
pub type CatalogSubscription =
  MappedSubscription<Vec<Workout>, fn(Vec<Workout>) -> Vec<CategoryGroup>>;

pub struct WorkoutCatalog<S> {
  store: Arc<S>,
}

impl<S: WorkoutStore> WorkoutCatalog<S> {
  pub fn new(store: Arc<S>) -> Self { Self { store } }

  /// Append `input` once every field is non-blank.
  pub async fn add(&self, input: NewWorkout) -> Result<Workout> {
    input.validate()?;
    self.store.insert(input).await.map_err(Error::store)
  }

  pub async fn groups(&self) -> Result<Vec<CategoryGroup>> {
    let workouts = self.store.list().await.map_err(Error::store)?;
    Ok(group_by_category(workouts))
  }

  /// The grouped catalog now and after every insert.
  pub fn watch(&self) -> CatalogSubscription {
    let regroup: fn(Vec<Workout>) -> Vec<CategoryGroup> = group_by_category;
    self.store.subscribe().map(regroup)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use burnboard_core::workout::flatten_groups;
  use burnboard_store_sqlite::SqliteWorkoutStore;

  async fn catalog() -> WorkoutCatalog<SqliteWorkoutStore> {
    let store = SqliteWorkoutStore::open_in_memory().await.expect("in-memory store");
    WorkoutCatalog::new(Arc::new(store))
  }

  fn workout(title: &str, category: &str) -> NewWorkout {
    NewWorkout {
      title:        title.into(),
      instructions: "follow along".into(),
      duration:     "20 min".into(),
      category:     category.into(),
    }
  }

  #[tokio::test]
  async fn push_day_appears_under_strength() {
    let catalog = catalog().await;
    let mut live = catalog.watch();
    assert_eq!(live.next().await, Some(vec![]));

    let saved = catalog
      .add(NewWorkout {
        title:        "Push Day".into(),
        instructions: "3x10 bench".into(),
        duration:     "30 min".into(),
        category:     "Strength".into(),
      })
      .await
      .unwrap();

    let groups = live.next().await.unwrap();
    assert_eq!(groups, vec![CategoryGroup {
      category: "Strength".into(),
      workouts: vec![saved],
    }]);
  }

  #[tokio::test]
  async fn groups_flatten_back_to_inserted_set() {
    let catalog = catalog().await;
    let mut inserted = Vec::new();
    for (title, category) in [
      ("Run", "Cardio"),
      ("Squat", "Strength"),
      ("Row", "Cardio"),
      ("Stretch", "Mobility"),
      ("Deadlift", "Strength"),
    ] {
      inserted.push(catalog.add(workout(title, category)).await.unwrap());
    }

    let groups = catalog.groups().await.unwrap();
    assert_eq!(
      groups.iter().map(|g| g.category.as_str()).collect::<Vec<_>>(),
      ["Cardio", "Strength", "Mobility"]
    );

    let mut flat = flatten_groups(groups);
    assert_eq!(flat.len(), inserted.len());
    flat.sort_by_key(|w| w.workout_id);
    assert_eq!(flat, inserted);
  }

  #[tokio::test]
  async fn blank_fields_are_rejected() {
    let catalog = catalog().await;
    let mut input = workout("Run", "Cardio");
    input.instructions = "  ".into();

    let err = catalog.add(input).await.unwrap_err();
    assert!(matches!(
      err,
      Error::Validation(burnboard_core::Error::BlankField("instructions"))
    ));
    assert!(catalog.groups().await.unwrap().is_empty());
  }

  #[tokio::test]
  async fn watch_after_unsubscribe_starts_fresh() {
    let catalog = catalog().await;
    catalog.add(workout("Run", "Cardio")).await.unwrap();

    let first = catalog.watch();
    first.unsubscribe();

    let mut second = catalog.watch();
    let groups = second.next().await.unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].workouts[0].title, "Run");
  }
}
