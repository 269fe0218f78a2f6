//! Workout descriptors and the category grouping used by the catalog view.

use serde::{Deserialize, Serialize};

use crate::{Result, error::require};

// ─── Records ─────────────────────────────────────────────────────────────────

/// A saved workout. `duration` and `category` are free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workout {
  pub workout_id:   i64,
  pub title:        String,
  pub instructions: String,
  pub duration:     String,
  pub category:     String,
}

/// Input to [`crate::store::WorkoutStore::insert`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewWorkout {
  pub title:        String,
  pub instructions: String,
  pub duration:     String,
  pub category:     String,
}

impl NewWorkout {
  /// Every field must contain something other than whitespace.
  pub fn validate(&self) -> Result<()> {
    require("title", &self.title)?;
    require("instructions", &self.instructions)?;
    require("duration", &self.duration)?;
    require("category", &self.category)?;
    Ok(())
  }
}

// ─── Grouping ────────────────────────────────────────────────────────────────

/// All workouts sharing one category string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryGroup {
  pub category: String,
  pub workouts: Vec<Workout>,
}

/// Partition `workouts` by exact category string.
///
/// Groups are ordered by the first appearance of their category; each group
/// keeps the input order of its members.
pub fn group_by_category(workouts: impl IntoIterator<Item = Workout>) -> Vec<CategoryGroup> {
  let mut groups: Vec<CategoryGroup> = Vec::new();
  for workout in workouts {
    match groups.iter_mut().find(|g| g.category == workout.category) {
      Some(group) => group.workouts.push(workout),
      None => groups.push(CategoryGroup {
        category: workout.category.clone(),
        workouts: vec![workout],
      }),
    }
  }
  groups
}

/// Inverse of [`group_by_category`] up to ordering: every workout, group by
/// group.
pub fn flatten_groups(groups: impl IntoIterator<Item = CategoryGroup>) -> Vec<Workout> {
  groups.into_iter().flat_map(|g| g.workouts).collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::Error;

  fn workout(id: i64, title: &str, category: &str) -> Workout {
    Workout {
      workout_id:   id,
      title:        title.into(),
      instructions: "do it".into(),
      duration:     "20 min".into(),
      category:     category.into(),
    }
  }

  #[test]
  fn groups_in_first_appearance_order() {
    let groups = group_by_category(vec![
      workout(1, "Push Day", "Strength"),
      workout(2, "Intervals", "Cardio"),
      workout(3, "Pull Day", "Strength"),
    ]);

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].category, "Strength");
    assert_eq!(
      groups[0].workouts.iter().map(|w| w.workout_id).collect::<Vec<_>>(),
      [1, 3]
    );
    assert_eq!(groups[1].category, "Cardio");
  }

  #[test]
  fn category_match_is_exact() {
    let groups = group_by_category(vec![
      workout(1, "a", "Strength"),
      workout(2, "b", "strength"),
    ]);
    assert_eq!(groups.len(), 2);
  }

  #[test]
  fn flatten_keeps_every_workout_once() {
    let input = vec![
      workout(1, "a", "X"),
      workout(2, "b", "Y"),
      workout(3, "c", "X"),
      workout(4, "d", "Z"),
      workout(5, "e", "Y"),
    ];
    let mut flat = flatten_groups(group_by_category(input.clone()));
    flat.sort_by_key(|w| w.workout_id);
    assert_eq!(flat, input);
  }

  #[test]
  fn empty_catalog_has_no_groups() {
    assert!(group_by_category(Vec::new()).is_empty());
  }

  #[test]
  fn validate_names_first_blank_field() {
    let mut input = NewWorkout {
      title:        "Push Day".into(),
      instructions: "3x10 bench".into(),
      duration:     "30 min".into(),
      category:     "Strength".into(),
    };
    assert!(input.validate().is_ok());

    input.duration = "   ".into();
    input.category = String::new();
    assert!(matches!(input.validate(), Err(Error::BlankField("duration"))));
  }
}
