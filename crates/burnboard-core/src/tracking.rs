//! Counter snapshots written by the step and calorie trackers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted step count. Only the newest row is ever read back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepSnapshot {
  pub step_id:    i64,
  pub step_count: u32,
}

/// The total of one calorie-counting session, written when the session stops.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalorieRecord {
  pub calorie_id:      i64,
  pub calories_burned: u32,
  /// Millisecond precision; the store keeps epoch milliseconds.
  pub recorded_at:     DateTime<Utc>,
}

/// Input to [`crate::store::CalorieStore::insert`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCalorieRecord {
  pub calories_burned: u32,
  pub recorded_at:     DateTime<Utc>,
}

impl NewCalorieRecord {
  /// A record stamped with the current time.
  pub fn now(calories_burned: u32) -> Self {
    Self { calories_burned, recorded_at: Utc::now() }
  }
}
