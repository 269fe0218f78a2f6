//! The five record-store traits.
//!
//! Each store owns exactly one table and knows nothing about the others.
//! Implemented by storage backends (e.g. `burnboard-store-sqlite`); the
//! service layer depends on these traits, not on a concrete backend.
//!
//! All methods return `Send` futures so the traits can be used from tasks on
//! a multi-threaded tokio runtime.

use std::future::Future;

use crate::{
  activity::{Activity, NewActivity},
  live::Subscription,
  tracking::{CalorieRecord, NewCalorieRecord, StepSnapshot},
  user::{NewUser, User},
  workout::{NewWorkout, Workout},
};

// ─── Credentials ─────────────────────────────────────────────────────────────

pub trait UserStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist a new user. No uniqueness check is made on `email`.
  fn register(
    &self,
    input: NewUser,
  ) -> impl Future<Output = Result<User, Self::Error>> + Send + '_;

  /// The first user (lowest id) whose email equals `email` exactly and whose
  /// stored hash verifies `password`.
  fn login<'a>(
    &'a self,
    email: &'a str,
    password: &'a str,
  ) -> impl Future<Output = Result<Option<User>, Self::Error>> + Send + 'a;
}

// ─── Counters ────────────────────────────────────────────────────────────────

pub trait StepStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  fn insert(
    &self,
    step_count: u32,
  ) -> impl Future<Output = Result<StepSnapshot, Self::Error>> + Send + '_;

  /// The snapshot with the highest id, or `None` if nothing was recorded.
  fn latest(
    &self,
  ) -> impl Future<Output = Result<Option<StepSnapshot>, Self::Error>> + Send + '_;
}

pub trait CalorieStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  fn insert(
    &self,
    input: NewCalorieRecord,
  ) -> impl Future<Output = Result<CalorieRecord, Self::Error>> + Send + '_;

  /// Every session, newest `recorded_at` first.
  fn list(
    &self,
  ) -> impl Future<Output = Result<Vec<CalorieRecord>, Self::Error>> + Send + '_;
}

// ─── Catalogs ────────────────────────────────────────────────────────────────

pub trait WorkoutStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  fn insert(
    &self,
    input: NewWorkout,
  ) -> impl Future<Output = Result<Workout, Self::Error>> + Send + '_;

  /// Every workout in insertion order.
  fn list(
    &self,
  ) -> impl Future<Output = Result<Vec<Workout>, Self::Error>> + Send + '_;

  /// Live view of [`WorkoutStore::list`]: the current contents, then the full
  /// contents again after every insert.
  fn subscribe(&self) -> Subscription<Vec<Workout>>;
}

pub trait ActivityStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  fn insert(
    &self,
    input: NewActivity,
  ) -> impl Future<Output = Result<Activity, Self::Error>> + Send + '_;

  /// Every activity in insertion order.
  fn list(
    &self,
  ) -> impl Future<Output = Result<Vec<Activity>, Self::Error>> + Send + '_;
}
