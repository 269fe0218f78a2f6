//! In-memory store doubles for timer tests.
//!
//! These complete synchronously, so a paused tokio clock advances only when
//! every task is waiting on a timer and tick counts stay deterministic.

use std::sync::Mutex;

use burnboard_core::{
  store::{CalorieStore, StepStore},
  tracking::{CalorieRecord, NewCalorieRecord, StepSnapshot},
};

#[derive(Debug, thiserror::Error)]
#[error("store unavailable")]
pub struct Unavailable;

// ─── Steps ───────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MemoryStepStore {
  rows: Mutex<Vec<StepSnapshot>>,
}

impl MemoryStepStore {
  pub fn with_count(step_count: u32) -> Self {
    let store = Self::default();
    store.push(step_count);
    store
  }

  pub fn counts(&self) -> Vec<u32> {
    self.rows.lock().unwrap().iter().map(|r| r.step_count).collect()
  }

  fn push(&self, step_count: u32) -> StepSnapshot {
    let mut rows = self.rows.lock().unwrap();
    let snapshot = StepSnapshot { step_id: rows.len() as i64 + 1, step_count };
    rows.push(snapshot);
    snapshot
  }
}

impl StepStore for MemoryStepStore {
  type Error = Unavailable;

  async fn insert(&self, step_count: u32) -> Result<StepSnapshot, Unavailable> {
    Ok(self.push(step_count))
  }

  async fn latest(&self) -> Result<Option<StepSnapshot>, Unavailable> {
    Ok(self.rows.lock().unwrap().last().copied())
  }
}

// ─── Calories ────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MemoryCalorieStore {
  rows: Mutex<Vec<CalorieRecord>>,
}

impl CalorieStore for MemoryCalorieStore {
  type Error = Unavailable;

  async fn insert(&self, input: NewCalorieRecord) -> Result<CalorieRecord, Unavailable> {
    let mut rows = self.rows.lock().unwrap();
    let record = CalorieRecord {
      calorie_id:      rows.len() as i64 + 1,
      calories_burned: input.calories_burned,
      recorded_at:     input.recorded_at,
    };
    rows.push(record.clone());
    Ok(record)
  }

  async fn list(&self) -> Result<Vec<CalorieRecord>, Unavailable> {
    let mut rows = self.rows.lock().unwrap().clone();
    rows.reverse();
    Ok(rows)
  }
}

// ─── Failing ─────────────────────────────────────────────────────────────────

/// Accepts nothing; every call fails.
pub struct BrokenStore;

impl StepStore for BrokenStore {
  type Error = Unavailable;

  async fn insert(&self, _: u32) -> Result<StepSnapshot, Unavailable> { Err(Unavailable) }

  async fn latest(&self) -> Result<Option<StepSnapshot>, Unavailable> { Ok(None) }
}

impl CalorieStore for BrokenStore {
  type Error = Unavailable;

  async fn insert(&self, _: NewCalorieRecord) -> Result<CalorieRecord, Unavailable> {
    Err(Unavailable)
  }

  async fn list(&self) -> Result<Vec<CalorieRecord>, Unavailable> { Err(Unavailable) }
}
