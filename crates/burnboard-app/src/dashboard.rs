//! Read-only summary across the stores, for the dashboard screen.

use burnboard_core::{
  activity::Activity,
  store::{ActivityStore, CalorieStore, StepStore, WorkoutStore},
  tracking::CalorieRecord,
};
use serde::Serialize;

use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
  /// Latest persisted step count.
  pub steps:                u32,
  /// Most recently recorded calorie session.
  pub last_calorie_session: Option<CalorieRecord>,
  /// Sum over every calorie session.
  pub total_calories:       u64,
  pub workout_count:        usize,
  pub activities:           Vec<Activity>,
}

impl DashboardSummary {
  pub async fn load<St, Ca, Wo, Ac>(
    steps: &St,
    calories: &Ca,
    workouts: &Wo,
    activities: &Ac,
  ) -> Result<Self>
  where
    St: StepStore,
    Ca: CalorieStore,
    Wo: WorkoutStore,
    Ac: ActivityStore,
  {
    let latest = steps.latest().await.map_err(Error::store)?;
    let sessions = calories.list().await.map_err(Error::store)?;
    let workout_count = workouts.list().await.map_err(Error::store)?.len();
    let activities = activities.list().await.map_err(Error::store)?;

    let total_calories = sessions.iter().map(|s| u64::from(s.calories_burned)).sum();

    Ok(Self {
      steps: latest.map_or(0, |s| s.step_count),
      last_calorie_session: sessions.into_iter().next(),
      total_calories,
      workout_count,
      activities,
    })
  }
}
