//! Plain-text and JSON rendering of command results.

use std::io::Write as _;

use anyhow::Result;
use burnboard_app::dashboard::DashboardSummary;
use burnboard_core::{
  activity::Activity,
  tracking::CalorieRecord,
  user::User,
  workout::{CategoryGroup, Workout},
};
use serde::Serialize;
use serde_json::json;

pub struct Printer {
  json: bool,
}

impl Printer {
  pub fn new(json: bool) -> Self { Self { json } }

  fn emit<T: Serialize + ?Sized>(&self, value: &T, text: impl FnOnce() -> String) -> Result<()> {
    if self.json {
      println!("{}", serde_json::to_string_pretty(value)?);
    } else {
      println!("{}", text());
    }
    Ok(())
  }

  pub fn user(&self, user: &User) -> Result<()> {
    self.emit(user, || format!("{} <{}> [{}]", user.username, user.email, user.role))
  }

  pub fn steps(&self, count: u32) -> Result<()> {
    self.emit(&json!({ "steps": count }), || format!("{count} steps"))
  }

  /// A running value while a counter ticks. Text mode only.
  pub fn progress(&self, unit: &str, value: u32) {
    if !self.json {
      print!("\r{value} {unit}");
      std::io::stdout().flush().ok();
    }
  }

  pub fn calorie_session(&self, session: Option<&CalorieRecord>) -> Result<()> {
    if !self.json {
      println!();
    }
    self.emit(&session, || match session {
      Some(s) => format!("recorded {} kcal", s.calories_burned),
      None => "nothing burned, nothing recorded".to_string(),
    })
  }

  pub fn calorie_history(&self, sessions: &[CalorieRecord]) -> Result<()> {
    self.emit(sessions, || {
      sessions
        .iter()
        .map(|s| format!("{}  {:>5} kcal", s.recorded_at.format("%Y-%m-%d %H:%M"), s.calories_burned))
        .collect::<Vec<_>>()
        .join("\n")
    })
  }

  pub fn workout(&self, workout: &Workout) -> Result<()> {
    self.emit(workout, || format!("saved #{} {}", workout.workout_id, workout.title))
  }

  pub fn catalog(&self, groups: &[CategoryGroup]) -> Result<()> {
    self.emit(groups, || {
      let mut lines = Vec::new();
      for group in groups {
        lines.push(group.category.clone());
        for w in &group.workouts {
          lines.push(format!("  {} ({})", w.title, w.duration));
          lines.push(format!("    {}", w.instructions));
        }
      }
      lines.join("\n")
    })
  }

  pub fn activities(&self, activities: &[Activity]) -> Result<()> {
    self.emit(activities, || {
      activities
        .iter()
        .map(|a| format!("{}: {}", a.title, a.value))
        .collect::<Vec<_>>()
        .join("\n")
    })
  }

  pub fn dashboard(&self, summary: &DashboardSummary) -> Result<()> {
    self.emit(summary, || {
      let mut lines = vec![
        format!("Steps     {}", summary.steps),
        format!("Calories  {} kcal total", summary.total_calories),
        format!("Workouts  {}", summary.workout_count),
      ];
      if let Some(last) = &summary.last_calorie_session {
        lines.push(format!("Last burn {} kcal", last.calories_burned));
      }
      if !summary.activities.is_empty() {
        lines.push("Recent activities".to_string());
        lines.extend(summary.activities.iter().map(|a| format!("  {}: {}", a.title, a.value)));
      }
      lines.join("\n")
    })
  }
}
