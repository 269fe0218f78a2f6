//! Burnboard services: the auth flow, the step and calorie counters, the
//! workout catalog and the dashboard summary.
//!
//! Every service is generic over the store traits in
//! [`burnboard_core::store`] and receives its store explicitly. Storage and
//! presentation are the caller's responsibility.

pub mod auth;
pub mod calories;
pub mod dashboard;
pub mod error;
pub mod steps;
pub mod workouts;

mod ticker;

#[cfg(test)]
mod testing;

use std::{path::PathBuf, time::Duration};

use serde::Deserialize;

pub use error::{Error, Result};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime configuration, deserialised from `burnboard.toml` and
/// `BURNBOARD_*` environment variables.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
  /// Directory holding the per-store database files. A leading `~` is
  /// expanded by the binary.
  pub data_dir:            PathBuf,
  pub step_interval_ms:    u64,
  pub calorie_interval_ms: u64,
  /// Calories added on every calorie tick.
  pub calorie_increment:   u32,
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      data_dir:            PathBuf::from("~/.local/share/burnboard"),
      step_interval_ms:    1_000,
      calorie_interval_ms: 10_000,
      calorie_increment:   5,
    }
  }
}

impl AppConfig {
  pub fn step_interval(&self) -> Duration { tick_period(self.step_interval_ms) }

  pub fn calorie_interval(&self) -> Duration { tick_period(self.calorie_interval_ms) }
}

/// Tokio intervals reject a zero period.
fn tick_period(ms: u64) -> Duration { Duration::from_millis(ms.max(1)) }

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults_match_tracker_timings() {
    let cfg = AppConfig::default();
    assert_eq!(cfg.step_interval(), Duration::from_secs(1));
    assert_eq!(cfg.calorie_interval(), Duration::from_secs(10));
    assert_eq!(cfg.calorie_increment, 5);
  }

  #[test]
  fn zero_interval_is_clamped() {
    let cfg = AppConfig { step_interval_ms: 0, ..AppConfig::default() };
    assert_eq!(cfg.step_interval(), Duration::from_millis(1));
  }
}
