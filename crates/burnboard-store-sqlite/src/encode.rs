//! Conversions between domain types and the plain values stored in SQLite
//! columns.
//!
//! Roles are stored as lowercase strings, calorie timestamps as Unix epoch
//! milliseconds.

use burnboard_core::{
  password::PasswordHash,
  tracking::CalorieRecord,
  user::{Role, User},
};
use chrono::{DateTime, Utc};

use crate::{Error, Result};

// ─── Role ────────────────────────────────────────────────────────────────────

pub fn encode_role(role: Role) -> &'static str { role.as_str() }

pub fn decode_role(s: &str) -> Result<Role> { Ok(s.parse()?) }

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_ms(dt: DateTime<Utc>) -> i64 { dt.timestamp_millis() }

pub fn decode_ms(ms: i64) -> Result<DateTime<Utc>> {
  DateTime::from_timestamp_millis(ms)
    .ok_or_else(|| Error::DateParse(format!("timestamp out of range: {ms}")))
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw values read directly from a `users` row.
pub struct RawUser {
  pub user_id:       i64,
  pub username:      String,
  pub email:         String,
  pub role:          String,
  pub password_hash: String,
}

impl RawUser {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      user_id:       row.get(0)?,
      username:      row.get(1)?,
      email:         row.get(2)?,
      role:          row.get(3)?,
      password_hash: row.get(4)?,
    })
  }

  pub fn password_hash(&self) -> PasswordHash {
    PasswordHash::from_phc(self.password_hash.as_str())
  }

  pub fn into_user(self) -> Result<User> {
    Ok(User {
      user_id:  self.user_id,
      username: self.username,
      email:    self.email,
      role:     decode_role(&self.role)?,
    })
  }
}

/// Raw values read directly from a `calorie_records` row.
pub struct RawCalorieRecord {
  pub calorie_id:      i64,
  pub calories_burned: u32,
  pub recorded_at_ms:  i64,
}

impl RawCalorieRecord {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      calorie_id:      row.get(0)?,
      calories_burned: row.get(1)?,
      recorded_at_ms:  row.get(2)?,
    })
  }

  pub fn into_record(self) -> Result<CalorieRecord> {
    Ok(CalorieRecord {
      calorie_id:      self.calorie_id,
      calories_burned: self.calories_burned,
      recorded_at:     decode_ms(self.recorded_at_ms)?,
    })
  }
}
