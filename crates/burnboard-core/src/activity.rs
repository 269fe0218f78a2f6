//! Labeled activity records shown on the dashboard.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
  pub activity_id: i64,
  pub title:       String,
  pub value:       String,
}

/// Input to [`crate::store::ActivityStore::insert`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewActivity {
  pub title: String,
  pub value: String,
}
