//! SQLite backend for the Burnboard record stores.
//!
//! Every store gets its own database file and its own [`tokio_rusqlite`]
//! connection, so all database access runs on a dedicated thread without
//! blocking the async runtime.

mod activities;
mod calories;
mod connect;
mod encode;
mod schema;
mod steps;
mod stores;
mod users;
mod workouts;

pub mod error;

pub use activities::SqliteActivityStore;
pub use calories::SqliteCalorieStore;
pub use error::{Error, Result};
pub use steps::SqliteStepStore;
pub use stores::{
  ACTIVITIES_DB, CALORIES_DB, SqliteStores, STEPS_DB, USERS_DB, WORKOUTS_DB,
};
pub use users::SqliteUserStore;
pub use workouts::SqliteWorkoutStore;
