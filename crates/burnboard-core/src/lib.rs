//! Core types and trait definitions for Burnboard.
//!
//! This crate is deliberately free of database dependencies. The SQLite
//! backend and the service layer both depend on it.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod activity;
pub mod error;
pub mod live;
pub mod password;
pub mod store;
pub mod tracking;
pub mod user;
pub mod workout;

pub use error::{Error, Result};
