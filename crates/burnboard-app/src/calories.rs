//! The calorie counter: a fixed increment per tick, persisted once per
//! session when counting stops.

use std::{sync::Arc, time::Duration};

use burnboard_core::{
  live::{Feed, Subscription},
  store::CalorieStore,
  tracking::{CalorieRecord, NewCalorieRecord},
};

use crate::ticker::Ticker;

pub struct CalorieCounter<S> {
  store:     Arc<S>,
  period:    Duration,
  increment: u32,
  total:     Feed<u32>,
  ticker:    Option<Ticker>,
}

impl<S: CalorieStore + 'static> CalorieCounter<S> {
  /// An idle counter at zero.
  pub fn new(store: Arc<S>, period: Duration, increment: u32) -> Self {
    Self { store, period, increment, total: Feed::new(0), ticker: None }
  }

  /// Calories accumulated in the current session.
  pub fn total(&self) -> u32 { self.total.current() }

  pub fn watch(&self) -> Subscription<u32> { self.total.subscribe() }

  pub fn is_counting(&self) -> bool { self.ticker.is_some() }

  /// Begin a session. Every session starts from zero, since `stop` resets
  /// the total. No-op if already counting.
  pub fn start(&mut self) {
    if self.ticker.is_some() {
      return;
    }

    let total = self.total.clone();
    let increment = self.increment;
    self.ticker = Some(Ticker::spawn(self.period, move || {
      total.update(|t| *t = t.saturating_add(increment));
      std::future::ready(())
    }));
    tracing::info!("calorie counting started");
  }

  /// End the session. A non-zero total is persisted with the current time;
  /// the total then resets to zero whether or not the write succeeded.
  /// Returns the stored record, if any.
  pub async fn stop(&mut self) -> Option<CalorieRecord> {
    let ticker = self.ticker.take()?;
    ticker.stop().await;

    let burned = self.total.current();
    self.total.publish(0);
    tracing::info!(burned, "calorie counting stopped");

    if burned == 0 {
      return None;
    }

    match self.store.insert(NewCalorieRecord::now(burned)).await {
      Ok(record) => Some(record),
      Err(e) => {
        tracing::warn!(error = %e, burned, "failed to persist calorie session");
        None
      }
    }
  }

  /// Flip between counting and idle. Returns the record persisted when this
  /// call stopped a session.
  pub async fn toggle(&mut self) -> Option<CalorieRecord> {
    if self.is_counting() {
      self.stop().await
    } else {
      self.start();
      None
    }
  }
}
