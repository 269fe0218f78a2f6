//! The step counter: one step per tick, persisted on every step.

use std::{sync::Arc, time::Duration};

use burnboard_core::{
  live::{Feed, Subscription},
  store::StepStore,
};
use tokio::sync::Mutex;

use crate::{Error, Result, ticker::Ticker};

/// Counts steps while started. Idle until [`StepCounter::start`].
pub struct StepCounter<S> {
  store:  Arc<S>,
  period: Duration,
  count:  Feed<u32>,
  /// Held across a step's count update and its write, so snapshots land in
  /// count order whether the step came from a tick or by hand.
  writes: Arc<Mutex<()>>,
  ticker: Option<Ticker>,
}

impl<S: StepStore + 'static> StepCounter<S> {
  /// Resume from the latest persisted snapshot, or 0 for an empty store.
  pub async fn open(store: Arc<S>, period: Duration) -> Result<Self> {
    let initial = store
      .latest()
      .await
      .map_err(Error::store)?
      .map_or(0, |s| s.step_count);

    Ok(Self {
      store,
      period,
      count: Feed::new(initial),
      writes: Arc::new(Mutex::new(())),
      ticker: None,
    })
  }

  pub fn count(&self) -> u32 { self.count.current() }

  /// Live view of the count.
  pub fn watch(&self) -> Subscription<u32> { self.count.subscribe() }

  pub fn is_counting(&self) -> bool { self.ticker.is_some() }

  /// Begin ticking from the current count. No-op if already counting.
  pub fn start(&mut self) {
    if self.ticker.is_some() {
      return;
    }

    let store = Arc::clone(&self.store);
    let count = self.count.clone();
    let writes = Arc::clone(&self.writes);
    self.ticker = Some(Ticker::spawn(self.period, move || {
      let store = Arc::clone(&store);
      let count = count.clone();
      let writes = Arc::clone(&writes);
      async move {
        step(&*store, &count, &writes).await;
      }
    }));
    tracing::info!(from = self.count(), "step counting started");
  }

  /// Stop ticking and return the count. The count is kept.
  pub async fn stop(&mut self) -> u32 {
    if let Some(ticker) = self.ticker.take() {
      ticker.stop().await;
      tracing::info!(steps = self.count(), "step counting stopped");
    }
    self.count()
  }

  /// Flip between counting and idle; returns whether counting now.
  pub async fn toggle(&mut self) -> bool {
    if self.is_counting() {
      self.stop().await;
    } else {
      self.start();
    }
    self.is_counting()
  }

  /// Record a single step by hand. Safe to call while counting.
  pub async fn increment(&self) -> u32 { step(&*self.store, &self.count, &self.writes).await }

  /// Stop counting, zero the count and persist the zero.
  pub async fn reset(&mut self) {
    self.stop().await;
    self.count.publish(0);
    persist(&*self.store, 0).await;
    tracing::info!("step count reset");
  }
}

async fn step<S: StepStore>(store: &S, count: &Feed<u32>, writes: &Mutex<()>) -> u32 {
  let _guard = writes.lock().await;
  let n = count.update(|c| *c = c.saturating_add(1));
  persist(store, n).await;
  n
}

/// Fire-and-forget: a failed write is logged and otherwise ignored.
async fn persist<S: StepStore>(store: &S, step_count: u32) {
  if let Err(e) = store.insert(step_count).await {
    tracing::warn!(error = %e, step_count, "failed to persist step snapshot");
  }
}
