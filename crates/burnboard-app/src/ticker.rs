//! A cancellable periodic task shared by the counters.

use std::{future::Future, time::Duration};

use tokio::{
  sync::oneshot,
  task::JoinHandle,
  time::{Instant, MissedTickBehavior},
};

/// Runs `on_tick` once per period until stopped. The first tick fires one
/// full period after spawning.
///
/// A tick that is already running finishes before the ticker stops, so work
/// done in `on_tick` is never cut off halfway. Dropping the ticker aborts the
/// task.
pub(crate) struct Ticker {
  stop: Option<oneshot::Sender<()>>,
  task: JoinHandle<()>,
}

impl Ticker {
  pub fn spawn<F, Fut>(period: Duration, mut on_tick: F) -> Self
  where
    F: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send + 'static,
  {
    let (stop, mut stopped) = oneshot::channel::<()>();

    let task = tokio::spawn(async move {
      let mut interval = tokio::time::interval_at(Instant::now() + period, period);
      interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

      loop {
        tokio::select! {
          biased;
          _ = &mut stopped => break,
          _ = interval.tick() => on_tick().await,
        }
      }
    });

    Self { stop: Some(stop), task }
  }

  /// Signal the task and wait until it has exited.
  pub async fn stop(mut self) {
    if let Some(stop) = self.stop.take() {
      let _ = stop.send(());
    }
    if let Err(e) = (&mut self.task).await {
      tracing::warn!(error = %e, "tick task ended abnormally");
    }
  }
}

impl Drop for Ticker {
  fn drop(&mut self) { self.task.abort(); }
}
