//! Publish/subscribe plumbing for live queries.
//!
//! A store owns the [`Feed`] for a table and publishes the full table
//! contents after every write. Readers hold a [`Subscription`], which always
//! observes the most recent snapshot; intermediate snapshots may be skipped
//! when a reader falls behind.

use std::sync::Arc;

use tokio::sync::watch;

// ─── Feed ────────────────────────────────────────────────────────────────────

/// The publishing side of a live query. Clones share one channel.
#[derive(Debug)]
pub struct Feed<T> {
  tx: Arc<watch::Sender<T>>,
}

impl<T> Clone for Feed<T> {
  fn clone(&self) -> Self { Self { tx: Arc::clone(&self.tx) } }
}

impl<T: Clone> Feed<T> {
  pub fn new(initial: T) -> Self {
    let (tx, _) = watch::channel(initial);
    Self { tx: Arc::new(tx) }
  }

  /// Replace the current snapshot and wake every subscriber. Succeeds even
  /// when nobody is listening.
  pub fn publish(&self, value: T) { self.tx.send_replace(value); }

  /// Modify the current snapshot in place, wake every subscriber and return
  /// the new value. Concurrent updates are applied one after another.
  pub fn update(&self, f: impl FnOnce(&mut T)) -> T {
    let mut updated = None;
    self.tx.send_modify(|value| {
      f(value);
      updated = Some(value.clone());
    });
    updated.unwrap_or_else(|| self.current())
  }

  pub fn current(&self) -> T { self.tx.borrow().clone() }

  pub fn subscribe(&self) -> Subscription<T> {
    Subscription { rx: self.tx.subscribe(), primed: false }
  }

  /// Number of live subscriptions.
  pub fn subscriber_count(&self) -> usize { self.tx.receiver_count() }
}

// ─── Subscription ────────────────────────────────────────────────────────────

/// The receiving side of a live query.
///
/// The first call to [`Subscription::next`] yields the snapshot current at
/// that moment; later calls wait for the next publish.
#[derive(Debug)]
pub struct Subscription<T> {
  rx:     watch::Receiver<T>,
  primed: bool,
}

impl<T: Clone> Subscription<T> {
  /// The latest published snapshot, without waiting.
  pub fn current(&self) -> T { self.rx.borrow().clone() }

  /// Wait for the next snapshot. Returns `None` once the feed is gone.
  pub async fn next(&mut self) -> Option<T> {
    if !self.primed {
      self.primed = true;
      return Some(self.rx.borrow_and_update().clone());
    }
    self.rx.changed().await.ok()?;
    Some(self.rx.borrow_and_update().clone())
  }

  /// Stop receiving snapshots. Dropping the subscription does the same.
  pub fn unsubscribe(self) {}

  /// Adapt each snapshot with `f`, keeping the subscription semantics.
  pub fn map<U, F>(self, f: F) -> MappedSubscription<T, F>
  where
    F: FnMut(T) -> U,
  {
    MappedSubscription { inner: self, f }
  }
}

/// A [`Subscription`] whose snapshots pass through a conversion.
pub struct MappedSubscription<T, F> {
  inner: Subscription<T>,
  f:     F,
}

impl<T, U, F> MappedSubscription<T, F>
where
  T: Clone,
  F: FnMut(T) -> U,
{
  pub async fn next(&mut self) -> Option<U> {
    let value = self.inner.next().await?;
    Some((self.f)(value))
  }

  pub fn unsubscribe(self) {}
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn first_next_yields_current_snapshot() {
    let feed = Feed::new(vec![1]);
    let mut sub = feed.subscribe();
    assert_eq!(sub.next().await, Some(vec![1]));
  }

  #[tokio::test]
  async fn publish_wakes_subscriber() {
    let feed = Feed::new(0);
    let mut sub = feed.subscribe();
    assert_eq!(sub.next().await, Some(0));

    let publisher = feed.clone();
    tokio::spawn(async move { publisher.publish(7) });

    assert_eq!(sub.next().await, Some(7));
    assert_eq!(sub.current(), 7);
  }

  #[tokio::test]
  async fn update_modifies_in_place() {
    let feed = Feed::new(1);
    let mut sub = feed.subscribe();
    sub.next().await;
    assert_eq!(feed.update(|n| *n += 4), 5);
    assert_eq!(sub.next().await, Some(5));
  }

  #[tokio::test]
  async fn next_returns_none_after_feed_dropped() {
    let feed = Feed::new("a");
    let mut sub = feed.subscribe();
    sub.next().await;
    drop(feed);
    assert_eq!(sub.next().await, None);
  }

  #[tokio::test]
  async fn unsubscribe_releases_receiver() {
    let feed = Feed::new(());
    let sub = feed.subscribe();
    let other = feed.subscribe();
    assert_eq!(feed.subscriber_count(), 2);
    sub.unsubscribe();
    drop(other);
    assert_eq!(feed.subscriber_count(), 0);
    feed.publish(());
  }

  #[tokio::test]
  async fn mapped_subscription_converts_snapshots() {
    let feed = Feed::new(vec![1, 2]);
    let mut sub = feed.subscribe().map(|v: Vec<i32>| v.len());
    assert_eq!(sub.next().await, Some(2));
    feed.publish(vec![1, 2, 3]);
    assert_eq!(sub.next().await, Some(3));
  }
}
