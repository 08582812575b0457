// SPDX-License-Identifier: MIT OR Apache-2.0
//! Clock and frame subscriptions.
//!
//! A [`Ticker`] is the host's frame scheduler as seen by a sequence: it
//! tells the time and hands out frame subscriptions. A running sequence
//! holds exactly one subscription and gives it back when it completes or
//! is cancelled, which lets hosts stop their frame loop once nothing is
//! animating and lets tests check that nothing leaked.

use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Frame subscription handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

/// Clock plus frame subscription registry
pub trait Ticker: Send + Sync {
    /// Time since the ticker's origin
    fn now(&self) -> Duration;

    /// Request frames until the returned subscription is released
    fn subscribe(&self) -> SubscriptionId;

    /// Release a subscription. Unknown IDs are ignored.
    fn unsubscribe(&self, id: SubscriptionId);

    /// Number of subscriptions currently held
    fn active_subscriptions(&self) -> usize;
}

#[derive(Debug, Default)]
struct Subscriptions {
    next_id: u64,
    active: HashSet<u64>,
}

impl Subscriptions {
    fn subscribe(&mut self) -> SubscriptionId {
        let id = self.next_id;
        self.next_id += 1;
        self.active.insert(id);
        SubscriptionId(id)
    }

    fn unsubscribe(&mut self, id: SubscriptionId) {
        self.active.remove(&id.0);
    }
}

/// Ticker backed by the monotonic system clock
#[derive(Debug)]
pub struct FrameTicker {
    origin: Instant,
    subscriptions: Mutex<Subscriptions>,
}

impl FrameTicker {
    /// Create a ticker whose origin is now
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            subscriptions: Mutex::new(Subscriptions::default()),
        }
    }
}

impl Default for FrameTicker {
    fn default() -> Self {
        Self::new()
    }
}

impl Ticker for FrameTicker {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    fn subscribe(&self) -> SubscriptionId {
        self.subscriptions.lock().subscribe()
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.subscriptions.lock().unsubscribe(id);
    }

    fn active_subscriptions(&self) -> usize {
        self.subscriptions.lock().active.len()
    }
}

#[derive(Debug, Default)]
struct ManualState {
    now: Duration,
    subscriptions: Subscriptions,
}

/// Ticker whose time only moves when told to.
///
/// Clones share the same clock, so a test can keep one and hand another to
/// the sequence under test.
#[derive(Debug, Clone, Default)]
pub struct ManualTicker {
    state: Arc<Mutex<ManualState>>,
}

impl ManualTicker {
    /// Create a ticker at time zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward
    pub fn advance(&self, delta: Duration) {
        self.state.lock().now += delta;
    }

    /// Move the clock forward by `seconds`
    pub fn advance_secs(&self, seconds: f32) {
        self.advance(Duration::from_secs_f32(seconds.max(0.0)));
    }

    /// Set the clock to an absolute time, never moving it backwards
    pub fn set(&self, now: Duration) {
        let mut state = self.state.lock();
        state.now = state.now.max(now);
    }

    /// Set the clock to an absolute time in seconds
    pub fn set_secs(&self, seconds: f32) {
        self.set(Duration::from_secs_f32(seconds.max(0.0)));
    }
}

impl Ticker for ManualTicker {
    fn now(&self) -> Duration {
        self.state.lock().now
    }

    fn subscribe(&self) -> SubscriptionId {
        self.state.lock().subscriptions.subscribe()
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.state.lock().subscriptions.unsubscribe(id);
    }

    fn active_subscriptions(&self) -> usize {
        self.state.lock().subscriptions.active.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_shared_between_clones() {
        let ticker = ManualTicker::new();
        let other = ticker.clone();
        ticker.advance_secs(1.5);
        assert_eq!(other.now(), Duration::from_millis(1500));

        other.set_secs(1.0);
        assert_eq!(ticker.now(), Duration::from_millis(1500));
    }

    #[test]
    fn test_subscriptions() {
        let ticker = ManualTicker::new();
        let a = ticker.subscribe();
        let b = ticker.subscribe();
        assert_ne!(a, b);
        assert_eq!(ticker.active_subscriptions(), 2);

        ticker.unsubscribe(a);
        ticker.unsubscribe(a);
        assert_eq!(ticker.active_subscriptions(), 1);
    }

    #[test]
    fn test_frame_ticker_moves_forward() {
        let ticker = FrameTicker::new();
        let first = ticker.now();
        assert!(ticker.now() >= first);
        let id = ticker.subscribe();
        assert_eq!(ticker.active_subscriptions(), 1);
        ticker.unsubscribe(id);
        assert_eq!(ticker.active_subscriptions(), 0);
    }
}
