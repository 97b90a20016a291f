//! Deferred-work scheduling used by the resize replay
//!
//! The capture component never talks to a platform timer directly. It asks a
//! `Scheduler` for a token, and the host calls back with that token once the
//! delay has elapsed. `ManualScheduler` is a virtual clock for hosts that pump
//! their own event loop (and for tests).

use std::time::Duration;

/// Opaque handle for one scheduled callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken(u64);

impl TimerToken {
    pub fn get(&self) -> u64 {
        self.0
    }
}

/// Schedule/cancel capability injected into `SignatureCapture`
pub trait Scheduler {
    /// Arrange for `token` to be delivered after `delay`
    fn schedule(&mut self, delay: Duration) -> TimerToken;

    /// Forget a pending token; cancelling an unknown token is a no-op
    fn cancel(&mut self, token: TimerToken);
}

impl<S: Scheduler + ?Sized> Scheduler for Box<S> {
    fn schedule(&mut self, delay: Duration) -> TimerToken {
        (**self).schedule(delay)
    }

    fn cancel(&mut self, token: TimerToken) {
        (**self).cancel(token)
    }
}

/// Virtual-clock scheduler; time only moves on `advance`
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    next_token: u64,
    pending: Vec<(Duration, TimerToken)>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn is_pending(&self, token: TimerToken) -> bool {
        self.pending.iter().any(|(_, t)| *t == token)
    }

    /// Move the clock forward and return tokens that came due, earliest first
    pub fn advance(&mut self, by: Duration) -> Vec<TimerToken> {
        self.now += by;
        let now = self.now;
        let mut due: Vec<(Duration, TimerToken)> = Vec::new();
        self.pending.retain(|entry| {
            if entry.0 <= now {
                due.push(*entry);
                false
            } else {
                true
            }
        });
        due.sort();
        due.into_iter().map(|(_, token)| token).collect()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration) -> TimerToken {
        self.next_token += 1;
        let token = TimerToken(self.next_token);
        self.pending.push((self.now + delay, token));
        token
    }

    fn cancel(&mut self, token: TimerToken) {
        self.pending.retain(|(_, t)| *t != token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_fire_after_delay() {
        let mut scheduler = ManualScheduler::new();
        let token = scheduler.schedule(Duration::from_millis(100));
        assert!(scheduler.advance(Duration::from_millis(99)).is_empty());
        assert_eq!(scheduler.advance(Duration::from_millis(1)), vec![token]);
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[test]
    fn test_cancelled_token_never_fires() {
        let mut scheduler = ManualScheduler::new();
        let token = scheduler.schedule(Duration::from_millis(10));
        scheduler.cancel(token);
        assert!(!scheduler.is_pending(token));
        assert!(scheduler.advance(Duration::from_secs(1)).is_empty());
    }

    #[test]
    fn test_due_tokens_come_back_in_deadline_order() {
        let mut scheduler = ManualScheduler::new();
        let late = scheduler.schedule(Duration::from_millis(50));
        let early = scheduler.schedule(Duration::from_millis(20));
        assert_eq!(scheduler.advance(Duration::from_millis(60)), vec![early, late]);
    }
}
