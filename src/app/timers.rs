//! Fire-and-forget timers for transient effects.
//!
//! Timers are never cancelled or replaced. Scheduling the same effect twice
//! leaves two timers running, and whichever fires first wins; targets that
//! have disappeared by the time a timer fires are ignored by the handler.

use std::time::{Duration, Instant};
use uuid::Uuid;

use super::displays::DisplaySlot;
use crate::models::Tier;

/// A deferred state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Remove the drop highlight from a card
    ClearCardHighlight(Uuid),
    /// Remove emphasis from one price display
    ClearPriceEmphasis(Tier, DisplaySlot),
    /// Start fading a toast
    FadeToast(u64),
    /// Remove a faded toast
    RemoveToast(u64),
    /// Finish the simulated save and show the summary
    FinishSave,
    /// Return the reset control to idle
    SettleReset,
}

#[derive(Debug, Clone, Copy)]
struct Scheduled {
    due: Instant,
    seq: u64,
    effect: Effect,
}

/// Pending effects ordered by due time, then by scheduling order.
#[derive(Debug, Default)]
pub struct TimerQueue {
    pending: Vec<Scheduled>,
    next_seq: u64,
}

impl TimerQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `effect` to fire `delay` after `now`.
    pub fn schedule(&mut self, now: Instant, delay: Duration, effect: Effect) {
        self.pending.push(Scheduled {
            due: now + delay,
            seq: self.next_seq,
            effect,
        });
        self.next_seq += 1;
    }

    /// Removes and returns every effect due at `now`, earliest first.
    pub fn drain_due(&mut self, now: Instant) -> Vec<Effect> {
        let mut due: Vec<Scheduled> = Vec::new();
        self.pending.retain(|s| {
            if s.due <= now {
                due.push(*s);
                false
            } else {
                true
            }
        });
        due.sort_by_key(|s| (s.due, s.seq));
        due.into_iter().map(|s| s.effect).collect()
    }

    /// Number of timers still pending.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether no timer is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Due time of the earliest pending timer.
    #[must_use]
    pub fn next_due(&self) -> Option<Instant> {
        self.pending.iter().map(|s| s.due).min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_respects_due_time() {
        let now = Instant::now();
        let mut timers = TimerQueue::new();
        timers.schedule(now, Duration::from_millis(600), Effect::FinishSave);
        timers.schedule(now, Duration::from_millis(300), Effect::SettleReset);

        assert!(timers.drain_due(now).is_empty());
        assert_eq!(
            timers.drain_due(now + Duration::from_millis(300)),
            vec![Effect::SettleReset]
        );
        assert_eq!(timers.len(), 1);
        assert_eq!(
            timers.drain_due(now + Duration::from_secs(1)),
            vec![Effect::FinishSave]
        );
        assert!(timers.is_empty());
    }

    #[test]
    fn test_same_due_keeps_schedule_order() {
        let now = Instant::now();
        let mut timers = TimerQueue::new();
        timers.schedule(now, Duration::from_millis(10), Effect::FadeToast(2));
        timers.schedule(now, Duration::from_millis(10), Effect::FadeToast(1));

        assert_eq!(
            timers.drain_due(now + Duration::from_millis(10)),
            vec![Effect::FadeToast(2), Effect::FadeToast(1)]
        );
    }

    #[test]
    fn test_duplicates_are_not_collapsed() {
        let now = Instant::now();
        let mut timers = TimerQueue::new();
        timers.schedule(now, Duration::from_millis(5), Effect::SettleReset);
        timers.schedule(now, Duration::from_millis(50), Effect::SettleReset);
        assert_eq!(timers.len(), 2);
        assert_eq!(timers.next_due(), Some(now + Duration::from_millis(5)));
    }
}
