//! Virtual clock with scheduled callbacks.
//!
//! Pacing never blocks. Events are queued with a delay and fire when the owner
//! advances the clock past their due time, earliest first, ties in scheduling
//! order. Dropping the timeline drops every pending event unfired.

use std::time::Duration;

#[derive(Clone, Debug)]
struct Scheduled<E> {
    due: Duration,
    seq: u64,
    event: E,
}

/// Queue of events keyed by virtual due time.
#[derive(Clone, Debug)]
pub struct Timeline<E> {
    now: Duration,
    next_seq: u64,
    pending: Vec<Scheduled<E>>,
}

impl<E> Default for Timeline<E> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            next_seq: 0,
            pending: Vec::new(),
        }
    }
}

impl<E> Timeline<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since creation.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Queue `event` to fire `delay` from now.
    pub fn schedule(&mut self, delay: Duration, event: E) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(Scheduled {
            due: self.now + delay,
            seq,
            event,
        });
    }

    /// Due time of the earliest pending event.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.pending.iter().map(|s| s.due).min()
    }

    /// Remove the earliest event due at or before `until`, moving the clock to
    /// its due time.
    pub fn pop_due(&mut self, until: Duration) -> Option<E> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, s)| s.due <= until)
            .min_by_key(|(_, s)| (s.due, s.seq))
            .map(|(i, _)| i)?;

        let scheduled = self.pending.remove(index);
        self.now = self.now.max(scheduled.due);
        Some(scheduled.event)
    }

    /// Move the clock forward to `until` without firing anything.
    pub fn advance_to(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }

    /// Drop every pending event.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
