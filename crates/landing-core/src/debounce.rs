//! Cancel-and-restart bookkeeping for debounced actions.
//!
//! The frontend owns the actual timer; this type decides which scheduled run
//! is still current and records how large the burst it settles was.

use instant::Instant;
use std::time::Duration;

/// Identifies one scheduled run. Only the most recently issued ticket fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// Summary of a settled burst of events.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Settled {
    /// Events coalesced into this run.
    pub events: u32,
    /// Time from the first event of the burst to the run.
    pub elapsed: Duration,
}

#[derive(Debug, Default)]
pub struct Debounce {
    generation: u64,
    pending: bool,
    burst_events: u32,
    burst_started: Option<Instant>,
}

impl Debounce {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an event and supersede any pending run.
    pub fn schedule(&mut self) -> Ticket {
        self.generation = self.generation.wrapping_add(1);
        if !self.pending {
            self.burst_started = Some(Instant::now());
            self.burst_events = 0;
        }
        self.pending = true;
        self.burst_events += 1;
        Ticket(self.generation)
    }

    /// Claim the run for `ticket`. Stale tickets get `None`.
    pub fn fire(&mut self, ticket: Ticket) -> Option<Settled> {
        if !self.pending || ticket.0 != self.generation {
            return None;
        }
        self.pending = false;
        let elapsed = self
            .burst_started
            .take()
            .map(|t| t.elapsed())
            .unwrap_or_default();
        Some(Settled {
            events: std::mem::take(&mut self.burst_events),
            elapsed,
        })
    }

    pub fn cancel(&mut self) {
        self.pending = false;
        self.burst_started = None;
        self.burst_events = 0;
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_latest_ticket_fires() {
        let mut d = Debounce::new();
        let a = d.schedule();
        let b = d.schedule();
        let c = d.schedule();
        assert_eq!(d.fire(a), None);
        assert_eq!(d.fire(b), None);
        let settled = d.fire(c).unwrap();
        assert_eq!(settled.events, 3);
        assert!(!d.is_pending());
        assert_eq!(d.fire(c), None);
    }

    #[test]
    fn cancel_drops_pending_run() {
        let mut d = Debounce::new();
        let t = d.schedule();
        d.cancel();
        assert_eq!(d.fire(t), None);
    }

    #[test]
    fn bursts_are_counted_separately() {
        let mut d = Debounce::new();
        let t = d.schedule();
        assert_eq!(d.fire(t).map(|s| s.events), Some(1));
        d.schedule();
        let t = d.schedule();
        assert_eq!(d.fire(t).map(|s| s.events), Some(2));
    }
}
