//! Discrete-event scheduler
//!
//! A simulated-time timer facility for the per-car motion chains. Events
//! fire in timestamp order, ties broken by scheduling order. Each car has
//! at most one outstanding event at any time; the motion phases are
//! sequential per car, so a second schedule for the same car is a
//! programming defect.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::time::Duration;

use super::types::CarId;

/// Action to perform for a car when its timer fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarEvent {
    /// Advance one floor toward the committed target
    StepFloor,
    /// Dwell finished; re-read the queue and continue or go idle
    EndDwell,
}

/// An event popped from the scheduler, due at `due` simulated time
#[derive(Debug, Clone, Copy)]
pub struct FiredEvent {
    pub due: Duration,
    pub car: CarId,
    pub event: CarEvent,
}

#[derive(Debug, Clone, Copy)]
struct ScheduledEvent {
    due: Duration,
    seq: u64,
    car: CarId,
    event: CarEvent,
}

impl Ord for ScheduledEvent {
    fn cmp(&self, other: &Self) -> Ordering {
        self.due.cmp(&other.due).then(self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for ScheduledEvent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ScheduledEvent {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ScheduledEvent {}

/// Min-heap of pending car timers over simulated time
#[derive(Debug)]
pub struct EventScheduler {
    heap: BinaryHeap<Reverse<ScheduledEvent>>,
    outstanding: Vec<bool>,
    next_seq: u64,
}

impl EventScheduler {
    pub fn new(car_count: usize) -> Self {
        Self {
            heap: BinaryHeap::new(),
            outstanding: vec![false; car_count],
            next_seq: 0,
        }
    }

    /// Schedule `event` for `car` to fire `delay` after `now`.
    pub fn schedule_after(&mut self, now: Duration, car: CarId, delay: Duration, event: CarEvent) {
        debug_assert!(
            !self.outstanding[car.0],
            "{} already has an outstanding event",
            car
        );
        self.outstanding[car.0] = true;
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(ScheduledEvent {
            due: now + delay,
            seq,
            car,
            event,
        }));
    }

    /// Due time of the next event, if any
    pub fn next_due(&self) -> Option<Duration> {
        self.heap.peek().map(|Reverse(event)| event.due)
    }

    /// Pop the next event in (due, scheduling) order
    pub fn pop_next(&mut self) -> Option<FiredEvent> {
        let Reverse(event) = self.heap.pop()?;
        self.outstanding[event.car.0] = false;
        Some(FiredEvent {
            due: event.due,
            car: event.car,
            event: event.event,
        })
    }

    pub fn has_outstanding(&self, car: CarId) -> bool {
        self.outstanding.get(car.0).copied().unwrap_or(false)
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Drop every pending timer; used on teardown so no callback can run
    /// after the world is torn down.
    pub fn cancel_all(&mut self) {
        self.heap.clear();
        self.outstanding.fill(false);
    }
}
