//! Car motion state machine
//!
//! Each car is an independent Idle/Moving/Dwelling state machine consuming
//! its FIFO target queue one floor-step at a time. The car mutates only
//! itself and reports what should happen next via `MotionOutcome`; the
//! world acts on the outcome (scheduling timers, clearing the request
//! board, notifying observers).

use std::collections::VecDeque;

use super::types::{CarId, CarSnapshot, CarState};

/// What the world should do after a car transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionOutcome {
    /// Schedule one single-floor step timer for this car
    Step,
    /// The car reached its committed target: the floor was popped from the
    /// queue. `dwell` is true when more stops remain and a dwell timer
    /// should be scheduled.
    Arrived { floor: usize, dwell: bool },
    /// Nothing to do; the car is idle
    Idle,
}

/// One elevator car
///
/// The motion engine owns all mutation of `current_floor` and `state`; the
/// dispatcher only ever appends to `target_queue`. Every queue entry is a
/// valid floor index (validated at the dispatch boundary).
#[derive(Debug, Clone)]
pub struct SimCar {
    pub id: CarId,
    pub current_floor: usize,
    /// FIFO destination queue; duplicates allowed
    pub target_queue: VecDeque<usize>,
    pub state: CarState,
    /// Target committed at the start of the current Moving phase. Fixed for
    /// the whole phase: appends during flight never retarget the car.
    committed_target: Option<usize>,
}

impl SimCar {
    /// New idle car parked at floor 0
    pub fn new(id: CarId) -> Self {
        Self {
            id,
            current_floor: 0,
            target_queue: VecDeque::new(),
            state: CarState::Idle,
            committed_target: None,
        }
    }

    /// Commit to the current queue head and start a Moving phase.
    ///
    /// Called when an idle car's queue becomes non-empty and when a dwell
    /// ends (so floors appended during the dwell are picked up here). An
    /// empty queue is a no-op: the car simply stays idle.
    pub fn begin_phase(&mut self) -> MotionOutcome {
        match self.target_queue.front().copied() {
            None => {
                self.state = CarState::Idle;
                self.committed_target = None;
                MotionOutcome::Idle
            }
            Some(target) if target == self.current_floor => {
                // Zero-length move: straight to arrival handling
                self.committed_target = Some(target);
                self.arrive()
            }
            Some(target) => {
                self.committed_target = Some(target);
                self.state = CarState::Moving;
                MotionOutcome::Step
            }
        }
    }

    /// One fired step timer: move exactly one floor toward the committed
    /// target, arriving if that floor is the target.
    pub fn advance_one_floor(&mut self) -> MotionOutcome {
        debug_assert_eq!(self.state, CarState::Moving);
        let Some(target) = self.committed_target else {
            // A step timer without a committed target is a programming
            // defect; fall back to re-reading the queue.
            debug_assert!(false, "step fired for {} with no committed target", self.id);
            return self.begin_phase();
        };
        if target > self.current_floor {
            self.current_floor += 1;
        } else if target < self.current_floor {
            self.current_floor -= 1;
        }
        if self.current_floor == target {
            self.arrive()
        } else {
            MotionOutcome::Step
        }
    }

    /// One fired dwell timer: re-read the (possibly grown) queue and either
    /// start the next phase or go idle.
    pub fn end_dwell(&mut self) -> MotionOutcome {
        debug_assert_eq!(self.state, CarState::Dwelling);
        self.begin_phase()
    }

    fn arrive(&mut self) -> MotionOutcome {
        let floor = self.current_floor;
        let popped = self.target_queue.pop_front();
        debug_assert_eq!(popped, Some(floor), "queue head diverged from committed target");
        self.committed_target = None;
        if self.target_queue.is_empty() {
            self.state = CarState::Idle;
            MotionOutcome::Arrived { floor, dwell: false }
        } else {
            self.state = CarState::Dwelling;
            MotionOutcome::Arrived { floor, dwell: true }
        }
    }

    /// Drop the committed phase and go idle; used on teardown after the
    /// car's timers have been cancelled.
    pub fn halt(&mut self) {
        self.committed_target = None;
        self.state = CarState::Idle;
    }

    pub fn snapshot(&self) -> CarSnapshot {
        CarSnapshot {
            current_floor: self.current_floor,
            queue_length: self.target_queue.len(),
            state: self.state,
        }
    }
}
