//! Core types for the elevator simulation

use std::fmt;

/// A unique identifier for an elevator car
/// This is a simple wrapper around a usize for type safety
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CarId(pub usize);

impl fmt::Display for CarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "car{}", self.0)
    }
}

/// Phase of a car's motion state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarState {
    /// Empty queue and no pending timer
    Idle,
    /// Stepping one floor at a time toward the committed target
    Moving,
    /// Paused at a stop before considering the next queue entry
    Dwelling,
}

/// Read-only view of a car, for rendering and tests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarSnapshot {
    pub current_floor: usize,
    pub queue_length: usize,
    pub state: CarState,
}

/// Rejection returned from `submit_request`; no state is mutated on error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestError {
    /// Requested floor is outside [0, floor_count)
    InvalidFloor { floor: usize, floor_count: usize },
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::InvalidFloor { floor, floor_count } => {
                write!(
                    f,
                    "invalid floor {} (building has floors 0..{})",
                    floor, floor_count
                )
            }
        }
    }
}

impl std::error::Error for RequestError {}
