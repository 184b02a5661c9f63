//! Timing model and building configuration
//!
//! Pure duration arithmetic; all motion timing in the simulation derives
//! from the two constants held here.

use std::time::Duration;

/// Default building dimensions
pub const DEFAULT_FLOOR_COUNT: usize = 9;
pub const DEFAULT_CAR_COUNT: usize = 3;

/// Default motion timings in milliseconds
pub const DEFAULT_PER_FLOOR_MS: u64 = 500;
pub const DEFAULT_DWELL_MS: u64 = 2000;

/// Immutable construction-time parameters of a building
#[derive(Debug, Clone)]
pub struct BuildingConfig {
    /// Number of floors, indexed 0..floor_count
    pub floor_count: usize,
    /// Number of cars, indexed 0..car_count
    pub car_count: usize,
    /// Time to travel one floor
    pub per_floor: Duration,
    /// Pause at a stop before continuing to the next queue entry
    pub dwell: Duration,
}

impl BuildingConfig {
    pub fn new(floor_count: usize, car_count: usize, per_floor: Duration, dwell: Duration) -> Self {
        assert!(floor_count >= 1, "building needs at least one floor");
        assert!(car_count >= 1, "building needs at least one car");
        Self {
            floor_count,
            car_count,
            per_floor,
            dwell,
        }
    }

    /// Time to travel the given number of floors; zero distance is zero time
    pub fn travel_time(&self, distance_in_floors: usize) -> Duration {
        self.per_floor * distance_in_floors as u32
    }

    /// Fixed pause taken at a stop between consecutive queue entries
    pub fn dwell_time(&self) -> Duration {
        self.dwell
    }
}

impl Default for BuildingConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_FLOOR_COUNT,
            DEFAULT_CAR_COUNT,
            Duration::from_millis(DEFAULT_PER_FLOOR_MS),
            Duration::from_millis(DEFAULT_DWELL_MS),
        )
    }
}
