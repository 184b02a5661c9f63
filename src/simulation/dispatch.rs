//! Cost estimation and dispatch policy
//!
//! Nearest-cost greedy: a new call goes to whichever car would finish its
//! queue plus the new floor soonest, assuming the floor is appended at the
//! back. Pure projections over car state; nothing here mutates a car.

use std::time::Duration;

use super::car::SimCar;
use super::timing::BuildingConfig;
use super::types::CarId;

/// Projected total time for `car` to service its queue with `new_floor`
/// appended: travel time per hop plus one dwell between every pair of
/// consecutive stops (none after the final stop).
pub fn estimate_cost(car: &SimCar, config: &BuildingConfig, new_floor: usize) -> Duration {
    let stop_count = car.target_queue.len() + 1;
    let mut total = Duration::ZERO;
    let mut position = car.current_floor;
    for (index, stop) in car
        .target_queue
        .iter()
        .copied()
        .chain(std::iter::once(new_floor))
        .enumerate()
    {
        total += config.travel_time(position.abs_diff(stop));
        if index + 1 < stop_count {
            total += config.dwell_time();
        }
        position = stop;
    }
    total
}

/// Pick the car with the minimum estimated cost for `floor`. The strict
/// less-than scan keeps the lowest-id car on ties, so assignment is
/// deterministic across runs.
pub fn pick_car(cars: &[SimCar], config: &BuildingConfig, floor: usize) -> CarId {
    debug_assert!(!cars.is_empty());
    let mut best = cars[0].id;
    let mut best_cost = estimate_cost(&cars[0], config, floor);
    for car in &cars[1..] {
        let cost = estimate_cost(car, config, floor);
        if cost < best_cost {
            best = car.id;
            best_cost = cost;
        }
    }
    best
}
