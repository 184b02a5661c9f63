//! Standalone elevator simulation module
//!
//! This module contains all the core dispatch and motion logic. Time is
//! simulated, so the whole system can be driven to completion instantly in
//! tests or replayed at wall-clock speed by the CLI.

mod board;
mod car;
mod dispatch;
mod scheduler;
mod timing;
mod types;
mod workload;
mod world;

// Re-export public types for external use
// These may not be used within this crate but are part of the public API
#[allow(unused_imports)]
pub use board::RequestBoard;
#[allow(unused_imports)]
pub use car::{MotionOutcome, SimCar};
#[allow(unused_imports)]
pub use dispatch::{estimate_cost, pick_car};
#[allow(unused_imports)]
pub use scheduler::{CarEvent, EventScheduler, FiredEvent};
#[allow(unused_imports)]
pub use timing::{
    BuildingConfig, DEFAULT_CAR_COUNT, DEFAULT_DWELL_MS, DEFAULT_FLOOR_COUNT, DEFAULT_PER_FLOOR_MS,
};
#[allow(unused_imports)]
pub use types::{CarId, CarSnapshot, CarState, RequestError};
#[allow(unused_imports)]
pub use workload::generate_requests;
pub use world::{ArrivalObserver, SimBuilding, SimStats};
