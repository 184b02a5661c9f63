//! Main simulation world that ties everything together
//!
//! `SimBuilding` is the single owner of the cars, the floor request board,
//! the event scheduler, and the simulated clock. External collaborators go
//! through its narrow surface: submit a request, read snapshots, register
//! an arrival observer, and drive the event loop.

use std::time::Duration;

use log::{debug, info, warn};

use super::board::RequestBoard;
use super::car::{MotionOutcome, SimCar};
use super::dispatch::{estimate_cost, pick_car};
use super::scheduler::{CarEvent, EventScheduler};
use super::timing::BuildingConfig;
use super::types::{CarId, CarSnapshot, CarState, RequestError};

/// Outward arrival notification, the sole hook for a chime/animation
/// collaborator. Fired synchronously during arrival handling; observers
/// must return promptly (fire-and-continue, the motion engine does not
/// wait on anything).
pub trait ArrivalObserver {
    fn on_arrival(&mut self, car: CarId, floor: usize);
}

/// Counters for the headless summary
#[derive(Debug, Clone, Copy, Default)]
pub struct SimStats {
    pub requests_accepted: usize,
    pub requests_rejected: usize,
    pub arrivals: usize,
    pub floor_steps: usize,
}

/// The main simulation world
pub struct SimBuilding {
    config: BuildingConfig,
    cars: Vec<SimCar>,
    board: RequestBoard,
    scheduler: EventScheduler,
    /// Simulated clock; advances only when events fire or time is
    /// explicitly advanced
    time: Duration,
    observers: Vec<Box<dyn ArrivalObserver>>,
    stats: SimStats,
}

impl SimBuilding {
    /// Build a new world: all cars idle at floor 0, no pending calls.
    pub fn new(config: BuildingConfig) -> Self {
        let cars = (0..config.car_count).map(|i| SimCar::new(CarId(i))).collect();
        let board = RequestBoard::new(config.floor_count);
        let scheduler = EventScheduler::new(config.car_count);
        Self {
            config,
            cars,
            board,
            scheduler,
            time: Duration::ZERO,
            observers: Vec::new(),
            stats: SimStats::default(),
        }
    }

    pub fn config(&self) -> &BuildingConfig {
        &self.config
    }

    /// Current simulated time
    pub fn time(&self) -> Duration {
        self.time
    }

    pub fn stats(&self) -> SimStats {
        self.stats
    }

    /// Register an arrival observer; called in registration order.
    pub fn add_observer(&mut self, observer: Box<dyn ArrivalObserver>) {
        self.observers.push(observer);
    }

    /// The only mutation entry point from outside: accept a floor call,
    /// assign it to the cheapest car, and start that car if it was idle.
    /// Returns the chosen car. On `InvalidFloor` nothing is mutated.
    pub fn submit_request(&mut self, floor: usize) -> Result<CarId, RequestError> {
        if let Err(err) = self.board.request(floor) {
            self.stats.requests_rejected += 1;
            return Err(err);
        }
        let chosen = pick_car(&self.cars, &self.config, floor);
        let index = chosen.0;
        debug!(
            "floor {} assigned to {} (cost {:?})",
            floor,
            chosen,
            estimate_cost(&self.cars[index], &self.config, floor)
        );
        self.cars[index].target_queue.push_back(floor);
        self.stats.requests_accepted += 1;
        if self.cars[index].state == CarState::Idle {
            debug_assert!(!self.scheduler.has_outstanding(chosen));
            let outcome = self.cars[index].begin_phase();
            self.handle_outcome(index, outcome);
        }
        Ok(chosen)
    }

    /// Read-only view of one car
    pub fn car_snapshot(&self, car: CarId) -> Option<CarSnapshot> {
        self.cars.get(car.0).map(SimCar::snapshot)
    }

    /// Snapshots of every car, indexed by car id
    pub fn car_snapshots(&self) -> Vec<CarSnapshot> {
        self.cars.iter().map(SimCar::snapshot).collect()
    }

    /// Floors with an outstanding call, ascending
    pub fn pending_floors(&self) -> Vec<usize> {
        self.board.pending_floors()
    }

    pub fn is_floor_pending(&self, floor: usize) -> bool {
        self.board.is_pending(floor)
    }

    /// True when every car is idle and no timer is pending
    pub fn is_idle(&self) -> bool {
        self.scheduler.is_empty() && self.cars.iter().all(|car| car.state == CarState::Idle)
    }

    /// Delay until the next scheduled event, if any
    pub fn next_event_in(&self) -> Option<Duration> {
        self.scheduler
            .next_due()
            .map(|due| due.saturating_sub(self.time))
    }

    /// Fire the next scheduled event, advancing the clock to its due time.
    /// Returns false when no event is pending.
    pub fn step(&mut self) -> bool {
        let Some(fired) = self.scheduler.pop_next() else {
            return false;
        };
        self.time = self.time.max(fired.due);
        let index = fired.car.0;
        let outcome = match fired.event {
            CarEvent::StepFloor => {
                self.stats.floor_steps += 1;
                self.cars[index].advance_one_floor()
            }
            CarEvent::EndDwell => {
                if self.cars[index].target_queue.is_empty() {
                    // Unreachable by construction: dwell is only scheduled
                    // when stops remain and nothing dequeues mid-dwell.
                    warn!("{} ended dwell with an empty queue", fired.car);
                }
                self.cars[index].end_dwell()
            }
        };
        self.handle_outcome(index, outcome);
        true
    }

    /// Advance the clock by `delta`, firing every event that falls due.
    pub fn advance_by(&mut self, delta: Duration) {
        let target = self.time + delta;
        while let Some(due) = self.scheduler.next_due() {
            if due > target {
                break;
            }
            self.step();
        }
        self.time = target;
    }

    /// Run the event loop until all cars are idle. Terminates because each
    /// queued stop needs finitely many steps and nothing enqueues while
    /// this runs.
    pub fn run_until_idle(&mut self) {
        while self.step() {}
        debug_assert!(self.is_idle());
    }

    /// Cancel all outstanding timers and halt every car. Queues are left
    /// as-is; the world is being torn down.
    pub fn shutdown(&mut self) {
        self.scheduler.cancel_all();
        for car in &mut self.cars {
            car.halt();
        }
    }

    /// One-line state summary for periodic CLI output
    pub fn summary(&self) -> String {
        let positions: Vec<String> = self
            .cars
            .iter()
            .map(|car| format!("{}@{}", car.id, car.current_floor))
            .collect();
        format!(
            "t={:?} | accepted: {} | arrivals: {} | floor steps: {} | pending: {:?} | {}",
            self.time,
            self.stats.requests_accepted,
            self.stats.arrivals,
            self.stats.floor_steps,
            self.pending_floors(),
            positions.join(" ")
        )
    }

    /// Act on a car transition: schedule the follow-up timer and run
    /// arrival handling (board clear + observer notification).
    fn handle_outcome(&mut self, index: usize, outcome: MotionOutcome) {
        let car = CarId(index);
        match outcome {
            MotionOutcome::Step => {
                self.scheduler
                    .schedule_after(self.time, car, self.config.travel_time(1), CarEvent::StepFloor);
            }
            MotionOutcome::Arrived { floor, dwell } => {
                // Any queue-head arrival clears the floor's pending flag,
                // whether or not this stop answered that floor's call.
                self.board.clear(floor);
                self.stats.arrivals += 1;
                info!("{} arrived at floor {}", car, floor);
                for observer in &mut self.observers {
                    observer.on_arrival(car, floor);
                }
                if dwell {
                    self.scheduler
                        .schedule_after(self.time, car, self.config.dwell_time(), CarEvent::EndDwell);
                }
            }
            MotionOutcome::Idle => {}
        }
    }
}
