use std::thread;
use std::time::Duration;

use anyhow::{ensure, Result};
use clap::Parser;
use log::{debug, info, warn};

use elevator_sim::simulation::{
    generate_requests, ArrivalObserver, BuildingConfig, CarId, SimBuilding, DEFAULT_CAR_COUNT,
    DEFAULT_DWELL_MS, DEFAULT_FLOOR_COUNT, DEFAULT_PER_FLOOR_MS,
};

#[derive(Parser)]
#[command(name = "elevator_sim")]
#[command(about = "Elevator dispatch simulation with a random call workload")]
struct Cli {
    /// Number of floors in the building
    #[arg(long, default_value_t = DEFAULT_FLOOR_COUNT)]
    floors: usize,

    /// Number of elevator cars
    #[arg(long, default_value_t = DEFAULT_CAR_COUNT)]
    cars: usize,

    /// Travel time per floor in milliseconds
    #[arg(long, default_value_t = DEFAULT_PER_FLOOR_MS)]
    per_floor_ms: u64,

    /// Dwell time at each stop in milliseconds
    #[arg(long, default_value_t = DEFAULT_DWELL_MS)]
    dwell_ms: u64,

    /// Number of random floor requests to generate
    #[arg(long, default_value = "20")]
    requests: usize,

    /// Maximum gap between generated requests in milliseconds
    #[arg(long, default_value = "3000")]
    max_gap_ms: u64,

    /// Seed for the request workload
    #[arg(long, default_value = "0")]
    seed: u64,

    /// Replay at wall-clock speed instead of finishing instantly
    #[arg(long)]
    real_time: bool,
}

/// Stands in for the audio collaborator: one chime per arrival
struct ChimeObserver;

impl ArrivalObserver for ChimeObserver {
    fn on_arrival(&mut self, car: CarId, floor: usize) {
        debug!("ding: {} at floor {}", car, floor);
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    ensure!(cli.floors >= 1, "building needs at least one floor");
    ensure!(cli.cars >= 1, "building needs at least one car");

    info!(
        "Building: {} floors, {} cars, {}ms/floor, {}ms dwell",
        cli.floors, cli.cars, cli.per_floor_ms, cli.dwell_ms
    );

    let config = BuildingConfig::new(
        cli.floors,
        cli.cars,
        Duration::from_millis(cli.per_floor_ms),
        Duration::from_millis(cli.dwell_ms),
    );
    let mut building = SimBuilding::new(config);
    building.add_observer(Box::new(ChimeObserver));

    let schedule = generate_requests(
        cli.seed,
        cli.requests,
        cli.floors,
        Duration::from_millis(cli.max_gap_ms),
    );
    info!("Generated {} requests (seed {})", schedule.len(), cli.seed);

    for (at, floor) in schedule {
        // Fire everything that falls due before this request arrives
        while let Some(gap) = building.next_event_in() {
            if building.time() + gap > at {
                break;
            }
            maybe_sleep(cli.real_time, gap);
            building.step();
        }
        if at > building.time() {
            let gap = at - building.time();
            maybe_sleep(cli.real_time, gap);
            building.advance_by(gap);
        }
        match building.submit_request(floor) {
            Ok(car) => info!("floor {} requested -> {}", floor, car),
            Err(err) => warn!("request rejected: {}", err),
        }
    }

    // Drain the remaining motion
    while let Some(gap) = building.next_event_in() {
        maybe_sleep(cli.real_time, gap);
        building.step();
    }

    info!("SIMULATION COMPLETE");
    let stats = building.stats();
    info!("Total requests accepted: {}", stats.requests_accepted);
    info!("Total requests rejected: {}", stats.requests_rejected);
    info!("Total arrivals: {}", stats.arrivals);
    info!("Total floor steps: {}", stats.floor_steps);
    info!("Final state: {}", building.summary());

    Ok(())
}

fn maybe_sleep(real_time: bool, gap: Duration) {
    if real_time {
        thread::sleep(gap);
    }
}
