//! Elevator Dispatch Simulation Library
//!
//! An elevator dispatch and motion simulation that runs headless and can be
//! embedded by a rendering or audio front end through its observer hooks.

pub mod simulation;
