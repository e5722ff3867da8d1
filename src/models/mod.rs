//! Domain model types for truck-and-drone routing problems.
//!
//! Provides customers with a drone eligibility flag, vehicles addressed
//! through a unified fleet index, depot-bounded routes tagged with their
//! vehicle kind, solutions, and a problem trait that ties everything together.

mod customer;
mod instance;
mod problem;
mod route;
mod solution;
mod vehicle;

pub use customer::{Customer, DEPOT};
pub use instance::{Instance, Objective};
pub use problem::RoutingProblem;
pub use route::Route;
pub use solution::Solution;
pub use vehicle::{fleet, Vehicle, VehicleKind};
