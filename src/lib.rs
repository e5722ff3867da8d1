//! # u-d2d
//!
//! Neighborhood search for truck-and-drone delivery routing: a fleet of
//! trucks and drones leaves one depot, every customer is served exactly
//! once, and drones may only serve customers flagged as dronable.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Customer, Vehicle, Route, Solution, Problem trait)
//! - [`distance`] — Distance matrix
//! - [`neighborhoods`] — Two-opt, 2-opt* and ejection chain operators, tabu list
//! - [`constructive`] — Initial solutions (random assignment, nearest neighbor)
//! - [`evaluation`] — Structural validation of solutions
//! - [`search`] — Tabu search bridge to `u-metaheur`
//! - [`report`] — Serializable solution summary

pub mod constructive;
pub mod distance;
pub mod evaluation;
pub mod models;
pub mod neighborhoods;
pub mod report;
pub mod search;
