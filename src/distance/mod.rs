//! Distances between the depot and customers.
//!
//! Provides a dense matrix, built from coordinates or given explicitly.

mod matrix;

pub use matrix::DistanceMatrix;
