//! Routing problem trait.

use super::{Customer, Route};

/// Defines a truck-and-drone routing problem instance.
///
/// Neighborhood operators hold a shared reference to the problem and only
/// read from it: fleet sizes, the customer table (for drone feasibility), the
/// tabu list capacity, and the objective through [`evaluate`](Self::evaluate).
///
/// # Examples
///
/// ```
/// use u_d2d::models::{Customer, Route, RoutingProblem};
///
/// struct CountTrips {
///     customers: Vec<Customer>,
/// }
///
/// impl RoutingProblem for CountTrips {
///     fn customers(&self) -> &[Customer] { &self.customers }
///     fn trucks_count(&self) -> usize { 1 }
///     fn drones_count(&self) -> usize { 0 }
///     fn tabu_size(&self) -> usize { 5 }
///     fn evaluate(&self, trucks: &[Vec<Route>], drones: &[Vec<Route>]) -> f64 {
///         trucks.iter().chain(drones).map(|r| r.len() as f64).sum()
///     }
/// }
///
/// let p = CountTrips { customers: vec![Customer::depot(0.0, 0.0)] };
/// assert_eq!(p.num_customers(), 0);
/// ```
pub trait RoutingProblem: Send + Sync {
    /// Returns all locations (index 0 = depot, 1..=N = customers).
    fn customers(&self) -> &[Customer];

    /// Number of trucks in the fleet.
    fn trucks_count(&self) -> usize;

    /// Number of drones in the fleet.
    fn drones_count(&self) -> usize;

    /// Capacity of the recency list kept by tabu-aware operators.
    fn tabu_size(&self) -> usize;

    /// Computes the objective of the given route assignment (lower is better).
    fn evaluate(&self, truck_routes: &[Vec<Route>], drone_routes: &[Vec<Route>]) -> f64;

    /// Number of customers (excluding depot).
    fn num_customers(&self) -> usize {
        self.customers().len().saturating_sub(1)
    }

    /// Size of the unified vehicle index range.
    fn vehicles_count(&self) -> usize {
        self.trucks_count() + self.drones_count()
    }

    /// Returns `true` if `customer` may be served by a drone.
    fn dronable(&self, customer: usize) -> bool {
        self.customers()[customer].dronable()
    }
}
