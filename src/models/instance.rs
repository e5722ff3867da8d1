//! Concrete truck-and-drone instance with a travel-time objective.

use serde::{Deserialize, Serialize};

use super::{Customer, Route, RoutingProblem, DEPOT};
use crate::distance::DistanceMatrix;

/// How per-vehicle working times are combined into one cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Objective {
    /// Largest working time over all vehicles (the delivery timespan).
    #[default]
    Makespan,
    /// Sum of working times over all vehicles.
    TotalTime,
}

/// A truck-and-drone instance over Euclidean customer locations.
///
/// The working time of a vehicle is the summed length of its routes divided
/// by its speed; the cost combines working times per [`Objective`].
///
/// # Examples
///
/// ```
/// use u_d2d::models::{Customer, Instance, Objective, Route, RoutingProblem};
///
/// let customers = vec![
///     Customer::depot(0.0, 0.0),
///     Customer::new(1, 3.0, 4.0, false),
///     Customer::new(2, 0.0, 2.0, true),
/// ];
/// let problem = Instance::new(customers, 1, 1)
///     .unwrap()
///     .with_drone_speed(2.0)
///     .with_objective(Objective::TotalTime);
///
/// let cost = problem.evaluate(
///     &[vec![Route::truck([1])]],
///     &[vec![Route::drone([2])]],
/// );
/// assert!((cost - (10.0 + 2.0)).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct Instance {
    customers: Vec<Customer>,
    distances: DistanceMatrix,
    trucks_count: usize,
    drones_count: usize,
    tabu_size: usize,
    truck_speed: f64,
    drone_speed: f64,
    objective: Objective,
}

impl Instance {
    /// Default capacity of the two-opt recency list.
    pub const DEFAULT_TABU_SIZE: usize = 10;

    /// Creates an instance from customer locations and fleet sizes.
    ///
    /// Returns `None` if `customers[0]` is not a non-dronable depot, if any
    /// customer id differs from its index, if the fleet is empty, or if some
    /// customer is not dronable while there are no trucks.
    pub fn new(customers: Vec<Customer>, trucks_count: usize, drones_count: usize) -> Option<Self> {
        let depot = customers.first()?;
        if depot.id() != DEPOT || depot.dronable() {
            return None;
        }
        if customers.iter().enumerate().any(|(i, c)| c.id() != i) {
            return None;
        }
        if trucks_count + drones_count == 0 {
            return None;
        }
        if trucks_count == 0 && customers[1..].iter().any(|c| !c.dronable()) {
            return None;
        }

        let distances = DistanceMatrix::from_customers(&customers);
        Some(Self {
            customers,
            distances,
            trucks_count,
            drones_count,
            tabu_size: Self::DEFAULT_TABU_SIZE,
            truck_speed: 1.0,
            drone_speed: 1.0,
            objective: Objective::default(),
        })
    }

    /// Sets the tabu list capacity.
    pub fn with_tabu_size(mut self, tabu_size: usize) -> Self {
        self.tabu_size = tabu_size;
        self
    }

    /// Sets the truck speed (distance per time unit).
    ///
    /// Non-positive or non-finite speeds are ignored.
    pub fn with_truck_speed(mut self, speed: f64) -> Self {
        if speed.is_finite() && speed > 0.0 {
            self.truck_speed = speed;
        }
        self
    }

    /// Sets the drone speed (distance per time unit).
    ///
    /// Non-positive or non-finite speeds are ignored.
    pub fn with_drone_speed(mut self, speed: f64) -> Self {
        if speed.is_finite() && speed > 0.0 {
            self.drone_speed = speed;
        }
        self
    }

    /// Sets how working times are combined.
    pub fn with_objective(mut self, objective: Objective) -> Self {
        self.objective = objective;
        self
    }

    /// Replaces the Euclidean distances with an explicit matrix.
    ///
    /// Returns `None` if the matrix does not cover every location.
    pub fn with_distances(mut self, distances: DistanceMatrix) -> Option<Self> {
        if distances.size() != self.customers.len() {
            return None;
        }
        self.distances = distances;
        Some(self)
    }

    /// Distance matrix over all locations.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Truck speed.
    pub fn truck_speed(&self) -> f64 {
        self.truck_speed
    }

    /// Drone speed.
    pub fn drone_speed(&self) -> f64 {
        self.drone_speed
    }

    /// Objective in use.
    pub fn objective(&self) -> Objective {
        self.objective
    }

    /// Length of a depot-bounded route.
    ///
    /// A route visiting an id outside the instance has infinite length.
    pub fn route_distance(&self, route: &Route) -> f64 {
        route
            .customers()
            .windows(2)
            .map(|w| self.distances.try_get(w[0], w[1]).unwrap_or(f64::INFINITY))
            .sum()
    }

    fn working_time(&self, routes: &[Route], speed: f64) -> f64 {
        routes.iter().map(|r| self.route_distance(r)).sum::<f64>() / speed
    }
}

impl RoutingProblem for Instance {
    fn customers(&self) -> &[Customer] {
        &self.customers
    }

    fn trucks_count(&self) -> usize {
        self.trucks_count
    }

    fn drones_count(&self) -> usize {
        self.drones_count
    }

    fn tabu_size(&self) -> usize {
        self.tabu_size
    }

    fn evaluate(&self, truck_routes: &[Vec<Route>], drone_routes: &[Vec<Route>]) -> f64 {
        let times = truck_routes
            .iter()
            .map(|routes| self.working_time(routes, self.truck_speed))
            .chain(
                drone_routes
                    .iter()
                    .map(|routes| self.working_time(routes, self.drone_speed)),
            );

        match self.objective {
            Objective::Makespan => times.fold(0.0, f64::max),
            Objective::TotalTime => times.sum(),
        }
    }
}
