//! Solution type.

use super::{Route, RoutingProblem, Vehicle};

/// A complete assignment of customers to truck and drone routes.
///
/// `truck_routes[t]` lists the trips of truck `t`, `drone_routes[d]` the trips
/// of drone `d`. The cost is computed once, by the problem, at construction;
/// solutions are never mutated afterwards.
///
/// # Examples
///
/// ```
/// use u_d2d::models::{Customer, Instance, Route, Solution, Vehicle};
///
/// let customers = vec![
///     Customer::depot(0.0, 0.0),
///     Customer::new(1, 1.0, 0.0, false),
///     Customer::new(2, 0.0, 1.0, true),
/// ];
/// let problem = Instance::new(customers, 1, 1).unwrap();
/// let sol = Solution::new(
///     &problem,
///     vec![vec![Route::truck([1])]],
///     vec![vec![Route::drone([2])]],
/// );
/// assert_eq!(sol.routes(Vehicle::Drone(0)).len(), 1);
/// assert_eq!(sol.num_served(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Solution {
    truck_routes: Vec<Vec<Route>>,
    drone_routes: Vec<Vec<Route>>,
    cost: f64,
}

impl Solution {
    /// Builds a solution and evaluates it with `problem`.
    pub fn new<P: RoutingProblem + ?Sized>(
        problem: &P,
        truck_routes: Vec<Vec<Route>>,
        drone_routes: Vec<Vec<Route>>,
    ) -> Self {
        let cost = problem.evaluate(&truck_routes, &drone_routes);
        Self {
            truck_routes,
            drone_routes,
            cost,
        }
    }

    /// Routes of every truck.
    pub fn truck_routes(&self) -> &[Vec<Route>] {
        &self.truck_routes
    }

    /// Routes of every drone.
    pub fn drone_routes(&self) -> &[Vec<Route>] {
        &self.drone_routes
    }

    /// Routes of one vehicle. Vehicles absent from the solution have none.
    pub fn routes(&self, vehicle: Vehicle) -> &[Route] {
        let lists = match vehicle {
            Vehicle::Truck(_) => &self.truck_routes,
            Vehicle::Drone(_) => &self.drone_routes,
        };
        lists.get(vehicle.index()).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Objective value (lower is better).
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Total number of customers served across all routes.
    pub fn num_served(&self) -> usize {
        self.all_routes().map(Route::len).sum()
    }

    /// Total number of routes across the fleet.
    pub fn num_routes(&self) -> usize {
        self.all_routes().count()
    }

    /// Iterates all routes, trucks first.
    pub fn all_routes(&self) -> impl Iterator<Item = &Route> {
        self.truck_routes
            .iter()
            .chain(self.drone_routes.iter())
            .flat_map(|routes| routes.iter())
    }

    /// Consumes the solution, returning its route lists.
    pub fn into_routes(self) -> (Vec<Vec<Route>>, Vec<Vec<Route>>) {
        (self.truck_routes, self.drone_routes)
    }

    /// Returns `true` if both solutions hold identical routes.
    pub fn same_routes(&self, other: &Solution) -> bool {
        self.truck_routes == other.truck_routes && self.drone_routes == other.drone_routes
    }
}
