//! Nearest-neighbor constructive heuristic.
//!
//! Vehicles take turns in unified fleet order. On its turn a vehicle appends
//! the unvisited customer nearest to its last stop, skipping customers it may
//! not serve. Each vehicle builds at most one route.
//!
//! # Complexity
//!
//! O(n² · V) where n = number of customers and V = fleet size.

use super::{from_bodies, is_servable};
use crate::distance::DistanceMatrix;
use crate::models::{fleet, RoutingProblem, Solution, Vehicle, DEPOT};

/// Constructs a solution with the round-robin nearest-neighbor heuristic.
///
/// Returns `None` if some customer has no eligible vehicle.
///
/// # Examples
///
/// ```
/// use u_d2d::models::{Customer, Instance, Vehicle};
/// use u_d2d::constructive::nearest_neighbor;
///
/// let customers = vec![
///     Customer::depot(0.0, 0.0),
///     Customer::new(1, 1.0, 0.0, false),
///     Customer::new(2, 0.0, 1.0, true),
///     Customer::new(3, 2.0, 0.0, false),
/// ];
/// let problem = Instance::new(customers, 1, 1).unwrap();
///
/// let solution = nearest_neighbor(&problem, problem.distances()).unwrap();
/// assert_eq!(solution.num_served(), 3);
/// assert_eq!(solution.routes(Vehicle::Truck(0))[0].body(), &[1, 3]);
/// assert_eq!(solution.routes(Vehicle::Drone(0))[0].body(), &[2]);
/// ```
pub fn nearest_neighbor<P: RoutingProblem + ?Sized>(
    problem: &P,
    distances: &DistanceMatrix,
) -> Option<Solution> {
    if !is_servable(problem) {
        return None;
    }

    let n = problem.customers().len();
    let mut visited = vec![false; n];
    if n > 0 {
        visited[DEPOT] = true;
    }
    let mut remaining = n.saturating_sub(1);

    let mut bodies: Vec<(Vehicle, Vec<usize>)> = fleet(problem.trucks_count(), problem.drones_count())
        .map(|v| (v, Vec::new()))
        .collect();

    while remaining > 0 {
        let mut progressed = false;
        for (vehicle, body) in bodies.iter_mut() {
            let current = body.last().copied().unwrap_or(DEPOT);
            let next = (1..n)
                .filter(|&c| !visited[c] && (!vehicle.is_drone() || problem.dronable(c)))
                .min_by(|&a, &b| distances.get(current, a).total_cmp(&distances.get(current, b)));

            if let Some(c) = next {
                visited[c] = true;
                remaining -= 1;
                body.push(c);
                progressed = true;
            }
            if remaining == 0 {
                break;
            }
        }
        if !progressed {
            return None;
        }
    }

    Some(from_bodies(problem, bodies))
}
