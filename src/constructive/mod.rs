//! Constructive heuristics for building initial truck-and-drone solutions.
//!
//! - [`nearest_neighbor`] — Vehicles take turns extending one route with the
//!   nearest eligible customer, O(n² · V)
//! - [`random_assignment`] — Shuffled round-robin dealing, O(n · V)
//!
//! Both respect drone eligibility: non-dronable customers only go to trucks.

mod nearest_neighbor;
mod random;

pub use nearest_neighbor::nearest_neighbor;
pub use random::random_assignment;

use crate::models::{fleet, Route, RoutingProblem, Solution, Vehicle};

/// Returns `true` if every customer has at least one eligible vehicle.
pub fn is_servable<P: RoutingProblem + ?Sized>(problem: &P) -> bool {
    if problem.trucks_count() > 0 {
        return true;
    }
    problem.drones_count() > 0 && problem.customers().iter().skip(1).all(|c| c.dronable())
}

/// Vehicles allowed to serve `customer`, in unified fleet order.
fn eligible<P: RoutingProblem + ?Sized>(problem: &P, customer: usize) -> Vec<Vehicle> {
    let dronable = problem.dronable(customer);
    fleet(problem.trucks_count(), problem.drones_count())
        .filter(|v| dronable || !v.is_drone())
        .collect()
}

/// Builds a solution holding at most one route per vehicle.
fn from_bodies<P: RoutingProblem + ?Sized>(
    problem: &P,
    bodies: Vec<(Vehicle, Vec<usize>)>,
) -> Solution {
    let mut truck_routes = vec![Vec::new(); problem.trucks_count()];
    let mut drone_routes = vec![Vec::new(); problem.drones_count()];
    for (vehicle, body) in bodies {
        if body.is_empty() {
            continue;
        }
        let route = Route::new(vehicle.kind(), body);
        match vehicle {
            Vehicle::Truck(i) => truck_routes[i].push(route),
            Vehicle::Drone(i) => drone_routes[i].push(route),
        }
    }
    Solution::new(problem, truck_routes, drone_routes)
}
