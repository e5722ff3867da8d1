//! Neighborhood operators for truck-and-drone solutions.
//!
//! - [`TwoOpt`] — Segment reversal within a route and tail exchange between
//!   two routes (2-opt*), with a recency list of broken edges
//! - [`EjectionChain`] — Three-route relocation chain
//!
//! Every operator enumerates its whole neighborhood in a fixed order and keeps
//! the best admissible candidate: a candidate replaces the running best when
//! the aspiration predicate holds for it, when there is no best yet, or when
//! its cost is strictly lower. Each candidate is built from its own copy of
//! the route lists, so the input solution is never modified.

mod ejection_chain;
mod tabu;
mod two_opt;

use std::time::Instant;

use log::debug;

use crate::models::{Route, RoutingProblem, Solution, Vehicle, DEPOT};

pub use ejection_chain::EjectionChain;
pub use tabu::{TabuEdge, TabuList};
pub use two_opt::TwoOpt;

/// Costs closer than this are treated as equal.
pub const COST_TOLERANCE: f64 = 1e-6;

/// Best candidate found by an exploration, with the edge it breaks.
pub type Exploration = (Option<Solution>, TabuEdge);

/// A local search neighborhood over truck-and-drone solutions.
///
/// `aspiration` decides, per candidate, whether the candidate is accepted
/// regardless of cost. It is only borrowed for the duration of the call.
pub trait Neighborhood {
    /// Label used in diagnostics.
    fn performance_message(&self) -> &'static str;

    /// Explores moves confined to one route of one vehicle.
    fn same_route(&self, solution: &Solution, aspiration: &dyn Fn(&Solution) -> bool)
        -> Exploration;

    /// Explores moves spanning routes of two or more vehicles.
    fn multi_route(
        &self,
        solution: &Solution,
        aspiration: &dyn Fn(&Solution) -> bool,
    ) -> Exploration;

    /// Returns the cheaper of the same-route and multi-route results.
    fn make_move(
        &mut self,
        solution: &Solution,
        aspiration: &dyn Fn(&Solution) -> bool,
    ) -> Option<Solution> {
        let start = Instant::now();
        let (result, _) = select(
            self.same_route(solution, aspiration),
            self.multi_route(solution, aspiration),
        );
        debug!(
            "{} {}ms",
            self.performance_message(),
            start.elapsed().as_millis()
        );
        result
    }
}

/// Returns `true` if `candidate` is cheaper than `incumbent` beyond tolerance.
pub fn improves(candidate: f64, incumbent: f64) -> bool {
    candidate + COST_TOLERANCE < incumbent
}

/// Combines two explorations, keeping `first` unless `second` is strictly
/// cheaper.
pub fn select(first: Exploration, second: Exploration) -> Exploration {
    let take_second = match (&first.0, &second.0) {
        (None, _) => true,
        (Some(_), None) => false,
        (Some(a), Some(b)) => improves(b.cost(), a.cost()),
    };
    if take_second {
        second
    } else {
        first
    }
}

/// Returns `true` if `vehicle` may serve `customer`.
fn admits<P: RoutingProblem + ?Sized>(problem: &P, vehicle: Vehicle, customer: usize) -> bool {
    !vehicle.is_drone() || customer == DEPOT || problem.dronable(customer)
}

/// Returns `true` if `vehicle` may serve every customer of `customers`.
fn admits_all<P: RoutingProblem + ?Sized>(
    problem: &P,
    vehicle: Vehicle,
    customers: &[usize],
) -> bool {
    customers.iter().all(|&c| admits(problem, vehicle, c))
}

/// Running best of an exploration.
struct Best {
    solution: Option<Solution>,
    tabu: TabuEdge,
}

impl Best {
    fn new() -> Self {
        Self {
            solution: None,
            tabu: TabuEdge::default(),
        }
    }

    fn offer(
        &mut self,
        candidate: Solution,
        tabu: TabuEdge,
        aspiration: &dyn Fn(&Solution) -> bool,
    ) {
        let accept = aspiration(&candidate)
            || self
                .solution
                .as_ref()
                .map_or(true, |best| improves(candidate.cost(), best.cost()));
        if accept {
            self.solution = Some(candidate);
            self.tabu = tabu;
        }
    }

    fn finish(self) -> Exploration {
        (self.solution, self.tabu)
    }
}

/// Working copy of a solution's route lists, consumed by one candidate.
struct RouteLists {
    truck_routes: Vec<Vec<Route>>,
    drone_routes: Vec<Vec<Route>>,
}

impl RouteLists {
    fn of(solution: &Solution) -> Self {
        Self {
            truck_routes: solution.truck_routes().to_vec(),
            drone_routes: solution.drone_routes().to_vec(),
        }
    }

    fn routes_mut(&mut self, vehicle: Vehicle) -> &mut Vec<Route> {
        match vehicle {
            Vehicle::Truck(i) => &mut self.truck_routes[i],
            Vehicle::Drone(i) => &mut self.drone_routes[i],
        }
    }

    /// Replaces route `index` of `vehicle` with the given depot-bounded
    /// sequence, dropping it when no customer is left.
    fn assign(&mut self, vehicle: Vehicle, index: usize, customers: &[usize]) {
        let route = Route::from_customers(vehicle.kind(), customers);
        let routes = self.routes_mut(vehicle);
        if route.is_empty() {
            routes.remove(index);
        } else {
            routes[index] = route;
        }
    }

    fn into_solution<P: RoutingProblem + ?Sized>(self, problem: &P) -> Solution {
        Solution::new(problem, self.truck_routes, self.drone_routes)
    }
}
