//! Two-opt neighborhood: segment reversal and tail exchange (2-opt*).
//!
//! # Algorithm
//!
//! *Same route.* For every route and every pair of positions `i < j` strictly
//! inside the depot bookends, reverse `customers[i..=j]`:
//!
//! ```text
//! before: 0 .. c[i-1] c[i] .. c[j] c[j+1] .. 0
//! after:  0 .. c[i-1] c[j] .. c[i] c[j+1] .. 0
//! ```
//!
//! *Multi route.* For every pair of distinct vehicles and every pair of their
//! routes, split both routes after a customer and exchange the tails:
//!
//! ```text
//! ri = ci[..=i] ++ cj[j+1..]
//! rj = cj[..=j] ++ ci[i+1..]
//! ```
//!
//! Tails that would put a non-dronable customer on a drone are skipped.
//!
//! # Complexity
//!
//! O(R · n²) same-route candidates, O(R² · n²) multi-route candidates, each
//! evaluated in full.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.
//!
//! Potvin, J.-Y., Rousseau, J.-M. (1995). "An exchange heuristic for routeing
//! problems with time windows", *JORS* 46(12), 1433-1446.

use std::time::Instant;

use log::{debug, trace};

use super::{admits_all, select, Best, Exploration, Neighborhood, RouteLists, TabuEdge, TabuList};
use crate::models::{fleet, RoutingProblem, Solution, Vehicle};

/// Two-opt operator with a recency list of broken edges.
///
/// The list is only bookkeeping: it never stops a candidate from being
/// generated or accepted. Callers that want tabu filtering read it through
/// [`tabu_list`](Self::tabu_list).
///
/// # Examples
///
/// ```
/// use u_d2d::models::{Customer, Instance, Route, Solution, Vehicle};
/// use u_d2d::neighborhoods::{Neighborhood, TwoOpt};
///
/// let customers = vec![
///     Customer::depot(0.0, 0.0),
///     Customer::new(1, 0.0, 2.0, false),
///     Customer::new(2, 2.0, 0.0, false),
///     Customer::new(3, 2.0, 2.0, false),
/// ];
/// let problem = Instance::new(customers, 1, 0).unwrap();
/// let solution = Solution::new(&problem, vec![vec![Route::truck([1, 2, 3])]], vec![]);
///
/// let mut two_opt = TwoOpt::new(&problem);
/// let improved = two_opt.make_move(&solution, &|_| false).unwrap();
/// assert_eq!(improved.routes(Vehicle::Truck(0))[0].body(), &[1, 3, 2]);
/// assert!(improved.cost() < solution.cost());
/// assert_eq!(two_opt.tabu_list().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct TwoOpt<'a, P: RoutingProblem + ?Sized> {
    problem: &'a P,
    tabu_list: TabuList,
}

impl<'a, P: RoutingProblem + ?Sized> TwoOpt<'a, P> {
    /// Creates the operator with an empty list sized by
    /// [`RoutingProblem::tabu_size`].
    pub fn new(problem: &'a P) -> Self {
        Self {
            problem,
            tabu_list: TabuList::new(problem.tabu_size()),
        }
    }

    /// Recency list of edges broken by returned moves; an empty neighborhood
    /// records the trivial edge.
    pub fn tabu_list(&self) -> &TabuList {
        &self.tabu_list
    }

    /// Empties the recency list.
    pub fn reset(&mut self) {
        self.tabu_list.clear();
    }

    fn exchange_tails(
        &self,
        solution: &Solution,
        vehicle_i: Vehicle,
        vehicle_j: Vehicle,
        aspiration: &dyn Fn(&Solution) -> bool,
        best: &mut Best,
    ) {
        for (route_i, ri) in solution.routes(vehicle_i).iter().enumerate() {
            for (route_j, rj) in solution.routes(vehicle_j).iter().enumerate() {
                let ci = ri.customers();
                let cj = rj.customers();
                for i in 1..ci.len().saturating_sub(2) {
                    for j in 1..cj.len().saturating_sub(2) {
                        let new_i: Vec<usize> = ci[..=i].iter().chain(&cj[j + 1..]).copied().collect();
                        let new_j: Vec<usize> = cj[..=j].iter().chain(&ci[i + 1..]).copied().collect();

                        if !admits_all(self.problem, vehicle_i, &new_i)
                            || !admits_all(self.problem, vehicle_j, &new_j)
                        {
                            continue;
                        }

                        let mut lists = RouteLists::of(solution);
                        lists.assign(vehicle_i, route_i, &new_i);
                        lists.assign(vehicle_j, route_j, &new_j);
                        best.offer(
                            lists.into_solution(self.problem),
                            TabuEdge::new(ci[i], cj[j]),
                            aspiration,
                        );
                    }
                }
            }
        }
    }
}

impl<P: RoutingProblem + ?Sized> Neighborhood for TwoOpt<'_, P> {
    fn performance_message(&self) -> &'static str {
        "Two-opt"
    }

    fn same_route(
        &self,
        solution: &Solution,
        aspiration: &dyn Fn(&Solution) -> bool,
    ) -> Exploration {
        let mut best = Best::new();

        for vehicle in fleet(self.problem.trucks_count(), self.problem.drones_count()) {
            for (index, route) in solution.routes(vehicle).iter().enumerate() {
                let customers = route.customers();
                let n = customers.len();
                for i in 1..n - 1 {
                    for j in i + 1..n - 1 {
                        let mut lists = RouteLists::of(solution);
                        lists.routes_mut(vehicle)[index].reverse(i, j - i + 1);
                        best.offer(
                            lists.into_solution(self.problem),
                            TabuEdge::new(customers[i - 1], customers[j]),
                            aspiration,
                        );
                    }
                }
            }
        }

        best.finish()
    }

    fn multi_route(
        &self,
        solution: &Solution,
        aspiration: &dyn Fn(&Solution) -> bool,
    ) -> Exploration {
        let mut best = Best::new();
        let vehicles: Vec<Vehicle> =
            fleet(self.problem.trucks_count(), self.problem.drones_count()).collect();

        for (a, &vehicle_i) in vehicles.iter().enumerate() {
            for &vehicle_j in &vehicles[a + 1..] {
                self.exchange_tails(solution, vehicle_i, vehicle_j, aspiration, &mut best);
            }
        }

        best.finish()
    }

    fn make_move(
        &mut self,
        solution: &Solution,
        aspiration: &dyn Fn(&Solution) -> bool,
    ) -> Option<Solution> {
        let start = Instant::now();
        let (result, edge) = select(
            self.same_route(solution, aspiration),
            self.multi_route(solution, aspiration),
        );

        // An empty neighborhood still records the trivial edge.
        self.tabu_list.touch(edge);
        trace!("tabu edge {edge}, {} entries", self.tabu_list.len());

        debug!(
            "{} {}ms",
            self.performance_message(),
            start.elapsed().as_millis()
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Customer, Instance, Route};

    // Depot at the origin; 1 = (0,2), 2 = (2,0), 3 = (2,2).
    // [1, 2, 3] crosses itself; [1, 3, 2] is the square.
    fn square(trucks: usize, drones: usize) -> Instance {
        let customers = vec![
            Customer::depot(0.0, 0.0),
            Customer::new(1, 0.0, 2.0, false),
            Customer::new(2, 2.0, 0.0, false),
            Customer::new(3, 2.0, 2.0, false),
            Customer::new(4, 4.0, 4.0, true),
            Customer::new(5, 5.0, 1.0, true),
            Customer::new(6, 1.0, 5.0, true),
        ];
        Instance::new(customers, trucks, drones).expect("valid")
    }

    fn body(sol: &Solution, vehicle: Vehicle, route: usize) -> Vec<usize> {
        sol.routes(vehicle)[route].body().to_vec()
    }

    #[test]
    fn test_same_route_reversal_scenario() {
        let p = square(1, 0);
        let sol = Solution::new(&p, vec![vec![Route::truck([1, 2, 3])]], vec![]);
        let before = sol.clone();
        let op = TwoOpt::new(&p);

        let (result, edge) = op.same_route(&sol, &|_| false);
        let result = result.expect("candidate");
        assert_eq!(body(&result, Vehicle::Truck(0), 0), vec![1, 3, 2]);
        // Reversed positions 2..=3; the pair is customers[1] and customers[3].
        assert_eq!(edge, TabuEdge::new(1, 3));
        assert!(sol.same_routes(&before));
    }

    #[test]
    fn test_same_route_aspiration_takes_last() {
        let p = square(1, 0);
        let sol = Solution::new(&p, vec![vec![Route::truck([1, 2, 3, 4])]], vec![]);
        let op = TwoOpt::new(&p);

        let (result, edge) = op.same_route(&sol, &|_| true);
        // Last pair enumerated is (3, 4): [1, 2, 3, 4] -> [1, 2, 4, 3].
        assert_eq!(body(&result.expect("candidate"), Vehicle::Truck(0), 0), vec![1, 2, 4, 3]);
        assert_eq!(edge, TabuEdge::new(2, 4));
    }

    #[test]
    fn test_same_route_keeps_first_on_ties() {
        let p = square(1, 0);
        // Reversing the whole body of a two-customer route is the only move.
        let sol = Solution::new(
            &p,
            vec![vec![Route::truck([1, 2]), Route::truck([3, 4])]],
            vec![],
        );
        let op = TwoOpt::new(&p);
        let (result, edge) = op.same_route(&sol, &|_| false);
        // Both reversals keep the cost; the first route's wins.
        let result = result.expect("candidate");
        assert_eq!(body(&result, Vehicle::Truck(0), 0), vec![2, 1]);
        assert_eq!(body(&result, Vehicle::Truck(0), 1), vec![3, 4]);
        assert_eq!(edge, TabuEdge::new(0, 2));
    }

    #[test]
    fn test_same_route_single_customer_has_no_move() {
        let p = square(1, 1);
        let sol = Solution::new(
            &p,
            vec![vec![Route::truck([1])]],
            vec![vec![Route::drone([4])]],
        );
        let op = TwoOpt::new(&p);
        let (result, edge) = op.same_route(&sol, &|_| true);
        assert!(result.is_none());
        assert!(edge.is_trivial());
    }

    #[test]
    fn test_same_route_covers_drones() {
        let p = square(1, 1);
        let sol = Solution::new(
            &p,
            vec![vec![Route::truck([1])]],
            vec![vec![Route::drone([4, 5])]],
        );
        let op = TwoOpt::new(&p);
        let (result, _) = op.same_route(&sol, &|_| false);
        assert_eq!(body(&result.expect("candidate"), Vehicle::Drone(0), 0), vec![5, 4]);
    }

    #[test]
    fn test_multi_route_tail_exchange() {
        let p = square(2, 0);
        let sol = Solution::new(
            &p,
            vec![vec![Route::truck([1, 2])], vec![Route::truck([3, 4])]],
            vec![],
        );
        let before = sol.clone();
        let op = TwoOpt::new(&p);

        let (result, edge) = op.multi_route(&sol, &|_| false);
        let result = result.expect("candidate");
        assert_eq!(body(&result, Vehicle::Truck(0), 0), vec![1, 4]);
        assert_eq!(body(&result, Vehicle::Truck(1), 0), vec![3, 2]);
        assert_eq!(edge, TabuEdge::new(1, 3));
        assert!(sol.same_routes(&before));
    }

    #[test]
    fn test_multi_route_skips_non_dronable_tail() {
        let p = square(1, 1);
        // Exchanging tails would move customer 2 onto the drone.
        let sol = Solution::new(
            &p,
            vec![vec![Route::truck([1, 2])]],
            vec![vec![Route::drone([4, 5])]],
        );
        let op = TwoOpt::new(&p);
        let (result, edge) = op.multi_route(&sol, &|_| true);
        assert!(result.is_none());
        assert!(edge.is_trivial());
    }

    #[test]
    fn test_multi_route_truck_drone_exchange() {
        let p = square(1, 1);
        let sol = Solution::new(
            &p,
            vec![vec![Route::truck([1, 4])]],
            vec![vec![Route::drone([5, 6])]],
        );
        let op = TwoOpt::new(&p);
        let (result, edge) = op.multi_route(&sol, &|_| true);
        let result = result.expect("candidate");
        assert_eq!(body(&result, Vehicle::Truck(0), 0), vec![1, 6]);
        assert_eq!(body(&result, Vehicle::Drone(0), 0), vec![5, 4]);
        assert_eq!(edge, TabuEdge::new(1, 5));
    }

    #[test]
    fn test_make_move_updates_tabu_list() {
        let p = square(1, 0).with_tabu_size(2);
        let sol = Solution::new(&p, vec![vec![Route::truck([1, 2, 3])]], vec![]);
        let mut op = TwoOpt::new(&p);
        assert_eq!(op.tabu_list().capacity(), 2);

        let moved = op.make_move(&sol, &|_| false).expect("candidate");
        assert_eq!(op.tabu_list().latest(), Some(TabuEdge::new(1, 3)));

        // Same input, same edge: the list does not grow.
        op.make_move(&sol, &|_| false);
        assert_eq!(op.tabu_list().len(), 1);

        // Moving on from the square reverses another segment.
        op.make_move(&moved, &|_| false);
        assert!(op.tabu_list().len() <= 2);

        op.reset();
        assert!(op.tabu_list().is_empty());
    }

    #[test]
    fn test_make_move_without_candidates_records_trivial_edge() {
        let p = square(1, 0);
        let sol = Solution::new(&p, vec![vec![Route::truck([1])]], vec![]);
        let mut op = TwoOpt::new(&p);
        assert!(op.make_move(&sol, &|_| true).is_none());
        assert_eq!(op.tabu_list().len(), 1);
        assert_eq!(op.tabu_list().latest(), Some(TabuEdge::default()));
    }

    #[test]
    fn test_empty_neighborhood_evicts_real_edge() {
        let p = square(1, 0).with_tabu_size(1);
        let crossing = Solution::new(&p, vec![vec![Route::truck([1, 2, 3])]], vec![]);
        let single = Solution::new(&p, vec![vec![Route::truck([1])]], vec![]);
        let mut op = TwoOpt::new(&p);

        op.make_move(&crossing, &|_| false).expect("candidate");
        assert_eq!(op.tabu_list().latest(), Some(TabuEdge::new(1, 3)));

        assert!(op.make_move(&single, &|_| false).is_none());
        let entries: Vec<TabuEdge> = op.tabu_list().iter().copied().collect();
        assert_eq!(entries, vec![TabuEdge::default()]);
    }

    #[test]
    fn test_make_move_prefers_same_route_on_ties() {
        let p = square(2, 0);
        let sol = Solution::new(
            &p,
            vec![vec![Route::truck([1, 2])], vec![Route::truck([3, 4])]],
            vec![],
        );
        let mut op = TwoOpt::new(&p);
        let same = op.same_route(&sol, &|_| false).0.expect("same");
        let multi = op.multi_route(&sol, &|_| false).0.expect("multi");
        let moved = op.make_move(&sol, &|_| false).expect("candidate");
        if multi.cost() + crate::neighborhoods::COST_TOLERANCE < same.cost() {
            assert!(moved.same_routes(&multi));
        } else {
            assert!(moved.same_routes(&same));
        }
    }
}
