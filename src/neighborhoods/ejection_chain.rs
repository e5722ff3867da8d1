//! Ejection chain neighborhood: a relocation chain across three routes.
//!
//! # Algorithm
//!
//! For every ordered triple of routes `(ri, rj, rk)`, no two of them the same
//! route of the same vehicle:
//!
//! 1. eject customer `x = ri[i]` from route i;
//! 2. insert `x` into route j at `jx`, then eject the customer `y` sitting at
//!    `jy != jx` of the grown route;
//! 3. insert `y` into route k at `k`.
//!
//! Route j keeps its length, route k grows by one and route i shrinks by one;
//! route i is dropped when it runs out of customers. A chain that would put a
//! non-dronable customer on a drone is skipped.
//!
//! The operator keeps no tabu state and always reports the trivial edge.
//!
//! # Complexity
//!
//! O(R³ · n⁴) candidates, each evaluated in full.
//!
//! # Reference
//!
//! Glover, F. (1996). "Ejection chains, reference structures and alternating
//! path methods for traveling salesman problems", *Discrete Applied
//! Mathematics* 65(1-3), 223-253.

use super::{admits, Best, Exploration, Neighborhood, RouteLists, TabuEdge};
use crate::models::{fleet, RoutingProblem, Solution, Vehicle};

/// A route addressed by its vehicle and its position in the vehicle's list.
type Slot = (Vehicle, usize);

/// Three-route ejection chain operator.
///
/// # Examples
///
/// ```
/// use u_d2d::models::{Customer, Instance, Route, Solution, Vehicle};
/// use u_d2d::neighborhoods::{EjectionChain, Neighborhood};
///
/// let customers = vec![
///     Customer::depot(0.0, 0.0),
///     Customer::new(1, 1.0, 0.0, true),
///     Customer::new(2, 0.0, 1.0, true),
///     Customer::new(3, 9.0, 9.0, false),
/// ];
/// let problem = Instance::new(customers, 2, 1).unwrap();
/// let solution = Solution::new(
///     &problem,
///     vec![vec![Route::truck([1])], vec![Route::truck([3])]],
///     vec![vec![Route::drone([2])]],
/// );
///
/// let mut chain = EjectionChain::new(&problem);
/// let (same, _) = chain.same_route(&solution, &|_| true);
/// assert!(same.is_none());
///
/// let candidate = chain.make_move(&solution, &|_| false).unwrap();
/// assert_eq!(candidate.num_served(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct EjectionChain<'a, P: RoutingProblem + ?Sized> {
    problem: &'a P,
}

impl<'a, P: RoutingProblem + ?Sized> EjectionChain<'a, P> {
    /// Creates the operator.
    pub fn new(problem: &'a P) -> Self {
        Self { problem }
    }

    fn chain(
        &self,
        solution: &Solution,
        [slot_i, slot_j, slot_k]: [Slot; 3],
        aspiration: &dyn Fn(&Solution) -> bool,
        best: &mut Best,
    ) {
        let ci = solution.routes(slot_i.0)[slot_i.1].customers();
        let cj = solution.routes(slot_j.0)[slot_j.1].customers();
        let ck = solution.routes(slot_k.0)[slot_k.1].customers();

        for i in 1..ci.len() - 1 {
            let moved = ci[i];
            if !admits(self.problem, slot_j.0, moved) {
                continue;
            }

            let mut new_i = ci.to_vec();
            new_i.remove(i);

            for jx in 1..cj.len() {
                for jy in 1..cj.len() {
                    if jx == jy {
                        continue;
                    }

                    let ejected = cj[jy - usize::from(jy > jx)];
                    if !admits(self.problem, slot_k.0, ejected) {
                        continue;
                    }

                    let mut new_j = cj.to_vec();
                    new_j.insert(jx, moved);
                    new_j.remove(jy);

                    for k in 1..ck.len() {
                        let mut new_k = ck.to_vec();
                        new_k.insert(k, ejected);

                        // Route i goes last: dropping it must not shift j or k.
                        let mut lists = RouteLists::of(solution);
                        lists.assign(slot_j.0, slot_j.1, &new_j);
                        lists.assign(slot_k.0, slot_k.1, &new_k);
                        lists.assign(slot_i.0, slot_i.1, &new_i);
                        best.offer(
                            lists.into_solution(self.problem),
                            TabuEdge::default(),
                            aspiration,
                        );
                    }
                }
            }
        }
    }
}

impl<P: RoutingProblem + ?Sized> Neighborhood for EjectionChain<'_, P> {
    fn performance_message(&self) -> &'static str {
        "Ejection chain"
    }

    fn same_route(&self, _: &Solution, _: &dyn Fn(&Solution) -> bool) -> Exploration {
        (None, TabuEdge::default())
    }

    fn multi_route(
        &self,
        solution: &Solution,
        aspiration: &dyn Fn(&Solution) -> bool,
    ) -> Exploration {
        let mut best = Best::new();
        let vehicles: Vec<Vehicle> =
            fleet(self.problem.trucks_count(), self.problem.drones_count()).collect();

        for &vehicle_i in &vehicles {
            for &vehicle_j in &vehicles {
                for &vehicle_k in &vehicles {
                    let count_i = solution.routes(vehicle_i).len();
                    let count_j = solution.routes(vehicle_j).len();
                    let count_k = solution.routes(vehicle_k).len();

                    for route_i in 0..count_i {
                        for route_j in 0..count_j {
                            let slot_i = (vehicle_i, route_i);
                            let slot_j = (vehicle_j, route_j);
                            if slot_i == slot_j {
                                continue;
                            }
                            for route_k in 0..count_k {
                                let slot_k = (vehicle_k, route_k);
                                if slot_j == slot_k || slot_k == slot_i {
                                    continue;
                                }
                                self.chain(
                                    solution,
                                    [slot_i, slot_j, slot_k],
                                    aspiration,
                                    &mut best,
                                );
                            }
                        }
                    }
                }
            }
        }

        best.finish()
    }
}
