//! Tabu search problem adapter for truck-and-drone routing.
//!
//! Implements the [`TabuProblem`](u_metaheur::tabu::TabuProblem) trait on top
//! of the neighborhood operators. Each operator entry point contributes its
//! best candidate to the neighborhood handed to the runner.
//!
//! `neighbors` calls the exploration entry points directly and never goes
//! through [`TwoOpt::make_move`](crate::neighborhoods::TwoOpt), so the
//! operator's own recency list is not consulted here. Tabu status comes only
//! from the runner's tabu set, keyed by [`TabuMove::key`].

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use rand::Rng;
use u_metaheur::tabu::{TabuMove, TabuProblem};

use crate::constructive::random_assignment;
use crate::models::{RoutingProblem, Solution};
use crate::neighborhoods::{EjectionChain, Exploration, Neighborhood, TwoOpt};

/// Adapter that runs the neighborhood operators under
/// [`TabuRunner`](u_metaheur::tabu::TabuRunner).
///
/// Operators are explored without aspiration; the runner applies its own
/// tabu filter and aspiration to the returned moves. Moves are keyed by the
/// operator and the edge it breaks. Operators that break no edge key the move
/// by a fingerprint of the resulting routes.
///
/// # Examples
///
/// ```
/// use u_d2d::models::{Customer, Instance};
/// use u_d2d::search::TruckDroneTabuProblem;
/// use u_metaheur::tabu::{TabuConfig, TabuRunner};
///
/// let customers = vec![
///     Customer::depot(0.0, 0.0),
///     Customer::new(1, 0.0, 2.0, false),
///     Customer::new(2, 2.0, 0.0, true),
///     Customer::new(3, 2.0, 2.0, false),
///     Customer::new(4, 1.0, 1.0, true),
/// ];
/// let problem = Instance::new(customers, 1, 1).unwrap();
///
/// let bridge = TruckDroneTabuProblem::new(&problem);
/// let config = TabuConfig::default().with_max_iterations(20).with_seed(42);
/// let result = TabuRunner::run(&bridge, &config);
/// assert_eq!(result.best.num_served(), 4);
/// ```
pub struct TruckDroneTabuProblem<'a, P: RoutingProblem + ?Sized> {
    problem: &'a P,
}

impl<'a, P: RoutingProblem + ?Sized> TruckDroneTabuProblem<'a, P> {
    /// Creates an adapter for the given problem.
    pub fn new(problem: &'a P) -> Self {
        Self { problem }
    }

    fn empty(&self) -> Solution {
        Solution::new(
            self.problem,
            vec![Vec::new(); self.problem.trucks_count()],
            vec![Vec::new(); self.problem.drones_count()],
        )
    }
}

fn fingerprint(solution: &Solution) -> u64 {
    let mut hasher = DefaultHasher::new();
    solution.truck_routes().hash(&mut hasher);
    solution.drone_routes().hash(&mut hasher);
    hasher.finish()
}

fn to_move(label: &str, (candidate, edge): Exploration) -> Option<TabuMove<Solution>> {
    let solution = candidate?;
    let key = if edge.is_trivial() {
        format!("{label}#{:016x}", fingerprint(&solution))
    } else {
        format!("{label}:{edge}")
    };
    Some(TabuMove {
        cost: solution.cost(),
        key,
        solution,
    })
}

impl<P: RoutingProblem + ?Sized> TabuProblem for TruckDroneTabuProblem<'_, P> {
    type Solution = Solution;

    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Solution {
        random_assignment(self.problem, rng).unwrap_or_else(|| self.empty())
    }

    fn cost(&self, solution: &Solution) -> f64 {
        solution.cost()
    }

    fn neighbors<R: Rng>(&self, solution: &Solution, _rng: &mut R) -> Vec<TabuMove<Solution>> {
        let never = |_: &Solution| false;
        let two_opt = TwoOpt::new(self.problem);
        let chain = EjectionChain::new(self.problem);

        [
            ("2opt", two_opt.same_route(solution, &never)),
            ("2opt*", two_opt.multi_route(solution, &never)),
            ("ejection", chain.multi_route(solution, &never)),
        ]
        .into_iter()
        .filter_map(|(label, exploration)| to_move(label, exploration))
        .collect()
    }
}
