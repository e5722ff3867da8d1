//! Tabu search over truck-and-drone solutions.
//!
//! - [`TruckDroneTabuProblem`] — [`TabuProblem`](u_metaheur::tabu::TabuProblem)
//!   implementation driving the neighborhood operators
//! - [`solve`] — Runs the search and collects the outcome

mod problem;

pub use problem::TruckDroneTabuProblem;

use log::{info, warn};
use u_metaheur::tabu::{TabuConfig, TabuRunner};

use crate::constructive::is_servable;
use crate::models::{RoutingProblem, Solution};
use crate::report::SolutionReport;

/// Search parameters.
///
/// Wraps the runner's [`TabuConfig`]; the tenure defaults to the problem's
/// tabu size when built with [`for_problem`](Self::for_problem).
///
/// # Examples
///
/// ```
/// use u_d2d::search::SearchConfig;
///
/// let config = SearchConfig::default()
///     .with_max_iterations(300)
///     .with_tabu_tenure(5)
///     .with_seed(7);
/// assert_eq!(config.tabu.max_iterations, 300);
/// assert_eq!(config.tabu.tabu_tenure, 5);
/// assert_eq!(config.tabu.seed, Some(7));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchConfig {
    /// Runner configuration.
    pub tabu: TabuConfig,
}

impl SearchConfig {
    /// Default configuration with the tenure taken from `problem`.
    pub fn for_problem<P: RoutingProblem + ?Sized>(problem: &P) -> Self {
        Self {
            tabu: TabuConfig::default().with_tabu_tenure(problem.tabu_size()),
        }
    }

    /// Sets the maximum number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.tabu = self.tabu.with_max_iterations(n);
        self
    }

    /// Sets the number of iterations a move key stays tabu.
    pub fn with_tabu_tenure(mut self, tenure: usize) -> Self {
        self.tabu = self.tabu.with_tabu_tenure(tenure);
        self
    }

    /// Sets the number of iterations without improvement before stopping.
    pub fn with_max_no_improve(mut self, n: usize) -> Self {
        self.tabu = self.tabu.with_max_no_improve(n);
        self
    }

    /// Enables or disables the runner's aspiration criterion.
    pub fn with_aspiration(mut self, aspiration: bool) -> Self {
        self.tabu = self.tabu.with_aspiration(aspiration);
        self
    }

    /// Sets the random seed of the initial construction.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.tabu = self.tabu.with_seed(seed);
        self
    }
}

/// Result of a search run.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Best solution found.
    pub best: Solution,
    /// Cost of the best solution.
    pub cost: f64,
    /// Iterations executed.
    pub iterations: usize,
    /// Iteration at which the best solution was found.
    pub best_iteration: usize,
    /// Best cost after each iteration.
    pub cost_history: Vec<f64>,
}

impl SearchOutcome {
    /// Summarizes the run for output.
    pub fn report<P: RoutingProblem + ?Sized>(
        &self,
        name: impl Into<String>,
        problem: &P,
    ) -> SolutionReport {
        SolutionReport::new(name, problem, &self.best)
            .with_progress(self.iterations, self.best_iteration)
    }
}

/// Runs tabu search from a random initial assignment.
///
/// Returns `None` if some customer has no eligible vehicle.
///
/// # Examples
///
/// ```
/// use u_d2d::models::{Customer, Instance};
/// use u_d2d::search::{solve, SearchConfig};
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
/// let config = SearchConfig::for_problem(&problem)
///     .with_max_iterations(30)
///     .with_seed(1);
/// let outcome = solve(&problem, &config).unwrap();
/// assert!(outcome.report("demo", &problem).feasible);
/// ```
pub fn solve<P: RoutingProblem + ?Sized>(problem: &P, config: &SearchConfig) -> Option<SearchOutcome> {
    if !is_servable(problem) {
        warn!("some customer has no eligible vehicle");
        return None;
    }

    info!(
        "tabu search: {} customers, {} trucks, {} drones, tenure {}",
        problem.num_customers(),
        problem.trucks_count(),
        problem.drones_count(),
        config.tabu.tabu_tenure
    );

    let bridge = TruckDroneTabuProblem::new(problem);
    let result = TabuRunner::run(&bridge, &config.tabu);

    info!(
        "best cost {:.4} at iteration {} of {}",
        result.best_cost, result.best_iteration, result.iterations
    );

    Some(SearchOutcome {
        best: result.best,
        cost: result.best_cost,
        iterations: result.iterations,
        best_iteration: result.best_iteration,
        cost_history: result.cost_history,
    })
}
