//! Serializable summary of a solved instance.

use serde::{Deserialize, Serialize};

use crate::evaluation::is_feasible;
use crate::models::{Route, RoutingProblem, Solution};

/// Flat, serializable view of a solution and the run that produced it.
///
/// Paths are full depot-bounded sequences: `truck_paths[t][r]` is route `r`
/// of truck `t`.
///
/// # Examples
///
/// ```
/// use u_d2d::models::{Customer, Instance, Route, Solution};
/// use u_d2d::report::SolutionReport;
///
/// let customers = vec![
///     Customer::depot(0.0, 0.0),
///     Customer::new(1, 3.0, 4.0, false),
/// ];
/// let problem = Instance::new(customers, 1, 1).unwrap();
/// let solution = Solution::new(&problem, vec![vec![Route::truck([1])]], vec![vec![]]);
///
/// let report = SolutionReport::new("tiny", &problem, &solution).with_progress(12, 3);
/// assert_eq!(report.truck_paths, vec![vec![vec![0, 1, 0]]]);
/// assert!(report.drone_paths[0].is_empty());
/// assert!(report.feasible);
/// assert_eq!(report.last_improved, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolutionReport {
    /// Instance name.
    pub problem: String,
    /// Number of trucks.
    pub trucks_count: usize,
    /// Number of drones.
    pub drones_count: usize,
    /// Search iterations run.
    pub iterations: usize,
    /// Capacity of the two-opt recency list.
    pub tabu_size: usize,
    /// Objective value.
    pub cost: f64,
    /// Route sequences per truck.
    pub truck_paths: Vec<Vec<Vec<usize>>>,
    /// Route sequences per drone.
    pub drone_paths: Vec<Vec<Vec<usize>>>,
    /// Whether the solution passed [`validate`](crate::evaluation::validate).
    pub feasible: bool,
    /// Iteration at which the reported solution was found.
    pub last_improved: usize,
}

fn paths(lists: &[Vec<Route>]) -> Vec<Vec<Vec<usize>>> {
    lists
        .iter()
        .map(|routes| routes.iter().map(|r| r.customers().to_vec()).collect())
        .collect()
}

impl SolutionReport {
    /// Summarizes `solution` with no search progress recorded.
    pub fn new<P: RoutingProblem + ?Sized>(
        name: impl Into<String>,
        problem: &P,
        solution: &Solution,
    ) -> Self {
        Self {
            problem: name.into(),
            trucks_count: problem.trucks_count(),
            drones_count: problem.drones_count(),
            iterations: 0,
            tabu_size: problem.tabu_size(),
            cost: solution.cost(),
            truck_paths: paths(solution.truck_routes()),
            drone_paths: paths(solution.drone_routes()),
            feasible: is_feasible(problem, solution),
            last_improved: 0,
        }
    }

    /// Records how long the search ran and when it last improved.
    pub fn with_progress(mut self, iterations: usize, last_improved: usize) -> Self {
        self.iterations = iterations;
        self.last_improved = last_improved;
        self
    }

    /// Number of routes across all vehicles.
    pub fn num_routes(&self) -> usize {
        self.truck_paths
            .iter()
            .chain(&self.drone_paths)
            .map(Vec::len)
            .sum()
    }

    /// Serializes the report as pretty-printed JSON.
    #[cfg(feature = "json")]
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parses a report written by [`to_json`](Self::to_json).
    #[cfg(feature = "json")]
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Customer, Instance};

    fn setup() -> (Instance, Solution) {
        let customers = vec![
            Customer::depot(0.0, 0.0),
            Customer::new(1, 3.0, 4.0, false),
            Customer::new(2, 0.0, 1.0, true),
            Customer::new(3, 0.0, 2.0, true),
        ];
        let p = Instance::new(customers, 1, 1).expect("valid").with_tabu_size(4);
        let sol = Solution::new(
            &p,
            vec![vec![Route::truck([1])]],
            vec![vec![Route::drone([2]), Route::drone([3])]],
        );
        (p, sol)
    }

    #[test]
    fn test_report_fields() {
        let (p, sol) = setup();
        let report = SolutionReport::new("d2d-4", &p, &sol);
        assert_eq!(report.problem, "d2d-4");
        assert_eq!(report.trucks_count, 1);
        assert_eq!(report.drones_count, 1);
        assert_eq!(report.tabu_size, 4);
        assert_eq!(report.iterations, 0);
        assert_eq!(report.drone_paths, vec![vec![vec![0, 2, 0], vec![0, 3, 0]]]);
        assert_eq!(report.num_routes(), 3);
        assert!((report.cost - sol.cost()).abs() < 1e-12);
        assert!(report.feasible);
    }

    #[test]
    fn test_infeasible_flagged() {
        let (p, _) = setup();
        let sol = Solution::new(&p, vec![vec![Route::truck([1, 2])]], vec![vec![]]);
        assert!(!SolutionReport::new("missing", &p, &sol).feasible);
    }

    #[test]
    fn test_serde_field_names() {
        let (p, sol) = setup();
        let report = SolutionReport::new("d2d-4", &p, &sol).with_progress(50, 17);
        let value = serde_json::to_value(&report).expect("serialize");
        assert_eq!(value["problem"], "d2d-4");
        assert_eq!(value["last_improved"], 17);
        assert_eq!(value["truck_paths"][0][0], serde_json::json!([0, 1, 0]));

        let back: SolutionReport = serde_json::from_value(value).expect("deserialize");
        assert_eq!(back, report);
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_json_round_trip() {
        let (p, sol) = setup();
        let report = SolutionReport::new("d2d-4", &p, &sol).with_progress(5, 2);
        let json = report.to_json().expect("json");
        assert!(json.contains("\"drone_paths\""));
        assert_eq!(SolutionReport::from_json(&json).expect("parse"), report);
    }
}
