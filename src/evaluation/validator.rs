//! Structural checks on truck-and-drone solutions.

use crate::models::{fleet, RoutingProblem, Solution, Vehicle, VehicleKind};

/// A type of structural defect in a solution.
#[derive(Debug, Clone, PartialEq)]
pub enum ViolationType {
    /// A customer is served by no route.
    MissingCustomer {
        /// Customer ID.
        customer_id: usize,
    },
    /// A customer is served more than once.
    DuplicateCustomer {
        /// Customer ID.
        customer_id: usize,
        /// Vehicle holding the repeated visit.
        vehicle: Vehicle,
        /// Route index within the vehicle's list.
        route_index: usize,
    },
    /// A route visits an ID outside the instance.
    UnknownCustomer {
        /// Offending ID.
        customer_id: usize,
        /// Vehicle holding the route.
        vehicle: Vehicle,
        /// Route index within the vehicle's list.
        route_index: usize,
    },
    /// A drone route visits a customer that only trucks may serve.
    NonDronableOnDrone {
        /// Customer ID.
        customer_id: usize,
        /// Drone index.
        drone: usize,
        /// Route index within the drone's list.
        route_index: usize,
    },
    /// A route serves no customer.
    EmptyRoute {
        /// Vehicle holding the route.
        vehicle: Vehicle,
        /// Route index within the vehicle's list.
        route_index: usize,
    },
    /// A route is stored under a vehicle of the other kind.
    KindMismatch {
        /// Vehicle holding the route.
        vehicle: Vehicle,
        /// Route index within the vehicle's list.
        route_index: usize,
    },
    /// The number of per-vehicle route lists differs from the fleet size.
    FleetMismatch {
        /// Vehicle kind.
        kind: VehicleKind,
        /// Fleet size in the problem.
        expected: usize,
        /// Route lists in the solution.
        actual: usize,
    },
}

/// A structural defect in a solution.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// The type of violation.
    pub kind: ViolationType,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationType) -> Self {
        Self { kind }
    }
}

/// Checks that `solution` is a well-formed answer to `problem`.
///
/// Every customer must be served exactly once, drones may only carry
/// dronable customers, routes must be non-empty, and there must be one route
/// list per vehicle. An empty result means the solution is feasible.
///
/// Ids outside the instance are reported as
/// [`UnknownCustomer`](ViolationType::UnknownCustomer). Such a solution still
/// carries a cost; [`Instance`](crate::models::Instance) prices it at
/// infinity.
///
/// # Examples
///
/// ```
/// use u_d2d::models::{Customer, Instance, Route, Solution};
/// use u_d2d::evaluation::{validate, ViolationType};
///
/// let customers = vec![
///     Customer::depot(0.0, 0.0),
///     Customer::new(1, 1.0, 0.0, false),
///     Customer::new(2, 0.0, 1.0, true),
/// ];
/// let problem = Instance::new(customers, 1, 1).unwrap();
///
/// let ok = Solution::new(&problem, vec![vec![Route::truck([1])]], vec![vec![Route::drone([2])]]);
/// assert!(validate(&problem, &ok).is_empty());
///
/// let bad = Solution::new(&problem, vec![vec![]], vec![vec![Route::drone([1, 2])]]);
/// let violations = validate(&problem, &bad);
/// assert!(violations
///     .iter()
///     .any(|v| matches!(v.kind, ViolationType::NonDronableOnDrone { customer_id: 1, .. })));
/// ```
pub fn validate<P: RoutingProblem + ?Sized>(problem: &P, solution: &Solution) -> Vec<Violation> {
    let mut violations = Vec::new();

    for (kind, expected, actual) in [
        (
            VehicleKind::Truck,
            problem.trucks_count(),
            solution.truck_routes().len(),
        ),
        (
            VehicleKind::Drone,
            problem.drones_count(),
            solution.drone_routes().len(),
        ),
    ] {
        if expected != actual {
            violations.push(Violation::new(ViolationType::FleetMismatch {
                kind,
                expected,
                actual,
            }));
        }
    }

    let n = problem.customers().len();
    let mut visits = vec![0usize; n];

    for vehicle in fleet(problem.trucks_count(), problem.drones_count()) {
        for (route_index, route) in solution.routes(vehicle).iter().enumerate() {
            if route.kind() != vehicle.kind() {
                violations.push(Violation::new(ViolationType::KindMismatch {
                    vehicle,
                    route_index,
                }));
            }
            if route.is_empty() {
                violations.push(Violation::new(ViolationType::EmptyRoute {
                    vehicle,
                    route_index,
                }));
            }

            for &customer_id in route.body() {
                if customer_id >= n {
                    violations.push(Violation::new(ViolationType::UnknownCustomer {
                        customer_id,
                        vehicle,
                        route_index,
                    }));
                    continue;
                }

                visits[customer_id] += 1;
                if visits[customer_id] > 1 {
                    violations.push(Violation::new(ViolationType::DuplicateCustomer {
                        customer_id,
                        vehicle,
                        route_index,
                    }));
                }
                if let Vehicle::Drone(drone) = vehicle {
                    if !problem.dronable(customer_id) {
                        violations.push(Violation::new(ViolationType::NonDronableOnDrone {
                            customer_id,
                            drone,
                            route_index,
                        }));
                    }
                }
            }
        }
    }

    for (customer_id, &count) in visits.iter().enumerate().skip(1) {
        if count == 0 {
            violations.push(Violation::new(ViolationType::MissingCustomer { customer_id }));
        }
    }

    violations
}

/// Returns `true` if [`validate`] finds nothing.
pub fn is_feasible<P: RoutingProblem + ?Sized>(problem: &P, solution: &Solution) -> bool {
    validate(problem, solution).is_empty()
}
