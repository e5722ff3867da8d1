//! Random round-robin construction.

use rand::seq::SliceRandom;
use rand::Rng;

use super::{eligible, from_bodies, is_servable};
use crate::models::{fleet, RoutingProblem, Solution, Vehicle};

/// Deals customers in random order to randomly chosen eligible vehicles.
///
/// Each vehicle receives at most one route. Returns `None` if some customer
/// has no eligible vehicle (no trucks and a non-dronable customer).
///
/// # Examples
///
/// ```
/// use u_d2d::models::{Customer, Instance};
/// use u_d2d::constructive::random_assignment;
///
/// let customers = vec![
///     Customer::depot(0.0, 0.0),
///     Customer::new(1, 1.0, 0.0, false),
///     Customer::new(2, 2.0, 0.0, true),
///     Customer::new(3, 3.0, 0.0, true),
/// ];
/// let problem = Instance::new(customers, 1, 2).unwrap();
/// let mut rng = u_numflow::random::create_rng(7);
///
/// let solution = random_assignment(&problem, &mut rng).unwrap();
/// assert_eq!(solution.num_served(), 3);
/// ```
pub fn random_assignment<P, R>(problem: &P, rng: &mut R) -> Option<Solution>
where
    P: RoutingProblem + ?Sized,
    R: Rng,
{
    if !is_servable(problem) {
        return None;
    }

    let mut order: Vec<usize> = (1..problem.customers().len()).collect();
    order.shuffle(rng);

    let mut bodies: Vec<(Vehicle, Vec<usize>)> = fleet(problem.trucks_count(), problem.drones_count())
        .map(|v| (v, Vec::new()))
        .collect();
    for customer in order {
        let candidates = eligible(problem, customer);
        let vehicle = candidates[rng.random_range(0..candidates.len())];
        bodies[vehicle.unified_index(problem.trucks_count())]
            .1
            .push(customer);
    }

    Some(from_bodies(problem, bodies))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Customer, Instance};

    fn problem(trucks: usize, drones: usize) -> Instance {
        let customers = (0..9)
            .map(|i| {
                if i == 0 {
                    Customer::depot(0.0, 0.0)
                } else {
                    Customer::new(i, i as f64, (i * i % 7) as f64, i % 3 != 0)
                }
            })
            .collect();
        Instance::new(customers, trucks, drones).expect("valid")
    }

    #[test]
    fn test_every_customer_once() {
        let p = problem(2, 2);
        let mut rng = u_numflow::random::create_rng(42);
        let sol = random_assignment(&p, &mut rng).expect("servable");
        let mut served: Vec<usize> = sol.all_routes().flat_map(|r| r.body().to_vec()).collect();
        served.sort_unstable();
        assert_eq!(served, (1..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_drones_only_get_dronable() {
        let p = problem(1, 3);
        for seed in 0..20 {
            let mut rng = u_numflow::random::create_rng(seed);
            let sol = random_assignment(&p, &mut rng).expect("servable");
            for routes in sol.drone_routes() {
                for route in routes {
                    assert!(route.body().iter().all(|&c| p.dronable(c)));
                }
            }
        }
    }

    #[test]
    fn test_no_empty_routes() {
        let p = problem(3, 3);
        let mut rng = u_numflow::random::create_rng(1);
        let sol = random_assignment(&p, &mut rng).expect("servable");
        assert!(sol.all_routes().all(|r| !r.is_empty()));
        assert_eq!(sol.truck_routes().len(), 3);
        assert_eq!(sol.drone_routes().len(), 3);
    }

    #[test]
    fn test_drone_only_fleet() {
        let customers = vec![
            Customer::depot(0.0, 0.0),
            Customer::new(1, 1.0, 0.0, true),
            Customer::new(2, 0.0, 1.0, true),
        ];
        let p = Instance::new(customers, 0, 1).expect("valid");
        let mut rng = u_numflow::random::create_rng(3);
        let sol = random_assignment(&p, &mut rng).expect("servable");
        assert_eq!(sol.routes(Vehicle::Drone(0))[0].len(), 2);
    }

    struct NoTrucks(Vec<Customer>);

    impl RoutingProblem for NoTrucks {
        fn customers(&self) -> &[Customer] {
            &self.0
        }
        fn trucks_count(&self) -> usize {
            0
        }
        fn drones_count(&self) -> usize {
            1
        }
        fn tabu_size(&self) -> usize {
            1
        }
        fn evaluate(&self, _: &[Vec<crate::models::Route>], _: &[Vec<crate::models::Route>]) -> f64 {
            0.0
        }
    }

    #[test]
    fn test_unservable() {
        let p = NoTrucks(vec![
            Customer::depot(0.0, 0.0),
            Customer::new(1, 1.0, 0.0, false),
        ]);
        let mut rng = u_numflow::random::create_rng(3);
        assert!(random_assignment(&p, &mut rng).is_none());
    }
}
