//! Depot-bounded route type.

use serde::{Deserialize, Serialize};

use super::{VehicleKind, DEPOT};

/// An ordered sequence of customers served by one trip of a truck or drone.
///
/// The sequence always starts and ends at the depot, so a route without
/// customers still has two entries. Routes with no customers are redundant
/// and are never kept in a [`Solution`](super::Solution) built by the
/// neighborhood operators.
///
/// # Examples
///
/// ```
/// use u_d2d::models::{Route, VehicleKind};
///
/// let mut route = Route::truck([1, 2, 3]);
/// assert_eq!(route.customers(), &[0, 1, 2, 3, 0]);
/// assert_eq!(route.len(), 3);
///
/// route.reverse(2, 2);
/// assert_eq!(route.customers(), &[0, 1, 3, 2, 0]);
/// assert_eq!(route.kind(), VehicleKind::Truck);
/// ```
///
/// Deserialization enforces the same shape: a sequence that does not start
/// and end at the depot is rejected, and inner depot entries are dropped.
///
/// ```
/// use u_d2d::models::Route;
///
/// let route: Route = serde_json::from_str(r#"{"kind":"Drone","customers":[0,4,0]}"#).unwrap();
/// assert_eq!(route.body(), &[4]);
/// assert!(serde_json::from_str::<Route>(r#"{"kind":"Drone","customers":[4,0]}"#).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RouteData")]
pub struct Route {
    kind: VehicleKind,
    customers: Vec<usize>,
}

#[derive(Deserialize)]
struct RouteData {
    kind: VehicleKind,
    customers: Vec<usize>,
}

impl TryFrom<RouteData> for Route {
    type Error = String;

    fn try_from(data: RouteData) -> Result<Self, Self::Error> {
        match data.customers.as_slice() {
            [DEPOT, inner @ .., DEPOT] => Ok(Self::new(data.kind, inner.iter().copied())),
            other => Err(format!("route {other:?} is not bounded by the depot")),
        }
    }
}

impl Route {
    /// Creates a route of the given kind visiting `body` in order.
    ///
    /// Depot entries inside `body` are dropped; the bookends are added.
    pub fn new(kind: VehicleKind, body: impl IntoIterator<Item = usize>) -> Self {
        let mut customers = vec![DEPOT];
        customers.extend(body.into_iter().filter(|&c| c != DEPOT));
        customers.push(DEPOT);
        Self { kind, customers }
    }

    /// Creates a truck route.
    pub fn truck(body: impl IntoIterator<Item = usize>) -> Self {
        Self::new(VehicleKind::Truck, body)
    }

    /// Creates a drone route.
    pub fn drone(body: impl IntoIterator<Item = usize>) -> Self {
        Self::new(VehicleKind::Drone, body)
    }

    /// Rebuilds a route from a raw sequence, re-deriving the depot bookends.
    pub fn from_customers(kind: VehicleKind, customers: &[usize]) -> Self {
        Self::new(kind, customers.iter().copied())
    }

    /// Kind of vehicle this route belongs to.
    pub fn kind(&self) -> VehicleKind {
        self.kind
    }

    /// Full sequence, depot at both ends.
    pub fn customers(&self) -> &[usize] {
        &self.customers
    }

    /// Customers between the depot bookends.
    pub fn body(&self) -> &[usize] {
        &self.customers[1..self.customers.len() - 1]
    }

    /// Number of customers served (depot excluded).
    pub fn len(&self) -> usize {
        self.customers.len() - 2
    }

    /// Returns `true` if the route serves no customer.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reverses `length` entries starting at position `start` of the full
    /// sequence.
    ///
    /// # Panics
    ///
    /// Panics if the segment touches a depot bookend.
    pub fn reverse(&mut self, start: usize, length: usize) {
        assert!(
            start >= 1 && start + length < self.customers.len(),
            "segment {start}+{length} overlaps the depot of a route of length {}",
            self.customers.len()
        );
        self.customers[start..start + length].reverse();
    }
}
