//! Customer type.

use serde::{Deserialize, Serialize};

/// Index of the depot in every customer table and route.
pub const DEPOT: usize = 0;

/// A customer (or the depot) in a truck-and-drone routing problem.
///
/// Customer 0 is the depot. A customer flagged `dronable` may be served by a
/// drone route; every other customer must be served by a truck.
///
/// # Examples
///
/// ```
/// use u_d2d::models::Customer;
///
/// let depot = Customer::depot(0.0, 0.0);
/// assert_eq!(depot.id(), 0);
/// assert!(!depot.dronable());
///
/// let c = Customer::new(1, 3.0, 4.0, true);
/// assert!(c.dronable());
/// assert!((depot.distance_to(&c) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    id: usize,
    x: f64,
    y: f64,
    dronable: bool,
}

impl Customer {
    /// Creates a new customer.
    pub fn new(id: usize, x: f64, y: f64, dronable: bool) -> Self {
        Self { id, x, y, dronable }
    }

    /// Creates the depot at the given coordinates (id=0, not dronable).
    pub fn depot(x: f64, y: f64) -> Self {
        Self::new(DEPOT, x, y, false)
    }

    /// Customer ID (0 = depot).
    pub fn id(&self) -> usize {
        self.id
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Whether a drone may serve this customer.
    pub fn dronable(&self) -> bool {
        self.dronable
    }

    /// Euclidean distance to another customer.
    pub fn distance_to(&self, other: &Customer) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_new() {
        let c = Customer::new(4, 10.0, 20.0, true);
        assert_eq!(c.id(), 4);
        assert_eq!(c.x(), 10.0);
        assert_eq!(c.y(), 20.0);
        assert!(c.dronable());
    }

    #[test]
    fn test_customer_depot() {
        let d = Customer::depot(35.0, 35.0);
        assert_eq!(d.id(), DEPOT);
        assert!(!d.dronable());
    }

    #[test]
    fn test_customer_distance_symmetric() {
        let a = Customer::new(1, 1.0, 2.0, false);
        let b = Customer::new(2, 4.0, 6.0, true);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
        assert!((a.distance_to(&b) - b.distance_to(&a)).abs() < 1e-10);
    }
}
