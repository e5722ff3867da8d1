//! Travel distances between the depot and every customer.

use crate::models::Customer;

/// Travel distances indexed by location, the depot at index 0.
///
/// Row `from` holds the distances out of one location, so asymmetric travel
/// is representable. Route lengths, and from them vehicle working times, are
/// sums of entries along consecutive locations of a route.
///
/// # Examples
///
/// ```
/// use u_d2d::models::Customer;
/// use u_d2d::distance::DistanceMatrix;
///
/// let locations = vec![
///     Customer::depot(0.0, 0.0),
///     Customer::new(1, 3.0, 4.0, false),
///     Customer::new(2, 0.0, 2.0, true),
/// ];
/// let dm = DistanceMatrix::from_customers(&locations);
///
/// // Drone trip 0 -> 2 -> 0.
/// let trip = dm.get(0, 2) + dm.get(2, 0);
/// assert!((trip - 4.0).abs() < 1e-10);
/// assert_eq!(dm.try_get(0, 3), None);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a matrix over `size` locations with every distance zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Straight-line distances between the given locations.
    pub fn from_customers(customers: &[Customer]) -> Self {
        let n = customers.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = customers[i].distance_to(&customers[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Wraps measured distances laid out row by row.
    ///
    /// Returns `None` unless `data` holds exactly `size * size` entries.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Distance travelled from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either location is outside the matrix.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Like [`get`](Self::get), but `None` for a location outside the matrix.
    pub fn try_get(&self, from: usize, to: usize) -> Option<f64> {
        if from >= self.size || to >= self.size {
            return None;
        }
        Some(self.data[from * self.size + to])
    }

    /// Overrides one directed distance.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations, depot included.
    pub fn size(&self) -> usize {
        self.size
    }
}
