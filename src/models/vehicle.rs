//! Vehicle kinds and the unified vehicle index space.

use serde::{Deserialize, Serialize};

/// The two kinds of vehicle in the fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleKind {
    /// Ground vehicle; may serve any customer.
    Truck,
    /// Aerial vehicle; may only serve dronable customers.
    Drone,
}

/// A concrete vehicle: its kind plus its index among vehicles of that kind.
///
/// Operators enumerate the fleet over one combined range
/// `0..trucks_count + drones_count`; indices below `trucks_count` address
/// trucks and the rest address drones at offset `index - trucks_count`.
///
/// # Examples
///
/// ```
/// use u_d2d::models::{Vehicle, VehicleKind};
///
/// assert_eq!(Vehicle::from_index(1, 2), Vehicle::Truck(1));
/// assert_eq!(Vehicle::from_index(3, 2), Vehicle::Drone(1));
/// assert_eq!(Vehicle::Drone(1).kind(), VehicleKind::Drone);
/// assert_eq!(Vehicle::Drone(1).unified_index(2), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Vehicle {
    /// Truck with the given index.
    Truck(usize),
    /// Drone with the given index.
    Drone(usize),
}

impl Vehicle {
    /// Resolves a unified fleet index.
    pub fn from_index(index: usize, trucks_count: usize) -> Self {
        if index < trucks_count {
            Vehicle::Truck(index)
        } else {
            Vehicle::Drone(index - trucks_count)
        }
    }

    /// Position of this vehicle in the unified fleet range.
    pub fn unified_index(&self, trucks_count: usize) -> usize {
        match *self {
            Vehicle::Truck(i) => i,
            Vehicle::Drone(i) => trucks_count + i,
        }
    }

    /// Kind of this vehicle.
    pub fn kind(&self) -> VehicleKind {
        match self {
            Vehicle::Truck(_) => VehicleKind::Truck,
            Vehicle::Drone(_) => VehicleKind::Drone,
        }
    }

    /// Index among vehicles of the same kind.
    pub fn index(&self) -> usize {
        match *self {
            Vehicle::Truck(i) | Vehicle::Drone(i) => i,
        }
    }

    /// Returns `true` for drones.
    pub fn is_drone(&self) -> bool {
        self.kind() == VehicleKind::Drone
    }
}

/// Iterates the whole fleet in unified order: trucks first, then drones.
pub fn fleet(trucks_count: usize, drones_count: usize) -> impl Iterator<Item = Vehicle> + Clone {
    (0..trucks_count + drones_count).map(move |i| Vehicle::from_index(i, trucks_count))
}
