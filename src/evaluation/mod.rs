//! Solution checking.
//!
//! Neighborhood operators assume well-formed input: every customer served
//! once, drones carrying dronable customers only, and no empty routes.
//! [`validate`] reports every way a solution breaks those assumptions.

mod validator;

pub use validator::{is_feasible, validate, Violation, ViolationType};
