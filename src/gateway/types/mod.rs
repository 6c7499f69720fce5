//! Gateway types module
//!
//! Type-safe types for API boundary enforcement:
//!
//! - [`StrictAmount`]: format-validated monetary input
//! - [`Problem`]: structured error payload with an HTTP status per error kind

pub mod money;
pub mod problem;

pub use money::StrictAmount;
pub use problem::Problem;
