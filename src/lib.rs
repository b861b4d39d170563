//! Natural cubic spline interpolation built on a small Gauss-Jordan elimination solver.
//!
//! The interior second derivatives of the spline are obtained by solving the continuity
//! system as an augmented [Matrix] with [GaussJordan]. Each segment is a cubic in its own
//! local coordinate, so evaluation never deals with a global high degree polynomial.
//!
//! # Example
//! ```
//! use gauss_jordan_spline::{Point, Spline};
//! use assert_approx_eq::assert_approx_eq;
//!
//! let points = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 1.0),
//!     Point::new(2.0, 0.0),
//! ];
//! let spline = Spline::new(points).unwrap();
//!
//! assert_eq!(1.0, spline.evaluate(1.0).unwrap());
//! assert_approx_eq!(0.6875, spline.evaluate(0.5).unwrap(), 1e-12);
//! assert!(spline.evaluate(3.0).is_err());
//! ```
//!
//! Building costs O(N³) in the number of interior knots, evaluation is a binary search
//! followed by one cubic. Nothing is shared between builds; a [Matrix] must not be solved
//! from two threads at once.

mod error;
mod matrix;
mod point;
mod polynomial;
mod solver;
mod spline;

pub use error::{Error, InvalidInput};
pub use matrix::Matrix;
pub use point::Point;
pub use polynomial::Polynomial;
pub use solver::{solve, GaussJordan, PivotStrategy};
pub use spline::{natural_system, Segment, Spline};
