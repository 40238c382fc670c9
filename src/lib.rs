//! Simulated Annealing for small Travelling Salesman tours.
//!
//! - [`Point`] and [`distance`]: named coordinates and the Euclidean metric.
//! - [`Tour`]: a closed visiting order with a memoized length and random
//!   perturbations.
//! - [`sa`]: geometric cooling, the Metropolis acceptance rule, and a
//!   step-wise annealing runner generic over [`sa::SaProblem`].
//! - [`TspProblem`]: the TSP plugged into that runner.
//! - [`cities`]: a six-city demo dataset.
//!
//! Randomness is always passed in explicitly, so seeded runs are
//! reproducible.

pub mod cities;
mod error;
mod point;
pub mod sa;
#[cfg(test)]
mod test_support;
mod tour;
mod tsp;

pub use error::{AnnealError, Result};
pub use point::{distance, Point};
pub use tour::Tour;
pub use tsp::TspProblem;
