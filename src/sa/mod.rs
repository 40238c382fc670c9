//! Simulated Annealing (SA).
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Accepts worsening moves with a probability that
//! decreases as the temperature cools geometrically, letting the search
//! escape local optima early and settle late.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast Computing Machines"

mod config;
mod runner;
mod schedule;
mod types;

pub use config::SaConfig;
pub use runner::{AnnealState, AnnealStatus, SaResult, SaRunner};
pub use schedule::{acceptance_probability, cool, AnnealingSchedule};
pub use types::SaProblem;
