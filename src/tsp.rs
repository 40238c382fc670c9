//! The Travelling Salesman Problem as an [`SaProblem`].

use rand::Rng;
use tracing::info;

use crate::error::Result;
use crate::point::Point;
use crate::sa::SaProblem;
use crate::tour::Tour;

/// A closed-tour TSP over a fixed set of cities.
///
/// Neighbors are produced by swapping two random cities of a copied tour.
#[derive(Debug, Clone)]
pub struct TspProblem {
    cities: Tour,
}

impl TspProblem {
    /// Builds the problem over `cities`.
    ///
    /// # Errors
    ///
    /// Returns [`AnnealError::InvalidInput`](crate::AnnealError::InvalidInput)
    /// if `cities` is empty.
    pub fn new(cities: &[Point]) -> Result<Self> {
        let cities = Tour::new(cities)?;
        info!(cities = cities.len(), "tsp problem built");
        Ok(Self { cities })
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Returns `false` for every constructed problem.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Cities in input order.
    pub fn cities(&self) -> &[Point] {
        self.cities.points()
    }
}

impl SaProblem for TspProblem {
    type Solution = Tour;

    fn initial_solution<R: Rng + ?Sized>(&self, rng: &mut R) -> Tour {
        let mut tour = self.cities.clone();
        tour.shuffle(rng);
        tour
    }

    fn cost(&self, tour: &Tour) -> f64 {
        tour.total_distance()
    }

    fn neighbor<R: Rng + ?Sized>(&self, tour: &Tour, rng: &mut R) -> Tour {
        let mut next = tour.clone();
        next.swap_two_random(rng);
        next
    }
}
