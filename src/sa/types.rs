//! Core trait for Simulated Annealing.

use rand::Rng;

/// Defines a Simulated Annealing problem.
///
/// The implementor supplies a starting point, a cost function and a
/// neighbor move. The runner owns temperature, acceptance and best-solution
/// bookkeeping.
///
/// Every random choice goes through the `rng` argument, so a seeded
/// generator reproduces a run exactly.
///
/// # Minimization
///
/// SA minimizes the cost function. For maximization, negate the cost.
///
/// # Examples
///
/// ```ignore
/// struct Cities { points: Vec<Point> }
///
/// impl SaProblem for Cities {
///     type Solution = Tour;
///
///     fn initial_solution<R: Rng + ?Sized>(&self, rng: &mut R) -> Tour {
///         let mut tour = Tour::new(&self.points).unwrap();
///         tour.shuffle(rng);
///         tour
///     }
///
///     fn cost(&self, tour: &Tour) -> f64 {
///         tour.total_distance()
///     }
///
///     fn neighbor<R: Rng + ?Sized>(&self, tour: &Tour, rng: &mut R) -> Tour {
///         let mut next = tour.clone();
///         next.swap_two_random(rng);
///         next
///     }
/// }
/// ```
pub trait SaProblem {
    /// The solution representation type.
    type Solution: Clone;

    /// Creates a random initial solution.
    fn initial_solution<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Solution;

    /// Computes the cost of a solution. Lower is better.
    fn cost(&self, solution: &Self::Solution) -> f64;

    /// Generates a neighbor of `solution` without modifying it.
    fn neighbor<R: Rng + ?Sized>(&self, solution: &Self::Solution, rng: &mut R)
        -> Self::Solution;
}
