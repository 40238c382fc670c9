//! Candidate tours.
//!
//! A [`Tour`] is a closed loop over a fixed set of points. Only the visiting
//! order ever changes; mutators permute the sequence in place and drop the
//! memoized length.

use std::cell::Cell;
use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{AnnealError, Result};
use crate::point::{distance, Point};

/// An ordered, cyclic visiting sequence of points.
///
/// The total distance is computed lazily on first request and memoized until
/// the next mutation. Cloning a tour copies its points, so two tours never
/// share a sequence.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Tour {
    sequence: Vec<Point>,
    #[cfg_attr(feature = "serde", serde(skip))]
    cached_distance: Cell<Option<f64>>,
}

impl Tour {
    /// Creates a tour visiting `points` in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`AnnealError::InvalidInput`] if `points` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_anneal::{Point, Tour};
    ///
    /// let tour = Tour::new(&[
    ///     Point::new("a", 0.0, 0.0),
    ///     Point::new("b", 3.0, 0.0),
    ///     Point::new("c", 3.0, 4.0),
    /// ])
    /// .unwrap();
    /// assert_eq!(tour.total_distance(), 12.0);
    /// ```
    pub fn new(points: &[Point]) -> Result<Self> {
        if points.is_empty() {
            return Err(AnnealError::InvalidInput(
                "a tour needs at least one point".into(),
            ));
        }
        Ok(Self {
            sequence: points.to_vec(),
            cached_distance: Cell::new(None),
        })
    }

    /// Points in visiting order.
    pub fn points(&self) -> &[Point] {
        &self.sequence
    }

    /// Number of points in the tour.
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Returns `false` for every constructed tour.
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Uniformly permutes the visiting order.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.sequence.shuffle(rng);
        self.invalidate();
    }

    /// Exchanges the points at two distinct random positions.
    ///
    /// Does nothing (and draws nothing from `rng`) for a single-point tour.
    pub fn swap_two_random<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let n = self.sequence.len();
        if n < 2 {
            return;
        }
        let i = rng.random_range(0..n);
        let mut j = rng.random_range(0..n);
        while i == j {
            j = rng.random_range(0..n);
        }
        self.sequence.swap(i, j);
        self.invalidate();
    }

    /// Length of the closed loop, including the edge from the last point
    /// back to the first.
    pub fn total_distance(&self) -> f64 {
        if let Some(d) = self.cached_distance.get() {
            return d;
        }
        let d = closed_loop_length(&self.sequence);
        self.cached_distance.set(Some(d));
        d
    }

    /// Human-readable rendering, identical to the [`Display`](fmt::Display)
    /// output.
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn invalidate(&mut self) {
        self.cached_distance.set(None);
    }
}

fn closed_loop_length(points: &[Point]) -> f64 {
    let n = points.len();
    (0..n)
        .map(|i| distance(&points[i], &points[(i + 1) % n]))
        .sum()
}

impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, p) in self.sequence.iter().enumerate() {
            if i > 0 {
                f.write_str("->")?;
            }
            write!(f, "('{}',{},{})", p.name(), p.x(), p.y())?;
        }
        Ok(())
    }
}
