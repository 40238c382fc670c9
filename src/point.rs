//! Labeled 2D points and the Euclidean metric between them.

/// An immutable named coordinate.
///
/// Points are plain values: tours hold their own copies, so nothing a tour
/// does can change a point seen by another tour.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    name: String,
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a point.
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            name: name.into(),
            x,
            y,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }
}

/// Euclidean distance between two points.
///
/// Symmetric, and zero exactly when both coordinates coincide. Names are
/// ignored.
///
/// # Examples
///
/// ```
/// use u_anneal::{distance, Point};
///
/// let a = Point::new("a", 0.0, 0.0);
/// let b = Point::new("b", 3.0, 4.0);
/// assert_eq!(distance(&a, &b), 5.0);
/// ```
pub fn distance(a: &Point, b: &Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}
