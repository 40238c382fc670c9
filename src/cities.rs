//! Built-in demo dataset.

use crate::point::Point;

/// Six Romanian cities with latitude/longitude-like coordinates.
pub fn romanian_cities() -> Vec<Point> {
    vec![
        Point::new("Bucharest", 44.4268, 26.1025),
        Point::new("Cluj-Napoca", 46.7712, 23.6236),
        Point::new("Timisoara", 45.9432, 21.2356),
        Point::new("Iasi", 47.1585, 27.6014),
        Point::new("Constanta", 44.1810, 28.6348),
        Point::new("Resita", 45.2970, 21.8867),
    ]
}
