//! Integer 2-D points.

use std::fmt;
use std::str::FromStr;

use crate::error::PointParseError;

/// A point on the integer grid.
///
/// Distances are Euclidean, rounded to the nearest integer, so route costs
/// are exact sums and can be compared with `==`.
///
/// # Examples
///
/// ```
/// use tsp_anneal::Point;
///
/// let a = Point::new(0, 0);
/// let b = Point::new(3, 4);
/// assert_eq!(a.distance_to(&b), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Rounded Euclidean distance: `round(sqrt(dx² + dy²))`.
    ///
    /// Computed in `f64`, so any pair of `i64` coordinates is accepted;
    /// distances beyond `u64::MAX` saturate.
    pub fn distance_to(&self, other: &Point) -> u64 {
        let dx = other.x as f64 - self.x as f64;
        let dy = other.y as f64 - self.y as f64;
        dx.hypot(dy).round() as u64
    }

    /// Shifts the point by `(dx, dy)`.
    pub fn move_by(&mut self, dx: i64, dy: i64) -> &mut Self {
        self.x += dx;
        self.y += dy;
        self
    }

    pub fn move_to(&mut self, x: i64, y: i64) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl FromStr for Point {
    type Err = PointParseError;

    /// Parses an `x,y` pair of integers. Surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(',');
        let (x, y) = match (parts.next(), parts.next(), parts.next()) {
            (Some(x), Some(y), None) => (x.trim(), y.trim()),
            _ => return Err(PointParseError::Shape(s.to_string())),
        };
        Ok(Self::new(coordinate('x', x)?, coordinate('y', y)?))
    }
}

fn coordinate(axis: char, value: &str) -> Result<i64, PointParseError> {
    value
        .parse::<i64>()
        .map_err(|reason| PointParseError::Coordinate {
            axis,
            value: value.to_string(),
            reason,
        })
}
