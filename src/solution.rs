//! Recorded routes and their costs.

use crate::point::Point;

/// Total length of the open path through `points` in order.
///
/// Empty and single-point paths cost 0. Saturates at `u64::MAX`.
pub fn calculate_cost(points: &[Point]) -> u64 {
    points
        .windows(2)
        .map(|w| w[0].distance_to(&w[1]))
        .fold(0, u64::saturating_add)
}

/// An ordered route of concrete points with its path cost.
///
/// Equality is rotation-aware: two solutions are equal when one point
/// sequence is a cyclic shift of the other and the costs match. A reversed
/// route is a different solution.
///
/// # Examples
///
/// ```
/// use tsp_anneal::{Point, Solution};
///
/// let s = Solution::new(vec![Point::new(0, 0), Point::new(3, 4), Point::new(1, 1)]);
/// assert_eq!(s.cost(), 9);
/// assert_eq!(s.export(), "0,0\n3,4\n1,1");
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    points: Vec<Point>,
    cost: u64,
}

impl Solution {
    pub fn new(points: Vec<Point>) -> Self {
        let cost = calculate_cost(&points);
        Self { points, cost }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn cost(&self) -> u64 {
        self.cost
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Replaces the route and recomputes the cost.
    pub fn set_points(&mut self, points: Vec<Point>) -> &mut Self {
        self.cost = calculate_cost(&points);
        self.points = points;
        self
    }

    /// Output file form: one `x,y` pair per line, no trailing newline.
    pub fn export(&self) -> String {
        self.points
            .iter()
            .map(Point::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Whether `other` holds the same points as a cyclic shift of `self`.
    pub fn is_rotation_of(&self, other: &Solution) -> bool {
        if self.len() != other.len() || self.cost != other.cost {
            return false;
        }
        let Some(first) = self.points.first() else {
            return true;
        };
        let n = self.len();
        other
            .points
            .iter()
            .enumerate()
            .filter(|(_, p)| *p == first)
            .any(|(offset, _)| {
                self.points
                    .iter()
                    .enumerate()
                    .all(|(i, p)| *p == other.points[(i + offset) % n])
            })
    }
}

impl PartialEq for Solution {
    fn eq(&self, other: &Self) -> bool {
        self.is_rotation_of(other)
    }
}

impl Eq for Solution {}
