//! Bounded brute-force search for small instances.
//!
//! The search runs once, on the rayon pool, and publishes its result into a
//! write-once slot. The annealing loop polls the slot without blocking.

use std::sync::{Arc, OnceLock};

use log::debug;

use super::runner::{route_cost, route_points};
use crate::permutation::{limited_permutations, sequence};
use crate::point::Point;
use crate::solution::Solution;

/// Evaluates up to `limit` permutations of `base` in lexicographic order and
/// returns the cheapest one, or `None` when `limit` is 0.
///
/// Exact whenever `base.len()! <= limit`; otherwise an upper bound.
pub fn brute_force(base: &[Point], closed: bool, limit: usize) -> Option<Solution> {
    let items = sequence(base.len(), 0);
    let mut best: Option<(u64, Vec<usize>)> = None;

    for route in limited_permutations(&items, limit) {
        let cost = route_cost(base, &route, closed);
        if best.as_ref().is_none_or(|(best_cost, _)| cost < *best_cost) {
            best = Some((cost, route));
        }
    }

    best.map(|(_, route)| Solution::new(route_points(base, &route, closed)))
}

/// Handle to a background [`brute_force`] run.
#[derive(Debug, Clone)]
pub struct ExactSearch {
    slot: Arc<OnceLock<Solution>>,
}

impl ExactSearch {
    /// Starts the search on the rayon pool and returns immediately.
    pub fn spawn(base: Vec<Point>, closed: bool, limit: usize) -> Self {
        let slot = Arc::new(OnceLock::new());
        let writer = Arc::clone(&slot);
        rayon::spawn(move || {
            if let Some(solution) = brute_force(&base, closed, limit) {
                debug!(
                    "exact search finished: {} points, cost {}",
                    base.len(),
                    solution.cost()
                );
                // Sole writer, so the slot is always empty here.
                writer.set(solution).ok();
            }
        });
        Self { slot }
    }

    /// The result, if the search has finished.
    pub fn get(&self) -> Option<&Solution> {
        self.slot.get()
    }
}
