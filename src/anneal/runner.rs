//! Annealing state machine.
//!
//! # States
//!
//! - **initialized**: step counter is 1, no move has been tried yet
//! - **running**: step > 1 and the temperature is above the limit
//! - **stopped**: terminal; temperature forced to 0 and the route recorded
//!
//! # Step
//!
//! 1. Reverse a random segment of the current route (2-opt move)
//! 2. Accept improving candidates; accept worsening ones with probability
//!    `exp(-delta / T)` (Metropolis)
//! 3. Cool: `T = T_0 * 0.3 / step`, regardless of acceptance
//! 4. Stop once `T <= T_min`, the exact cost is matched, or the step cap hits

use std::collections::HashSet;

use log::{debug, trace};
use rand::Rng;

use super::config::{AnnealConfig, COOLING_FACTOR};
use super::exact::ExactSearch;
use crate::error::{Error, Result};
use crate::permutation::{is_permutation, random_permutation, reverse_segment, sequence};
use crate::point::Point;
use crate::solution::Solution;

/// Cost of visiting `base` in `route` order; `closed` adds the leg back to
/// the first point.
pub(crate) fn route_cost(base: &[Point], route: &[usize], closed: bool) -> u64 {
    let open = route
        .windows(2)
        .map(|w| base[w[0]].distance_to(&base[w[1]]))
        .fold(0, u64::saturating_add);
    match (closed, route.first(), route.last()) {
        (true, Some(&first), Some(&last)) => {
            open.saturating_add(base[last].distance_to(&base[first]))
        }
        _ => open,
    }
}

/// Points of `base` in `route` order, with the first repeated at the end
/// when `closed`.
pub(crate) fn route_points(base: &[Point], route: &[usize], closed: bool) -> Vec<Point> {
    let mut points: Vec<Point> = route.iter().map(|&i| base[i]).collect();
    if closed {
        if let Some(&first) = points.first() {
            points.push(first);
        }
    }
    points
}

/// Drops repeated points, keeping the first occurrence of each.
fn dedup(points: &[Point]) -> Vec<Point> {
    let mut seen = HashSet::with_capacity(points.len());
    points.iter().copied().filter(|p| seen.insert(*p)).collect()
}

/// Simulated annealing search over point orderings.
///
/// Randomness is injected through the `rng` argument of each call, so a
/// seeded generator reproduces a run step for step (exact search disabled).
///
/// # Examples
///
/// ```
/// use tsp_anneal::{AnnealConfig, Annealer, Point};
/// use u_numflow::random::create_rng;
///
/// let points = vec![Point::new(0, 0), Point::new(0, 1), Point::new(1, 1), Point::new(1, 0)];
/// let mut rng = create_rng(42);
/// let mut annealer = Annealer::new(&points, AnnealConfig::default().with_closed(true), &mut rng).unwrap();
///
/// while !annealer.is_done() {
///     annealer.next(&mut rng);
/// }
/// assert_eq!(annealer.best_solution().unwrap().cost(), 4);
/// ```
#[derive(Debug)]
pub struct Annealer {
    base: Vec<Point>,
    route: Vec<usize>,
    config: AnnealConfig,
    temperature: f64,
    step: usize,
    stopped: bool,
    results: Vec<u64>,
    solutions: Vec<Solution>,
    exact: Option<ExactSearch>,
}

impl Annealer {
    /// Builds an annealer over the distinct points of `points`.
    ///
    /// Bases with fewer than `config.brute_force_threshold` points start a
    /// background exact search. Bases of 0 or 1 points are stopped at once
    /// with their trivial solution recorded.
    pub fn new<R: Rng>(points: &[Point], config: AnnealConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;

        let base = dedup(points);
        let route = random_permutation(&sequence(base.len(), 0), rng);
        let exact = (base.len() < config.brute_force_threshold).then(|| {
            ExactSearch::spawn(base.clone(), config.closed, config.brute_force_limit)
        });
        debug!(
            "annealer: {} points ({} distinct), T0 = {}, T_min = {}, closed = {}, exact search = {}",
            points.len(),
            base.len(),
            config.initial_temperature,
            config.min_temperature,
            config.closed,
            exact.is_some()
        );

        let mut annealer = Self {
            base,
            route,
            temperature: config.initial_temperature,
            config,
            step: 1,
            stopped: false,
            results: Vec::new(),
            solutions: Vec::new(),
            exact,
        };
        if annealer.is_degenerate() {
            annealer.finish();
        }
        Ok(annealer)
    }

    /// Performs one perturbation, acceptance test and cooling update.
    ///
    /// Returns the route cost before the step, or `None` once stopped.
    pub fn next<R: Rng>(&mut self, rng: &mut R) -> Option<u64> {
        if self.update_done() {
            return None;
        }

        let candidate = reverse_segment(&self.route, rng);
        let candidate_cost = route_cost(&self.base, &candidate, self.config.closed);
        let current_cost = self.current_cost();
        let delta = candidate_cost as f64 - current_cost as f64;

        if delta < 0.0 || self.accepts(delta, rng) {
            self.route = candidate;
        }
        self.cool();
        self.results.push(current_cost);
        trace!("{}", self.info());

        self.update_done();
        Some(current_cost)
    }

    /// Steps until stopped and returns the last recorded solution.
    pub fn run<R: Rng>(&mut self, rng: &mut R) -> Option<&Solution> {
        while self.next(rng).is_some() {}
        self.last_solution()
    }

    /// Whether the search has reached its terminal state.
    pub fn is_done(&self) -> bool {
        self.stopped
    }

    pub fn is_running(&self) -> bool {
        !self.stopped && self.step > 1 && self.temperature > self.config.min_temperature
    }

    /// Stops the search and records the current route.
    ///
    /// Does nothing before the first step.
    pub fn force_stop(&mut self) {
        if self.stopped || (self.step == 1 && !self.is_degenerate()) {
            return;
        }
        self.finish();
    }

    /// Restarts from a fresh random route at the initial temperature.
    /// Recorded solutions are kept.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        self.step = 1;
        self.temperature = self.config.initial_temperature;
        self.stopped = false;
        self.results.clear();
        self.route = random_permutation(&sequence(self.base.len(), 0), rng);
        if self.is_degenerate() {
            self.finish();
        }
    }

    pub fn base(&self) -> &[Point] {
        &self.base
    }

    pub fn config(&self) -> &AnnealConfig {
        &self.config
    }

    pub fn route(&self) -> &[usize] {
        &self.route
    }

    /// Replaces the current route. `route` must be a permutation of the
    /// base indices.
    pub fn replace_route(&mut self, route: Vec<usize>) -> Result<()> {
        if !is_permutation(&route, self.base.len()) {
            return Err(Error::invalid_route(format!(
                "{route:?} is not a permutation of 0..{}",
                self.base.len()
            )));
        }
        self.route = route;
        Ok(())
    }

    /// Points of the current route.
    pub fn points(&self) -> Vec<Point> {
        route_points(&self.base, &self.route, self.config.closed)
    }

    pub fn current_cost(&self) -> u64 {
        route_cost(&self.base, &self.route, self.config.closed)
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn step(&self) -> usize {
        self.step
    }

    /// Route cost before each step taken since the last reset.
    pub fn cost_history(&self) -> &[u64] {
        &self.results
    }

    pub fn info(&self) -> String {
        format!(
            "Route length: {} Step: {} Temperature: {}",
            self.current_cost(),
            self.step,
            self.temperature
        )
    }

    /// Exact search result, if one was started and has finished.
    pub fn exact_solution(&self) -> Option<&Solution> {
        self.exact.as_ref().and_then(ExactSearch::get)
    }

    pub fn solutions(&self) -> &[Solution] {
        &self.solutions
    }

    pub fn solution(&self, index: usize) -> Option<&Solution> {
        self.solutions.get(index)
    }

    pub fn last_solution(&self) -> Option<&Solution> {
        self.solutions.last()
    }

    /// Cheapest recorded solution.
    pub fn best_solution(&self) -> Option<&Solution> {
        self.solutions.iter().min_by_key(|s| s.cost())
    }

    fn is_degenerate(&self) -> bool {
        self.base.len() <= 1
    }

    fn accepts<R: Rng>(&self, delta: f64, rng: &mut R) -> bool {
        if self.temperature <= 0.0 {
            return false;
        }
        let probability = (-delta / self.temperature).exp();
        rng.random_range(0.0..1.0) <= probability
    }

    fn cool(&mut self) {
        self.temperature = self.config.initial_temperature * COOLING_FACTOR / self.step as f64;
        self.step += 1;
    }

    /// Evaluates the stop conditions and performs the stop transition the
    /// first time they hold.
    fn update_done(&mut self) -> bool {
        if self.stopped {
            return true;
        }
        if self.step == 1 {
            return false;
        }
        let cooled = self.temperature <= self.config.min_temperature;
        let matched_exact = self
            .exact_solution()
            .is_some_and(|exact| exact.cost() == self.current_cost());
        let capped = self.step > self.config.max_steps;
        if cooled || matched_exact || capped {
            debug!(
                "stopping at step {} (cooled = {cooled}, exact = {matched_exact}, capped = {capped}), cost {}",
                self.step,
                self.current_cost()
            );
            self.finish();
        }
        self.stopped
    }

    fn finish(&mut self) {
        self.temperature = 0.0;
        self.stopped = true;
        let solution = Solution::new(self.points());
        if self.last_solution() != Some(&solution) {
            self.solutions.push(solution);
        }
    }
}
