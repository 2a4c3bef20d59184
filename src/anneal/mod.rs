//! Simulated annealing over point orderings.
//!
//! A single-route trajectory search: each step reverses a random segment of
//! the route and accepts the result by the Metropolis criterion. Temperature
//! follows the hyperbolic schedule `T_k = T_0 * 0.3 / k`. Small instances
//! also get a bounded brute-force search in the background whose cost, once
//! known, ends the annealing early when matched.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod exact;
mod runner;

pub use config::{AnnealConfig, COOLING_FACTOR};
pub use exact::{brute_force, ExactSearch};
pub use runner::Annealer;
