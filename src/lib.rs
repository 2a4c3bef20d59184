//! Approximate shortest routes through 2-D point sets by simulated annealing.
//!
//! - [`Point`]: integer coordinates with rounded Euclidean distance
//! - [`permutation`]: index sequences, shuffles and bounded enumeration
//! - [`Solution`]: a recorded route with its cost and rotation-aware equality
//! - [`Annealer`]: the stepping search engine, with a background brute-force
//!   cross-check for small instances
//! - [`io`]: the `x,y` per line file format
//!
//! The engine is driven by the caller: build it from points and a config,
//! call [`Annealer::next`] until [`Annealer::is_done`], then read
//! [`Annealer::best_solution`] or [`Annealer::last_solution`].

pub mod anneal;
pub mod error;
pub mod io;
pub mod logging;
pub mod permutation;
pub mod point;
pub mod solution;

pub use anneal::{AnnealConfig, Annealer};
pub use error::{Error, PointParseError, Result};
pub use point::Point;
pub use solution::{calculate_cost, Solution};
