//! Point list input and route output.
//!
//! Both directions use one `x,y` integer pair per line, no header.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::point::Point;
use crate::solution::Solution;

/// Parses one point per line. Blank lines are skipped; anything else that is
/// not an `x,y` integer pair fails with [`Error::Parse`] naming the line.
pub fn parse_points(text: &str) -> Result<Vec<Point>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| line.parse::<Point>().map_err(|e| Error::parse(i + 1, e)))
        .collect()
}

pub fn read_points(path: impl AsRef<Path>) -> Result<Vec<Point>> {
    let text = fs::read_to_string(path)?;
    parse_points(&text)
}

/// Writes [`Solution::export`] to `path`, replacing any existing file.
pub fn write_solution(path: impl AsRef<Path>, solution: &Solution) -> Result<()> {
    fs::write(path, solution.export())?;
    Ok(())
}
