//! # tsp-anneal CLI
//!
//! Reads a point list, anneals a short route through it and writes the
//! route back out in the same `x,y` per line format.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info, LevelFilter};

use tsp_anneal::{calculate_cost, io, logging, AnnealConfig, Annealer};

/// Command-line interface for tsp-anneal
#[derive(Parser, Debug)]
#[command(name = "tsp-anneal")]
#[command(about = "Approximate shortest route through a point set by simulated annealing")]
#[command(version)]
struct Cli {
    /// Input file: one `x,y` integer pair per line
    #[arg(short, long)]
    input: PathBuf,

    /// Output file for the route
    #[arg(short, long, default_value = "output.csv")]
    output: PathBuf,

    /// Temperature to start with
    #[arg(long = "max-temperature", visible_alias = "max", default_value_t = 10.0)]
    max_temperature: f64,

    /// Temperature at which the search finishes
    #[arg(long = "min-temperature", visible_alias = "min", default_value_t = 0.00003)]
    min_temperature: f64,

    /// Return to the starting point at the end of the route
    #[arg(long)]
    closed: bool,

    /// Random seed; omit for a random run
    #[arg(long)]
    seed: Option<u64>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = logging::init_logger(cli.log_level) {
        eprintln!("{e}");
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let start = Instant::now();

    let points = io::read_points(&cli.input)
        .with_context(|| format!("failed to read points from {}", cli.input.display()))?;
    info!("Straight route cost: {}", calculate_cost(&points));

    let config = AnnealConfig::default()
        .with_initial_temperature(cli.max_temperature)
        .with_min_temperature(cli.min_temperature)
        .with_closed(cli.closed);
    let mut rng = u_numflow::random::create_rng(cli.seed.unwrap_or_else(rand::random::<u64>));
    let mut annealer = Annealer::new(&points, config, &mut rng)?;

    while !annealer.is_done() {
        annealer.next(&mut rng);
    }
    let solution = annealer
        .last_solution()
        .context("search finished without recording a route")?;
    info!(
        "Optimal route cost: {}. Search took {}ms and {} steps",
        solution.cost(),
        start.elapsed().as_millis(),
        annealer.step()
    );

    io::write_solution(&cli.output, solution)
        .with_context(|| format!("failed to write route to {}", cli.output.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["tsp-anneal", "-i", "points.csv"]).unwrap();
        assert_eq!(cli.output, PathBuf::from("output.csv"));
        assert!((cli.max_temperature - 10.0).abs() < 1e-12);
        assert!((cli.min_temperature - 0.00003).abs() < 1e-15);
        assert!(!cli.closed);
        assert_eq!(cli.seed, None);
        assert_eq!(cli.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_cli_requires_input() {
        assert!(Cli::try_parse_from(["tsp-anneal"]).is_err());
    }

    #[test]
    fn test_run_writes_route() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("points.csv");
        let output = dir.path().join("route.csv");
        std::fs::write(&input, "0,0\n0,10\n10,10\n10,0\n").unwrap();

        let cli = Cli::try_parse_from([
            "tsp-anneal",
            "-i",
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
            "--closed",
            "--seed",
            "7",
        ])
        .unwrap();
        run(&cli).unwrap();

        let route = io::read_points(&output).unwrap();
        assert_eq!(route.len(), 5);
        assert_eq!(calculate_cost(&route), 40);
    }

    #[test]
    fn test_run_rejects_malformed_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("points.csv");
        std::fs::write(&input, "0,0\nfoo,1\n").unwrap();

        let cli = Cli::try_parse_from(["tsp-anneal", "-i", input.to_str().unwrap()]).unwrap();
        let err = run(&cli).unwrap_err();
        assert!(format!("{err:#}").contains("line 2"));
    }
}
