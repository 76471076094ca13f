//! Command-line front end for the gridstar A* search.
//!
//! Run: cargo run --bin gridstar -- demo
//!      cargo run --bin gridstar -- bench maps/arena.map maps/arena.map.scen -o results.jsonl
//!      cargo run --bin gridstar -- random --rows 20 --cols 40 --density 30

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use gridstar_core::{Coord, load_map, load_scenarios};
use gridstar_demos::{
    BenchSummary, TEXTBOOK_DESTINATION, TEXTBOOK_SOURCE, format_path, parse_coord, random_grid,
    render_with_path, resolve_config, run_scenarios, textbook_grid, write_records,
};
use gridstar_paths::{Heuristic, PathFinder};
use rand::SeedableRng;

/// A* search over 8-connected grids
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON search configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Heuristic for the h-cost (euclidean or manhattan)
    #[arg(long, global = true)]
    heuristic: Option<Heuristic>,

    /// Give up after this many expansions
    #[arg(long, global = true)]
    max_expansions: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search the classic 9x10 example grid
    Demo {
        /// Source cell as ROW,COL
        #[arg(long, value_parser = parse_coord)]
        from: Option<Coord>,
        /// Destination cell as ROW,COL
        #[arg(long, value_parser = parse_coord)]
        to: Option<Coord>,
    },
    /// Run every scenario of a MovingAI .scen file against a .map file
    Bench {
        map: PathBuf,
        scen: PathBuf,
        /// Print one JSON record per scenario instead of text
        #[arg(long)]
        json: bool,
        /// Also write the JSON records to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Search corner to corner on a random obstacle grid
    Random {
        #[arg(long, default_value_t = 20)]
        rows: usize,
        #[arg(long, default_value_t = 40)]
        cols: usize,
        /// Percentage of blocked cells
        #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u32).range(0..=100))]
        density: u32,
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Colour the rendered grid
        #[arg(long)]
        color: bool,
    },
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let finder = PathFinder::new(resolve_config(
        args.config.as_deref(),
        args.heuristic,
        args.max_expansions,
    )?);
    let config = finder.config();
    log::info!(
        "heuristic: {}, max expansions: {}",
        config.heuristic,
        config
            .max_expansions
            .map_or_else(|| "none".to_string(), |n| n.to_string())
    );

    match args.command {
        Command::Demo { from, to } => {
            let grid = textbook_grid();
            let result = finder.find_path(
                &grid,
                from.unwrap_or(TEXTBOOK_SOURCE),
                to.unwrap_or(TEXTBOOK_DESTINATION),
            );
            println!("{result}");
            if let Some(path) = result.path() {
                println!("The Path is {}", format_path(path));
            }
        }
        Command::Bench {
            map,
            scen,
            json,
            output,
        } => {
            let grid = load_map(&map)?;
            let scenarios = load_scenarios(&scen)?;
            log::info!(
                "running {} scenarios on {} ({}x{})",
                scenarios.len(),
                map.display(),
                grid.rows(),
                grid.cols()
            );
            let records = run_scenarios(&finder, &grid, &scenarios);
            for rec in &records {
                if json {
                    println!("{}", serde_json::to_string(rec)?);
                } else {
                    println!(
                        "{:>5} {} -> {} {:<16} length {:>5} time {:.6}s",
                        rec.instance_num,
                        rec.start,
                        rec.goal,
                        rec.outcome,
                        rec.path_length,
                        rec.time
                    );
                }
            }
            if let Some(path) = output {
                write_records(&records, BufWriter::new(File::create(&path)?))?;
                log::info!("wrote {} records to {}", records.len(), path.display());
            }
            log::info!("{}", BenchSummary::from_records(&records));
        }
        Command::Random {
            rows,
            cols,
            density,
            seed,
            color,
        } => {
            let source = Coord::ZERO;
            let destination = Coord::new(rows as i32 - 1, cols as i32 - 1);
            let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
            let grid = random_grid(rows, cols, density, &[source, destination], &mut rng)?;
            let result = finder.find_path(&grid, source, destination);
            println!("{result}");
            println!("{}", render_with_path(&grid, result.path().unwrap_or(&[]), color));
        }
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
