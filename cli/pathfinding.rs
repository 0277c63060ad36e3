//! Generate a random maze, find the shortest path from `S` to `O`, and
//! animate the walk.
//!
//! Run: cargo run --bin pathfinding -- --rows 12 --cols 20 --seed 7
//!
//! Set `RUST_LOG=debug` to see search and generation statistics.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use maze_core::Grid;
use maze_crossterm::{PlainRenderer, TerminalRenderer, distance_overlay};
use maze_gen::{MazeConfig, MazeGen};

/// Random maze shortest-path demo
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Grid rows, border included
    #[arg(short, long, default_value_t = 10)]
    rows: usize,

    /// Grid columns, border included
    #[arg(short, long, default_value_t = 10)]
    cols: usize,

    /// Seed for a reproducible maze
    #[arg(short, long)]
    seed: Option<u64>,

    /// Probability that an interior cell starts as a wall
    #[arg(long, default_value_t = 0.5)]
    wall_pct: f64,

    /// Pause between animation frames, in milliseconds
    #[arg(short, long, default_value_t = 1000)]
    delay_ms: u64,

    /// Print frames as plain text instead of redrawing in place
    #[arg(long)]
    plain: bool,

    /// Also print the distance map the search produced
    #[arg(long)]
    distances: bool,

    /// Load the maze from a text file instead of generating one
    #[arg(long)]
    maze: Option<PathBuf>,
}

fn generate(args: &Args) -> Result<Grid, Box<dyn std::error::Error>> {
    let config = MazeConfig::with_size(args.rows, args.cols).with_wall_pct(args.wall_pct);
    let grid = match args.seed {
        Some(seed) => MazeGen::seeded(config, seed).generate()?,
        None => MazeGen::new(config, rand::rng()).generate()?,
    };
    Ok(grid)
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let grid = match &args.maze {
        Some(file) => maze_cli::load_maze(file)?,
        None => generate(args)?,
    };

    let delay = Duration::from_millis(args.delay_ms);
    let (solution, moves) = if args.plain {
        let mut renderer = PlainRenderer::new(io::stdout().lock());
        maze_cli::run(&mut renderer, &grid, delay)?
    } else {
        let mut renderer = TerminalRenderer::new().with_alternate_screen(false);
        maze_cli::run(&mut renderer, &grid, delay)?
    };

    println!("Done.");
    println!("Moves used: {moves}");
    if args.distances {
        println!();
        print!("{}", distance_overlay(&grid, &solution.map));
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
