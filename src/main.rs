#![warn(clippy::all)]

use anyhow::{Context, Result};
use bounded_life::{simulate, Engine, Glyphs, Grid, ParallelEngine, RandomSource, SequentialEngine};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Strategy {
    Sequential,
    Parallel,
}

/// Game of Life on a bounded grid, printed generation by generation.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Number of generations to run
    #[arg(short, long, default_value_t = 10)]
    generations: u64,

    #[arg(short, long, default_value_t = 20)]
    rows: usize,

    #[arg(short, long, default_value_t = 40)]
    columns: usize,

    /// Random seed (entropy if omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Probability of a random cell being alive
    #[arg(long, default_value_t = RandomSource::DEFAULT_FILL_RATE)]
    fill_rate: f64,

    /// Plaintext pattern to start from instead of random cells
    #[arg(short, long)]
    pattern: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Strategy::Parallel)]
    strategy: Strategy,

    /// Worker threads for the parallel strategy (0 = all available, at least 16 rows each)
    #[arg(short, long, default_value_t = 0)]
    workers: usize,

    #[arg(long, default_value_t = '#')]
    alive: char,

    #[arg(long, default_value_t = '.')]
    dead: char,

    /// Print engine stats to stderr when done
    #[arg(long)]
    stats: bool,
}

fn initial_grid(args: &Args) -> Result<Grid> {
    match &args.pattern {
        Some(path) => {
            let data = std::fs::read_to_string(path)
                .with_context(|| format!("cannot read {}", path.display()))?;
            Grid::from_plaintext(&data).with_context(|| format!("bad pattern {}", path.display()))
        }
        None => {
            let mut source = RandomSource::new(args.seed, args.fill_rate);
            Ok(Grid::random(args.rows, args.columns, &mut source)?)
        }
    }
}

fn build_engine(grid: Grid, strategy: Strategy, workers: usize) -> Result<Box<dyn Engine>> {
    let engine: Box<dyn Engine> = match strategy {
        Strategy::Sequential => Box::new(SequentialEngine::from_grid(grid)),
        Strategy::Parallel if workers > 0 => {
            let engine = ParallelEngine::with_workers(grid, workers)?;
            log::info!("parallel engine with {} workers", engine.workers());
            Box::new(engine)
        }
        Strategy::Parallel => {
            let engine = ParallelEngine::from_grid(grid);
            log::info!("parallel engine with {} workers", engine.workers());
            Box::new(engine)
        }
    };
    Ok(engine)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let grid = initial_grid(&args)?;
    let mut engine = build_engine(grid, args.strategy, args.workers)?;

    let stdout = std::io::stdout();
    let mut sink = stdout.lock();
    simulate(
        engine.as_mut(),
        args.generations,
        &mut sink,
        Glyphs::new(args.alive, args.dead),
    )
    .context("simulation failed")?;

    if args.stats {
        eprint!("{}", engine.statistics());
    }
    Ok(())
}
