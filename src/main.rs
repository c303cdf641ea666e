use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use mazer::{Maze, NeighborOrder, Solution, Solver, SolverConfig, SymbolMode, Symbols};
use tracing::*;
use tracing_subscriber::EnvFilter;

/// Finds the shortest path through text mazes.
///
/// The first character of a maze's top row is taken as the wall symbol and
/// the first different character in that row as the open symbol, unless
/// `--wall` and `--open` are given.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maze files to solve
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Symbol written over path cells
    #[arg(long, default_value_t = '.')]
    marker: char,

    /// Wall symbol, instead of detecting it
    #[arg(long, requires = "open")]
    wall: Option<char>,

    /// Open-cell symbol, instead of detecting it
    #[arg(long, requires = "wall")]
    open: Option<char>,

    /// Neighbour order, four letters from l, r, u, d; picks between equally short paths
    #[arg(long, default_value_t = NeighborOrder::default())]
    order: NeighborOrder,

    /// Also print the distance of every cell from the entrance
    #[arg(long)]
    distances: bool,

    /// Solve mazes one after another instead of in parallel
    #[arg(long)]
    sequential: bool,

    /// Write `<name>.png` for every solved maze into this directory
    #[cfg(feature = "drawing")]
    #[arg(long)]
    image_dir: Option<PathBuf>,

    /// With --image-dir, also write replay frames into `<dir>/<name>/`
    #[cfg(feature = "drawing")]
    #[arg(long, requires = "image_dir")]
    frames: bool,

    /// Cell size in pixels for written images
    #[cfg(feature = "drawing")]
    #[arg(long, default_value_t = 20)]
    cell_size: u32,
}

impl Args {
    fn solver_config(&self) -> SolverConfig {
        let symbols = match (self.wall, self.open) {
            (Some(wall), Some(open)) => SymbolMode::Fixed(Symbols::new(wall, open)),
            _ => SymbolMode::Detect,
        };
        SolverConfig::new(self.order, self.marker, symbols, !self.sequential)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let failures = run(&args)?;
    if failures > 0 {
        bail!("{failures} of {} mazes could not be solved", args.inputs.len());
    }
    Ok(())
}

/// Solves every input and returns how many of them failed.
fn run(args: &Args) -> Result<usize> {
    let solver = Solver::new(args.solver_config());
    debug!("Solver configuration: {:?}", solver.config());

    let mut failures = 0;
    let mut mazes = Vec::new();
    for input in &args.inputs {
        match read_maze(&solver, input) {
            Ok(maze) => mazes.push((input, maze)),
            Err(e) => {
                eprintln!("{}: {e:#}", input.display());
                failures += 1;
            }
        }
    }

    let parsed: Vec<Maze> = mazes.iter().map(|(_, maze)| maze.clone()).collect();
    let results = solver.solve_many(&parsed);
    for ((input, maze), result) in mazes.iter().zip(results) {
        match result {
            Ok(solution) => {
                print_solution(args, input, maze, &solution, solver.config());
                #[cfg(feature = "drawing")]
                if let Err(e) = write_images(args, input, maze, &solution) {
                    eprintln!("{}: {e:#}", input.display());
                    failures += 1;
                }
            }
            Err(e) => {
                eprintln!("{}: {e}", input.display());
                failures += 1;
            }
        }
    }
    Ok(failures)
}

fn read_maze(solver: &Solver, input: &Path) -> Result<Maze> {
    let text = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read maze file {}", input.display()))?;
    solver
        .parse(&text)
        .with_context(|| format!("Failed to parse maze file {}", input.display()))
}

fn print_solution(
    args: &Args,
    input: &Path,
    maze: &Maze,
    solution: &Solution,
    config: &SolverConfig,
) {
    if args.inputs.len() > 1 {
        println!("{}:", input.display());
    }
    println!("{}", solution.render(maze, config.path_marker));
    println!("Shortest path: {} steps", solution.path.steps());
    if args.distances {
        println!("{}", solution.distances.render());
    }
}

#[cfg(feature = "drawing")]
fn write_images(args: &Args, input: &Path, maze: &Maze, solution: &Solution) -> Result<()> {
    use mazer::{debug, drawing::MazeDrawingConfig};

    let Some(dir) = &args.image_dir else {
        return Ok(());
    };
    let config = MazeDrawingConfig {
        cell_size: args.cell_size,
        ..MazeDrawingConfig::default()
    };
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "maze".to_string());

    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create image directory {}", dir.display()))?;
    let image_path = dir.join(format!("{stem}.png"));
    debug::save_solution_image(maze, &solution.path, &image_path, &config)
        .with_context(|| format!("Failed to write {}", image_path.display()))?;
    info!("Wrote {}", image_path.display());

    if args.frames {
        let frames_dir = dir.join(&stem);
        let count = debug::save_replay_frames(maze, &solution.path, &frames_dir, &config)
            .with_context(|| format!("Failed to write frames to {}", frames_dir.display()))?;
        info!("Wrote {count} frames to {}", frames_dir.display());
    }
    Ok(())
}
