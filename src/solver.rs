use rayon::prelude::*;
use tracing::*;

use crate::{
    config::SolverConfig,
    grid::Grid,
    label::{label, DistanceGrid},
    maze::Maze,
    reconstruct::{reconstruct, Path},
    MazeError,
};

/// The distance labelling and the shortest path of one maze.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Solution {
    pub distances: DistanceGrid,
    pub path: Path,
}

impl Solution {
    /// A copy of the maze's symbol grid with every path cell replaced by
    /// `marker`.
    pub fn marked(&self, maze: &Maze, marker: char) -> Grid<char> {
        let symbols = maze.symbols();
        if marker == symbols.wall || marker == symbols.open {
            warn!("Path marker {marker:?} is also a maze symbol; the path will be hard to read");
        }
        self.path.mark(maze.grid(), marker)
    }

    /// The marked maze as text, one row per line.
    pub fn render(&self, maze: &Maze, marker: char) -> String {
        self.marked(maze, marker).to_string()
    }
}

/// Runs the labeler and the reconstructor from a maze's entrance to its exit.
///
/// # Example
/// ```
/// use mazer::{Solver, SolverConfig};
///
/// let solver = Solver::new(SolverConfig::default());
/// let maze = solver.parse("# ##\n#  #\n## #\n").unwrap();
/// let solution = solver.solve(&maze).unwrap();
/// assert_eq!(solution.path.steps(), 3);
/// assert_eq!(solution.render(&maze, '.'), "#.##\n#..#\n##.#");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Parses maze text using the configured symbol mode.
    pub fn parse(&self, text: &str) -> Result<Maze, MazeError> {
        Maze::parse(text, self.config.symbols)
    }

    /// Solves a single maze.
    pub fn solve(&self, maze: &Maze) -> Result<Solution, MazeError> {
        let order = &self.config.neighbor_order;
        let (start, end) = (maze.entrance()?, maze.exit()?);
        trace!("Solving from {start} to {end} with order {order}");

        let distances = label(maze, start, order)?;
        let path = reconstruct(maze, &distances, end, order)?;
        debug!("Solved maze: {} steps from {start} to {end}", path.steps());
        Ok(Solution { distances, path })
    }

    /// Solves every maze, in parallel when enabled.
    ///
    /// Results come back in input order, one per maze.
    pub fn solve_many(&self, mazes: &[Maze]) -> Vec<Result<Solution, MazeError>> {
        if self.config.enable_parallel {
            trace!("Solving {} mazes in parallel", mazes.len());
            mazes.par_iter().map(|maze| self.solve(maze)).collect()
        } else {
            trace!("Solving {} mazes sequentially", mazes.len());
            mazes.iter().map(|maze| self.solve(maze)).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{grid::Point, InputError, SymbolMode, Symbols};
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_solve_sample_maze() {
        let solver = Solver::default();
        let maze = solver.parse(include_str!("../mazes/maze.txt")).unwrap();
        let solution = solver.solve(&maze).unwrap();

        assert_eq!(solution.path.len(), 17);
        assert_snapshot!(solution.render(&maze, '.'), @r###"
        ****.************
        *  *...........**
        ** * ***** ***.**
        *    *   *   *.**
        * **** * *** *.**
        *      *     *. *
        **************.**
        "###);
    }

    #[test]
    fn test_solve_binary_maze() {
        let solver = Solver::default();
        let maze = solver.parse(include_str!("../mazes/binary.txt")).unwrap();
        let solution = solver.solve(&maze).unwrap();

        assert_eq!(solution.path.steps(), 10);
        assert_snapshot!(solution.render(&maze, '.'), @r###"
        11.1111
        1..0001
        1.11101
        1...101
        111.101
        100..01
        1111.11
        "###);
    }

    #[test]
    fn test_walled_off_exit() {
        let solver = Solver::new(SolverConfig {
            symbols: SymbolMode::Fixed(Symbols::new('#', ' ')),
            ..SolverConfig::default()
        });
        let maze = solver.parse("# ###\n# # #\n### #\n").unwrap();
        assert_eq!(
            solver.solve(&maze).unwrap_err(),
            MazeError::UnreachableTarget {
                point: Point::new(3, 2)
            }
        );
    }

    #[test]
    fn test_missing_exit() {
        let solver = Solver::default();
        let maze = solver.parse("# #\n# #\n###").unwrap();
        assert_eq!(
            solver.solve(&maze).unwrap_err(),
            MazeError::InvalidInput(InputError::MissingOpening { row: 2 })
        );
    }

    #[test]
    fn test_solve_many_keeps_order() {
        let texts = [
            include_str!("../mazes/maze.txt"),
            "# #\n###",
            include_str!("../mazes/binary.txt"),
        ];
        for enable_parallel in [true, false] {
            let solver = Solver::new(SolverConfig {
                enable_parallel,
                ..SolverConfig::default()
            });
            let mazes: Vec<Maze> = texts.iter().map(|t| solver.parse(t).unwrap()).collect();
            let steps: Vec<Option<usize>> = solver
                .solve_many(&mazes)
                .into_iter()
                .map(|r| r.ok().map(|s| s.path.steps()))
                .collect();
            assert_eq!(steps, vec![Some(16), None, Some(10)]);
        }
    }

    #[test]
    fn test_solutions_are_repeatable() {
        let solver = Solver::default();
        let maze = solver.parse(include_str!("../mazes/binary.txt")).unwrap();
        let before = maze.clone();
        assert_eq!(solver.solve(&maze).unwrap(), solver.solve(&maze).unwrap());
        assert_eq!(maze, before);
    }
}
