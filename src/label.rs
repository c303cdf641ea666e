use std::collections::VecDeque;

use tracing::*;

use crate::{
    grid::{Grid, NeighborOrder, Point},
    grid_like::GridLike,
    InputError, MazeError,
};

/// Sentinel distance for walls and cells the search never reached.
pub const UNREACHED: u32 = u32::MAX;

/// Per-cell step counts from a single start cell.
pub type DistanceGrid = Grid<u32>;

/// Labels every reachable open cell with its number of steps from `start`.
///
/// This is a breadth-first search over the four axis-aligned neighbours. All
/// moves cost one step, so the first distance assigned to a cell is already
/// its shortest one and no cell is queued twice. Walls and cells that cannot
/// be reached keep [`UNREACHED`].
///
/// The grid is only read; the distances come back as a fresh grid.
///
/// # Errors
/// Returns [`MazeError::InvalidInput`] if `start` is outside the grid or is a
/// wall.
///
/// # Example
/// ```
/// use mazer::{label, Maze, NeighborOrder, Point, SymbolMode};
///
/// let maze = Maze::parse("# #\n# #\n# #", SymbolMode::Detect).unwrap();
/// let distances = label(&maze, Point::new(1, 0), &NeighborOrder::default()).unwrap();
/// assert_eq!(distances.distance(Point::new(1, 2)), Some(2));
/// assert_eq!(distances.distance(Point::new(0, 2)), None);
/// ```
pub fn label<G: GridLike>(
    grid: &G,
    start: Point,
    order: &NeighborOrder,
) -> Result<DistanceGrid, MazeError> {
    let (width, height) = (grid.width(), grid.height());
    if !grid.contains(start) {
        return Err(InputError::OutOfBounds {
            point: start,
            width,
            height,
        }
        .into());
    }
    if !grid.is_open(start) {
        return Err(InputError::WallCell { point: start }.into());
    }

    let mut distances = Grid::filled(width, height, UNREACHED)?;
    distances.set(start, 0);

    let mut frontier = VecDeque::from([start]);
    while let Some(current) = frontier.pop_front() {
        let step = distances.get(current).copied().unwrap_or(UNREACHED) + 1;
        for next in grid.open_neighbors(current, order) {
            if distances.get(next) != Some(&UNREACHED) {
                continue;
            }
            trace!("Labelled {next} with {step}");
            distances.set(next, step);
            frontier.push_back(next);
        }
    }

    debug!(
        "Labelled {} reachable cells from {start}",
        distances.cells().filter(|(_, d)| **d != UNREACHED).count()
    );
    Ok(distances)
}

impl Grid<u32> {
    /// The distance stored at `p`, or `None` for unreached and out-of-bounds
    /// cells.
    pub fn distance(&self, p: Point) -> Option<u32> {
        self.get(p).copied().filter(|&d| d != UNREACHED)
    }

    /// The largest assigned distance.
    pub fn max_distance(&self) -> Option<u32> {
        self.cells()
            .map(|(_, &d)| d)
            .filter(|&d| d != UNREACHED)
            .max()
    }

    /// Renders the distances as a right-aligned table, `#` for unreached
    /// cells.
    ///
    /// # Example
    /// ```
    /// use mazer::{label, Maze, NeighborOrder, Point, SymbolMode};
    ///
    /// let maze = Maze::parse("# \n  ", SymbolMode::Detect).unwrap();
    /// let distances = label(&maze, Point::new(1, 0), &NeighborOrder::default()).unwrap();
    /// assert_eq!(distances.render(), "# 0\n2 1");
    /// ```
    pub fn render(&self) -> String {
        let cell_width = self.max_distance().unwrap_or(0).to_string().len();
        self.rows()
            .map(|row| {
                row.iter()
                    .map(|&d| match d {
                        UNREACHED => format!("{:>cell_width$}", "#"),
                        d => format!("{d:>cell_width$}"),
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
