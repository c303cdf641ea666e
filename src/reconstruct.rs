use tracing::*;

use crate::{
    grid::{Grid, NeighborOrder, Point},
    grid_like::GridLike,
    label::DistanceGrid,
    InputError, MazeError,
};

/// An ordered run of adjacent open cells from the start to the end.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct Path {
    cells: Vec<Point>,
}

impl Path {
    pub fn new(cells: Vec<Point>) -> Self {
        Self { cells }
    }

    /// Number of cells, start and end included.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of moves, one less than the number of cells.
    pub fn steps(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<Point> {
        self.cells.first().copied()
    }

    pub fn end(&self) -> Option<Point> {
        self.cells.last().copied()
    }

    pub fn cells(&self) -> &[Point] {
        &self.cells
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.cells.iter()
    }

    pub fn contains(&self, p: Point) -> bool {
        self.cells.contains(&p)
    }

    /// Returns a copy of `grid` with every path cell set to `marker`.
    pub fn mark<T: Clone>(&self, grid: &Grid<T>, marker: T) -> Grid<T> {
        let mut marked = grid.clone();
        for &p in &self.cells {
            marked.set(p, marker.clone());
        }
        marked
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

/// Walks back from `end` to the distance-zero cell and returns the path in
/// start-to-end order.
///
/// At each cell the first neighbour in `order` that is open and one step
/// closer to the start is taken. When several shortest paths exist, `order`
/// therefore picks the reported one: with the default left, right, up, down
/// order the walk back prefers the left neighbour, then the right, then the
/// upper, then the lower.
///
/// # Errors
/// * [`MazeError::InvalidInput`] if `distances` does not match the grid's
///   shape or `end` is outside the grid.
/// * [`MazeError::UnreachableTarget`] if `end` was never labelled.
/// * [`MazeError::InternalInconsistency`] if some cell has no neighbour one
///   step closer, which a grid produced by [`label`](crate::label) never
///   causes.
///
/// # Example
/// ```
/// use mazer::{label, reconstruct, Maze, NeighborOrder, Point, SymbolMode};
///
/// let maze = Maze::parse("# #\n#  \n## ", SymbolMode::Detect).unwrap();
/// let order = NeighborOrder::default();
/// let distances = label(&maze, Point::new(1, 0), &order).unwrap();
/// let path = reconstruct(&maze, &distances, Point::new(2, 2), &order).unwrap();
/// assert_eq!(
///     path.cells(),
///     &[Point::new(1, 0), Point::new(1, 1), Point::new(2, 1), Point::new(2, 2)]
/// );
/// ```
pub fn reconstruct<G: GridLike>(
    grid: &G,
    distances: &DistanceGrid,
    end: Point,
    order: &NeighborOrder,
) -> Result<Path, MazeError> {
    if distances.width() != grid.width() || distances.height() != grid.height() {
        return Err(InputError::DimensionMismatch {
            expected: (grid.width(), grid.height()),
            found: (distances.width(), distances.height()),
        }
        .into());
    }
    if !grid.contains(end) {
        return Err(InputError::OutOfBounds {
            point: end,
            width: grid.width(),
            height: grid.height(),
        }
        .into());
    }
    let mut remaining = distances
        .distance(end)
        .ok_or(MazeError::UnreachableTarget { point: end })?;
    // A path visits each cell at most once.
    if remaining as usize >= grid.width() * grid.height() {
        return Err(MazeError::InternalInconsistency {
            point: end,
            expected: remaining,
        });
    }

    let mut current = end;
    let mut cells = Vec::with_capacity(remaining as usize + 1);
    cells.push(current);
    while remaining > 0 {
        let expected = remaining - 1;
        current = grid
            .open_neighbors(current, order)
            .into_iter()
            .find(|&n| distances.distance(n) == Some(expected))
            .ok_or(MazeError::InternalInconsistency {
                point: current,
                expected,
            })?;
        trace!("Stepped back to {current} at distance {expected}");
        cells.push(current);
        remaining = expected;
    }
    cells.reverse();

    debug!("Reconstructed {} step path to {end}", cells.len() - 1);
    Ok(Path::new(cells))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{grid::Tile, label, label::UNREACHED, Maze, SymbolMode, Symbols};
    use insta::assert_yaml_snapshot;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn fixed(text: &str) -> Maze {
        Maze::parse(text, SymbolMode::Fixed(Symbols::default())).unwrap()
    }

    #[test]
    fn test_start_equals_end() {
        let maze = fixed("***\n* *\n***");
        let order = NeighborOrder::default();
        let centre = Point::new(1, 1);
        let distances = label(&maze, centre, &order).unwrap();
        let path = reconstruct(&maze, &distances, centre, &order).unwrap();
        assert_eq!(path.cells(), &[centre]);
        assert_eq!(path.steps(), 0);
    }

    #[test]
    fn test_corridor() {
        let maze = fixed(" \n \n ");
        let order = NeighborOrder::default();
        let distances = label(&maze, Point::new(0, 0), &order).unwrap();
        let path = reconstruct(&maze, &distances, Point::new(0, 2), &order).unwrap();
        assert_yaml_snapshot!(path, @r###"
        - x: 0
          y: 0
        - x: 0
          y: 1
        - x: 0
          y: 2
        "###);
    }

    #[test]
    fn test_disconnected_end() {
        let maze = fixed(" * \n * \n * ");
        let order = NeighborOrder::default();
        let distances = label(&maze, Point::new(0, 0), &order).unwrap();
        assert_eq!(
            reconstruct(&maze, &distances, Point::new(2, 2), &order).unwrap_err(),
            MazeError::UnreachableTarget {
                point: Point::new(2, 2)
            }
        );
    }

    #[test]
    fn test_tie_break_follows_order() {
        let maze = Maze::parse(include_str!("../mazes/binary.txt"), SymbolMode::Detect).unwrap();
        let (start, end) = (maze.entrance().unwrap(), maze.exit().unwrap());
        let lrud = NeighborOrder::default();
        let rlud: NeighborOrder = "rlud".parse().unwrap();
        let distances = label(&maze, start, &lrud).unwrap();

        let left = reconstruct(&maze, &distances, end, &lrud).unwrap();
        let right = reconstruct(&maze, &distances, end, &rlud).unwrap();

        assert_eq!(left.len(), 11);
        assert_eq!(right.len(), 11);
        assert!(left.contains(Point::new(3, 4)));
        assert!(right.contains(Point::new(5, 4)));
        assert_eq!(left.start(), Some(start));
        assert_eq!(right.end(), Some(end));
    }

    #[test]
    fn test_tampered_distances() {
        let maze = fixed("   ");
        let order = NeighborOrder::default();
        let mut distances = label(&maze, Point::new(0, 0), &order).unwrap();
        distances.set(Point::new(1, 0), UNREACHED);
        assert_eq!(
            reconstruct(&maze, &distances, Point::new(2, 0), &order).unwrap_err(),
            MazeError::InternalInconsistency {
                point: Point::new(2, 0),
                expected: 1
            }
        );
    }

    #[test]
    fn test_oversized_end_distance() {
        let maze = fixed("   ");
        let order = NeighborOrder::default();
        let mut distances = label(&maze, Point::new(0, 0), &order).unwrap();
        for bogus in [UNREACHED - 1, 3] {
            distances.set(Point::new(2, 0), bogus);
            assert_eq!(
                reconstruct(&maze, &distances, Point::new(2, 0), &order).unwrap_err(),
                MazeError::InternalInconsistency {
                    point: Point::new(2, 0),
                    expected: bogus
                }
            );
        }
    }

    #[test]
    fn test_rejects_mismatched_grids() {
        let maze = fixed("   ");
        let order = NeighborOrder::default();
        let other = fixed("  \n  ");
        let distances = label(&other, Point::new(0, 0), &order).unwrap();
        assert_eq!(
            reconstruct(&maze, &distances, Point::new(2, 0), &order).unwrap_err(),
            MazeError::InvalidInput(InputError::DimensionMismatch {
                expected: (3, 1),
                found: (2, 2)
            })
        );
        let distances = label(&maze, Point::new(0, 0), &order).unwrap();
        assert!(matches!(
            reconstruct(&maze, &distances, Point::new(0, 1), &order),
            Err(MazeError::InvalidInput(InputError::OutOfBounds { .. }))
        ));
    }

    #[test]
    fn test_mark_copies_grid() {
        let maze = fixed("* *\n*  \n** ");
        let order = NeighborOrder::default();
        let distances = label(&maze, Point::new(1, 0), &order).unwrap();
        let path = reconstruct(&maze, &distances, Point::new(2, 2), &order).unwrap();
        let marked = path.mark(maze.grid(), '.');
        assert_eq!(marked.to_string(), "*.*\n*..\n**.");
        assert_eq!(maze.grid().to_string(), "* *\n*  \n** ");
    }

    proptest! {
        #[test]
        fn test_paths_are_shortest_walks(
            width in 1..10usize,
            height in 1..10usize,
            open in prop::collection::vec(prop::bool::weighted(0.75), 81),
            order in prop::sample::select(vec!["lrud", "rlud", "udlr", "dulr"]),
        ) {
            let rows = (0..height)
                .map(|y| {
                    (0..width)
                        .map(|x| if open[y * 9 + x] { Tile::Open } else { Tile::Wall })
                        .collect()
                })
                .collect();
            let grid = Grid::from_rows(rows).unwrap();
            let order: NeighborOrder = order.parse().unwrap();
            let start = grid.cells().find(|(_, t)| **t == Tile::Open).map(|(p, _)| p);
            prop_assume!(start.is_some());
            let start = start.unwrap();
            let distances = label(&grid, start, &order).unwrap();

            for (end, _) in grid.cells() {
                match distances.distance(end) {
                    Some(d) => {
                        let path = reconstruct(&grid, &distances, end, &order).unwrap();
                        prop_assert_eq!(path.len(), d as usize + 1);
                        prop_assert_eq!(path.start(), Some(start));
                        prop_assert_eq!(path.end(), Some(end));
                        for (i, pair) in path.cells().windows(2).enumerate() {
                            prop_assert!(pair[0].is_adjacent(&pair[1]));
                            prop_assert_eq!(distances.distance(pair[0]), Some(i as u32));
                            prop_assert_eq!(distances.distance(pair[1]), Some(i as u32 + 1));
                        }
                        prop_assert!(path.iter().all(|&p| grid.is_open(p)));
                    }
                    None => {
                        prop_assert!(reconstruct(&grid, &distances, end, &order).is_err());
                    }
                }
            }
        }
    }
}
