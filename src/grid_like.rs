use crate::grid::{Grid, NeighborOrder, Neighbors, Point, Tile};

/// A trait for grids that can be walked by the solver.
pub trait GridLike {
    /// Returns the number of columns.
    fn width(&self) -> usize;

    /// Returns the number of rows.
    fn height(&self) -> usize;

    /// Returns `true` if `p` is inside the grid and not a wall.
    fn is_open(&self, p: Point) -> bool;

    /// Returns `true` if `p` lies inside the grid.
    fn contains(&self, p: Point) -> bool {
        p.x < self.width() && p.y < self.height()
    }

    /// Returns the in-bounds, open neighbours of `p` in `order`.
    fn open_neighbors(&self, p: Point, order: &NeighborOrder) -> Neighbors {
        order
            .directions()
            .iter()
            .filter_map(|d| d.step(p, self.width(), self.height()))
            .filter(|n| self.is_open(*n))
            .collect()
    }
}

impl GridLike for Grid<Tile> {
    fn width(&self) -> usize {
        Grid::width(self)
    }

    fn height(&self) -> usize {
        Grid::height(self)
    }

    fn is_open(&self, p: Point) -> bool {
        self.get(p) == Some(&Tile::Open)
    }
}
