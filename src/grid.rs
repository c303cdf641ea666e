use std::{fmt, str::FromStr};

use smallvec::SmallVec;

use crate::{InputError, MazeError};

/// Up to four axis-aligned neighbours, kept on the stack.
pub type Neighbors = SmallVec<[Point; 4]>;

/// A cell coordinate: `x` is the column, `y` the row, both zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    /// Creates a new `Point`.
    ///
    /// # Example
    /// ```
    /// use mazer::Point;
    ///
    /// let p = Point::new(3, 1);
    /// assert_eq!((p.x, p.y), (3, 1));
    /// ```
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Returns `true` if `other` is one axis-aligned step away.
    pub fn is_adjacent(&self, other: &Point) -> bool {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y) == 1
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(usize, usize)> for Point {
    fn from((x, y): (usize, usize)) -> Self {
        Point::new(x, y)
    }
}

/// One of the four axis-aligned moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Moves `p` one step in this direction, or `None` when that would leave
    /// a `width` x `height` rectangle.
    pub fn step(self, p: Point, width: usize, height: usize) -> Option<Point> {
        let moved = match self {
            Direction::Left => Point::new(p.x.checked_sub(1)?, p.y),
            Direction::Right => Point::new(p.x + 1, p.y),
            Direction::Up => Point::new(p.x, p.y.checked_sub(1)?),
            Direction::Down => Point::new(p.x, p.y + 1),
        };
        (moved.x < width && moved.y < height).then_some(moved)
    }

    fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_lowercase() {
            'l' => Some(Direction::Left),
            'r' => Some(Direction::Right),
            'u' => Some(Direction::Up),
            'd' => Some(Direction::Down),
            _ => None,
        }
    }
}

/// The order in which neighbours are inspected.
///
/// The labeler's distances do not depend on it, but the path reconstructor
/// takes the first matching neighbour in this order, so it decides which of
/// several equally short paths gets reported.
///
/// # Example
/// ```
/// use mazer::{Direction, NeighborOrder};
///
/// let order: NeighborOrder = "rlud".parse().unwrap();
/// assert_eq!(order.directions()[0], Direction::Right);
/// assert_eq!(NeighborOrder::default().to_string(), "lrud");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeighborOrder([Direction; 4]);

impl NeighborOrder {
    /// Builds an order from four directions; each direction must appear once.
    pub fn new(directions: [Direction; 4]) -> Result<Self, MazeError> {
        for (i, d) in directions.iter().enumerate() {
            if directions[..i].contains(d) {
                return Err(InputError::InvalidOrder(format!("{directions:?}")).into());
            }
        }
        Ok(Self(directions))
    }

    pub fn directions(&self) -> &[Direction; 4] {
        &self.0
    }
}

impl Default for NeighborOrder {
    fn default() -> Self {
        Self([
            Direction::Left,
            Direction::Right,
            Direction::Up,
            Direction::Down,
        ])
    }
}

impl FromStr for NeighborOrder {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MazeError::from(InputError::InvalidOrder(s.to_string()));
        let letters: Vec<char> = s.chars().collect();
        if letters.len() != 4 {
            return Err(invalid());
        }
        let mut directions = [Direction::Left; 4];
        for (slot, letter) in directions.iter_mut().zip(letters) {
            *slot = Direction::from_letter(letter).ok_or_else(invalid)?;
        }
        NeighborOrder::new(directions).map_err(|_| invalid())
    }
}

impl fmt::Display for NeighborOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in self.0 {
            let letter = match d {
                Direction::Left => 'l',
                Direction::Right => 'r',
                Direction::Up => 'u',
                Direction::Down => 'd',
            };
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

/// Classification of a maze cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Tile {
    Wall,
    Open,
}

/// A rectangular, row-major grid of cells.
///
/// Every grid holds at least one cell and all rows have the same length.
///
/// # Example
/// ```
/// use mazer::{Grid, Point};
///
/// let grid = Grid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
/// assert_eq!(grid.width(), 3);
/// assert_eq!(grid.height(), 2);
/// assert_eq!(grid.get(Point::new(2, 1)), Some(&6));
/// assert_eq!(grid.get(Point::new(3, 0)), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Builds a grid from rows, rejecting empty and ragged input.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, MazeError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(InputError::EmptyGrid.into());
        }
        let mut cells = Vec::with_capacity(width * height);
        for (row, line) in rows.into_iter().enumerate() {
            if line.len() != width {
                return Err(InputError::RaggedRow {
                    row,
                    expected: width,
                    found: line.len(),
                }
                .into());
            }
            cells.extend(line);
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns `true` if `p` lies inside the grid.
    pub fn contains(&self, p: Point) -> bool {
        p.x < self.width && p.y < self.height
    }

    fn index(&self, p: Point) -> Option<usize> {
        self.contains(p).then(|| p.y * self.width + p.x)
    }

    pub fn get(&self, p: Point) -> Option<&T> {
        self.index(p).map(|i| &self.cells[i])
    }

    /// Overwrites the cell at `p`. Out-of-bounds writes are ignored and
    /// reported as `false`.
    pub fn set(&mut self, p: Point, value: T) -> bool {
        match self.index(p) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    /// Iterates over the rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks(self.width)
    }

    /// Iterates over every cell together with its coordinate.
    pub fn cells(&self) -> impl Iterator<Item = (Point, &T)> {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, v)| (Point::new(i % width, i / width), v))
    }

    /// Returns a new grid of the same shape with `f` applied to every cell.
    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> Grid<U> {
        Grid {
            width: self.width,
            height: self.height,
            cells: self.cells.iter().map(f).collect(),
        }
    }

    /// In-bounds axis-aligned neighbours of `p`, in `order`.
    pub fn neighbors(&self, p: Point, order: &NeighborOrder) -> Neighbors {
        order
            .directions()
            .iter()
            .filter_map(|d| d.step(p, self.width, self.height))
            .collect()
    }

    /// Returns `true` if `other` has the same width and height.
    pub fn same_shape<U>(&self, other: &Grid<U>) -> bool {
        self.width == other.width && self.height == other.height
    }
}

impl<T: Clone> Grid<T> {
    /// Creates a `width` x `height` grid with every cell set to `value`.
    ///
    /// Zero-sized grids are rejected.
    pub fn filled(width: usize, height: usize, value: T) -> Result<Self, MazeError> {
        if width == 0 || height == 0 {
            return Err(InputError::EmptyGrid.into());
        }
        Ok(Self {
            width,
            height,
            cells: vec![value; width * height],
        })
    }
}

impl fmt::Display for Grid<char> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for c in row {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}
