use tracing::*;

use crate::{
    grid::{Grid, Point, Tile},
    grid_like::GridLike,
    InputError, MazeError,
};

/// The characters a maze file uses for walls and open cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Symbols {
    pub wall: char,
    pub open: char,
}

impl Symbols {
    pub const fn new(wall: char, open: char) -> Self {
        Self { wall, open }
    }
}

impl Default for Symbols {
    fn default() -> Self {
        Symbols::new('*', ' ')
    }
}

/// How a maze's symbols are determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SymbolMode {
    /// The first character of the first row is the wall symbol and the first
    /// different character in that row is the open symbol.
    #[default]
    Detect,
    /// Use the given symbols as-is.
    Fixed(Symbols),
}

/// A parsed text maze: the raw symbol grid and the symbols that give it
/// meaning.
///
/// A cell is a wall iff it holds the wall symbol; any other character is
/// walkable.
///
/// # Example
/// ```
/// use mazer::{Maze, Point, SymbolMode};
///
/// let maze = Maze::parse("## #\n#  #\n# ##\n", SymbolMode::Detect).unwrap();
/// assert_eq!(maze.symbols().wall, '#');
/// assert_eq!(maze.symbols().open, ' ');
/// assert_eq!(maze.entrance().unwrap(), Point::new(2, 0));
/// assert_eq!(maze.exit().unwrap(), Point::new(1, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    grid: Grid<char>,
    symbols: Symbols,
}

impl Maze {
    /// Parses maze text, one row per line and one cell per character.
    ///
    /// Trailing line breaks are dropped and `\r\n` line endings are accepted.
    pub fn parse(text: &str, mode: SymbolMode) -> Result<Self, MazeError> {
        let text = text.trim_end_matches(['\n', '\r']);
        if text.is_empty() {
            error!("Maze text is empty");
            return Err(InputError::EmptyGrid.into());
        }
        let rows: Vec<Vec<char>> = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).chars().collect())
            .collect();
        let grid = Grid::from_rows(rows).inspect_err(|e| error!("Rejected maze text: {e}"))?;

        let symbols = match mode {
            SymbolMode::Fixed(symbols) => symbols,
            SymbolMode::Detect => Self::detect_symbols(&grid)?,
        };
        debug!(
            "Parsed {}x{} maze with wall={:?} open={:?}",
            grid.width(),
            grid.height(),
            symbols.wall,
            symbols.open
        );
        Ok(Self { grid, symbols })
    }

    /// Wraps an existing symbol grid.
    pub fn from_grid(grid: Grid<char>, symbols: Symbols) -> Self {
        Self { grid, symbols }
    }

    fn detect_symbols(grid: &Grid<char>) -> Result<Symbols, MazeError> {
        // The top row always exists; `Grid` rejects empty input.
        let first_row = grid.rows().next().unwrap_or(&[]);
        let wall = first_row.first().copied().ok_or(InputError::EmptyGrid)?;
        let open = first_row
            .iter()
            .copied()
            .find(|&c| c != wall)
            .ok_or_else(|| {
                error!("First row contains only {wall:?}, cannot detect the open symbol");
                InputError::NoOpenSymbol
            })?;
        Ok(Symbols::new(wall, open))
    }

    pub fn grid(&self) -> &Grid<char> {
        &self.grid
    }

    pub fn symbols(&self) -> Symbols {
        self.symbols
    }

    /// Classifies the cell at `p`, or `None` if `p` is outside the maze.
    pub fn tile(&self, p: Point) -> Option<Tile> {
        self.grid.get(p).map(|&c| {
            if c == self.symbols.wall {
                Tile::Wall
            } else {
                Tile::Open
            }
        })
    }

    /// The maze as a grid of [`Tile`]s.
    pub fn tiles(&self) -> Grid<Tile> {
        let wall = self.symbols.wall;
        self.grid
            .map(|&c| if c == wall { Tile::Wall } else { Tile::Open })
    }

    /// The first open-symbol cell of the top row.
    pub fn entrance(&self) -> Result<Point, MazeError> {
        self.opening(0)
    }

    /// The first open-symbol cell of the bottom row.
    pub fn exit(&self) -> Result<Point, MazeError> {
        self.opening(self.grid.height() - 1)
    }

    fn opening(&self, row: usize) -> Result<Point, MazeError> {
        self.grid
            .rows()
            .nth(row)
            .and_then(|cells| cells.iter().position(|&c| c == self.symbols.open))
            .map(|x| Point::new(x, row))
            .ok_or(InputError::MissingOpening { row }.into())
    }
}

impl GridLike for Maze {
    fn width(&self) -> usize {
        self.grid.width()
    }

    fn height(&self) -> usize {
        self.grid.height()
    }

    fn is_open(&self, p: Point) -> bool {
        self.tile(p) == Some(Tile::Open)
    }
}
