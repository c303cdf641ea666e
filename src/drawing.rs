//! This module renders mazes, solved paths and replay steps onto images.
//! It is feature-gated under the `drawing` feature and uses the `image` and `imageproc` crates.
//!
//! Every cell is drawn as a filled square of `cell_size` pixels.
//!
//! # Examples
//!
//! ```rust
//! use mazer::{drawing::*, Solver};
//!
//! let solver = Solver::default();
//! let maze = solver.parse("# ##\n#  #\n## #").unwrap();
//! let solution = solver.solve(&maze).unwrap();
//!
//! let config = MazeDrawingConfig::default();
//! let mut image = new_canvas(&maze, &config);
//! maze.draw(&mut image, &config).unwrap();
//! draw_path(&mut image, &solution.path, &config);
//! assert_eq!(image.dimensions(), (80, 60));
//! assert_eq!(*image.get_pixel(25, 5), config.visited_color);
//! ```

use std::fmt;

use image::{Rgba, RgbaImage};
use imageproc::{drawing::draw_filled_rect_mut, rect::Rect};

use crate::{
    grid::{Point, Tile},
    grid_like::GridLike,
    maze::Maze,
    reconstruct::Path,
    replay::Step,
    MazeError,
};

const DEFAULT_CELL_SIZE: u32 = 20;

/// Colours and sizes used when drawing a maze.
///
/// # Examples
///
/// ```
/// use mazer::drawing::MazeDrawingConfig;
/// use image::Rgba;
///
/// let config = MazeDrawingConfig {
///     cell_size: 10,
///     current_color: Rgba([0, 0, 255, 255]),
///     ..MazeDrawingConfig::default()
/// };
/// assert_eq!(config.cell_size, 10);
/// ```
#[derive(Clone, PartialEq)]
pub struct MazeDrawingConfig {
    /// Side length of a cell, in pixels.
    pub cell_size: u32,
    /// Colour of wall cells.
    pub wall_color: Rgba<u8>,
    /// Colour of open cells.
    pub open_color: Rgba<u8>,
    /// Colour of path cells already walked.
    pub visited_color: Rgba<u8>,
    /// Colour of the cell the replay is currently on.
    pub current_color: Rgba<u8>,
}

impl fmt::Debug for MazeDrawingConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MazeDrawingConfig")
            .field("cell_size", &self.cell_size)
            .field("wall_color", &self.wall_color.0)
            .field("open_color", &self.open_color.0)
            .field("visited_color", &self.visited_color.0)
            .field("current_color", &self.current_color.0)
            .finish()
    }
}

impl Default for MazeDrawingConfig {
    fn default() -> Self {
        MazeDrawingConfig {
            cell_size: DEFAULT_CELL_SIZE,
            wall_color: Rgba([34, 100, 34, 255]),     // Bush green
            open_color: Rgba([244, 164, 96, 255]),    // Sandy brown
            visited_color: Rgba([255, 255, 0, 255]),  // Yellow
            current_color: Rgba([200, 30, 30, 255]),  // Red
        }
    }
}

/// Trait for types that can be drawn on an image.
pub trait Drawable {
    /// Draws the object on the provided image using the given configuration.
    ///
    /// # Errors
    /// Returns [`MazeError`] if the image is too small to hold the drawing.
    fn draw(&self, image: &mut RgbaImage, config: &MazeDrawingConfig) -> Result<(), MazeError>;
}

impl Drawable for Maze {
    fn draw(&self, image: &mut RgbaImage, config: &MazeDrawingConfig) -> Result<(), MazeError> {
        let (width, height) = canvas_size(self, config);
        if image.width() < width || image.height() < height {
            return Err(MazeError::ImageError(format!(
                "canvas {}x{} cannot hold a {width}x{height} maze drawing",
                image.width(),
                image.height()
            )));
        }
        for (p, _) in self.grid().cells() {
            let color = match self.tile(p) {
                Some(Tile::Wall) => config.wall_color,
                _ => config.open_color,
            };
            draw_cell(image, p, color, config);
        }
        Ok(())
    }
}

/// Pixel size of the image needed for `maze`.
pub fn canvas_size(maze: &Maze, config: &MazeDrawingConfig) -> (u32, u32) {
    (
        maze.width() as u32 * config.cell_size,
        maze.height() as u32 * config.cell_size,
    )
}

/// A blank canvas sized for `maze`.
pub fn new_canvas(maze: &Maze, config: &MazeDrawingConfig) -> RgbaImage {
    let (width, height) = canvas_size(maze, config);
    RgbaImage::new(width, height)
}

/// Fills the square of cell `p` with `color`.
pub fn draw_cell(image: &mut RgbaImage, p: Point, color: Rgba<u8>, config: &MazeDrawingConfig) {
    let rect = Rect::at(
        (p.x as u32 * config.cell_size) as i32,
        (p.y as u32 * config.cell_size) as i32,
    )
    .of_size(config.cell_size, config.cell_size);
    draw_filled_rect_mut(image, rect, color);
}

/// Paints every path cell as visited.
pub fn draw_path(image: &mut RgbaImage, path: &Path, config: &MazeDrawingConfig) {
    for &p in path {
        draw_cell(image, p, config.visited_color, config);
    }
}

/// Applies one replay step: the old cell turns visited, the new one current.
pub fn draw_step(image: &mut RgbaImage, step: &Step, config: &MazeDrawingConfig) {
    if let Some(p) = step.visited {
        draw_cell(image, p, config.visited_color, config);
    }
    if let Some(p) = step.current {
        draw_cell(image, p, config.current_color, config);
    }
}
