use std::path::Path as FsPath;

use tracing::*;

use super::*;
use drawing::*;

/// Saves the maze with its solved path drawn on it.
///
/// # Arguments
/// * `maze` - The maze to draw.
/// * `path` - The path to highlight.
/// * `output_path` - Where to write the image; the format follows the extension.
/// * `config` - The drawing configuration.
///
/// # Errors
/// Returns [`MazeError`] if drawing or saving fails.
pub fn save_solution_image(
    maze: &Maze,
    path: &Path,
    output_path: impl AsRef<FsPath>,
    config: &MazeDrawingConfig,
) -> Result<(), MazeError> {
    let mut image = new_canvas(maze, config);
    maze.draw(&mut image, config)?;
    draw_path(&mut image, path, config);
    image
        .save(output_path.as_ref())
        .map_err(|e| MazeError::ImageError(e.to_string()))
}

/// Saves one image per replay step into `dir`, starting with the bare maze.
///
/// Frames are named `frame_0000.png`, `frame_0001.png` and so on. Returns the
/// number of frames written.
///
/// # Errors
/// Returns [`MazeError`] if the directory cannot be created or a frame cannot
/// be saved.
pub fn save_replay_frames(
    maze: &Maze,
    path: &Path,
    dir: impl AsRef<FsPath>,
    config: &MazeDrawingConfig,
) -> Result<usize, MazeError> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir).map_err(|e| MazeError::ImageError(e.to_string()))?;

    let mut image = new_canvas(maze, config);
    maze.draw(&mut image, config)?;

    let save = |image: &image::RgbaImage, index: usize| {
        let file = dir.join(format!("frame_{index:04}.png"));
        trace!("Writing replay frame {}", file.display());
        image
            .save(&file)
            .map_err(|e| MazeError::ImageError(e.to_string()))
    };

    save(&image, 0)?;
    let mut frames = 1;
    for step in Replay::new(path.clone()) {
        draw_step(&mut image, &step, config);
        save(&image, frames)?;
        frames += 1;
    }
    debug!("Wrote {frames} replay frames to {}", dir.display());
    Ok(frames)
}
