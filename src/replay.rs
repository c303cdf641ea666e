//! Step-by-step playback of a solved path.
//!
//! A [`Replay`] owns its path and its position, so several replays can run
//! side by side without sharing anything.

use crate::{grid::Point, reconstruct::Path};

/// Where a replay currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayState {
    NotStarted,
    /// The cell at this path index is the current one.
    Stepping(usize),
    Finished,
}

/// What changed during one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// The cell that just became current, if any.
    pub current: Option<Point>,
    /// The previously current cell, now shown as visited.
    pub visited: Option<Point>,
}

/// Replays a path one cell at a time.
///
/// # Example
/// ```
/// use mazer::{Path, Point, Replay, ReplayState};
///
/// let path = Path::new(vec![Point::new(0, 0), Point::new(0, 1)]);
/// let mut replay = Replay::new(path);
///
/// assert_eq!(replay.step().unwrap().current, Some(Point::new(0, 0)));
/// let step = replay.step().unwrap();
/// assert_eq!(step.visited, Some(Point::new(0, 0)));
/// assert_eq!(step.current, Some(Point::new(0, 1)));
/// assert_eq!(replay.step().unwrap().current, None);
/// assert_eq!(replay.state(), ReplayState::Finished);
/// assert!(replay.step().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Replay {
    path: Path,
    state: ReplayState,
}

impl Replay {
    pub fn new(path: Path) -> Self {
        Self {
            path,
            state: ReplayState::NotStarted,
        }
    }

    pub fn state(&self) -> ReplayState {
        self.state
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_finished(&self) -> bool {
        self.state == ReplayState::Finished
    }

    /// Advances by one cell. Returns `None` once the replay has finished.
    pub fn step(&mut self) -> Option<Step> {
        let cells = self.path.cells();
        let (next, step) = match self.state {
            ReplayState::Finished => return None,
            ReplayState::NotStarted => match cells.first() {
                Some(&first) => (
                    ReplayState::Stepping(0),
                    Step {
                        current: Some(first),
                        visited: None,
                    },
                ),
                None => (
                    ReplayState::Finished,
                    Step {
                        current: None,
                        visited: None,
                    },
                ),
            },
            ReplayState::Stepping(i) => {
                let visited = cells.get(i).copied();
                match cells.get(i + 1) {
                    Some(&current) => (
                        ReplayState::Stepping(i + 1),
                        Step {
                            current: Some(current),
                            visited,
                        },
                    ),
                    None => (
                        ReplayState::Finished,
                        Step {
                            current: None,
                            visited,
                        },
                    ),
                }
            }
        };
        self.state = next;
        Some(step)
    }

    /// The currently revealed cell.
    pub fn current(&self) -> Option<Point> {
        match self.state {
            ReplayState::Stepping(i) => self.path.cells().get(i).copied(),
            _ => None,
        }
    }

    /// Cells already passed, in path order.
    pub fn visited(&self) -> &[Point] {
        let cells = self.path.cells();
        match self.state {
            ReplayState::NotStarted => &[],
            ReplayState::Stepping(i) => &cells[..i],
            ReplayState::Finished => cells,
        }
    }

    /// Goes back to the beginning.
    pub fn rewind(&mut self) {
        self.state = ReplayState::NotStarted;
    }
}

impl Iterator for Replay {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        self.step()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn path() -> Path {
        Path::new(vec![Point::new(1, 0), Point::new(1, 1), Point::new(2, 1)])
    }

    #[test]
    fn test_walks_through_states() {
        let mut replay = Replay::new(path());
        assert_eq!(replay.state(), ReplayState::NotStarted);
        assert_eq!(replay.current(), None);

        replay.step();
        assert_eq!(replay.state(), ReplayState::Stepping(0));
        assert_eq!(replay.current(), Some(Point::new(1, 0)));
        assert!(replay.visited().is_empty());

        replay.step();
        replay.step();
        assert_eq!(replay.state(), ReplayState::Stepping(2));
        assert_eq!(replay.visited(), &[Point::new(1, 0), Point::new(1, 1)]);

        let last = replay.step().unwrap();
        assert_eq!(last.visited, Some(Point::new(2, 1)));
        assert_eq!(last.current, None);
        assert!(replay.is_finished());
        assert_eq!(replay.visited(), path().cells());
    }

    #[test]
    fn test_stepping_past_end_is_noop() {
        let mut replay = Replay::new(path());
        assert_eq!(replay.by_ref().count(), 4);
        assert!(replay.step().is_none());
        assert!(replay.step().is_none());
        assert_eq!(replay.state(), ReplayState::Finished);
    }

    #[test]
    fn test_rewind_restarts() {
        let mut replay = Replay::new(path());
        let first: Vec<Step> = replay.by_ref().collect();
        replay.rewind();
        let second: Vec<Step> = replay.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_path_finishes_at_once() {
        let mut replay = Replay::new(Path::default());
        assert_eq!(
            replay.step(),
            Some(Step {
                current: None,
                visited: None
            })
        );
        assert!(replay.is_finished());
        assert!(replay.step().is_none());
    }

    #[test]
    fn test_replays_are_independent() {
        let mut a = Replay::new(path());
        let b = Replay::new(path());
        a.step();
        a.step();
        assert_eq!(a.state(), ReplayState::Stepping(1));
        assert_eq!(b.state(), ReplayState::NotStarted);
    }
}
