use crate::{grid::NeighborOrder, maze::SymbolMode};

const DEFAULT_PATH_MARKER: char = '.';

/// Configuration for solving mazes.
///
/// # Example
/// ```
/// use mazer::{NeighborOrder, SolverConfig, SymbolMode};
///
/// let config = SolverConfig::default();
/// assert_eq!(config.neighbor_order, NeighborOrder::default());
/// assert_eq!(config.path_marker, '.');
/// assert_eq!(config.symbols, SymbolMode::Detect);
/// assert_eq!(config.enable_parallel, true);
/// ```
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Neighbour order used by the search and the back-trace (default: lrud)
    pub neighbor_order: NeighborOrder,
    /// Symbol written over path cells in text output (default: '.')
    pub path_marker: char,
    /// How wall and open symbols are chosen (default: detected)
    pub symbols: SymbolMode,
    /// Solve batches of mazes in parallel (default: true)
    pub enable_parallel: bool,
}

impl SolverConfig {
    /// Creates a new `SolverConfig` with the specified parameters.
    ///
    /// # Example
    /// ```
    /// use mazer::{SolverConfig, SymbolMode, Symbols};
    ///
    /// let symbols = SymbolMode::Fixed(Symbols::new('#', '.'));
    /// let config = SolverConfig::new("udlr".parse().unwrap(), 'o', symbols, false);
    /// assert_eq!(config.neighbor_order.to_string(), "udlr");
    /// assert_eq!(config.path_marker, 'o');
    /// assert_eq!(config.enable_parallel, false);
    /// ```
    pub fn new(
        neighbor_order: NeighborOrder,
        path_marker: char,
        symbols: SymbolMode,
        enable_parallel: bool,
    ) -> Self {
        Self {
            neighbor_order,
            path_marker,
            symbols,
            enable_parallel,
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig::new(
            NeighborOrder::default(),
            DEFAULT_PATH_MARKER,
            SymbolMode::Detect,
            true,
        )
    }
}
