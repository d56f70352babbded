//! Scout Search Engine
//!
//! Breadth-first search over an occupancy grid, recorded as a uniform,
//! replayable sequence of step events.
//!
//! # Architecture
//!
//! - **Tree**: insertion-ordered accumulator of discovered cells with
//!   parent/child links
//! - **Events**: the cross-algorithm step schema (`current`, `frontier`,
//!   `explored`, `newly_added`, `neighbours`, `depth`, `status`, tree
//!   snapshot)
//! - **BFS**: the driver emitting one event at initialization and one per
//!   dequeue-and-expand
//!
//! # Determinism
//!
//! Expansion is strict FIFO and neighbours are considered in the fixed
//! up/down/left/right order, so identical inputs always yield identical
//! traces. Any future algorithm (DFS, A*) emitting the same event shape is
//! consumable by the same layout and projection code unchanged.
//!
//! # Usage
//!
//! ```
//! use scout_grid::{Cell, Grid};
//! use scout_search::{search, SearchStatus};
//!
//! let grid = Grid::open(3, 3);
//! let result = search(&grid, Cell::new(0, 0), Cell::new(2, 2));
//!
//! assert_eq!(result.status, SearchStatus::GoalFound);
//! assert_eq!(result.path.len(), 5);
//! ```

mod bfs;
mod events;
mod tree;

pub use bfs::search;
pub use events::{SearchResult, SearchStatus, StepEvent};
pub use tree::{SearchTree, SearchTreeNode, TreeSnapshot};
