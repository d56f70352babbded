//! Step events: the replayable trace of a search run.
//!
//! Every algorithm that plugs into the visualization emits the same event
//! shape: `current`, `frontier`, `explored`, `newly_added`, `neighbours`,
//! `depth`, `status`, plus algorithm-specific extras (here, the search-tree
//! snapshot). Renderers consume this schema without knowing which algorithm
//! produced it.

use scout_grid::{Cell, CellId};
use serde::{Deserialize, Serialize};

use crate::tree::TreeSnapshot;

/// Where the search stands after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchStatus {
    /// More cells remain on the frontier.
    Running,
    /// The expanded cell is the goal.
    GoalFound,
    /// Frontier exhausted without reaching the goal.
    Finished,
    /// Frontier exhausted right after an expansion that saw passable
    /// neighbours but discovered none (walled-in dead end).
    Blocked,
}

impl SearchStatus {
    /// Whether this status ends the run.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SearchStatus::Running)
    }
}

/// An immutable snapshot of the engine's state at one moment.
///
/// Emitted once at initialization (root discovery) and once after every
/// dequeue-and-expand. Replaying the events in order reproduces the run
/// exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepEvent {
    /// Cell being expanded (the start cell for the initial event).
    pub current: Cell,
    /// Queue contents at this moment, in FIFO order (= visit order).
    pub frontier: Vec<Cell>,
    /// All cells dequeued-and-expanded so far, including `current`.
    pub explored: Vec<Cell>,
    /// Cells first discovered during this expansion. The initial event
    /// carries the start cell here.
    pub newly_added: Vec<Cell>,
    /// Every passable neighbour considered during this expansion, whether
    /// newly discovered or not. Empty for the initial event.
    pub neighbours: Vec<Cell>,
    /// BFS layer of `current`.
    pub depth: u32,
    /// Status after this step.
    pub status: SearchStatus,
    /// All tree nodes known at this moment, in discovery order.
    pub tree: TreeSnapshot,
    /// Id of `current`, echoed so consumers need not recompute keys.
    pub expanded_node_id: CellId,
    /// Ids of `newly_added`, same convenience echo.
    pub newly_generated_ids: Vec<CellId>,
}

/// Terminal summary of a search run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Final status. `Running` never appears here; exhaustion without an
    /// explicit terminal status normalizes to `Finished`.
    pub status: SearchStatus,
    /// Start-to-goal path; non-empty iff `status` is `GoalFound`.
    pub path: Vec<Cell>,
    /// Ids of the path cells, in the same order.
    pub path_ids: Vec<CellId>,
    /// The full ordered step trace, initial event included.
    pub steps: Vec<StepEvent>,
}

impl SearchResult {
    /// The step that found the goal, if any.
    pub fn goal_step(&self) -> Option<&StepEvent> {
        self.steps
            .iter()
            .find(|s| s.status == SearchStatus::GoalFound)
    }
}
