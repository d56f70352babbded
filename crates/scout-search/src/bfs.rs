//! Four-connected breadth-first search with full step recording.
//!
//! The engine runs to completion in one synchronous pass and returns the
//! entire trace eagerly. Playback is the caller's concern: it indexes into
//! the returned `steps`, it never re-enters the engine.

use std::collections::{HashSet, VecDeque};

use scout_grid::{Cell, CellId, Grid};

use crate::events::{SearchResult, SearchStatus, StepEvent};
use crate::tree::SearchTree;

/// Run BFS from `start` toward `goal` over the grid.
///
/// The grid is read-only to the engine. Start and goal are taken at face
/// value: the engine checks the wall status of discovered neighbours only,
/// never of the endpoints themselves (that contract is the caller's).
///
/// Every run over the same inputs produces a byte-identical trace:
/// expansion is strict FIFO and neighbours are considered in the fixed
/// up/down/left/right order.
pub fn search(grid: &Grid, start: Cell, goal: Cell) -> SearchResult {
    tracing::debug!(
        rows = grid.rows(),
        cols = grid.cols(),
        %start,
        %goal,
        "starting search"
    );

    let mut tree = SearchTree::new();
    let mut visited: HashSet<CellId> = HashSet::new();
    let mut frontier: VecDeque<Cell> = VecDeque::new();
    let mut explored: Vec<Cell> = Vec::new();
    let mut steps: Vec<StepEvent> = Vec::new();

    let root_id = tree.insert_root(start);
    let _ = visited.insert(root_id);

    // A zero-cell grid (or out-of-bounds start) never expands: the run is
    // just the initial event. The event still reports the seeded frontier.
    if grid.in_bounds(start) {
        frontier.push_back(start);
    }

    steps.push(StepEvent {
        current: start,
        frontier: vec![start],
        explored: Vec::new(),
        newly_added: vec![start],
        neighbours: Vec::new(),
        depth: 0,
        status: SearchStatus::Running,
        tree: tree.snapshot(),
        expanded_node_id: root_id,
        newly_generated_ids: vec![root_id],
    });

    while let Some(current) = frontier.pop_front() {
        let current_id = current.id();
        let depth = tree.get(current_id).map(|n| n.depth).unwrap_or_default();

        let mut neighbours: Vec<Cell> = Vec::new();
        let mut newly_added: Vec<Cell> = Vec::new();

        for neighbour in current.neighbors4() {
            if !grid.is_open(neighbour) {
                continue;
            }
            // Recorded whether or not it was seen before
            neighbours.push(neighbour);

            if visited.insert(neighbour.id()) {
                let _ = tree.insert_child(neighbour, current_id);
                frontier.push_back(neighbour);
                newly_added.push(neighbour);
            }
        }

        explored.push(current);

        let status = if current == goal {
            SearchStatus::GoalFound
        } else if frontier.is_empty() {
            // Blocked only in the dead-end case: passable neighbours seen,
            // none newly discovered, frontier exhausted right here.
            if !neighbours.is_empty() && newly_added.is_empty() {
                SearchStatus::Blocked
            } else {
                SearchStatus::Finished
            }
        } else {
            SearchStatus::Running
        };

        tracing::trace!(
            %current,
            depth,
            frontier_len = frontier.len(),
            discovered = newly_added.len(),
            ?status,
            "expanded cell"
        );

        steps.push(StepEvent {
            current,
            frontier: frontier.iter().copied().collect(),
            explored: explored.clone(),
            newly_added: newly_added.clone(),
            neighbours,
            depth,
            status,
            tree: tree.snapshot(),
            expanded_node_id: current_id,
            newly_generated_ids: newly_added.iter().map(Cell::id).collect(),
        });

        if status == SearchStatus::GoalFound {
            let (path, path_ids) = reconstruct_path(&tree, start, goal);
            tracing::debug!(path_len = path.len(), "goal found");
            return SearchResult {
                status,
                path,
                path_ids,
                steps,
            };
        }
    }

    // Frontier exhausted without the goal. The result echoes the last
    // step's status, normalizing a bare Running to Finished.
    let status = match steps.last().map(|s| s.status) {
        Some(SearchStatus::Blocked) => SearchStatus::Blocked,
        _ => SearchStatus::Finished,
    };
    tracing::debug!(?status, expanded = explored.len(), "search exhausted");

    SearchResult {
        status,
        path: Vec::new(),
        path_ids: Vec::new(),
        steps,
    }
}

/// Walk parent pointers from the goal back to the start.
///
/// Returns empty vectors if the chain is missing or does not terminate at
/// the start cell. With a `GoalFound` status the chain always exists; the
/// guard here is independent of that status logic.
fn reconstruct_path(tree: &SearchTree, start: Cell, goal: Cell) -> (Vec<Cell>, Vec<CellId>) {
    let mut reversed: Vec<Cell> = Vec::new();
    let mut cursor = match tree.get(goal.id()) {
        Some(node) => node,
        None => return (Vec::new(), Vec::new()),
    };

    loop {
        reversed.push(cursor.state);
        match cursor.parent_id {
            Some(parent_id) => match tree.get(parent_id) {
                Some(parent) => cursor = parent,
                None => return (Vec::new(), Vec::new()),
            },
            None => break,
        }
    }

    if reversed.last() != Some(&start) {
        return (Vec::new(), Vec::new());
    }

    reversed.reverse();
    let ids = reversed.iter().map(Cell::id).collect();
    (reversed, ids)
}
