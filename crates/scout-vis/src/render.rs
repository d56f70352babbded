//! Render-state projection.
//!
//! Turns positioned nodes plus one step's highlight sets into flat,
//! render-ready node and edge descriptors. No drawing happens here; an
//! external renderer walks the output and issues its own stroke/fill calls.
//! The function is pure and total: malformed references (a child whose
//! parent is absent from the node set) simply omit that edge.

use std::collections::HashSet;

use scout_grid::CellId;
use scout_search::StepEvent;
use serde::{Deserialize, Serialize};

use crate::layout::{LayoutNode, TreeLayout};

/// The single color assigned to a rendered node.
///
/// Exactly one applies per node, chosen by descending priority:
/// current > newly generated > explored > on-path-with-goal-found >
/// unvisited. "Current" dominating "explored" is deliberate: the cell that
/// was just explored this step reads as current, not as history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeColor {
    /// The node expanded in this step.
    Current,
    /// Discovered during this step.
    NewlyGenerated,
    /// Dequeued and expanded in an earlier step.
    Explored,
    /// On the final path of a successful run.
    PathGoal,
    /// Discovered but not yet highlighted.
    Unvisited,
}

impl NodeColor {
    /// CSS color for this state.
    pub fn css(&self) -> &'static str {
        match self {
            NodeColor::Current => "#e74c3c",
            NodeColor::NewlyGenerated => "#f39c12",
            NodeColor::Explored => "#3498db",
            NodeColor::PathGoal => "#2ecc71",
            NodeColor::Unvisited => "#bdc3c7",
        }
    }
}

/// Render-ready description of one node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderNodeState {
    /// Node id.
    pub id: CellId,
    /// Horizontal position from the layout.
    pub x: f64,
    /// Vertical position from the layout.
    pub y: f64,
    /// The single assigned color.
    pub color: NodeColor,
    /// Human-readable coordinate label, e.g. `"(2, 3)"`.
    pub label: String,
    /// Whether this is the currently expanded node.
    pub is_current: bool,
    /// Whether this node lies on the final path.
    pub on_path: bool,
}

/// Render-ready description of one parent-to-child edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderEdgeState {
    /// Parent node id.
    pub from: CellId,
    /// Child node id.
    pub to: CellId,
    /// Parent position.
    pub from_x: f64,
    /// Parent position.
    pub from_y: f64,
    /// Child position.
    pub to_x: f64,
    /// Child position.
    pub to_y: f64,
    /// Emphasized iff both endpoints are on the final path.
    pub on_path: bool,
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderState {
    /// One entry per positioned node.
    pub nodes: Vec<RenderNodeState>,
    /// One entry per parent/child pair present in the node set.
    pub edges: Vec<RenderEdgeState>,
}

/// Project positioned nodes and one step's highlight sets into render state.
#[allow(clippy::too_many_arguments)]
pub fn project_render_state(
    layout_nodes: &[LayoutNode],
    current_id: CellId,
    newly_generated_ids: &HashSet<CellId>,
    explored_ids: &HashSet<CellId>,
    path_ids: &HashSet<CellId>,
    goal_found: bool,
) -> RenderState {
    let positions: std::collections::HashMap<CellId, (f64, f64)> = layout_nodes
        .iter()
        .map(|n| (n.node.id, (n.x, n.y)))
        .collect();

    let mut edges = Vec::new();
    for node in layout_nodes {
        let Some(parent_id) = node.node.parent_id else {
            continue;
        };
        // Parent absent from the set: no edge, not an error
        let Some(&(from_x, from_y)) = positions.get(&parent_id) else {
            continue;
        };
        edges.push(RenderEdgeState {
            from: parent_id,
            to: node.node.id,
            from_x,
            from_y,
            to_x: node.x,
            to_y: node.y,
            on_path: path_ids.contains(&parent_id) && path_ids.contains(&node.node.id),
        });
    }

    let nodes = layout_nodes
        .iter()
        .map(|node| {
            let id = node.node.id;
            let on_path = path_ids.contains(&id);

            let color = if id == current_id {
                NodeColor::Current
            } else if newly_generated_ids.contains(&id) {
                NodeColor::NewlyGenerated
            } else if explored_ids.contains(&id) {
                NodeColor::Explored
            } else if on_path && goal_found {
                NodeColor::PathGoal
            } else {
                NodeColor::Unvisited
            };

            RenderNodeState {
                id,
                x: node.x,
                y: node.y,
                color,
                label: node.node.state.label(),
                is_current: id == current_id,
                on_path,
            }
        })
        .collect();

    RenderState { nodes, edges }
}

/// Project directly from a step event, deriving the highlight sets.
///
/// `path_ids` is the final result's path (empty while the run is still in
/// flight); `goal_found` whether the run ended in success.
pub fn project_step(
    layout: &TreeLayout,
    step: &StepEvent,
    path_ids: &[CellId],
    goal_found: bool,
) -> RenderState {
    let newly: HashSet<CellId> = step.newly_generated_ids.iter().copied().collect();
    let explored: HashSet<CellId> = step.explored.iter().map(|c| c.id()).collect();
    let path: HashSet<CellId> = path_ids.iter().copied().collect();

    project_render_state(
        &layout.nodes,
        step.expanded_node_id,
        &newly,
        &explored,
        &path,
        goal_found,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::layout;
    use scout_grid::{Cell, Grid};
    use scout_search::{search, SearchStatus};

    fn ids(cells: &[Cell]) -> HashSet<CellId> {
        cells.iter().map(Cell::id).collect()
    }

    #[test]
    fn current_dominates_explored() {
        let grid = Grid::open(3, 3);
        let result = search(&grid, Cell::new(0, 0), Cell::new(2, 2));
        let step = result.steps.last().unwrap();
        let out = layout(&step.tree);

        // The current cell is also in this step's explored list
        assert!(step.explored.contains(&step.current));

        let state = project_render_state(
            &out.nodes,
            step.expanded_node_id,
            &ids(&step.newly_added),
            &ids(&step.explored),
            &HashSet::new(),
            false,
        );

        let current = state
            .nodes
            .iter()
            .find(|n| n.id == step.expanded_node_id)
            .unwrap();
        assert_eq!(current.color, NodeColor::Current);
        assert!(current.is_current);
    }

    #[test]
    fn newly_generated_beats_unvisited() {
        let grid = Grid::open(3, 3);
        let result = search(&grid, Cell::new(0, 0), Cell::new(2, 2));
        let step = &result.steps[1];
        let out = layout(&step.tree);

        let state = project_step(&out, step, &[], false);

        for cell in &step.newly_added {
            let node = state.nodes.iter().find(|n| n.id == cell.id()).unwrap();
            assert_eq!(node.color, NodeColor::NewlyGenerated);
        }
    }

    #[test]
    fn path_nodes_green_after_goal_found() {
        let grid = Grid::open(3, 3);
        let result = search(&grid, Cell::new(0, 0), Cell::new(2, 2));
        assert_eq!(result.status, SearchStatus::GoalFound);

        let step = result.steps.last().unwrap();
        let out = layout(&step.tree);
        let state = project_step(&out, step, &result.path_ids, true);

        // Path cells not otherwise highlighted read as path-goal
        let start_node = state
            .nodes
            .iter()
            .find(|n| n.id == Cell::new(0, 0).id())
            .unwrap();
        assert!(start_node.on_path);
        // Start was explored earlier, so explored still wins over path
        assert_eq!(start_node.color, NodeColor::Explored);

        // Every on-path edge connects two path cells
        let path: HashSet<CellId> = result.path_ids.iter().copied().collect();
        for edge in state.edges.iter().filter(|e| e.on_path) {
            assert!(path.contains(&edge.from) && path.contains(&edge.to));
        }
        assert!(state.edges.iter().any(|e| e.on_path));
    }

    #[test]
    fn one_edge_per_parent_child_pair() {
        let grid = Grid::open(3, 3);
        let result = search(&grid, Cell::new(0, 0), Cell::new(2, 2));
        let step = result.steps.last().unwrap();
        let out = layout(&step.tree);

        let state = project_step(&out, step, &[], false);

        // Every non-root node contributes exactly one edge
        let non_root = step.tree.iter().filter(|n| n.parent_id.is_some()).count();
        assert_eq!(state.edges.len(), non_root);
    }

    #[test]
    fn missing_parent_omits_edge() {
        let grid = Grid::open(2, 2);
        let result = search(&grid, Cell::new(0, 0), Cell::new(1, 1));
        let step = result.steps.last().unwrap();
        let out = layout(&step.tree);

        // Drop the root from the node set; its children's edges vanish
        let orphaned: Vec<LayoutNode> = out
            .nodes
            .iter()
            .filter(|n| n.node.parent_id.is_some())
            .cloned()
            .collect();

        let state = project_render_state(
            &orphaned,
            step.expanded_node_id,
            &HashSet::new(),
            &HashSet::new(),
            &HashSet::new(),
            false,
        );

        for edge in &state.edges {
            assert_ne!(edge.from, Cell::new(0, 0).id());
        }
        assert_eq!(state.nodes.len(), orphaned.len());
    }

    #[test]
    fn labels_are_human_readable() {
        let grid = Grid::open(2, 2);
        let result = search(&grid, Cell::new(0, 0), Cell::new(1, 1));
        let step = result.steps.last().unwrap();
        let out = layout(&step.tree);
        let state = project_step(&out, step, &[], false);

        let root = state
            .nodes
            .iter()
            .find(|n| n.id == Cell::new(0, 0).id())
            .unwrap();
        assert_eq!(root.label, "(0, 0)");
    }

    #[test]
    fn colors_have_css_values() {
        for color in [
            NodeColor::Current,
            NodeColor::NewlyGenerated,
            NodeColor::Explored,
            NodeColor::PathGoal,
            NodeColor::Unvisited,
        ] {
            assert!(color.css().starts_with('#'));
        }
    }
}
