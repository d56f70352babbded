//! Scout Visualization Core
//!
//! Turns a recorded search trace into positioned, colored primitives for a
//! node-link diagram.
//!
//! # Architecture
//!
//! - **Layout**: deterministic level-order positions for a tree snapshot
//! - **Render**: per-node color/label and per-edge emphasis, decoupled from
//!   any drawing backend
//! - **Playback**: a status-aware cursor over a precomputed trace (halts
//!   on the goal step, seeks by status)
//!
//! # Usage
//!
//! ```
//! use scout_grid::{Cell, Grid};
//! use scout_search::search;
//! use scout_vis::{layout, project_step};
//!
//! let grid = Grid::open(3, 3);
//! let result = search(&grid, Cell::new(0, 0), Cell::new(2, 2));
//!
//! let step = result.steps.last().unwrap();
//! let tree_layout = layout(&step.tree);
//! let frame = project_step(&tree_layout, step, &result.path_ids, true);
//!
//! assert_eq!(frame.nodes.len(), step.tree.len());
//! ```

mod layout;
mod playback;
mod render;

pub use layout::{layout, LayoutNode, TreeLayout, LEVEL_HEIGHT, MARGIN, SIBLING_GAP};
pub use playback::{PlaybackSpeed, PlaybackState, PlaybackStatus, TracePlayer};
pub use render::{
    project_render_state, project_step, NodeColor, RenderEdgeState, RenderNodeState, RenderState,
};

#[cfg(test)]
mod tests {
    use super::*;
    use scout_grid::{Cell, Grid};
    use scout_search::search;

    #[test]
    fn every_step_of_a_trace_is_renderable() {
        let grid = Grid::from_rows(&[vec![0, 0, 0], vec![0, 1, 0], vec![0, 1, 0]]).unwrap();
        let result = search(&grid, Cell::new(0, 0), Cell::new(2, 2));

        for step in &result.steps {
            let tree_layout = layout(&step.tree);
            let frame = project_step(&tree_layout, step, &result.path_ids, false);
            assert_eq!(frame.nodes.len(), step.tree.len());
        }
    }

    #[test]
    fn player_drives_rendering() {
        let grid = Grid::open(3, 3);
        let result = search(&grid, Cell::new(0, 0), Cell::new(2, 2));
        let mut player = TracePlayer::new(result.steps.clone());

        let mut frames = 0;
        loop {
            let step = player.current().cloned().unwrap();
            let tree_layout = layout(&step.tree);
            let frame = project_step(&tree_layout, &step, &result.path_ids, true);
            assert!(!frame.nodes.is_empty());
            frames += 1;
            if player.advance().is_none() {
                break;
            }
        }
        assert_eq!(frames, result.steps.len());
        assert_eq!(player.state(), PlaybackState::Done);
    }

    #[test]
    fn render_state_serializes() {
        let grid = Grid::open(2, 2);
        let result = search(&grid, Cell::new(0, 0), Cell::new(1, 1));
        let step = result.steps.last().unwrap();
        let tree_layout = layout(&step.tree);
        let frame = project_step(&tree_layout, step, &result.path_ids, true);

        let json = serde_json::to_string(&frame).unwrap();
        assert!(json.contains("\"color\""));

        let parsed: RenderState = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, frame);
    }
}
