//! Level-order tree layout.
//!
//! Nodes are grouped by BFS depth. Each level is a horizontal band; the
//! nodes in it are spread evenly along x and centered at 0, ranked by
//! discovery order (which, because the engine discovers in fixed neighbor
//! order, reads left-to-right per expansion).
//!
//! This is a level-order layout, not a subtree-centered one: a node's x
//! depends only on its rank within its depth level, never on its parent's
//! position. Wide or unbalanced trees can therefore show crossing edges;
//! that is an accepted simplification for this scope.
//!
//! Layout is a pure recompute: identical input always yields identical
//! positions, and nothing is cached between calls.

use std::collections::HashMap;

use scout_grid::CellId;
use scout_search::SearchTreeNode;
use serde::{Deserialize, Serialize};

/// Vertical distance between depth levels.
pub const LEVEL_HEIGHT: f64 = 90.0;

/// Horizontal distance between siblings at the same level.
pub const SIBLING_GAP: f64 = 70.0;

/// Padding added around the computed bounds.
pub const MARGIN: f64 = 60.0;

/// A search-tree node with its computed position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutNode {
    /// The underlying tree node.
    #[serde(flatten)]
    pub node: SearchTreeNode,
    /// Horizontal position, centered at 0 per level.
    pub x: f64,
    /// Vertical position, proportional to depth.
    pub y: f64,
}

/// Positioned nodes plus the bounds needed to frame them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeLayout {
    /// Positioned nodes, in the same order as the input.
    pub nodes: Vec<LayoutNode>,
    /// Width of the bounding box, margin included.
    pub width: f64,
    /// Height of the bounding box, margin included.
    pub height: f64,
    /// Id of the parentless node, if the set is non-empty.
    pub root: Option<CellId>,
}

impl TreeLayout {
    /// Look up a positioned node by id.
    pub fn get(&self, id: CellId) -> Option<&LayoutNode> {
        self.nodes.iter().find(|n| n.node.id == id)
    }
}

/// Compute positions for a tree snapshot.
///
/// Input order within a depth level is rank order; the engine produces
/// snapshots in discovery order, which is what callers should pass.
pub fn layout(nodes: &[SearchTreeNode]) -> TreeLayout {
    // Per-level counts first, so each node's x can be centered
    let mut level_sizes: HashMap<u32, usize> = HashMap::new();
    for node in nodes {
        *level_sizes.entry(node.depth).or_insert(0) += 1;
    }

    let mut level_ranks: HashMap<u32, usize> = HashMap::new();
    let mut positioned = Vec::with_capacity(nodes.len());
    let mut max_abs_x: f64 = 0.0;
    let mut max_depth: u32 = 0;

    for node in nodes {
        let rank = level_ranks.entry(node.depth).or_insert(0);
        let count = level_sizes[&node.depth];

        let x = -((count - 1) as f64 * SIBLING_GAP) / 2.0 + *rank as f64 * SIBLING_GAP;
        let y = node.depth as f64 * LEVEL_HEIGHT + MARGIN;
        *rank += 1;

        max_abs_x = max_abs_x.max(x.abs());
        max_depth = max_depth.max(node.depth);

        positioned.push(LayoutNode {
            node: node.clone(),
            x,
            y,
        });
    }

    let root = nodes.iter().find(|n| n.parent_id.is_none()).map(|n| n.id);

    tracing::trace!(
        nodes = positioned.len(),
        levels = level_sizes.len(),
        "layout computed"
    );

    TreeLayout {
        nodes: positioned,
        width: 2.0 * max_abs_x + MARGIN,
        height: max_depth as f64 * LEVEL_HEIGHT + MARGIN,
        root,
    }
}
