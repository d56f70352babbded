//! Search tree accumulator.
//!
//! The engine discovers each cell exactly once, so the parent links form a
//! tree rooted at the start cell. The tree is a local accumulator owned by a
//! single search call; each emitted step captures an immutable snapshot of
//! it, which is what makes time-travel rendering possible.

use std::collections::HashMap;

use scout_grid::{Cell, CellId};
use serde::{Deserialize, Serialize};

/// One discovered cell in the search tree.
///
/// Created exactly once, when its cell is first discovered. The only
/// mutation afterwards is appending to `children` when this node expands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchTreeNode {
    /// Canonical key of the cell (unique: cells are visited at most once).
    pub id: CellId,
    /// Id of the node that discovered this one; `None` for the root.
    pub parent_id: Option<CellId>,
    /// The cell itself.
    pub state: Cell,
    /// BFS layer: 0 for the root, parent depth + 1 otherwise.
    pub depth: u32,
    /// Child ids, in neighbor-expansion order.
    pub children: Vec<CellId>,
}

/// The full set of nodes known at a moment in the search, in discovery order.
pub type TreeSnapshot = Vec<SearchTreeNode>;

/// Insertion-ordered accumulator for the search tree.
///
/// Nodes are stored in discovery order; the id index gives O(1) parent
/// lookup when linking children. Discovery order matters downstream: the
/// layout engine ranks siblings at a depth by this order.
#[derive(Debug, Default)]
pub struct SearchTree {
    nodes: Vec<SearchTreeNode>,
    index: HashMap<CellId, usize>,
}

impl SearchTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert the root node for the start cell.
    pub fn insert_root(&mut self, cell: Cell) -> CellId {
        let id = cell.id();
        self.push(SearchTreeNode {
            id,
            parent_id: None,
            state: cell,
            depth: 0,
            children: Vec::new(),
        });
        id
    }

    /// Insert a newly discovered cell under its discovering parent.
    ///
    /// Appends the child id to the parent's `children`, preserving
    /// expansion order. The parent must already be in the tree.
    pub fn insert_child(&mut self, cell: Cell, parent_id: CellId) -> CellId {
        let id = cell.id();
        let depth = self
            .get(parent_id)
            .map(|p| p.depth + 1)
            .unwrap_or_default();

        self.push(SearchTreeNode {
            id,
            parent_id: Some(parent_id),
            state: cell,
            depth,
            children: Vec::new(),
        });

        if let Some(&parent_idx) = self.index.get(&parent_id) {
            self.nodes[parent_idx].children.push(id);
        }
        id
    }

    fn push(&mut self, node: SearchTreeNode) {
        let _ = self.index.insert(node.id, self.nodes.len());
        self.nodes.push(node);
    }

    /// Look up a node by id.
    pub fn get(&self, id: CellId) -> Option<&SearchTreeNode> {
        self.index.get(&id).map(|&i| &self.nodes[i])
    }

    /// Whether a node with this id exists.
    pub fn contains(&self, id: CellId) -> bool {
        self.index.contains_key(&id)
    }

    /// Number of discovered nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Immutable snapshot of all nodes in discovery order.
    pub fn snapshot(&self) -> TreeSnapshot {
        self.nodes.clone()
    }
}
