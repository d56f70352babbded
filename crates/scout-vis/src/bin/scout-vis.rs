//! Scout Search Visualizer
//!
//! Run a search on a demo grid and emit the full step trace as JSON.

use std::env;

use scout_grid::{Cell, Grid};
use scout_search::{search, SearchStatus};
use scout_vis::{layout, project_step};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Parse command line args
    let args: Vec<String> = env::args().collect();

    let rows: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(8);
    let cols: usize = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(8);

    // Demo grid: a wall down the middle column with a gap in the top row
    let mut grid = Grid::open(rows, cols);
    if cols >= 3 {
        let wall_col = (cols / 2) as i64;
        for row in 1..rows {
            grid.set_blocked(Cell::new(row as i64, wall_col), true);
        }
    }

    let start = Cell::new(0, 0);
    let goal = Cell::new(rows as i64 - 1, cols as i64 - 1);

    println!("Scout Search Visualizer");
    println!("=======================");
    println!();
    println!("Searching {}x{} grid: {} -> {}", rows, cols, start, goal);

    let result = search(&grid, start, goal);

    println!();
    println!("Search complete:");
    println!("  Status: {}", serde_json::to_string(&result.status)?);
    println!("  Steps:  {}", result.steps.len());
    println!("  Path:   {} cells", result.path.len());

    if let Some(step) = result.steps.last() {
        let tree_layout = layout(&step.tree);
        let frame = project_step(
            &tree_layout,
            step,
            &result.path_ids,
            result.status == SearchStatus::GoalFound,
        );
        println!(
            "  Tree:   {} nodes, {} edges, {:.0}x{:.0} bounding box",
            frame.nodes.len(),
            frame.edges.len(),
            tree_layout.width,
            tree_layout.height,
        );
    }

    println!();
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
