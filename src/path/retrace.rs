use super::Path;
use crate::{
    grid::{CostTable, NodeGrid},
    Point,
};

/// Walks the parent links in `costs` from `goal` back to `start` and returns the route in
/// start to goal order, without `start`.
///
/// The parent chain is trusted to lead back to `start`; no cycle detection is done.
///
/// ## Panics
/// If a Point on the way has no parent before `start` is reached.
#[track_caller]
pub fn retrace(grid: &NodeGrid, costs: &CostTable, start: Point, goal: Point) -> Path {
    let mut cells = vec![];
    let mut current = goal;

    while current != start {
        cells.push(current);
        current = match costs[current].parent {
            Some(parent) => parent,
            None => panic!("parent chain from {:?} ends at {:?}", goal, current),
        };
    }
    cells.reverse();

    let waypoints = cells.iter().map(|&pos| grid[pos].world_pos).collect();
    Path::new(cells, waypoints, costs.g_cost(goal))
}
