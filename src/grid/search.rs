use super::{CostTable, Frontier, HeapFrontier, ListFrontier, NodeGrid};
use crate::{
    neighbors::Neighborhood,
    path::{retrace, Path},
    Point, PointSet,
};

/// Whether a search estimates the remaining distance to its goal
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Heuristic {
    /// Order the frontier by the cost so far only (Dijkstra)
    None,
    /// Add the [`Neighborhood::heuristic`] distance to the goal (A*)
    Goal,
}

/// Searches for the cheapest path from `start` to `goal`, settling Points out of `frontier` in
/// the order of their `f` cost.
///
/// Every Point that is reached gets its cost and parent recorded in `costs`. Only `start` is
/// reset before the search, so a table that already holds the results of an earlier search
/// lets those leak into this one: leftover `h` costs still count towards `f`.
///
/// A neighbor is (re)assigned whenever the new cost is lower than its recorded `g` cost, or it
/// is not in the frontier at the moment. Unwalkable Points are never entered. `start` itself is
/// not checked for walkability.
///
/// Returns `None` if the frontier runs dry before `goal` is settled.
pub fn frontier_search<N: Neighborhood, F: Frontier>(
    grid: &NodeGrid,
    neighborhood: &N,
    costs: &mut CostTable,
    mut frontier: F,
    start: Point,
    goal: Point,
    heuristic: Heuristic,
) -> Option<Path> {
    #[cfg(feature = "log")]
    let (outer_timer, timer) = (std::time::Instant::now(), std::time::Instant::now());

    let estimate = |pos: Point| match heuristic {
        Heuristic::None => None,
        Heuristic::Goal => Some(neighborhood.heuristic(pos, goal)),
    };

    costs.seed_start(start, estimate(start));
    frontier.push(start, costs.f_cost(start));

    let mut closed = PointSet::with_capacity(grid.len());
    let mut all_neighbors = Vec::with_capacity(8);

    re_trace!("search setup", timer);

    let mut found = None;
    while let Some(current) = frontier.pop_min(|pos| costs.f_cost(pos)) {
        if current == goal {
            found = Some(retrace(grid, costs, start, goal));
            break;
        }
        closed.insert(current);

        let current_cost = costs.g_cost(current);

        all_neighbors.clear();
        neighborhood.get_all_neighbors(current, &mut all_neighbors);

        for &other in all_neighbors.iter() {
            if closed.contains(&other) || !grid[other].walkable {
                continue;
            }
            let other_cost = current_cost + neighborhood.heuristic(current, other);
            let in_frontier = frontier.contains(other);

            if other_cost < costs.g_cost(other) || !in_frontier {
                costs.relax(other, other_cost, estimate(other), current);
                let f = costs.f_cost(other);
                if in_frontier {
                    frontier.update(other, f);
                } else {
                    frontier.push(other, f);
                }
            }
        }
    }

    re_trace!("search loop", timer);
    re_trace!("search total", outer_timer);

    debug_log!(
        "{:?} search {:?} -> {:?}: {} settled, {} touched, cost {:?}",
        heuristic,
        start,
        goal,
        closed.len(),
        costs.len(),
        found.as_ref().map(Path::cost)
    );

    found
}

/// Which [`Frontier`] a search keeps its open set in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum FrontierKind {
    /// [`ListFrontier`]: a linear scan over an insertion ordered list
    #[default]
    List,
    /// [`HeapFrontier`]: a binary heap with the same tie-breaking as the list
    Heap,
}

impl FrontierKind {
    fn search<N: Neighborhood>(
        self,
        grid: &NodeGrid,
        neighborhood: &N,
        costs: &mut CostTable,
        start: Point,
        goal: Point,
        heuristic: Heuristic,
    ) -> Option<Path> {
        match self {
            FrontierKind::List => frontier_search(
                grid,
                neighborhood,
                costs,
                ListFrontier::new(),
                start,
                goal,
                heuristic,
            ),
            FrontierKind::Heap => frontier_search(
                grid,
                neighborhood,
                costs,
                HeapFrontier::with_capacity(grid.len() / 2),
                start,
                goal,
                heuristic,
            ),
        }
    }
}

/// Uniform cost search from `start` to `goal`. See [`frontier_search`].
///
/// ## Examples
/// ```
/// use terrain_pathfinding::prelude::*;
///
/// let grid = NodeGrid::build(GridConfig::new(5, 5, 1.0, [0.0; 3]), |_, _| 0.0, |_| true);
/// let neighborhood = grid.neighborhood(DistanceType::Manhattan);
/// let mut costs = CostTable::new();
///
/// let path = dijkstra_search(&grid, &neighborhood, &mut costs, FrontierKind::List, (0, 2), (4, 2))
///     .expect("the Grid is open");
/// assert_eq!(path.cells(), &[(1, 2), (2, 2), (3, 2), (4, 2)]);
/// assert_eq!(path.cost(), 4);
/// ```
pub fn dijkstra_search<N: Neighborhood>(
    grid: &NodeGrid,
    neighborhood: &N,
    costs: &mut CostTable,
    frontier: FrontierKind,
    start: Point,
    goal: Point,
) -> Option<Path> {
    frontier.search(grid, neighborhood, costs, start, goal, Heuristic::None)
}

/// A* search from `start` to `goal`, guided by [`Neighborhood::heuristic`]. See
/// [`frontier_search`].
pub fn astar_search<N: Neighborhood>(
    grid: &NodeGrid,
    neighborhood: &N,
    costs: &mut CostTable,
    frontier: FrontierKind,
    start: Point,
    goal: Point,
) -> Option<Path> {
    frontier.search(grid, neighborhood, costs, start, goal, Heuristic::Goal)
}
