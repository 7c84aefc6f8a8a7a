//! Runs Dijkstra and A* between the same two Points and collects both results.

use crate::{
    grid::{astar_search, dijkstra_search, CostTable, NodeGrid},
    neighbors::{DistanceType, MooreNeighborhood},
    path::{Cost, Path},
    Point, WorldPos,
};

pub use crate::grid::FrontierKind;

/// Where searches keep their costs between runs
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum CostStateMode {
    /// Every search starts from an empty [`CostTable`]
    #[default]
    Fresh,
    /// All searches of a [`Comparator`] share one [`CostTable`], and only reset their own start.
    ///
    /// A* then runs on top of the costs Dijkstra left behind, and a second comparison runs
    /// Dijkstra on top of the `h` costs of the first A*. Useful to reproduce visualizers that
    /// store costs on the Nodes themselves.
    Shared,
}

/// Options for a [`Comparator`].
///
/// ## Examples
/// ```
/// use terrain_pathfinding::prelude::*;
///
/// let config = SearchConfig::default()
///     .with_distance_type(DistanceType::Chebyshev)
///     .with_frontier(FrontierKind::Heap);
///
/// assert_eq!(config.cost_state, CostStateMode::Fresh);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct SearchConfig {
    /// The metric for step costs and the A* heuristic. Default: `Manhattan`
    pub distance_type: DistanceType,
    /// How the open set is stored. Default: `List`
    pub frontier: FrontierKind,
    /// Whether runs share their costs. Default: `Fresh`
    pub cost_state: CostStateMode,
}

impl SearchConfig {
    /// Sets `distance_type`
    pub fn with_distance_type(mut self, distance_type: DistanceType) -> Self {
        self.distance_type = distance_type;
        self
    }
    /// Sets `frontier`
    pub fn with_frontier(mut self, frontier: FrontierKind) -> Self {
        self.frontier = frontier;
        self
    }
    /// Sets `cost_state`
    pub fn with_cost_state(mut self, cost_state: CostStateMode) -> Self {
        self.cost_state = cost_state;
        self
    }
}

/// The outcome of one [`Comparator::compare`] call
#[derive(Clone, Debug, PartialEq)]
pub struct Comparison {
    /// The cell the start position resolved to
    pub start: Point,
    /// The cell the goal position resolved to
    pub goal: Point,
    /// The path Dijkstra found, or `None` if the goal can't be reached
    pub dijkstra: Option<Path>,
    /// The path A* found, or `None` if the goal can't be reached
    pub astar: Option<Path>,
    /// Costs as they were after the Dijkstra run
    pub dijkstra_costs: CostTable,
    /// Costs as they were after the A* run. With [`CostStateMode::Shared`] this also holds
    /// everything Dijkstra touched and A* did not.
    pub astar_costs: CostTable,
}

impl Comparison {
    /// The costs of both paths: `(dijkstra, astar)`
    pub fn total_costs(&self) -> (Option<Cost>, Option<Cost>) {
        (
            self.dijkstra.as_ref().map(Path::cost),
            self.astar.as_ref().map(Path::cost),
        )
    }

    /// `true` if both searches found a path of the same cost, or both found none
    pub fn agrees(&self) -> bool {
        let (dijkstra, astar) = self.total_costs();
        dijkstra == astar
    }
}

/// Owns a [`NodeGrid`] and compares Dijkstra and A* on it.
///
/// ## Examples
/// ```
/// use terrain_pathfinding::prelude::*;
///
/// // a wall of spheres along x == 10, with a gap at z 9 to 11
/// let obstacles: Vec<_> = (0..20)
///     .filter(|z| !(9..=11).contains(z))
///     .map(|z| Obstacle::new([10.0, 0.0, z as f32], 0.2))
///     .collect();
///
/// let config = GridConfig::new(20, 20, 1.0, [0.0; 3]);
/// let grid = NodeGrid::build(config, |_, _| 0.0, obstacle_predicate(&obstacles, 1.0));
///
/// let mut comparator = Comparator::new(grid, SearchConfig::default());
/// let comparison = comparator.compare([2.0, 0.0, 2.0], [17.0, 0.0, 2.0]).unwrap();
///
/// assert!(comparison.agrees());
/// let path = comparison.astar.unwrap();
/// assert!(path.cells().iter().any(|&(x, y)| x == 10 && (9..=11).contains(&y)));
/// ```
#[derive(Clone, Debug)]
pub struct Comparator {
    grid: NodeGrid,
    neighborhood: MooreNeighborhood,
    config: SearchConfig,
    shared_costs: CostTable,
}

impl Comparator {
    /// Creates a new Comparator that searches on `grid`
    pub fn new(grid: NodeGrid, config: SearchConfig) -> Comparator {
        let neighborhood = grid.neighborhood(config.distance_type);
        Comparator {
            shared_costs: CostTable::with_capacity(grid.len()),
            grid,
            neighborhood,
            config,
        }
    }

    /// The Grid searches run on
    pub fn grid(&self) -> &NodeGrid {
        &self.grid
    }

    /// The options this Comparator was created with
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// The table that [`CostStateMode::Shared`] runs write to. Stays empty otherwise.
    pub fn shared_costs(&self) -> &CostTable {
        &self.shared_costs
    }

    /// Resolves two world positions to their nearest cells (clamped to the Grid), then runs
    /// Dijkstra and A* between them.
    ///
    /// Returns `None` only if the Grid is empty.
    pub fn compare(&mut self, start: WorldPos, goal: WorldPos) -> Option<Comparison> {
        let start = self.grid.point_from_world(start)?;
        let goal = self.grid.point_from_world(goal)?;
        Some(self.compare_cells(start, goal))
    }

    /// Runs Dijkstra, then A*, from `start` to `goal`.
    ///
    /// ## Panics
    /// If `start` or `goal` lie outside the Grid.
    #[track_caller]
    pub fn compare_cells(&mut self, start: Point, goal: Point) -> Comparison {
        assert!(
            self.grid.contains(start) && self.grid.contains(goal),
            "{:?} -> {:?} leaves the Grid",
            start,
            goal
        );
        let SearchConfig {
            frontier,
            cost_state,
            ..
        } = self.config;
        let (grid, neighborhood) = (&self.grid, &self.neighborhood);

        let (dijkstra, dijkstra_costs, astar, astar_costs) = match cost_state {
            CostStateMode::Fresh => {
                let mut dijkstra_costs = CostTable::with_capacity(grid.len());
                let dijkstra =
                    dijkstra_search(grid, neighborhood, &mut dijkstra_costs, frontier, start, goal);

                let mut astar_costs = CostTable::with_capacity(grid.len());
                let astar =
                    astar_search(grid, neighborhood, &mut astar_costs, frontier, start, goal);

                (dijkstra, dijkstra_costs, astar, astar_costs)
            }
            CostStateMode::Shared => {
                let costs = &mut self.shared_costs;
                let dijkstra = dijkstra_search(grid, neighborhood, costs, frontier, start, goal);
                let dijkstra_costs = costs.clone();

                let astar = astar_search(grid, neighborhood, costs, frontier, start, goal);

                (dijkstra, dijkstra_costs, astar, costs.clone())
            }
        };

        debug_log!(
            "compared {:?} -> {:?}: dijkstra {:?}, astar {:?}",
            start,
            goal,
            dijkstra.as_ref().map(Path::cost),
            astar.as_ref().map(Path::cost)
        );

        Comparison {
            start,
            goal,
            dijkstra,
            astar,
            dijkstra_costs,
            astar_costs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{GridConfig, NodeCosts};

    fn open_grid(size_x: usize, size_y: usize) -> NodeGrid {
        NodeGrid::build(
            GridConfig::new(size_x, size_y, 1.0, [0.0; 3]),
            |_, _| 0.0,
            |_| true,
        )
    }

    #[test]
    fn fresh_costs_are_separate() {
        let mut comparator = Comparator::new(open_grid(10, 10), SearchConfig::default());
        let comparison = comparator.compare_cells((0, 0), (9, 0));
        assert_eq!(comparison.total_costs(), (Some(9), Some(9)));

        // Dijkstra spreads in all directions, A* stays close to the row of the goal
        assert_eq!(comparison.dijkstra_costs.g_cost((0, 6)), 6);
        assert_eq!(comparison.astar_costs.costs_at((0, 6)), None);
        assert!(comparison.astar_costs.len() < comparison.dijkstra_costs.len());
        assert!(comparator.shared_costs().is_empty());
    }

    #[test]
    fn shared_costs_leak_into_astar() {
        let config = SearchConfig::default().with_cost_state(CostStateMode::Shared);
        let mut comparator = Comparator::new(open_grid(10, 10), config);
        let comparison = comparator.compare_cells((0, 0), (9, 0));
        assert!(comparison.agrees());

        // left behind by Dijkstra
        assert_eq!(
            comparison.astar_costs.costs_at((0, 6)),
            Some(NodeCosts { g: 6, h: 0, f: 6 })
        );
        assert_eq!(&comparison.astar_costs, comparator.shared_costs());
    }

    #[test]
    fn shared_costs_leak_into_next_dijkstra() {
        let config = SearchConfig::default().with_cost_state(CostStateMode::Shared);
        let mut comparator = Comparator::new(open_grid(10, 10), config);
        comparator.compare_cells((0, 0), (9, 0));
        let comparison = comparator.compare_cells((0, 0), (9, 0));

        // the start keeps the heuristic of the previous A* run
        assert_eq!(
            comparison.dijkstra_costs.costs_at((0, 0)),
            Some(NodeCosts { g: 0, h: 9, f: 9 })
        );
        assert!(comparison.dijkstra.is_some());
        assert!(comparison.astar.is_some());

        let mut fresh = Comparator::new(open_grid(10, 10), SearchConfig::default());
        fresh.compare_cells((0, 0), (9, 0));
        let comparison = fresh.compare_cells((0, 0), (9, 0));
        assert_eq!(
            comparison.dijkstra_costs.costs_at((0, 0)),
            Some(NodeCosts { g: 0, h: 0, f: 0 })
        );
    }

    #[test]
    fn world_positions_are_clamped() {
        let mut comparator = Comparator::new(open_grid(8, 8), SearchConfig::default());
        let comparison = comparator
            .compare([-100.0, 0.0, -100.0], [100.0, 5.0, 100.0])
            .unwrap();
        assert_eq!((comparison.start, comparison.goal), ((0, 0), (7, 7)));
        assert_eq!(comparison.astar.unwrap().last_cell(), Some((7, 7)));
    }

    #[test]
    fn empty_grid() {
        let mut comparator = Comparator::new(open_grid(0, 0), SearchConfig::default());
        assert_eq!(comparator.compare([0.0; 3], [1.0; 3]), None);
    }

    #[test]
    fn enclosed_goal() {
        let grid = NodeGrid::build(
            GridConfig::new(7, 7, 1.0, [0.0; 3]),
            |_, _| 0.0,
            |[x, _, z]| {
                let (x, z) = (x as i32, z as i32);
                (x - 4).abs().max((z - 4).abs()) != 1
            },
        );
        for frontier in [FrontierKind::List, FrontierKind::Heap] {
            let mut comparator =
                Comparator::new(grid.clone(), SearchConfig::default().with_frontier(frontier));
            let comparison = comparator.compare_cells((0, 0), (4, 4));
            assert_eq!(comparison.total_costs(), (None, None));
            assert!(comparison.agrees());
        }
    }
}
