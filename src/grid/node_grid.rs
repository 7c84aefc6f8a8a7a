use super::Node;
use crate::{
    neighbors::{DistanceType, MooreNeighborhood},
    Point, WorldPos,
};

/// Options for sampling a [`NodeGrid`].
///
/// ## Examples
/// ```
/// use terrain_pathfinding::prelude::*;
///
/// let config = GridConfig::default();
/// assert_eq!((config.size_x, config.size_y), (50, 50));
///
/// let config = GridConfig::new(20, 10, 0.5, [-5.0, 0.0, -2.5]);
/// assert_eq!(config.world_xz((2, 4)), (-4.0, -0.5));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridConfig {
    /// Number of cells along the world `x` axis
    pub size_x: usize,
    /// Number of cells along the world `z` axis
    pub size_y: usize,
    /// Side length of a single cell in world units
    pub node_size: f32,
    /// World position of the cell `(0, 0)`. Its `y` is added to every sampled height.
    pub origin: WorldPos,
}

impl GridConfig {
    /// Creates a new GridConfig
    pub fn new(size_x: usize, size_y: usize, node_size: f32, origin: WorldPos) -> GridConfig {
        GridConfig {
            size_x,
            size_y,
            node_size,
            origin,
        }
    }

    /// The world `(x, z)` of a cell, before any height is sampled
    pub fn world_xz(&self, (x, y): Point) -> (f32, f32) {
        (
            self.origin[0] + x as f32 * self.node_size,
            self.origin[2] + y as f32 * self.node_size,
        )
    }

    fn sample(
        &self,
        pos: Point,
        height: impl FnOnce(f32, f32) -> f32,
        is_walkable: impl FnOnce(WorldPos) -> bool,
    ) -> Node {
        let (world_x, world_z) = self.world_xz(pos);
        let world_pos = [world_x, height(world_x, world_z) + self.origin[1], world_z];
        Node::new(pos, world_pos, is_walkable(world_pos))
    }
}

impl Default for GridConfig {
    fn default() -> GridConfig {
        GridConfig::new(50, 50, 1.0, [0.0, 0.0, 0.0])
    }
}

/// A rectangular Grid of [`Node`]s, sampled once from the environment.
///
/// Nodes never move or change after sampling; searches store their state elsewhere.
/// Indexing with a [`Point`] outside the Grid panics.
#[derive(Clone, Debug)]
pub struct NodeGrid {
    config: GridConfig,
    nodes: Vec<Node>,
}

impl NodeGrid {
    /// Samples a new Grid.
    ///
    /// `height(world_x, world_z)` gives the ground height at a location (relative to
    /// `config.origin`), `is_walkable` decides for every sampled position whether a path may
    /// pass through it. Cells are visited column by column, `x` in the outer loop.
    ///
    /// ## Examples
    /// ```
    /// use terrain_pathfinding::prelude::*;
    ///
    /// let grid = NodeGrid::build(
    ///     GridConfig::new(3, 2, 2.0, [10.0, 1.0, 0.0]),
    ///     |x, _z| x * 0.5,
    ///     |_| true,
    /// );
    /// assert_eq!(grid[(1, 1)].world_pos, [12.0, 7.0, 2.0]);
    /// assert!(grid[(1, 1)].walkable);
    /// ```
    pub fn build(
        config: GridConfig,
        mut height: impl FnMut(f32, f32) -> f32,
        mut is_walkable: impl FnMut(WorldPos) -> bool,
    ) -> NodeGrid {
        #[cfg(feature = "log")]
        let timer = std::time::Instant::now();

        let mut nodes = Vec::with_capacity(config.size_x * config.size_y);
        for x in 0..config.size_x {
            for y in 0..config.size_y {
                nodes.push(config.sample((x, y), &mut height, &mut is_walkable));
            }
        }

        re_trace!("sample grid", timer);

        NodeGrid::from_nodes(config, nodes)
    }

    /// The same as [`build`](NodeGrid::build), but samples the columns of the Grid on multiple
    /// threads. The resulting Grid is identical.
    #[cfg(feature = "parallel")]
    pub fn build_par(
        config: GridConfig,
        height: impl Fn(f32, f32) -> f32 + Sync,
        is_walkable: impl Fn(WorldPos) -> bool + Sync,
    ) -> NodeGrid {
        use rayon::prelude::*;

        #[cfg(feature = "log")]
        let timer = std::time::Instant::now();

        let nodes = (0..config.size_x)
            .into_par_iter()
            .flat_map_iter(|x| {
                let (height, is_walkable) = (&height, &is_walkable);
                (0..config.size_y).map(move |y| config.sample((x, y), height, is_walkable))
            })
            .collect();

        re_trace!("sample grid in parallel", timer);

        NodeGrid::from_nodes(config, nodes)
    }

    fn from_nodes(config: GridConfig, nodes: Vec<Node>) -> NodeGrid {
        debug_log!(
            "sampled {}x{} grid, {} walkable",
            config.size_x,
            config.size_y,
            nodes.iter().filter(|node| node.walkable).count()
        );
        NodeGrid { config, nodes }
    }

    /// The options this Grid was sampled with
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Number of cells along `x`
    pub fn width(&self) -> usize {
        self.config.size_x
    }

    /// Number of cells along `y`
    pub fn height(&self) -> usize {
        self.config.size_y
    }

    /// The total number of Nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// `true` if the Grid has no Nodes at all
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// `true` if `pos` lies on the Grid
    pub fn contains(&self, (x, y): Point) -> bool {
        x < self.width() && y < self.height()
    }

    /// The Node at `pos`, if `pos` lies on the Grid
    pub fn get(&self, pos: Point) -> Option<&Node> {
        if self.contains(pos) {
            Some(&self.nodes[self.index_of(pos)])
        } else {
            None
        }
    }

    /// Iterates all Nodes, column by column
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter()
    }

    /// A [`MooreNeighborhood`] spanning this Grid
    pub fn neighborhood(&self, distance_type: DistanceType) -> MooreNeighborhood {
        MooreNeighborhood::new(self.width(), self.height(), distance_type)
    }

    /// Finds the cell closest to a world position.
    ///
    /// Positions outside of the Grid are clamped to the nearest edge cell instead of being
    /// rejected. The `y` of `world_pos` is ignored. Returns `None` only if the Grid is empty.
    ///
    /// Note that the position is scaled by `size - 1` over `size * node_size`, so cells are
    /// spread over a slightly wider area than the one they were sampled from. Halfway values
    /// round to the even cell.
    ///
    /// ## Examples
    /// ```
    /// use terrain_pathfinding::prelude::*;
    ///
    /// let grid = NodeGrid::build(GridConfig::new(11, 11, 1.0, [0.0; 3]), |_, _| 0.0, |_| true);
    /// assert_eq!(grid.point_from_world([3.3, 0.0, 8.8]), Some((3, 8)));
    /// assert_eq!(grid.point_from_world([-40.0, 0.0, 400.0]), Some((0, 10)));
    /// ```
    pub fn point_from_world(&self, world_pos: WorldPos) -> Option<Point> {
        if self.is_empty() {
            return None;
        }
        let GridConfig {
            size_x,
            size_y,
            node_size,
            origin,
        } = self.config;

        let percent_x = ((world_pos[0] - origin[0]) / (size_x as f32 * node_size)).clamp(0.0, 1.0);
        let percent_y = ((world_pos[2] - origin[2]) / (size_y as f32 * node_size)).clamp(0.0, 1.0);

        // NaN survives the clamp, and casts to 0
        let x = ((size_x - 1) as f32 * percent_x).round_ties_even() as usize;
        let y = ((size_y - 1) as f32 * percent_y).round_ties_even() as usize;
        Some((x.min(size_x - 1), y.min(size_y - 1)))
    }

    fn index_of(&self, (x, y): Point) -> usize {
        x * self.height() + y
    }
}

use std::ops::Index;
impl Index<Point> for NodeGrid {
    type Output = Node;
    #[track_caller]
    fn index(&self, pos: Point) -> &Node {
        assert!(
            self.contains(pos),
            "{:?} is outside of a {}x{} Grid",
            pos,
            self.width(),
            self.height()
        );
        &self.nodes[self.index_of(pos)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(size_x: usize, size_y: usize) -> NodeGrid {
        NodeGrid::build(
            GridConfig::new(size_x, size_y, 1.0, [0.0; 3]),
            |_, _| 0.0,
            |_| true,
        )
    }

    #[test]
    fn identity() {
        let grid = NodeGrid::build(
            GridConfig::new(7, 4, 0.5, [1.0, 2.0, 3.0]),
            |x, z| x + z,
            |[x, _, _]| x < 2.0,
        );
        assert_eq!(grid.len(), 28);
        for x in 0..7 {
            for y in 0..4 {
                let node = &grid[(x, y)];
                assert_eq!(node.pos, (x, y));

                let (world_x, world_z) = (1.0 + x as f32 * 0.5, 3.0 + y as f32 * 0.5);
                assert_eq!(node.world_pos, [world_x, world_x + world_z + 2.0, world_z]);
                assert_eq!(node.walkable, world_x < 2.0);
            }
        }
    }

    #[test]
    fn sampling_order() {
        let mut visited = vec![];
        NodeGrid::build(
            GridConfig::new(2, 3, 1.0, [0.0; 3]),
            |_, _| 0.0,
            |[x, _, z]| {
                visited.push((x as usize, z as usize));
                true
            },
        );
        assert_eq!(visited, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_build() {
        let config = GridConfig::new(13, 9, 0.75, [4.0, -1.0, 2.0]);
        let height = |x: f32, z: f32| (x * 0.3).sin() + z;
        let is_walkable = |[x, _, z]: WorldPos| (x + z) as usize % 3 != 0;

        let sequential = NodeGrid::build(config, height, is_walkable);
        let parallel = NodeGrid::build_par(config, height, is_walkable);
        assert!(sequential.nodes().eq(parallel.nodes()));
    }

    #[test]
    fn world_resolution() {
        let grid = flat(50, 50);
        assert_eq!(grid.point_from_world([0.0, 0.0, 0.0]), Some((0, 0)));
        assert_eq!(grid.point_from_world([50.0, 0.0, 50.0]), Some((49, 49)));
        // 49 * 10 / 50 = 9.8
        assert_eq!(grid.point_from_world([10.0, 3.0, 20.0]), Some((10, 20)));
        // 49 * 0.5 / 50 = 0.49
        assert_eq!(grid.point_from_world([0.5, 0.0, 0.0]), Some((0, 0)));
    }

    #[test]
    fn world_resolution_clamps() {
        let grid = flat(5, 8);
        assert_eq!(grid.point_from_world([-3.0, 0.0, -100.0]), Some((0, 0)));
        assert_eq!(grid.point_from_world([1e9, 0.0, 2.0]), Some((4, 2)));
        assert_eq!(grid.point_from_world([2.5, 0.0, 1e9]), Some((2, 7)));
    }

    #[test]
    fn world_resolution_ties_to_even() {
        // (5 - 1) * 0.625 / 5 = 0.5 and (5 - 1) * 1.875 / 5 = 1.5
        let grid = flat(5, 5);
        assert_eq!(grid.point_from_world([0.625, 0.0, 1.875]), Some((0, 2)));
    }

    #[test]
    fn empty_grid() {
        let grid = flat(0, 0);
        assert!(grid.is_empty());
        assert_eq!(grid.point_from_world([0.0; 3]), None);
        assert_eq!(grid.get((0, 0)), None);
    }

    #[test]
    #[should_panic]
    fn out_of_bounds() {
        let grid = flat(3, 3);
        let _ = &grid[(3, 0)];
    }
}
