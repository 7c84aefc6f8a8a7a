//! Shortest paths over a sampled 2D walkability Grid, found with both Dijkstra and A* and
//! compared side by side.
//!
//! The host (a game engine, a terrain tool, a test) supplies the environment: a height sampler
//! and a walkability predicate per cell, and the world positions of start and goal. This crate
//! builds a [`NodeGrid`](grid::NodeGrid) from those, runs both searches and hands back ordered
//! waypoints plus per-cell `g`/`h`/`f` costs for whatever the host wants to draw.
//!
//! ## Example
//! ```
//! use terrain_pathfinding::prelude::*;
//!
//! // a 10x10 Grid of 1x1 cells on flat ground, with a wall at x == 4 except for a gap at y == 9
//! let config = GridConfig::new(10, 10, 1.0, [0.0, 0.0, 0.0]);
//! let grid = NodeGrid::build(
//!     config,
//!     |_x, _z| 0.0,
//!     |[x, _, z]: WorldPos| x.round() as usize != 4 || z.round() as usize == 9,
//! );
//!
//! let mut comparator = Comparator::new(grid, SearchConfig::default());
//! let comparison = comparator
//!     // the goal lies beyond the edge of the Grid, and is clamped to (9, 0)
//!     .compare([0.0, 0.0, 0.0], [12.0, 0.0, 0.0])
//!     .expect("Grid is not empty");
//!
//! let dijkstra = comparison.dijkstra.as_ref().expect("a path exists");
//! let astar = comparison.astar.as_ref().expect("a path exists");
//!
//! // both end on the goal cell and never contain the start cell
//! assert_eq!(dijkstra.last_cell(), Some((9, 0)));
//! assert_eq!(astar.last_cell(), Some((9, 0)));
//! assert!(!dijkstra.cells().contains(&(0, 0)));
//!
//! // the Manhattan metric is consistent for these step costs, so both agree on the cost
//! assert_eq!(dijkstra.cost(), astar.cost());
//! ```
//!
//! ## Cost state
//! By default every search works on its own freshly allocated [`CostTable`](grid::CostTable).
//! [`CostStateMode::Shared`](compare::CostStateMode::Shared) instead keeps one table alive
//! across runs, so that leftover costs of earlier searches leak into later ones. That mode
//! exists to reproduce the behavior of visualizers that store costs on the Grid itself.
//!
//! ## Features
//! - `parallel` (default): enables [`NodeGrid::build_par`](grid::NodeGrid::build_par), which
//!   samples heights and walkability of the Grid on multiple threads.
//! - `log`: traces timings and summaries of Grid builds and searches through the `log` crate.

#![warn(missing_docs)]

// a Macro to log::trace the time since $timer, and restart $timer
#[cfg(feature = "log")]
macro_rules! re_trace {
    ($msg: literal, $timer: ident) => {
        let now = std::time::Instant::now();
        log::trace!(concat!("time to ", $msg, ": {:?}"), now - $timer);
        #[allow(unused)]
        let $timer = now;
    };
}
#[cfg(not(feature = "log"))]
macro_rules! re_trace {
    // does nothing without log feature
    ($msg: literal, $timer: ident) => {};
}

// forwards to log::debug, or swallows the arguments without log feature
#[cfg(feature = "log")]
macro_rules! debug_log {
    ($($arg: tt)*) => {
        log::debug!($($arg)*)
    };
}
#[cfg(not(feature = "log"))]
macro_rules! debug_log {
    ($($arg: tt)*) => {};
}

pub mod compare;
pub mod grid;
pub mod neighbors;
pub mod path;

/// A shorthand for Points on the Grid: `(x, y)`, where `y` runs along the world `z` axis
pub type Point = (usize, usize);

/// A position in world space: `[x, y, z]`, with `y` pointing up
pub type WorldPos = [f32; 3];

type PointMap<V> = hashbrown::HashMap<Point, V>;
type PointSet = hashbrown::HashSet<Point>;

/// The prelude for this crate.
pub mod prelude {
    pub use crate::{
        compare::{Comparator, Comparison, CostStateMode, FrontierKind, SearchConfig},
        grid::{
            astar_search, dijkstra_search, obstacle_predicate, CostTable, GridConfig, Node,
            NodeCosts, NodeGrid, Obstacle,
        },
        neighbors::{DistanceType, MooreNeighborhood, Neighborhood},
        path::{Cost, Path},
        Point, WorldPos,
    };
}
