//! The sampled Grid and the searches running over it.

mod node;
pub use node::Node;

mod node_grid;
pub use node_grid::{GridConfig, NodeGrid};

mod walkability;
pub use walkability::{obstacle_predicate, Obstacle};

mod cost_table;
pub use cost_table::{CostEntry, CostTable, NodeCosts};

pub mod frontier;
pub use frontier::{Frontier, HeapFrontier, ListFrontier};

mod search;
pub use search::{astar_search, dijkstra_search, frontier_search, FrontierKind, Heuristic};
