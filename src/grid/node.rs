use crate::{Point, WorldPos};

/// One cell of a [`NodeGrid`](super::NodeGrid).
///
/// Nodes only carry what is fixed once the Grid is sampled. The costs a search assigns to a
/// Node live in a [`CostTable`](super::CostTable) instead.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    /// The integer coordinate of the Node. Unique within its Grid.
    pub pos: Point,
    /// Where the Node sits in the world, including the sampled height
    pub world_pos: WorldPos,
    /// Whether searches may enter this Node
    pub walkable: bool,
}

impl Node {
    #[allow(missing_docs)]
    pub fn new(pos: Point, world_pos: WorldPos, walkable: bool) -> Node {
        Node {
            pos,
            world_pos,
            walkable,
        }
    }
}
