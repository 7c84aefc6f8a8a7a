use crate::WorldPos;

/// A spherical region that blocks every cell it touches.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Obstacle {
    /// Center of the sphere
    pub center: WorldPos,
    /// Radius of the sphere
    pub radius: f32,
}

impl Obstacle {
    #[allow(missing_docs)]
    pub fn new(center: WorldPos, radius: f32) -> Obstacle {
        Obstacle { center, radius }
    }
}

/// Creates a walkability predicate for [`NodeGrid::build`](super::NodeGrid::build) out of a
/// list of [`Obstacle`]s.
///
/// A position is walkable unless a sphere of radius `node_size / 2` around it overlaps any of
/// the Obstacles. Touching counts as overlapping.
///
/// ## Examples
/// ```
/// use terrain_pathfinding::prelude::*;
///
/// let obstacles = [Obstacle::new([5.0, 0.0, 5.0], 1.0)];
/// let is_walkable = obstacle_predicate(&obstacles, 1.0);
///
/// assert!(!is_walkable([5.0, 0.0, 6.0]));
/// assert!(!is_walkable([6.5, 0.0, 5.0]));
/// assert!(is_walkable([6.6, 0.0, 5.0]));
/// assert!(is_walkable([5.0, 3.0, 5.0]));
/// ```
pub fn obstacle_predicate(
    obstacles: &[Obstacle],
    node_size: f32,
) -> impl Fn(WorldPos) -> bool + Sync + '_ {
    let detection_radius = node_size * 0.5;
    move |pos| {
        !obstacles.iter().any(|obstacle| {
            let reach = obstacle.radius + detection_radius;
            let dist_sq: f32 = (0..3).map(|i| (pos[i] - obstacle.center[i]).powi(2)).sum();
            dist_sq <= reach * reach
        })
    }
}
