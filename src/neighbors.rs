//! Neighbor expansion and the distance metric used for step costs and heuristics.

use crate::{path::Cost, Point};

/// The metric used to measure the distance between two Points on the Grid.
///
/// The same metric is used as the cost of a single step and as the heuristic of A*.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum DistanceType {
    /// `|dx| + |dy|`. Diagonal steps cost 2, axis steps cost 1.
    #[default]
    Manhattan,
    /// `round(10 * sqrt(dx² + dy²))`, so costs are measured in tenths of a cell:
    /// axis steps cost 10, diagonal steps cost 14.
    Euclidean,
    /// `max(|dx|, |dy|)`. Every step costs 1.
    Chebyshev,
}

impl DistanceType {
    /// The distance between `a` and `b` under this metric
    pub fn distance(self, a: Point, b: Point) -> Cost {
        let dx = a.0.abs_diff(b.0);
        let dy = a.1.abs_diff(b.1);
        match self {
            DistanceType::Manhattan => dx + dy,
            DistanceType::Euclidean => (((dx * dx + dy * dy) as f64).sqrt() * 10.0).round() as Cost,
            DistanceType::Chebyshev => dx.max(dy),
        }
    }
}

/// Defines how a path can move along the Grid.
///
/// Implementors decide which Points are adjacent, and how far apart two Points are.
pub trait Neighborhood: Clone + std::fmt::Debug {
    /// Provides all the Neighbors of a Point, in a fixed order.
    ///
    /// The order matters: searches break ties between equally cheap Points by the order in
    /// which they were discovered.
    fn get_all_neighbors(&self, point: Point, target: &mut Vec<Point>);

    /// Gives the distance between two Points, used both as the cost of a step between two
    /// adjacent Points and as the estimate of the remaining cost to a goal.
    fn heuristic(&self, point: Point, goal: Point) -> Cost;
}

/// A [Neighborhood] that connects every Point to all 8 Points around it (including diagonals),
/// clipped to the bounds of the Grid.
///
/// Neighbors are produced column by column: `dx` from -1 to 1 in the outer loop,
/// `dy` from -1 to 1 in the inner loop.
#[derive(Clone, Copy, Debug)]
pub struct MooreNeighborhood {
    width: usize,
    height: usize,
    distance_type: DistanceType,
}

impl MooreNeighborhood {
    /// Creates a new MooreNeighborhood for a Grid of `width` x `height`
    pub fn new(width: usize, height: usize, distance_type: DistanceType) -> MooreNeighborhood {
        MooreNeighborhood {
            width,
            height,
            distance_type,
        }
    }

    /// The metric used for step costs and the heuristic
    pub fn distance_type(&self) -> DistanceType {
        self.distance_type
    }
}

impl Neighborhood for MooreNeighborhood {
    fn get_all_neighbors(&self, point: Point, target: &mut Vec<Point>) {
        let (x, y) = point;
        for dx in -1isize..=1 {
            for dy in -1isize..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let (Some(nx), Some(ny)) = (x.checked_add_signed(dx), y.checked_add_signed(dy))
                else {
                    continue;
                };
                if nx < self.width && ny < self.height {
                    target.push((nx, ny));
                }
            }
        }
    }

    fn heuristic(&self, point: Point, goal: Point) -> Cost {
        self.distance_type.distance(point, goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_are_clipped() {
        let neighborhood = MooreNeighborhood::new(5, 5, DistanceType::Manhattan);
        let mut target = vec![];

        neighborhood.get_all_neighbors((0, 0), &mut target);
        assert_eq!(target, vec![(0, 1), (1, 0), (1, 1)]);

        target.clear();
        neighborhood.get_all_neighbors((4, 2), &mut target);
        assert_eq!(target, vec![(3, 1), (3, 2), (3, 3), (4, 1), (4, 3)]);
    }

    #[test]
    fn neighbor_order() {
        let neighborhood = MooreNeighborhood::new(5, 5, DistanceType::Manhattan);
        let mut target = vec![];
        neighborhood.get_all_neighbors((2, 2), &mut target);
        assert_eq!(
            target,
            vec![
                (1, 1),
                (1, 2),
                (1, 3),
                (2, 1),
                (2, 3),
                (3, 1),
                (3, 2),
                (3, 3)
            ]
        );
    }

    #[test]
    fn distances() {
        use DistanceType::*;
        assert_eq!(Manhattan.distance((1, 1), (4, 5)), 7);
        assert_eq!(Manhattan.distance((4, 5), (1, 1)), 7);
        assert_eq!(Manhattan.distance((2, 2), (3, 3)), 2);
        assert_eq!(Euclidean.distance((0, 0), (1, 0)), 10);
        assert_eq!(Euclidean.distance((0, 0), (1, 1)), 14);
        assert_eq!(Euclidean.distance((1, 1), (4, 5)), 50);
        assert_eq!(Chebyshev.distance((1, 1), (4, 5)), 4);
        assert_eq!(Chebyshev.distance((3, 3), (3, 3)), 0);
    }
}
