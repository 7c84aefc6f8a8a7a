use super::Cost;
use crate::{neighbors::Neighborhood, Point, WorldPos};

/// A route found by a search, from just after the start up to and including the goal.
///
/// The start itself is never part of a Path, so a Path from a Point to itself is empty.
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    cells: Vec<Point>,
    waypoints: Vec<WorldPos>,
    cost: Cost,
}

impl Path {
    /// Creates a new Path out of matching cells and world positions
    #[track_caller]
    pub fn new(cells: Vec<Point>, waypoints: Vec<WorldPos>, cost: Cost) -> Path {
        assert_eq!(cells.len(), waypoints.len());
        Path {
            cells,
            waypoints,
            cost,
        }
    }

    /// The total cost of the Path, as accumulated by the search
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// Number of steps
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// `true` for the Path from a Point to itself
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Grid coordinates of every step
    pub fn cells(&self) -> &[Point] {
        &self.cells
    }

    /// World positions of every step, to draw the Path through
    pub fn waypoints(&self) -> &[WorldPos] {
        &self.waypoints
    }

    /// Consumes the Path, keeping only its world positions
    pub fn into_waypoints(self) -> Vec<WorldPos> {
        self.waypoints
    }

    /// The last cell, which is the goal of the search
    pub fn last_cell(&self) -> Option<Point> {
        self.cells.last().copied()
    }

    /// Sums the distances between consecutive cells, beginning at `start`.
    ///
    /// For a Path found with the same `neighborhood` this equals [`cost`](Path::cost).
    pub fn step_cost<N: Neighborhood>(&self, neighborhood: &N, start: Point) -> Cost {
        std::iter::once(start)
            .chain(self.cells.iter().copied())
            .zip(self.cells.iter().copied())
            .map(|(a, b)| neighborhood.heuristic(a, b))
            .sum()
    }
}

use std::ops::Index;
impl Index<usize> for Path {
    type Output = WorldPos;
    #[track_caller]
    fn index(&self, index: usize) -> &WorldPos {
        &self.waypoints[index]
    }
}
