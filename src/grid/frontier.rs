//! The open set of a search: Points that have been discovered but not settled yet.

use crate::{path::Cost, Point, PointMap, PointSet};

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Storage for the open set of a search.
///
/// Every implementation must pop the Point with the lowest `f` cost, and among equally cheap
/// Points the one that was pushed first. Updating a Point keeps its place in that order.
pub trait Frontier {
    /// Adds a Point that is not in the Frontier yet, with its current `f` cost
    fn push(&mut self, pos: Point, f: Cost);

    /// Tells the Frontier that the `f` cost of a Point it contains has changed
    fn update(&mut self, pos: Point, f: Cost);

    /// Whether `pos` is currently in the Frontier
    fn contains(&self, pos: Point) -> bool;

    /// Removes and returns the cheapest Point. `f_cost` reads the current `f` of a Point.
    fn pop_min(&mut self, f_cost: impl Fn(Point) -> Cost) -> Option<Point>;

    /// Number of Points in the Frontier
    fn len(&self) -> usize;

    /// `true` if the Frontier holds no Points
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A plain list in insertion order, scanned linearly for the cheapest Point.
///
/// Fast enough for small Grids, and the reference for the tie-breaking rule.
#[derive(Clone, Debug, Default)]
pub struct ListFrontier {
    list: Vec<Point>,
    members: PointSet,
}

impl ListFrontier {
    #[allow(missing_docs)]
    pub fn new() -> ListFrontier {
        ListFrontier::default()
    }
}

impl Frontier for ListFrontier {
    fn push(&mut self, pos: Point, _f: Cost) {
        self.list.push(pos);
        self.members.insert(pos);
    }

    fn update(&mut self, _pos: Point, _f: Cost) {
        // costs are read during the scan
    }

    fn contains(&self, pos: Point) -> bool {
        self.members.contains(&pos)
    }

    fn pop_min(&mut self, f_cost: impl Fn(Point) -> Cost) -> Option<Point> {
        let first = *self.list.first()?;
        let mut best = (0, f_cost(first));
        for (index, pos) in self.list.iter().enumerate().skip(1) {
            let f = f_cost(*pos);
            // strictly less, so the earliest of equal Points wins
            if f < best.1 {
                best = (index, f);
            }
        }
        let pos = self.list.remove(best.0);
        self.members.remove(&pos);
        Some(pos)
    }

    fn len(&self) -> usize {
        self.list.len()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Element {
    pos: Point,
    f: Cost,
    seq: u64,
}

impl Ord for Element {
    fn cmp(&self, other: &Self) -> Ordering {
        // reversed, so that BinaryHeap pops the lowest (f, seq) first
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}
impl PartialOrd for Element {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A binary heap ordered by `(f, insertion sequence)`.
///
/// Updates push a second entry under the original sequence number; outdated entries are
/// skipped when they surface.
#[derive(Clone, Debug, Default)]
pub struct HeapFrontier {
    heap: BinaryHeap<Element>,
    members: PointMap<u64>,
    next_seq: u64,
}

impl HeapFrontier {
    #[allow(missing_docs)]
    pub fn new() -> HeapFrontier {
        HeapFrontier::default()
    }

    /// Creates a HeapFrontier with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> HeapFrontier {
        HeapFrontier {
            heap: BinaryHeap::with_capacity(capacity),
            members: PointMap::with_capacity(capacity),
            next_seq: 0,
        }
    }
}

impl Frontier for HeapFrontier {
    fn push(&mut self, pos: Point, f: Cost) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.members.insert(pos, seq);
        self.heap.push(Element { pos, f, seq });
    }

    fn update(&mut self, pos: Point, f: Cost) {
        if let Some(&seq) = self.members.get(&pos) {
            self.heap.push(Element { pos, f, seq });
        }
    }

    fn contains(&self, pos: Point) -> bool {
        self.members.contains_key(&pos)
    }

    fn pop_min(&mut self, f_cost: impl Fn(Point) -> Cost) -> Option<Point> {
        while let Some(Element { pos, f, seq }) = self.heap.pop() {
            if self.members.get(&pos) != Some(&seq) || f != f_cost(pos) {
                continue;
            }
            self.members.remove(&pos);
            return Some(pos);
        }
        None
    }

    fn len(&self) -> usize {
        self.members.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(frontier: &mut impl Frontier, costs: &PointMap<Cost>) -> Vec<Point> {
        let mut ret = vec![];
        while let Some(pos) = frontier.pop_min(|p| costs[&p]) {
            ret.push(pos);
        }
        ret
    }

    fn tie_breaking(mut frontier: impl Frontier) {
        let mut costs = PointMap::default();
        for (i, (pos, f)) in [((0, 0), 5), ((1, 0), 3), ((2, 0), 5), ((3, 0), 3), ((4, 0), 9)]
            .into_iter()
            .enumerate()
        {
            costs.insert(pos, f);
            frontier.push(pos, f);
            assert_eq!(frontier.len(), i + 1);
        }
        assert!(frontier.contains((2, 0)));

        // (4, 0) becomes as cheap as the cheapest, but was pushed last
        costs.insert((4, 0), 3);
        frontier.update((4, 0), 3);
        // (2, 0) becomes cheaper than (0, 0), which stays ahead of it otherwise
        costs.insert((2, 0), 4);
        frontier.update((2, 0), 4);

        assert_eq!(
            drain(&mut frontier, &costs),
            vec![(1, 0), (3, 0), (4, 0), (2, 0), (0, 0)]
        );
        assert!(frontier.is_empty());
        assert!(!frontier.contains((2, 0)));
    }

    #[test]
    fn list_tie_breaking() {
        tie_breaking(ListFrontier::new());
    }

    #[test]
    fn heap_tie_breaking() {
        tie_breaking(HeapFrontier::new());
    }

    #[test]
    fn heap_repush() {
        let mut frontier = HeapFrontier::with_capacity(4);
        let mut costs = PointMap::default();
        costs.insert((0, 0), 1);
        frontier.push((0, 0), 1);
        assert_eq!(frontier.pop_min(|p| costs[&p]), Some((0, 0)));

        // a Point that left the Frontier and comes back is ordered as a new one
        costs.insert((1, 1), 1);
        frontier.push((1, 1), 1);
        frontier.push((0, 0), 1);
        assert_eq!(drain(&mut frontier, &costs), vec![(1, 1), (0, 0)]);
    }
}
