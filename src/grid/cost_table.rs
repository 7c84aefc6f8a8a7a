use crate::{path::Cost, Point, PointMap};

/// The search state of a single Point
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CostEntry {
    /// Cost of the best known path from the start
    pub g: Cost,
    /// Estimated cost from here to the goal. Stays 0 unless a heuristic search touched the Point.
    pub h: Cost,
    /// The Point this one was reached from, or `None` for a start
    pub parent: Option<Point>,
}

impl CostEntry {
    /// `g + h`, the value searches order their frontier by
    pub fn f(&self) -> Cost {
        self.g.saturating_add(self.h)
    }
}

/// A read-only view of the costs of a Point, for display
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeCosts {
    /// Cost from the start
    pub g: Cost,
    /// Estimated cost to the goal
    pub h: Cost,
    /// Always `g + h`
    pub f: Cost,
}

/// Costs and parent links of every Point a search has touched, keyed by Point.
///
/// Points that are missing from the table read as unreached: `g` is [`Cost::MAX`], `h` is 0
/// and there is no parent. A search never forgets a Point, so after a run the table describes
/// the tree of shortest known paths out of the start.
///
/// Running several searches on the same table lets the later ones see the leftovers of the
/// earlier ones. Only the start of each run is reset.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CostTable {
    entries: PointMap<CostEntry>,
}

const UNREACHED: CostEntry = CostEntry {
    g: Cost::MAX,
    h: 0,
    parent: None,
};

impl CostTable {
    /// Creates an empty table
    pub fn new() -> CostTable {
        CostTable::default()
    }

    /// Creates an empty table with room for `capacity` Points
    pub fn with_capacity(capacity: usize) -> CostTable {
        CostTable {
            entries: PointMap::with_capacity(capacity),
        }
    }

    /// The entry of `pos`, if any search has touched it
    pub fn get(&self, pos: Point) -> Option<&CostEntry> {
        self.entries.get(&pos)
    }

    /// Cost of the best known path from the start to `pos`, or [`Cost::MAX`] if unreached
    pub fn g_cost(&self, pos: Point) -> Cost {
        self.entry(pos).g
    }

    /// The heuristic last assigned to `pos`, or 0
    pub fn h_cost(&self, pos: Point) -> Cost {
        self.entry(pos).h
    }

    /// `g_cost(pos) + h_cost(pos)`, saturating
    pub fn f_cost(&self, pos: Point) -> Cost {
        self.entry(pos).f()
    }

    /// The Point `pos` was reached from
    pub fn parent(&self, pos: Point) -> Option<Point> {
        self.entry(pos).parent
    }

    /// The `g`, `h` and `f` costs of `pos`, if any search has touched it
    pub fn costs_at(&self, pos: Point) -> Option<NodeCosts> {
        self.entries.get(&pos).map(|entry| NodeCosts {
            g: entry.g,
            h: entry.h,
            f: entry.f(),
        })
    }

    /// A three line label of the costs of `pos`, as displayed above a Node.
    ///
    /// Untouched Points show all zeroes.
    ///
    /// ## Examples
    /// ```
    /// use terrain_pathfinding::prelude::*;
    ///
    /// let costs = CostTable::new();
    /// assert_eq!(costs.label_at((3, 4)), "g: 0\nh: 0\nf: 0");
    /// ```
    pub fn label_at(&self, pos: Point) -> String {
        let NodeCosts { g, h, f } = self.costs_at(pos).unwrap_or(NodeCosts { g: 0, h: 0, f: 0 });
        format!("g: {}\nh: {}\nf: {}", g, h, f)
    }

    /// The number of Points that have been touched
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if no Point has been touched yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates all touched Points and their entries, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (Point, &CostEntry)> + '_ {
        self.entries.iter().map(|(pos, entry)| (*pos, entry))
    }

    /// Resets `start` to cost 0 with the heuristic `h` (if given) and no parent.
    ///
    /// A start without a heuristic keeps whatever `h` it had.
    pub(crate) fn seed_start(&mut self, start: Point, h: Option<Cost>) {
        let entry = self.entries.entry(start).or_insert(UNREACHED);
        entry.g = 0;
        entry.parent = None;
        if let Some(h) = h {
            entry.h = h;
        }
    }

    /// Records that `pos` can be reached with cost `g` from `parent`.
    ///
    /// `h` replaces the heuristic when given, otherwise the old value stays.
    pub(crate) fn relax(&mut self, pos: Point, g: Cost, h: Option<Cost>, parent: Point) {
        let entry = self.entries.entry(pos).or_insert(UNREACHED);
        entry.g = g;
        entry.parent = Some(parent);
        if let Some(h) = h {
            entry.h = h;
        }
    }

    fn entry(&self, pos: Point) -> &CostEntry {
        self.entries.get(&pos).unwrap_or(&UNREACHED)
    }
}

use std::ops::Index;
impl Index<Point> for CostTable {
    type Output = CostEntry;
    #[track_caller]
    fn index(&self, pos: Point) -> &CostEntry {
        &self.entries[&pos]
    }
}

#[test]
fn seed_and_relax() {
    let mut costs = CostTable::new();
    assert_eq!(costs.g_cost((1, 1)), Cost::MAX);
    assert_eq!(costs.f_cost((1, 1)), Cost::MAX);
    assert_eq!(costs.costs_at((1, 1)), None);

    costs.seed_start((0, 0), Some(7));
    costs.relax((1, 1), 2, Some(5), (0, 0));
    assert_eq!(costs.costs_at((0, 0)), Some(NodeCosts { g: 0, h: 7, f: 7 }));
    assert_eq!(costs.costs_at((1, 1)), Some(NodeCosts { g: 2, h: 5, f: 7 }));
    assert_eq!(costs.parent((1, 1)), Some((0, 0)));

    // a relaxation without heuristic keeps the old one
    costs.relax((1, 1), 1, None, (1, 0));
    assert_eq!(costs[(1, 1)].h, 5);
    assert_eq!(costs.label_at((1, 1)), "g: 1\nh: 5\nf: 6");

    // reseeding resets the cost and parent, but not the heuristic
    costs.seed_start((1, 1), None);
    assert_eq!(
        costs[(1, 1)],
        CostEntry {
            g: 0,
            h: 5,
            parent: None
        }
    );
    assert_eq!(costs.len(), 2);
}
