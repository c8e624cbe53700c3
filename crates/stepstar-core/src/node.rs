//! Per-cell search metadata.

use crate::geom::Coord;

/// Sentinel cost meaning "not reached yet".
pub const UNREACHABLE: i32 = i32::MAX;

/// Stable index of a node inside its [`Grid`](crate::Grid): `row * size + col`.
///
/// Parent links and neighbor lists are stored as `NodeId`s rather than
/// references, so the grid stays the only owner of node storage.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A cell's identity plus its A* bookkeeping.
///
/// `g`, `h` and `f` are only meaningful once the node has been put in the
/// open set; until then `g` and `f` are [`UNREACHABLE`]. Whenever a node is
/// (re)scored through [`relax`](Node::relax) the invariant `f == g + h` holds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    coord: Coord,
    g: i32,
    h: i32,
    f: i32,
    parent: Option<NodeId>,
    pub(crate) wall: bool,
}

impl Node {
    pub(crate) fn new(coord: Coord) -> Self {
        Self {
            coord,
            g: UNREACHABLE,
            h: 0,
            f: UNREACHABLE,
            parent: None,
            wall: false,
        }
    }

    #[inline]
    pub fn coord(&self) -> Coord {
        self.coord
    }

    #[inline]
    pub fn row(&self) -> i32 {
        self.coord.row
    }

    #[inline]
    pub fn col(&self) -> i32 {
        self.coord.col
    }

    /// Best known cost from the start.
    #[inline]
    pub fn g(&self) -> i32 {
        self.g
    }

    /// Heuristic estimate to the goal.
    #[inline]
    pub fn h(&self) -> i32 {
        self.h
    }

    /// `g + h`, the expansion priority.
    #[inline]
    pub fn f(&self) -> i32 {
        self.f
    }

    /// Predecessor on the best known path, if any.
    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[inline]
    pub fn is_wall(&self) -> bool {
        self.wall
    }

    /// Record a new best path to this node.
    pub fn relax(&mut self, g: i32, h: i32, parent: Option<NodeId>) {
        self.g = g;
        self.h = h;
        self.f = g + h;
        self.parent = parent;
    }

    /// Forget any search state, keeping identity and wall flag.
    pub fn clear_search_state(&mut self) {
        self.g = UNREACHABLE;
        self.h = 0;
        self.f = UNREACHABLE;
        self.parent = None;
    }
}
