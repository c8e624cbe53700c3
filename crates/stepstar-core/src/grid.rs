//! The [`Grid`] type: a square board of [`Node`]s with wall flags and
//! optional start/end markers.
//!
//! Nodes live in one flat `Vec` addressed by [`NodeId`] (`row * size + col`).
//! The 4-directional neighbor topology is computed once and never changes;
//! wall flags are consulted lazily by the search, so toggling a wall never
//! invalidates the neighbor lists.

use crate::error::{Error, Result};
use crate::geom::Coord;
use crate::node::{Node, NodeId};

/// What a [`Grid::click`] did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClickEffect {
    PlacedStart,
    PlacedEnd,
    /// The wall flag was toggled; carries the new value.
    Wall(bool),
}

/// A fixed-size square grid owning all of its nodes.
#[derive(Clone, Debug)]
pub struct Grid {
    size: i32,
    nodes: Vec<Node>,
    neighbors: Vec<Vec<NodeId>>,
    start: Option<NodeId>,
    end: Option<NodeId>,
}

impl Grid {
    /// Allocate a `size × size` grid with no walls and no start/end.
    ///
    /// Neighbor lists are computed before returning.
    pub fn build(size: i32) -> Result<Self> {
        if size <= 0 {
            return Err(Error::InvalidSize(size));
        }
        let n = size as usize;
        let mut nodes = Vec::with_capacity(n * n);
        for row in 0..size {
            for col in 0..size {
                nodes.push(Node::new(Coord::new(row, col)));
            }
        }
        let mut grid = Self {
            size,
            nodes,
            neighbors: Vec::new(),
            start: None,
            end: None,
        };
        grid.compute_neighbors();
        log::debug!("built {size}x{size} grid");
        Ok(grid)
    }

    /// Recompute every cell's in-bounds orthogonal neighbors
    /// (up, down, left, right). Walls are not filtered here.
    pub fn compute_neighbors(&mut self) {
        let mut all = Vec::with_capacity(self.nodes.len());
        for node in &self.nodes {
            let ids: Vec<NodeId> = node
                .coord()
                .neighbors_4()
                .into_iter()
                .filter_map(|c| self.id(c))
                .collect();
            all.push(ids);
        }
        self.neighbors = all;
    }

    /// Side length.
    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Number of cells (`size * size`).
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Bounds predicate: `0 <= row < size && 0 <= col < size`.
    #[inline]
    pub fn is_valid(&self, row: i32, col: i32) -> bool {
        row >= 0 && row < self.size && col >= 0 && col < self.size
    }

    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        self.is_valid(c.row, c.col)
    }

    /// Flat index of `c`, or `None` if out of bounds.
    #[inline]
    pub fn id(&self, c: Coord) -> Option<NodeId> {
        if !self.contains(c) {
            return None;
        }
        Some(NodeId((c.row * self.size + c.col) as usize))
    }

    fn checked_id(&self, c: Coord) -> Result<NodeId> {
        self.id(c).ok_or(Error::OutOfBounds(c))
    }

    /// Coordinate of a node id issued by this grid.
    #[inline]
    pub fn coord(&self, id: NodeId) -> Coord {
        self.nodes[id.0].coord()
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    #[inline]
    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    /// Node at `c`, or `None` if out of bounds.
    pub fn node_at(&self, c: Coord) -> Option<&Node> {
        self.id(c).map(|id| self.node(id))
    }

    /// In-bounds orthogonal neighbors of `id`, walls included.
    #[inline]
    pub fn neighbors(&self, id: NodeId) -> &[NodeId] {
        &self.neighbors[id.0]
    }

    /// Row-major iterator over all nodes.
    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    // -----------------------------------------------------------------------
    // Start / end / walls
    // -----------------------------------------------------------------------

    #[inline]
    pub fn start(&self) -> Option<NodeId> {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Option<NodeId> {
        self.end
    }

    pub fn start_coord(&self) -> Option<Coord> {
        self.start.map(|id| self.coord(id))
    }

    pub fn end_coord(&self) -> Option<Coord> {
        self.end.map(|id| self.coord(id))
    }

    pub fn set_start(&mut self, c: Coord) -> Result<()> {
        self.start = Some(self.checked_id(c)?);
        Ok(())
    }

    pub fn set_end(&mut self, c: Coord) -> Result<()> {
        self.end = Some(self.checked_id(c)?);
        Ok(())
    }

    pub fn clear_start(&mut self) {
        self.start = None;
    }

    pub fn clear_end(&mut self) {
        self.end = None;
    }

    pub fn is_wall(&self, c: Coord) -> bool {
        self.node_at(c).is_some_and(Node::is_wall)
    }

    pub fn set_wall(&mut self, c: Coord, wall: bool) -> Result<()> {
        let id = self.checked_id(c)?;
        self.nodes[id.0].wall = wall;
        Ok(())
    }

    /// Flip the wall flag at `c`, returning the new value.
    pub fn toggle_wall(&mut self, c: Coord) -> Result<bool> {
        let id = self.checked_id(c)?;
        let node = &mut self.nodes[id.0];
        node.wall = !node.wall;
        Ok(node.wall)
    }

    /// Apply the interactive placement rule: the first click places the
    /// start, the second places the end, every later click toggles a wall.
    pub fn click(&mut self, c: Coord) -> Result<ClickEffect> {
        if self.start.is_none() {
            self.set_start(c)?;
            Ok(ClickEffect::PlacedStart)
        } else if self.end.is_none() {
            self.set_end(c)?;
            Ok(ClickEffect::PlacedEnd)
        } else {
            self.toggle_wall(c).map(ClickEffect::Wall)
        }
    }

    /// Coordinates of all wall cells, row-major.
    pub fn walls(&self) -> impl Iterator<Item = Coord> + '_ {
        self.nodes.iter().filter(|n| n.is_wall()).map(Node::coord)
    }

    /// Reset `g`, `h`, `f` and parent links on every node.
    pub fn clear_search_state(&mut self) {
        for node in &mut self.nodes {
            node.clear_search_state();
        }
    }

    /// One character per cell: `S` start, `E` end, `#` wall, `.` floor.
    pub fn render_ascii(&self) -> String {
        let mut out = String::with_capacity(self.nodes.len() + self.size as usize);
        for (i, node) in self.nodes.iter().enumerate() {
            let id = NodeId(i);
            let ch = if Some(id) == self.start {
                'S'
            } else if Some(id) == self.end {
                'E'
            } else if node.is_wall() {
                '#'
            } else {
                '.'
            };
            out.push(ch);
            if node.col() == self.size - 1 {
                out.push('\n');
            }
        }
        out
    }
}
