//! The incremental A* engine.
//!
//! [`SearchEngine`] owns a [`Grid`] and advances the search one expansion
//! per [`step`](SearchEngine::step) call. Nothing in here sleeps or loops
//! on its own; the caller decides when to step, pause, resume or reset.

use stepstar_core::{ConfigIssue, Coord, Error, Grid, NodeId, Result};

use crate::distance::manhattan;
use crate::events::{SearchEvent, SearchState, StepOutcome, StepResult, Visited};
use crate::frontier::Frontier;
use crate::path;

/// Cost of moving to an orthogonal neighbor.
const STEP_COST: i32 = 1;

/// Both markers must be set, distinct, and open cells.
fn check_endpoints(
    grid: &Grid,
    start: Option<NodeId>,
    end: Option<NodeId>,
) -> Result<(NodeId, NodeId)> {
    let start = start.ok_or(Error::InvalidConfiguration(ConfigIssue::MissingStart))?;
    let end = end.ok_or(Error::InvalidConfiguration(ConfigIssue::MissingEnd))?;
    if start == end {
        return Err(Error::InvalidConfiguration(ConfigIssue::SameCell));
    }
    if grid.node(start).is_wall() {
        return Err(Error::InvalidConfiguration(ConfigIssue::WallStart));
    }
    if grid.node(end).is_wall() {
        return Err(Error::InvalidConfiguration(ConfigIssue::WallEnd));
    }
    Ok((start, end))
}

/// A steppable A* session bound to one grid.
///
/// State machine: `Idle → Running ⇄ Paused → Found | Exhausted`.
/// Open-set ties on `f` are broken first-in-first-out, so identical
/// inputs always replay the same expansion order.
pub struct SearchEngine {
    grid: Grid,
    frontier: Frontier,
    state: SearchState,
    start: Option<NodeId>,
    end: Option<NodeId>,
    expansions: usize,
    // scratch buffer for neighbor lists
    nbuf: Vec<NodeId>,
}

impl SearchEngine {
    /// Take ownership of `grid`. The engine starts `Idle`.
    pub fn new(grid: Grid) -> Self {
        let len = grid.len();
        Self {
            grid,
            frontier: Frontier::new(len),
            state: SearchState::Idle,
            start: None,
            end: None,
            expansions: 0,
            nbuf: Vec::with_capacity(4),
        }
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable access for editing walls and markers.
    ///
    /// Refused while a session is running or paused.
    pub fn grid_mut(&mut self) -> Result<&mut Grid> {
        if self.state.is_active() {
            return Err(Error::SessionAlreadyActive);
        }
        Ok(&mut self.grid)
    }

    /// Give the grid back, ending any session.
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    #[inline]
    pub fn state(&self) -> SearchState {
        self.state
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.state == SearchState::Paused
    }

    /// Number of nodes expanded (moved to the closed set) this session.
    #[inline]
    pub fn expansions(&self) -> usize {
        self.expansions
    }

    #[inline]
    pub fn open_len(&self) -> usize {
        self.frontier.open_len()
    }

    #[inline]
    pub fn closed_len(&self) -> usize {
        self.frontier.closed_len()
    }

    pub fn is_open(&self, c: Coord) -> bool {
        self.grid.id(c).is_some_and(|id| self.frontier.is_open(id))
    }

    pub fn is_closed(&self, c: Coord) -> bool {
        self.grid.id(c).is_some_and(|id| self.frontier.is_closed(id))
    }

    /// Start and end cells of the current session, if one was started.
    pub fn endpoints(&self) -> Option<(Coord, Coord)> {
        Some((self.grid.coord(self.start?), self.grid.coord(self.end?)))
    }

    // -----------------------------------------------------------------------
    // Session control
    // -----------------------------------------------------------------------

    /// Place start and end on the grid, then begin a new session.
    ///
    /// On error the grid's existing markers are left untouched.
    pub fn initialize(&mut self, start: Coord, end: Coord) -> Result<()> {
        if self.state.is_active() {
            return Err(Error::SessionAlreadyActive);
        }
        let s = self.grid.id(start).ok_or(Error::OutOfBounds(start))?;
        let e = self.grid.id(end).ok_or(Error::OutOfBounds(end))?;
        check_endpoints(&self.grid, Some(s), Some(e))?;
        self.grid.set_start(start)?;
        self.grid.set_end(end)?;
        self.start()
    }

    /// Begin a new session from the grid's own start and end markers.
    ///
    /// Any previous session's open/closed sets and node scores are dropped.
    pub fn start(&mut self) -> Result<()> {
        if self.state.is_active() {
            return Err(Error::SessionAlreadyActive);
        }
        let (start, end) = check_endpoints(&self.grid, self.grid.start(), self.grid.end())?;

        self.grid.clear_search_state();
        self.frontier.reset(self.grid.len());

        let (sc, ec) = (self.grid.coord(start), self.grid.coord(end));
        let node = self.grid.node_mut(start);
        node.relax(0, manhattan(sc, ec), None);
        let f = node.f();
        self.frontier.push(start, f);

        self.start = Some(start);
        self.end = Some(end);
        self.expansions = 0;
        self.state = SearchState::Running;
        log::debug!("search started: {sc} -> {ec}, h = {f}");
        Ok(())
    }

    /// Suspend stepping. Only meaningful while running.
    pub fn pause(&mut self) {
        if self.state == SearchState::Running {
            self.state = SearchState::Paused;
            log::debug!("search paused after {} expansions", self.expansions);
        }
    }

    /// Continue exactly where [`pause`](Self::pause) left off.
    pub fn resume(&mut self) {
        if self.state == SearchState::Paused {
            self.state = SearchState::Running;
            log::debug!("search resumed");
        }
    }

    pub fn toggle_pause(&mut self) {
        match self.state {
            SearchState::Running => self.pause(),
            SearchState::Paused => self.resume(),
            _ => {}
        }
    }

    /// Drop the session and return to `Idle`. Walls and markers stay.
    pub fn reset(&mut self) {
        self.grid.clear_search_state();
        self.frontier.reset(self.grid.len());
        self.start = None;
        self.end = None;
        self.expansions = 0;
        if self.state != SearchState::Idle {
            log::debug!("search reset from {:?}", self.state);
        }
        self.state = SearchState::Idle;
    }

    /// Alias of [`reset`](Self::reset).
    pub fn cancel(&mut self) {
        self.reset();
    }

    // -----------------------------------------------------------------------
    // Stepping
    // -----------------------------------------------------------------------

    /// Expand at most one node.
    ///
    /// While paused or idle this returns `Continue` and touches nothing.
    /// After a terminal outcome it keeps returning that outcome without
    /// events.
    pub fn step(&mut self) -> StepResult {
        match self.state {
            SearchState::Idle | SearchState::Paused => {
                return StepResult::noop(StepOutcome::Continue);
            }
            SearchState::Found => return StepResult::noop(StepOutcome::Found),
            SearchState::Exhausted => return StepResult::noop(StepOutcome::Exhausted),
            SearchState::Running => {}
        }
        let Some(end) = self.end else {
            return StepResult::noop(StepOutcome::Continue);
        };

        let Some(current) = self.frontier.peek_min() else {
            self.state = SearchState::Exhausted;
            log::debug!("no path: open set exhausted after {} expansions", self.expansions);
            return StepResult {
                outcome: StepOutcome::Exhausted,
                current: None,
                events: vec![SearchEvent::NoPathFound],
            };
        };
        let current_coord = self.grid.coord(current);

        if current == end {
            self.state = SearchState::Found;
            let events = match path::reconstruct(&self.grid, end) {
                Ok(p) => {
                    log::debug!(
                        "path found: {} cells, cost {}, {} expansions",
                        p.len(),
                        self.grid.node(end).g(),
                        self.expansions
                    );
                    vec![SearchEvent::PathFound(p)]
                }
                Err(e) => {
                    log::warn!("goal reached but its parent chain is broken: {e}");
                    Vec::new()
                }
            };
            return StepResult {
                outcome: StepOutcome::Found,
                current: Some(current_coord),
                events,
            };
        }

        self.frontier.close_min();
        self.expansions += 1;
        log::trace!("expand {current_coord}");

        let end_coord = self.grid.coord(end);
        let current_g = self.grid.node(current).g();
        let mut nbuf = std::mem::take(&mut self.nbuf);
        nbuf.clear();
        nbuf.extend_from_slice(self.grid.neighbors(current));

        let mut events = Vec::with_capacity(nbuf.len());
        for &ni in nbuf.iter() {
            if self.frontier.is_closed(ni) || self.grid.node(ni).is_wall() {
                continue;
            }
            let tentative_g = current_g + STEP_COST;
            // Equal cost is not an improvement.
            if self.frontier.is_open(ni) && tentative_g >= self.grid.node(ni).g() {
                continue;
            }

            let coord = self.grid.coord(ni);
            let h = manhattan(coord, end_coord);
            let node = self.grid.node_mut(ni);
            node.relax(tentative_g, h, Some(current));
            let f = node.f();
            self.frontier.push(ni, f);
            events.push(SearchEvent::Visited(Visited {
                coord,
                g: tentative_g,
                h,
                f,
            }));
        }
        self.nbuf = nbuf;

        StepResult {
            outcome: StepOutcome::Continue,
            current: Some(current_coord),
            events,
        }
    }

    /// Step until the session reaches a terminal outcome.
    ///
    /// Returns `Continue` immediately when idle or paused.
    pub fn run_to_end(&mut self) -> StepOutcome {
        loop {
            if self.state != SearchState::Running {
                return match self.state {
                    SearchState::Found => StepOutcome::Found,
                    SearchState::Exhausted => StepOutcome::Exhausted,
                    _ => StepOutcome::Continue,
                };
            }
            let r = self.step();
            if r.is_terminal() {
                return r.outcome;
            }
        }
    }

    // -----------------------------------------------------------------------
    // Results
    // -----------------------------------------------------------------------

    /// Start-to-end cells of the found path.
    ///
    /// Fails with [`Error::NoPathState`] unless the session is `Found`.
    pub fn reconstruct_path(&self) -> Result<Vec<Coord>> {
        match (self.state, self.end) {
            (SearchState::Found, Some(end)) => path::reconstruct(&self.grid, end),
            _ => Err(Error::NoPathState),
        }
    }

    /// Cost of the found path (`g` of the end node).
    pub fn path_cost(&self) -> Option<i32> {
        match (self.state, self.end) {
            (SearchState::Found, Some(end)) => Some(self.grid.node(end).g()),
            _ => None,
        }
    }
}
