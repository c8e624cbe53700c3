//! The visualizer model: grid editing, search control and per-cell marks.
//!
//! Input arrives as [`Msg`]s and is applied by [`Visualizer::update`]; the
//! model never touches the terminal, so it can be driven headlessly.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use stepstar_core::{
    ClickEffect, Coord, Error, Grid, GridConfig, MAX_UI_SIZE, MIN_UI_SIZE, Result,
};
use stepstar_paths::{SearchEngine, SearchEvent, SearchState, StepOutcome};

/// Default share of cells turned into walls by [`Msg::RandomWalls`].
pub const DEFAULT_WALL_DENSITY: f64 = 0.25;

/// Input understood by the visualizer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Msg {
    /// Place start, then end, then toggle walls.
    Click(Coord),
    Start,
    TogglePause,
    /// Fresh empty grid of the same size.
    Reset,
    /// Grow or shrink the grid by the given amount.
    Resize(i32),
    RandomWalls,
    /// Advance the search by one step.
    Tick,
    Quit,
}

/// Side effect requested by [`Visualizer::update`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    End,
}

/// How a cell should be drawn.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CellKind {
    Empty,
    Wall,
    Start,
    End,
    Visited,
    Path,
}

impl CellKind {
    /// Single-character form used by [`Visualizer::render_text`].
    pub fn symbol(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Wall => '#',
            Self::Start => 'S',
            Self::End => 'E',
            Self::Visited => 'o',
            Self::Path => '*',
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Mark {
    None,
    Visited,
    Path,
}

/// Turn roughly `density` of the free cells into walls, leaving the start
/// and end cells open. Returns how many walls were placed.
///
/// `density` is clamped to `0.0..=1.0`; NaN places no walls.
pub fn scatter_walls<R: Rng>(grid: &mut Grid, density: f64, rng: &mut R) -> usize {
    let density = if density.is_nan() {
        0.0
    } else {
        density.clamp(0.0, 1.0)
    };
    let keep: Vec<Coord> = grid.start_coord().into_iter().chain(grid.end_coord()).collect();
    let cells: Vec<Coord> = grid.iter().map(|n| n.coord()).collect();
    let mut placed = 0;
    for c in cells {
        let wall = !keep.contains(&c) && rng.random_bool(density);
        if grid.set_wall(c, wall).is_ok() && wall {
            placed += 1;
        }
    }
    placed
}

/// Interactive A* visualizer state.
pub struct Visualizer {
    engine: SearchEngine,
    marks: Vec<Mark>,
    status: String,
    wall_density: f64,
    rng: StdRng,
}

impl Visualizer {
    /// An empty `size × size` grid.
    pub fn new(size: i32) -> Result<Self> {
        Self::from_config(&GridConfig::new(size))
    }

    /// Start from a saved configuration.
    pub fn from_config(cfg: &GridConfig) -> Result<Self> {
        let grid = cfg.build()?;
        let len = grid.len();
        Ok(Self {
            engine: SearchEngine::new(grid),
            marks: vec![Mark::None; len],
            status: String::from("Click to place start, then end, then walls"),
            wall_density: DEFAULT_WALL_DENSITY,
            rng: StdRng::from_os_rng(),
        })
    }

    /// Use a seeded generator for [`Msg::RandomWalls`].
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn with_wall_density(mut self, density: f64) -> Self {
        self.wall_density = density;
        self
    }

    #[inline]
    pub fn engine(&self) -> &SearchEngine {
        &self.engine
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        self.engine.grid()
    }

    #[inline]
    pub fn size(&self) -> i32 {
        self.grid().size()
    }

    /// One-line message for the user.
    #[inline]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Whether the driver should keep sending [`Msg::Tick`].
    #[inline]
    pub fn is_running(&self) -> bool {
        self.engine.state() == SearchState::Running
    }

    pub fn cell_kind(&self, c: Coord) -> CellKind {
        let grid = self.grid();
        let Some(id) = grid.id(c) else {
            return CellKind::Empty;
        };
        if grid.start() == Some(id) {
            CellKind::Start
        } else if grid.end() == Some(id) {
            CellKind::End
        } else if grid.node(id).is_wall() {
            CellKind::Wall
        } else {
            match self.marks[id.index()] {
                Mark::Path => CellKind::Path,
                Mark::Visited => CellKind::Visited,
                Mark::None => CellKind::Empty,
            }
        }
    }

    /// The grid as text, one row per line, using [`CellKind::symbol`].
    pub fn render_text(&self) -> String {
        let size = self.size();
        let mut out = String::with_capacity(((size + 1) * size) as usize);
        for row in 0..size {
            for col in 0..size {
                out.push(self.cell_kind(Coord::new(row, col)).symbol());
            }
            out.push('\n');
        }
        out
    }

    /// Apply one message.
    pub fn update(&mut self, msg: Msg) -> Option<Effect> {
        match msg {
            Msg::Click(c) => self.click(c),
            Msg::Start => self.start(),
            Msg::TogglePause => self.toggle_pause(),
            Msg::Reset => self.rebuild(self.size()),
            Msg::Resize(delta) => self.resize(self.size() + delta),
            Msg::RandomWalls => self.random_walls(),
            Msg::Tick => self.tick(),
            Msg::Quit => return Some(Effect::End),
        }
        None
    }

    /// Drop the finished session (if any) so the grid can be edited again.
    fn clear_search(&mut self) {
        if !self.engine.state().is_active() {
            self.engine.reset();
            self.marks.fill(Mark::None);
        }
    }

    fn click(&mut self, c: Coord) {
        if self.engine.state().is_active() {
            self.status = String::from("Reset to edit the grid");
            return;
        }
        self.clear_search();
        let result = self.engine.grid_mut().and_then(|g| g.click(c));
        match result {
            Ok(ClickEffect::PlacedStart) => self.status = format!("Start at {c}"),
            Ok(ClickEffect::PlacedEnd) => self.status = format!("End at {c}"),
            Ok(ClickEffect::Wall(_)) => {}
            Err(e) => log::debug!("click ignored: {e}"),
        }
    }

    fn start(&mut self) {
        if self.engine.state().is_active() {
            return;
        }
        self.clear_search();
        match self.engine.start() {
            Ok(()) => self.status = String::from("Running"),
            Err(Error::InvalidConfiguration(issue)) if issue.is_missing_marker() => {
                self.status = String::from("Please set start and end points");
            }
            Err(e) => self.status = e.to_string(),
        }
    }

    fn toggle_pause(&mut self) {
        self.engine.toggle_pause();
        match self.engine.state() {
            SearchState::Paused => self.status = String::from("Paused"),
            SearchState::Running => self.status = String::from("Running"),
            _ => {}
        }
    }

    fn resize(&mut self, size: i32) {
        if !(MIN_UI_SIZE..=MAX_UI_SIZE).contains(&size) {
            self.status = format!("Grid size must be between {MIN_UI_SIZE} and {MAX_UI_SIZE}");
            return;
        }
        self.rebuild(size);
    }

    fn rebuild(&mut self, size: i32) {
        match Grid::build(size) {
            Ok(grid) => {
                self.marks = vec![Mark::None; grid.len()];
                self.engine = SearchEngine::new(grid);
                self.status = format!("New {size}x{size} grid");
            }
            Err(e) => self.status = e.to_string(),
        }
    }

    fn random_walls(&mut self) {
        if self.engine.state().is_active() {
            self.status = String::from("Reset to edit the grid");
            return;
        }
        self.clear_search();
        let density = self.wall_density;
        if let Ok(grid) = self.engine.grid_mut() {
            let n = scatter_walls(grid, density, &mut self.rng);
            self.status = format!("Placed {n} walls");
        }
    }

    fn tick(&mut self) {
        let step = self.engine.step();
        for ev in &step.events {
            match ev {
                SearchEvent::Visited(v) => self.mark(v.coord, Mark::Visited),
                SearchEvent::PathFound(path) => {
                    for &c in path {
                        self.mark(c, Mark::Path);
                    }
                }
                SearchEvent::NoPathFound => {}
            }
        }
        match step.outcome {
            StepOutcome::Found => {
                let cost = self.engine.path_cost().unwrap_or_default();
                self.status = format!(
                    "Path found: cost {cost}, {} nodes expanded",
                    self.engine.expansions()
                );
            }
            StepOutcome::Exhausted => self.status = String::from("No path found!"),
            StepOutcome::Continue => {}
        }
    }

    fn mark(&mut self, c: Coord, mark: Mark) {
        if let Some(id) = self.engine.grid().id(c) {
            self.marks[id.index()] = mark;
        }
    }
}
