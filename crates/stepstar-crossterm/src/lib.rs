//! Terminal front end for stepstar.
//!
//! [`Visualizer`] holds the grid, the search engine and what each cell
//! should look like; [`CrosstermDriver`] turns terminal input into
//! [`Msg`]s and paints the model; [`run`] ties the two together at a fixed
//! step cadence.

pub mod app;
pub mod driver;
pub mod model;

pub use app::{DEFAULT_STEP_DELAY, run};
pub use driver::CrosstermDriver;
pub use model::{CellKind, DEFAULT_WALL_DENSITY, Effect, Msg, Visualizer, scatter_walls};
