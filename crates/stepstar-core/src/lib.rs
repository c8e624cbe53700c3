//! **stepstar-core** — grid and node model for an incremental A* search.
//!
//! This crate provides the data side of the search: cell coordinates, the
//! per-cell [`Node`] bookkeeping, the square [`Grid`] that owns every node,
//! a serializable [`GridConfig`], and the shared [`Error`] type.

pub mod config;
pub mod error;
pub mod geom;
pub mod grid;
pub mod node;

pub use config::{GridConfig, MAX_UI_SIZE, MIN_UI_SIZE};
pub use error::{ConfigIssue, Error, Result};
pub use geom::Coord;
pub use grid::{ClickEffect, Grid};
pub use node::{Node, NodeId, UNREACHABLE};
