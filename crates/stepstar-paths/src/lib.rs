//! Incremental A* search for stepstar grids.
//!
//! The search is driven from outside: [`SearchEngine::step`] expands exactly
//! one frontier node and returns a [`StepResult`] describing what changed,
//! so a renderer can draw between steps and pause or reset at will.
//!
//! - Heuristic: [`manhattan`] distance, unit step cost, 4-directional moves.
//! - Open set: binary min-heap on `(f, insertion order)`; equal `f` values
//!   are expanded first-in-first-out.
//! - Paths: [`SearchEngine::reconstruct_path`] once the state is `Found`,
//!   or [`reconstruct`] directly on a grid's parent links.

mod distance;
mod engine;
mod events;
mod frontier;
mod path;

pub use distance::manhattan;
pub use engine::SearchEngine;
pub use events::{SearchEvent, SearchState, StepOutcome, StepResult, Visited};
pub use path::reconstruct;
