//! Serializable grid configuration.

use crate::error::Result;
use crate::geom::Coord;
use crate::grid::Grid;

/// Smallest grid size offered by the interactive front end.
pub const MIN_UI_SIZE: i32 = 5;
/// Largest grid size offered by the interactive front end.
pub const MAX_UI_SIZE: i32 = 50;

/// Everything needed to rebuild a [`Grid`]: dimension, markers and walls.
///
/// The core only requires `size > 0`; the `MIN_UI_SIZE..=MAX_UI_SIZE` range
/// is a presentation concern, see [`in_ui_range`](GridConfig::in_ui_range).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridConfig {
    pub size: i32,
    pub start: Option<Coord>,
    pub end: Option<Coord>,
    pub walls: Vec<Coord>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new(20)
    }
}

impl GridConfig {
    /// An empty configuration of the given size.
    pub fn new(size: i32) -> Self {
        Self {
            size,
            start: None,
            end: None,
            walls: Vec::new(),
        }
    }

    pub fn with_start(mut self, c: Coord) -> Self {
        self.start = Some(c);
        self
    }

    pub fn with_end(mut self, c: Coord) -> Self {
        self.end = Some(c);
        self
    }

    pub fn with_walls(mut self, walls: impl IntoIterator<Item = Coord>) -> Self {
        self.walls.extend(walls);
        self
    }

    /// Whether `size` is within the range the front end accepts.
    pub fn in_ui_range(&self) -> bool {
        (MIN_UI_SIZE..=MAX_UI_SIZE).contains(&self.size)
    }

    /// Build a fresh grid. Any out-of-bounds coordinate is an error.
    pub fn build(&self) -> Result<Grid> {
        let mut grid = Grid::build(self.size)?;
        if let Some(s) = self.start {
            grid.set_start(s)?;
        }
        if let Some(e) = self.end {
            grid.set_end(e)?;
        }
        for &w in &self.walls {
            grid.set_wall(w, true)?;
        }
        Ok(grid)
    }

    /// Capture the configuration of an existing grid.
    pub fn from_grid(grid: &Grid) -> Self {
        Self {
            size: grid.size(),
            start: grid.start_coord(),
            end: grid.end_coord(),
            walls: grid.walls().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn build_applies_markers_and_walls() {
        let cfg = GridConfig::new(5)
            .with_start(Coord::new(0, 0))
            .with_end(Coord::new(4, 4))
            .with_walls([Coord::new(1, 1), Coord::new(2, 2)]);
        let grid = cfg.build().unwrap();
        assert_eq!(grid.start_coord(), Some(Coord::new(0, 0)));
        assert_eq!(grid.end_coord(), Some(Coord::new(4, 4)));
        assert!(grid.is_wall(Coord::new(1, 1)));
        assert!(grid.is_wall(Coord::new(2, 2)));
        assert_eq!(GridConfig::from_grid(&grid), cfg);
    }

    #[test]
    fn build_rejects_bad_input() {
        assert_eq!(GridConfig::new(0).build().unwrap_err(), Error::InvalidSize(0));
        let cfg = GridConfig::new(5).with_walls([Coord::new(5, 5)]);
        assert_eq!(cfg.build().unwrap_err(), Error::OutOfBounds(Coord::new(5, 5)));
    }

    #[test]
    fn ui_range() {
        assert!(GridConfig::new(5).in_ui_range());
        assert!(GridConfig::new(50).in_ui_range());
        assert!(!GridConfig::new(4).in_ui_range());
        assert!(!GridConfig::new(51).in_ui_range());
        // The core still accepts sizes the front end would refuse.
        assert!(GridConfig::new(2).build().is_ok());
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let cfg = GridConfig::new(7)
            .with_start(Coord::new(0, 1))
            .with_end(Coord::new(6, 6))
            .with_walls([Coord::new(3, 3)]);
        let json = serde_json::to_string(&cfg).unwrap();
        let back: GridConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let cfg: GridConfig = serde_json::from_str(r#"{"size": 9}"#).unwrap();
        assert_eq!(cfg, GridConfig::new(9));
    }
}
