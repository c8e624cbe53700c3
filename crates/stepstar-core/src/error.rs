use std::fmt;

use crate::geom::Coord;

/// Why a start/end pair cannot begin a search.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConfigIssue {
    MissingStart,
    MissingEnd,
    SameCell,
    WallStart,
    WallEnd,
}

impl ConfigIssue {
    /// Start or end has not been placed yet.
    pub fn is_missing_marker(self) -> bool {
        matches!(self, Self::MissingStart | Self::MissingEnd)
    }
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::MissingStart => "start cell is not set",
            Self::MissingEnd => "end cell is not set",
            Self::SameCell => "start and end are the same cell",
            Self::WallStart => "start cell is a wall",
            Self::WallEnd => "end cell is a wall",
        })
    }
}

/// Errors reported by grid construction and the search engine.
///
/// All of them are recoverable: the caller decides how to present them.
/// A search that finds no path is *not* an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The grid dimension must be strictly positive.
    #[error("grid size must be positive, got {0}")]
    InvalidSize(i32),
    /// A coordinate lies outside the grid.
    #[error("cell {0} is outside the grid")]
    OutOfBounds(Coord),
    /// Start or end is missing, identical, or a wall.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(ConfigIssue),
    /// A search session is running or paused on this grid.
    #[error("a search session is already active")]
    SessionAlreadyActive,
    /// A path was requested before the search reached its goal.
    #[error("no path available: the search has not found the goal")]
    NoPathState,
}

/// Convenience alias used throughout the stepstar crates.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            Error::InvalidSize(0).to_string(),
            "grid size must be positive, got 0"
        );
        assert_eq!(
            Error::OutOfBounds(Coord::new(9, -1)).to_string(),
            "cell (9, -1) is outside the grid"
        );
        assert_eq!(
            Error::InvalidConfiguration(ConfigIssue::SameCell).to_string(),
            "invalid configuration: start and end are the same cell"
        );
    }

    #[test]
    fn missing_marker_issues() {
        assert!(ConfigIssue::MissingStart.is_missing_marker());
        assert!(ConfigIssue::MissingEnd.is_missing_marker());
        assert!(!ConfigIssue::SameCell.is_missing_marker());
        assert!(!ConfigIssue::WallEnd.is_missing_marker());
    }
}
