//! What a single [`step`](crate::SearchEngine::step) reports back.

use stepstar_core::Coord;

/// Lifecycle of a search session.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchState {
    #[default]
    Idle,
    Running,
    Paused,
    Found,
    Exhausted,
}

impl SearchState {
    /// Running or paused: the session owns the grid.
    #[inline]
    pub fn is_active(self) -> bool {
        matches!(self, Self::Running | Self::Paused)
    }

    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Found | Self::Exhausted)
    }
}

/// Result classification of one step.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepOutcome {
    Continue,
    Found,
    Exhausted,
}

/// A neighbor whose scores were updated during a step.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Visited {
    pub coord: Coord,
    pub g: i32,
    pub h: i32,
    pub f: i32,
}

/// Observable event for the rendering layer.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchEvent {
    Visited(Visited),
    /// Start-to-end cell sequence, both inclusive.
    PathFound(Vec<Coord>),
    NoPathFound,
}

/// Everything one call to `step` did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepResult {
    pub outcome: StepOutcome,
    /// The node selected from the open set, if any.
    pub current: Option<Coord>,
    pub events: Vec<SearchEvent>,
}

impl StepResult {
    /// A step that did nothing.
    pub(crate) fn noop(outcome: StepOutcome) -> Self {
        Self {
            outcome,
            current: None,
            events: Vec::new(),
        }
    }

    /// Neighbors touched this step, in examination order.
    pub fn visited(&self) -> impl Iterator<Item = &Visited> + '_ {
        self.events.iter().filter_map(|e| match e {
            SearchEvent::Visited(v) => Some(v),
            _ => None,
        })
    }

    /// The path, when this step reached the goal.
    pub fn path(&self) -> Option<&[Coord]> {
        self.events.iter().find_map(|e| match e {
            SearchEvent::PathFound(p) => Some(p.as_slice()),
            _ => None,
        })
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.outcome != StepOutcome::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_predicates() {
        assert!(SearchState::Running.is_active());
        assert!(SearchState::Paused.is_active());
        assert!(!SearchState::Idle.is_active());
        assert!(SearchState::Found.is_terminal());
        assert!(SearchState::Exhausted.is_terminal());
        assert!(!SearchState::Paused.is_terminal());
    }

    #[test]
    fn step_result_accessors() {
        let v = Visited {
            coord: Coord::new(0, 1),
            g: 1,
            h: 3,
            f: 4,
        };
        let r = StepResult {
            outcome: StepOutcome::Continue,
            current: Some(Coord::new(0, 0)),
            events: vec![SearchEvent::Visited(v)],
        };
        assert_eq!(r.visited().collect::<Vec<_>>(), vec![&v]);
        assert_eq!(r.path(), None);
        assert!(!r.is_terminal());
        assert!(StepResult::noop(StepOutcome::Exhausted).is_terminal());
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn event_round_trip() {
        let ev = SearchEvent::PathFound(vec![Coord::new(0, 0), Coord::new(0, 1)]);
        let json = serde_json::to_string(&ev).unwrap();
        let back: SearchEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ev);
    }
}
