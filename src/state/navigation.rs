//! Screen navigation state machine.
//!
//! [`ViewStateMachine`] owns which screen is active. Every accepted
//! [`NavEvent`] yields exactly one [`LoadRequest`] the caller must run
//! against the gateway; rejected events leave the screen untouched.

use std::fmt;
use thiserror::Error;

/// The screen currently shown. Exactly one is active at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Dashboard,
    List,
    /// Detail of one learning; the id is the selection.
    Detail { learning_id: String },
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Dashboard => "Dashboard",
            Screen::List => "Learnings",
            Screen::Detail { .. } => "Learning",
        }
    }

    /// Selected learning id; only `Detail` has one.
    pub fn selected_id(&self) -> Option<&str> {
        match self {
            Screen::Detail { learning_id } => Some(learning_id),
            _ => None,
        }
    }

    pub fn is_detail(&self) -> bool {
        matches!(self, Screen::Detail { .. })
    }
}

/// Inputs to the state machine, forwarded from the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    NavigateToList,
    NavigateToDashboard,
    OpenDetail(String),
    Back,
    LearningAdded,
    AppliedSkillAdded,
}

impl fmt::Display for NavEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavEvent::NavigateToList => f.write_str("navigateToList"),
            NavEvent::NavigateToDashboard => f.write_str("navigateToDashboard"),
            NavEvent::OpenDetail(id) => write!(f, "openDetail({})", id),
            NavEvent::Back => f.write_str("back"),
            NavEvent::LearningAdded => f.write_str("learningAdded"),
            NavEvent::AppliedSkillAdded => f.write_str("appliedSkillAdded"),
        }
    }
}

/// Data to (re)load after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadRequest {
    /// Re-fetch the whole collection
    AllLearnings,
    /// Fetch one learning and its applied skills
    LearningDetail(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("{event} is not allowed from {from}")]
    Illegal { from: &'static str, event: String },
    #[error("cannot open a learning without an id")]
    EmptyId,
}

/// Tracks the active [`Screen`] and validates transitions.
#[derive(Debug, Clone, Default)]
pub struct ViewStateMachine {
    screen: Screen,
}

impl ViewStateMachine {
    /// Start on the dashboard.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.screen.selected_id()
    }

    /// Apply `event`, returning the load it requires.
    ///
    /// | from | event | to | load |
    /// |---|---|---|---|
    /// | any | `NavigateToList` | List | all |
    /// | any | `NavigateToDashboard` | Dashboard | all |
    /// | Dashboard, List | `OpenDetail(id)` | Detail(id) | detail(id) |
    /// | Detail | `Back` | List | all |
    /// | Detail(id) | `AppliedSkillAdded` | unchanged | detail(id) |
    /// | Dashboard, List | `LearningAdded` | unchanged | all |
    pub fn apply(&mut self, event: NavEvent) -> Result<LoadRequest, TransitionError> {
        let (next, load) = match (&self.screen, event) {
            (_, NavEvent::NavigateToList) => (Screen::List, LoadRequest::AllLearnings),
            (_, NavEvent::NavigateToDashboard) => (Screen::Dashboard, LoadRequest::AllLearnings),
            (Screen::Dashboard | Screen::List, NavEvent::OpenDetail(id)) => {
                if id.trim().is_empty() {
                    return Err(TransitionError::EmptyId);
                }
                (
                    Screen::Detail {
                        learning_id: id.clone(),
                    },
                    LoadRequest::LearningDetail(id),
                )
            }
            (Screen::Detail { .. }, NavEvent::Back) => (Screen::List, LoadRequest::AllLearnings),
            (Screen::Detail { learning_id }, NavEvent::AppliedSkillAdded) => (
                self.screen.clone(),
                LoadRequest::LearningDetail(learning_id.clone()),
            ),
            (Screen::Dashboard | Screen::List, NavEvent::LearningAdded) => {
                (self.screen.clone(), LoadRequest::AllLearnings)
            }
            (screen, event) => {
                return Err(TransitionError::Illegal {
                    from: screen.title(),
                    event: event.to_string(),
                })
            }
        };

        tracing::debug!("Screen {:?} -> {:?} (load {:?})", self.screen, next, load);
        self.screen = next;
        Ok(load)
    }

    /// The load that refreshes the current screen in place.
    pub fn reload(&self) -> LoadRequest {
        match &self.screen {
            Screen::Detail { learning_id } => LoadRequest::LearningDetail(learning_id.clone()),
            _ => LoadRequest::AllLearnings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_detail(id: &str) -> ViewStateMachine {
        let mut machine = ViewStateMachine::new();
        machine.apply(NavEvent::OpenDetail(id.to_string())).unwrap();
        machine
    }

    #[test]
    fn test_starts_on_dashboard() {
        let machine = ViewStateMachine::new();
        assert_eq!(machine.screen(), &Screen::Dashboard);
        assert_eq!(machine.selected_id(), None);
        assert_eq!(machine.reload(), LoadRequest::AllLearnings);
    }

    #[test]
    fn test_open_detail_from_dashboard() {
        let mut machine = ViewStateMachine::new();
        let load = machine.apply(NavEvent::OpenDetail("x".into())).unwrap();

        assert_eq!(load, LoadRequest::LearningDetail("x".into()));
        assert_eq!(
            machine.screen(),
            &Screen::Detail {
                learning_id: "x".into()
            }
        );
        assert_eq!(machine.selected_id(), Some("x"));
    }

    #[test]
    fn test_open_detail_from_list() {
        let mut machine = ViewStateMachine::new();
        machine.apply(NavEvent::NavigateToList).unwrap();
        let load = machine.apply(NavEvent::OpenDetail("7".into())).unwrap();
        assert_eq!(load, LoadRequest::LearningDetail("7".into()));
    }

    #[test]
    fn test_navigation_from_any_screen_reloads_all() {
        for event in [NavEvent::NavigateToList, NavEvent::NavigateToDashboard] {
            let mut machine = in_detail("1");
            assert_eq!(machine.apply(event.clone()).unwrap(), LoadRequest::AllLearnings);
            assert_eq!(machine.selected_id(), None);

            let mut machine = ViewStateMachine::new();
            assert_eq!(machine.apply(event).unwrap(), LoadRequest::AllLearnings);
        }
    }

    #[test]
    fn test_reentering_same_screen_reloads() {
        let mut machine = ViewStateMachine::new();
        machine.apply(NavEvent::NavigateToList).unwrap();
        assert_eq!(
            machine.apply(NavEvent::NavigateToList).unwrap(),
            LoadRequest::AllLearnings
        );
        assert_eq!(machine.screen(), &Screen::List);
    }

    #[test]
    fn test_back_goes_to_list() {
        let mut machine = in_detail("1");
        assert_eq!(machine.apply(NavEvent::Back).unwrap(), LoadRequest::AllLearnings);
        assert_eq!(machine.screen(), &Screen::List);
    }

    #[test]
    fn test_applied_skill_added_keeps_detail() {
        let mut machine = in_detail("42");
        let load = machine.apply(NavEvent::AppliedSkillAdded).unwrap();
        assert_eq!(load, LoadRequest::LearningDetail("42".into()));
        assert_eq!(machine.selected_id(), Some("42"));
        assert_eq!(machine.reload(), LoadRequest::LearningDetail("42".into()));
    }

    #[test]
    fn test_learning_added_keeps_screen() {
        let mut machine = ViewStateMachine::new();
        assert_eq!(machine.apply(NavEvent::LearningAdded).unwrap(), LoadRequest::AllLearnings);
        assert_eq!(machine.screen(), &Screen::Dashboard);

        machine.apply(NavEvent::NavigateToList).unwrap();
        machine.apply(NavEvent::LearningAdded).unwrap();
        assert_eq!(machine.screen(), &Screen::List);
    }

    #[test]
    fn test_illegal_events_leave_state_unchanged() {
        let mut machine = ViewStateMachine::new();
        assert!(matches!(
            machine.apply(NavEvent::Back),
            Err(TransitionError::Illegal { from: "Dashboard", .. })
        ));
        assert!(machine.apply(NavEvent::AppliedSkillAdded).is_err());
        assert_eq!(machine.screen(), &Screen::Dashboard);

        let mut machine = in_detail("1");
        assert!(machine.apply(NavEvent::OpenDetail("2".into())).is_err());
        assert!(machine.apply(NavEvent::LearningAdded).is_err());
        assert_eq!(machine.selected_id(), Some("1"));
    }

    #[test]
    fn test_open_detail_requires_id() {
        let mut machine = ViewStateMachine::new();
        assert_eq!(
            machine.apply(NavEvent::OpenDetail("  ".into())),
            Err(TransitionError::EmptyId)
        );
        assert_eq!(machine.screen(), &Screen::Dashboard);
    }

    #[test]
    fn test_error_display() {
        let mut machine = ViewStateMachine::new();
        let err = machine.apply(NavEvent::Back).unwrap_err();
        assert_eq!(err.to_string(), "back is not allowed from Dashboard");
    }
}
