//! Section enum - the linear walk through the check-in.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The screens of a check-in session, in canonical order.
///
/// Navigation is forward-only apart from restart, which returns any
/// section to `Intro`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    #[default]
    Intro,
    Assessment,
    LifeEvents,
    RootCause,
    Results,
    GamePlan,
    GamePlanResults,
}

impl Section {
    /// Returns all sections in canonical order.
    pub fn all() -> &'static [Section] {
        &[
            Section::Intro,
            Section::Assessment,
            Section::LifeEvents,
            Section::RootCause,
            Section::Results,
            Section::GamePlan,
            Section::GamePlanResults,
        ]
    }

    /// Returns the 0-based index of this section in the canonical order.
    pub fn order_index(&self) -> usize {
        Self::all()
            .iter()
            .position(|s| s == self)
            .expect("Section must be in all() array")
    }

    /// Returns the next section in the walk, if any.
    pub fn next(&self) -> Option<Section> {
        let idx = self.order_index();
        Self::all().get(idx + 1).copied()
    }

    /// Validates a transition from this section to another.
    ///
    /// Valid transitions: one step forward in the canonical order, or
    /// any section back to `Intro` (restart).
    pub fn can_transition_to(&self, target: &Section) -> bool {
        if *target == Section::Intro {
            return *self != Section::Intro;
        }
        self.next() == Some(*target)
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Section::Intro => "Intro",
            Section::Assessment => "Assessment",
            Section::LifeEvents => "Life Events",
            Section::RootCause => "Root Cause",
            Section::Results => "Results",
            Section::GamePlan => "Game Plan",
            Section::GamePlanResults => "Game Plan Results",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_intro() {
        assert_eq!(Section::default(), Section::Intro);
    }

    #[test]
    fn all_returns_seven_sections_in_order() {
        let all = Section::all();
        assert_eq!(all.len(), 7);
        assert_eq!(all[0], Section::Intro);
        assert_eq!(all[6], Section::GamePlanResults);
    }

    #[test]
    fn next_walks_the_canonical_order() {
        assert_eq!(Section::Intro.next(), Some(Section::Assessment));
        assert_eq!(Section::Assessment.next(), Some(Section::LifeEvents));
        assert_eq!(Section::LifeEvents.next(), Some(Section::RootCause));
        assert_eq!(Section::RootCause.next(), Some(Section::Results));
        assert_eq!(Section::Results.next(), Some(Section::GamePlan));
        assert_eq!(Section::GamePlan.next(), Some(Section::GamePlanResults));
        assert_eq!(Section::GamePlanResults.next(), None);
    }

    #[test]
    fn forward_transitions_are_single_step() {
        assert!(Section::Intro.can_transition_to(&Section::Assessment));
        assert!(!Section::Intro.can_transition_to(&Section::Results));
        assert!(!Section::Results.can_transition_to(&Section::Assessment));
    }

    #[test]
    fn any_section_can_restart_to_intro() {
        for section in Section::all() {
            if *section != Section::Intro {
                assert!(section.can_transition_to(&Section::Intro));
            }
        }
    }

    #[test]
    fn intro_cannot_transition_to_itself() {
        assert!(!Section::Intro.can_transition_to(&Section::Intro));
    }

    #[test]
    fn serializes_to_snake_case_json() {
        assert_eq!(
            serde_json::to_string(&Section::GamePlanResults).unwrap(),
            "\"game_plan_results\""
        );
        assert_eq!(
            serde_json::to_string(&Section::LifeEvents).unwrap(),
            "\"life_events\""
        );
    }
}
