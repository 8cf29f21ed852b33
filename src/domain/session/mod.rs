//! Session domain module.
//!
//! Holds the check-in session aggregate and its supporting types: the
//! section walk, the game plan builder steps, and the plan draft. The
//! aggregate is the explicit, serializable state value the enclosing
//! application owns; all mutation goes through its typed methods.

mod aggregate;
mod game_plan;
mod section;

pub use aggregate::AssessmentSession;
pub use game_plan::{Contact, GamePlanDraft, GamePlanStep, DEFAULT_CRISIS_LINES};
pub use section::Section;
