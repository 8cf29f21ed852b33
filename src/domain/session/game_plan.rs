//! Game plan draft - the four-step recovery plan builder.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::catalog::{option_by_id, COPING_TOOLS};
use crate::domain::foundation::{DomainError, ErrorCode};

/// Crisis lines prefilled into every new plan's emergency card.
pub const DEFAULT_CRISIS_LINES: &str = "988 Suicide & Crisis Lifeline\n\
1-800-854-7771 LA County ACCESS\n\
1-888-624-4752 CHIRLA";

/// The four steps of the game plan builder, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GamePlanStep {
    #[default]
    Inventory,
    Stabilize,
    Reset,
    Reconnect,
}

impl GamePlanStep {
    /// Returns all steps in order.
    pub fn all() -> &'static [GamePlanStep] {
        &[
            GamePlanStep::Inventory,
            GamePlanStep::Stabilize,
            GamePlanStep::Reset,
            GamePlanStep::Reconnect,
        ]
    }

    /// Returns the 1-based step number shown in the header.
    pub fn number(&self) -> u8 {
        match self {
            GamePlanStep::Inventory => 1,
            GamePlanStep::Stabilize => 2,
            GamePlanStep::Reset => 3,
            GamePlanStep::Reconnect => 4,
        }
    }

    /// Returns the next step, if any.
    pub fn next(&self) -> Option<GamePlanStep> {
        let idx = Self::all().iter().position(|s| s == self)?;
        Self::all().get(idx + 1).copied()
    }

    /// Returns the previous step, if any.
    pub fn previous(&self) -> Option<GamePlanStep> {
        let idx = Self::all().iter().position(|s| s == self)?;
        idx.checked_sub(1).and_then(|i| Self::all().get(i).copied())
    }
}

impl fmt::Display for GamePlanStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// A support contact in the plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub phone: String,
}

impl Contact {
    /// Creates a contact from name and phone.
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
        }
    }

    /// Returns true if neither field has been filled in.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.phone.is_empty()
    }
}

/// The respondent's recovery plan, built up across the four steps.
///
/// Every field has an explicit typed setter on the session aggregate;
/// there is no generic field-by-name update path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GamePlanDraft {
    pub grounding: String,
    pub tools: Vec<String>,
    pub custom_tools: String,
    pub checkpoint: String,
    pub contact1: Contact,
    pub contact2: Contact,
    pub therapist: Contact,
    pub emergency: String,
    pub playlist: String,
    pub creative: String,
    pub content: String,
    pub physical: String,
    pub forward: String,
    pub message: String,
    pub sms_opt_in: bool,
    pub app_opt_in: bool,
}

impl Default for GamePlanDraft {
    fn default() -> Self {
        Self {
            grounding: String::new(),
            tools: Vec::new(),
            custom_tools: String::new(),
            checkpoint: String::new(),
            contact1: Contact::default(),
            contact2: Contact::default(),
            therapist: Contact::default(),
            emergency: DEFAULT_CRISIS_LINES.to_string(),
            playlist: String::new(),
            creative: String::new(),
            content: String::new(),
            physical: String::new(),
            forward: String::new(),
            message: String::new(),
            sms_opt_in: false,
            app_opt_in: false,
        }
    }
}

impl GamePlanDraft {
    /// Toggles a coping tool in or out of the plan.
    ///
    /// # Errors
    ///
    /// - `UnknownSelection` if the id is not in the coping tool catalog
    pub fn toggle_tool(&mut self, id: &str) -> Result<bool, DomainError> {
        if option_by_id(COPING_TOOLS, id).is_none() {
            return Err(DomainError::new(
                ErrorCode::UnknownSelection,
                format!("'{}' is not a coping tool", id),
            )
            .with_detail("id", id));
        }

        if let Some(pos) = self.tools.iter().position(|t| t == id) {
            self.tools.remove(pos);
            Ok(false)
        } else {
            self.tools.push(id.to_string());
            Ok(true)
        }
    }

    /// Clears the per-session fields on restart, keeping the standing
    /// ones (therapist, emergency lines, checkpoint, custom tools,
    /// content, physical, and the community opt-ins survive a restart).
    pub fn reset_for_restart(&mut self) {
        self.grounding.clear();
        self.tools.clear();
        self.playlist.clear();
        self.creative.clear();
        self.forward.clear();
        self.message.clear();
        self.contact1 = Contact::default();
        self.contact2 = Contact::default();
    }
}
