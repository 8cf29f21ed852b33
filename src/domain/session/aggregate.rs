//! Assessment session aggregate.
//!
//! The single mutable state value for one check-in: language, the
//! respondent's place in the walk, answers, context selections, and the
//! game plan draft. Mutation happens only through typed methods that
//! validate section preconditions; scoring reads the answer slice and
//! never the whole session.
//!
//! The aggregate serializes as the opaque session-resume snapshot.

use serde::{Deserialize, Serialize};

use super::{GamePlanDraft, GamePlanStep, Section};
use crate::domain::catalog::{
    self, option_by_id, question_at, question_count, Question, LIFE_EVENTS, STRESSORS,
};
use crate::domain::foundation::{
    AnswerValue, DomainError, ErrorCode, Language, SessionId, Timestamp,
};
use crate::domain::scoring::AnswerSet;

/// One respondent's check-in session from intro to game plan results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentSession {
    id: SessionId,
    language: Language,
    section: Section,
    current_step: usize,
    answers: AnswerSet,
    life_events: Vec<String>,
    stressors: Vec<String>,
    game_plan: GamePlanDraft,
    game_plan_step: GamePlanStep,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl AssessmentSession {
    /// Creates a fresh session at the intro screen.
    pub fn new(language: Language) -> Self {
        let now = Timestamp::now();
        Self {
            id: SessionId::new(),
            language,
            section: Section::Intro,
            current_step: 0,
            answers: AnswerSet::new(),
            life_events: Vec::new(),
            stressors: Vec::new(),
            game_plan: GamePlanDraft::default(),
            game_plan_step: GamePlanStep::Inventory,
            created_at: now,
            updated_at: now,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the session ID.
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Returns the active locale.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Returns the current section.
    pub fn section(&self) -> Section {
        self.section
    }

    /// Returns the 0-based position in the questionnaire walk.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Returns the question at the current position, if the session is
    /// in the assessment section.
    pub fn current_question(&self) -> Option<&'static Question> {
        if self.section == Section::Assessment {
            question_at(self.current_step)
        } else {
            None
        }
    }

    /// Returns the accumulated answers.
    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// Returns the selected life-event ids.
    pub fn life_events(&self) -> &[String] {
        &self.life_events
    }

    /// Returns the selected stressor ids.
    pub fn stressors(&self) -> &[String] {
        &self.stressors
    }

    /// Returns the game plan draft.
    pub fn game_plan(&self) -> &GamePlanDraft {
        &self.game_plan
    }

    /// Returns the current game plan step.
    pub fn game_plan_step(&self) -> GamePlanStep {
        self.game_plan_step
    }

    /// Returns when the session was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns when the session was last updated.
    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Begins the questionnaire walk from the intro screen.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` if not at the intro
    pub fn start(&mut self) -> Result<(), DomainError> {
        self.transition_to(Section::Assessment)?;
        self.current_step = 0;
        self.answers.clear();
        self.life_events.clear();
        self.stressors.clear();
        Ok(())
    }

    /// Records the answer to the current question and advances the walk.
    /// Answering the final item moves the session to the life-events
    /// screen.
    ///
    /// # Errors
    ///
    /// - `SectionLocked` if not in the assessment section
    pub fn answer_current(&mut self, value: AnswerValue) -> Result<Section, DomainError> {
        self.ensure_section(Section::Assessment)?;

        let question = question_at(self.current_step).ok_or_else(|| {
            DomainError::new(
                ErrorCode::AssessmentComplete,
                "No question remains at the current step",
            )
        })?;

        self.answers.record(question.id.clone(), value);
        tracing::debug!(question = %question.id, step = self.current_step, "answer recorded");

        if self.current_step + 1 == question_count() {
            self.transition_to(Section::LifeEvents)?;
        } else {
            self.current_step += 1;
            self.touch();
        }
        Ok(self.section)
    }

    /// Toggles a life event on the context screen. Returns whether the
    /// event is now selected.
    ///
    /// # Errors
    ///
    /// - `SectionLocked` if not on the life-events screen
    /// - `UnknownSelection` if the id is not in the catalog
    pub fn toggle_life_event(&mut self, id: &str) -> Result<bool, DomainError> {
        self.ensure_section(Section::LifeEvents)?;
        let selected = Self::toggle_selection(&mut self.life_events, LIFE_EVENTS, id)?;
        tracing::debug!(id, selected, "life event toggled");
        self.touch();
        Ok(selected)
    }

    /// Toggles a stressor on the root-cause screen. Returns whether the
    /// stressor is now selected.
    ///
    /// # Errors
    ///
    /// - `SectionLocked` if not on the root-cause screen
    /// - `UnknownSelection` if the id is not in the catalog
    pub fn toggle_stressor(&mut self, id: &str) -> Result<bool, DomainError> {
        self.ensure_section(Section::RootCause)?;
        let selected = Self::toggle_selection(&mut self.stressors, STRESSORS, id)?;
        tracing::debug!(id, selected, "stressor toggled");
        self.touch();
        Ok(selected)
    }

    /// Moves from the life-events screen to the root-cause screen.
    pub fn advance_to_root_cause(&mut self) -> Result<(), DomainError> {
        self.transition_to(Section::RootCause)
    }

    /// Moves from the root-cause screen to the results screen.
    pub fn advance_to_results(&mut self) -> Result<(), DomainError> {
        self.transition_to(Section::Results)
    }

    /// Opens the game plan builder at its first step.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` if not on the results screen
    pub fn start_game_plan(&mut self) -> Result<(), DomainError> {
        self.transition_to(Section::GamePlan)?;
        self.game_plan_step = GamePlanStep::Inventory;
        Ok(())
    }

    /// Advances the game plan builder. Finishing the last step moves the
    /// session to the game plan results screen; `None` signals that move.
    ///
    /// # Errors
    ///
    /// - `SectionLocked` if the builder is not open
    pub fn next_game_plan_step(&mut self) -> Result<Option<GamePlanStep>, DomainError> {
        self.ensure_section(Section::GamePlan)?;
        match self.game_plan_step.next() {
            Some(step) => {
                self.game_plan_step = step;
                self.touch();
                Ok(Some(step))
            }
            None => {
                self.transition_to(Section::GamePlanResults)?;
                Ok(None)
            }
        }
    }

    /// Steps the game plan builder back.
    ///
    /// # Errors
    ///
    /// - `SectionLocked` if the builder is not open
    /// - `InvalidStateTransition` if already at the first step
    pub fn previous_game_plan_step(&mut self) -> Result<GamePlanStep, DomainError> {
        self.ensure_section(Section::GamePlan)?;
        let step = self.game_plan_step.previous().ok_or_else(|| {
            DomainError::new(
                ErrorCode::InvalidStateTransition,
                "Already at the first game plan step",
            )
        })?;
        self.game_plan_step = step;
        self.touch();
        Ok(step)
    }

    /// Grants mutable access to the game plan draft for its typed
    /// setters. Available while the builder is open and on the results
    /// screen (where the community opt-ins live).
    ///
    /// # Errors
    ///
    /// - `SectionLocked` elsewhere
    pub fn game_plan_mut(&mut self) -> Result<&mut GamePlanDraft, DomainError> {
        if !matches!(self.section, Section::GamePlan | Section::Results) {
            return Err(DomainError::new(
                ErrorCode::SectionLocked,
                format!("Game plan is not editable from {}", self.section),
            ));
        }
        self.touch();
        Ok(&mut self.game_plan)
    }

    /// Switches between the two locales. Allowed from any section.
    pub fn toggle_language(&mut self) -> Language {
        self.language = self.language.toggled();
        self.touch();
        tracing::debug!(language = %self.language, "language toggled");
        self.language
    }

    /// Returns the session to the intro screen. Answers, selections and
    /// per-session game plan fields are discarded; standing plan fields
    /// and the language choice survive.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` if already at the intro
    pub fn restart(&mut self) -> Result<(), DomainError> {
        self.transition_to(Section::Intro)?;
        self.current_step = 0;
        self.answers.clear();
        self.life_events.clear();
        self.stressors.clear();
        self.game_plan.reset_for_restart();
        self.game_plan_step = GamePlanStep::Inventory;
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn ensure_section(&self, expected: Section) -> Result<(), DomainError> {
        if self.section == expected {
            Ok(())
        } else {
            Err(DomainError::new(
                ErrorCode::SectionLocked,
                format!(
                    "Requires the {} section, currently at {}",
                    expected, self.section
                ),
            ))
        }
    }

    fn transition_to(&mut self, target: Section) -> Result<(), DomainError> {
        if !self.section.can_transition_to(&target) {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!("Cannot move from {} to {}", self.section, target),
            ));
        }
        tracing::info!(from = %self.section, to = %target, "section transition");
        self.section = target;
        self.touch();
        Ok(())
    }

    fn toggle_selection(
        selected: &mut Vec<String>,
        options: &[catalog::SelectionOption],
        id: &str,
    ) -> Result<bool, DomainError> {
        if option_by_id(options, id).is_none() {
            return Err(DomainError::new(
                ErrorCode::UnknownSelection,
                format!("'{}' is not a known selection", id),
            )
            .with_detail("id", id));
        }

        if let Some(pos) = selected.iter().position(|s| s == id) {
            selected.remove(pos);
            Ok(false)
        } else {
            selected.push(id.to_string());
            Ok(true)
        }
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}
