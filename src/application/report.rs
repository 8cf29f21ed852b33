//! ReportService - renders the downloadable report for a session.

use super::ResultsSummary;
use crate::domain::foundation::Timestamp;
use crate::domain::narrative::render_report;
use crate::domain::session::{AssessmentSession, DEFAULT_CRISIS_LINES};

/// Renders plain-text reports with the configured crisis resources.
#[derive(Debug, Clone)]
pub struct ReportService {
    crisis_lines: String,
}

impl ReportService {
    /// Creates a service with the given crisis resource lines.
    pub fn new(crisis_lines: impl Into<String>) -> Self {
        Self {
            crisis_lines: crisis_lines.into(),
        }
    }

    /// Renders the report for a session as of the given date.
    pub fn render(&self, session: &AssessmentSession, date: &Timestamp) -> String {
        let summary = ResultsSummary::from_session(session);
        tracing::debug!(session = %session.id(), "report rendered");
        render_report(
            session,
            &summary.mood,
            &summary.anxiety,
            &summary.script,
            &self.crisis_lines,
            date,
        )
    }
}

impl Default for ReportService {
    fn default() -> Self {
        Self::new(DEFAULT_CRISIS_LINES)
    }
}
