use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{JobId, Section, SessionId};
use super::scoring::TestResult;

/// Serializable state of one candidate's pass through the quiz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentSession {
    pub session_id: SessionId,
    pub candidate_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_id: Option<JobId>,
    /// Section ids in presentation order.
    pub section_plan: Vec<String>,
    /// Job-specific sections snapshotted when the session started.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_sections: Vec<Section>,
    pub results: Vec<TestResult>,
    pub started_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl AssessmentSession {
    pub fn new(
        session_id: SessionId,
        candidate_name: impl Into<String>,
        job_id: Option<JobId>,
        section_plan: Vec<String>,
        started_at: DateTime<Utc>,
    ) -> Self {
        Self {
            session_id,
            candidate_name: candidate_name.into(),
            job_id,
            section_plan,
            custom_sections: Vec::new(),
            results: Vec::new(),
            started_at,
            completed_at: None,
        }
    }

    /// Store a section result, replacing any earlier result for the same section.
    pub fn record(&mut self, result: TestResult) {
        self.results
            .retain(|existing| existing.section_id != result.section_id);
        self.results.push(result);
    }

    pub fn with_custom_sections(mut self, sections: Vec<Section>) -> Self {
        self.section_plan
            .extend(sections.iter().map(|section| section.id.clone()));
        self.custom_sections = sections;
        self
    }

    pub fn custom_section(&self, section_id: &str) -> Option<&Section> {
        self.custom_sections
            .iter()
            .find(|section| section.id == section_id)
    }

    pub fn result(&self, section_id: &str) -> Option<&TestResult> {
        self.results
            .iter()
            .find(|result| result.section_id == section_id)
    }

    /// First planned section that has no result yet.
    pub fn active_section(&self) -> Option<&str> {
        self.section_plan
            .iter()
            .find(|id| self.result(id).is_none())
            .map(String::as_str)
    }

    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }

    pub fn mark_completed(&mut self, at: DateTime<Utc>) {
        self.completed_at.get_or_insert(at);
    }

    /// Undo a completion whose candidate record could not be stored.
    pub fn reopen(&mut self) {
        self.completed_at = None;
    }
}
