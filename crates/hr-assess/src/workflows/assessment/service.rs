use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tracing::info;

use super::catalog::standard_sections;
use super::domain::{AnswerMap, JobId, Section, SessionId};
use super::report::prompt_context;
use super::repository::{RepositoryError, ResultsStore, SessionRepository};
use super::scoring::{SectionScorer, TestResult};
use super::session::AssessmentSession;
use super::summary::CandidateRecord;
use crate::workflows::hr::repository::JobRepository;

/// Session state plus the section the candidate should see next.
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    #[serde(flatten)]
    pub session: AssessmentSession,
    pub active_section: Option<String>,
}

impl From<AssessmentSession> for SessionView {
    fn from(session: AssessmentSession) -> Self {
        let active_section = session.active_section().map(str::to_string);
        Self {
            session,
            active_section,
        }
    }
}

/// Service composing the section catalog, scorer, and candidate storage.
pub struct AssessmentService<S, R, J> {
    scorer: Arc<SectionScorer>,
    catalog: Arc<Vec<Section>>,
    sessions: Arc<S>,
    results: Arc<R>,
    jobs: Arc<J>,
}

static SESSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_session_id() -> SessionId {
    let id = SESSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    SessionId(format!("session-{id:06}"))
}

impl<S, R, J> AssessmentService<S, R, J>
where
    S: SessionRepository + 'static,
    R: ResultsStore + 'static,
    J: JobRepository + 'static,
{
    pub fn new(sessions: Arc<S>, results: Arc<R>, jobs: Arc<J>, scorer: SectionScorer) -> Self {
        Self {
            scorer: Arc::new(scorer),
            catalog: Arc::new(standard_sections()),
            sessions,
            results,
            jobs,
        }
    }

    pub fn scorer(&self) -> &SectionScorer {
        &self.scorer
    }

    /// Standard sections in presentation order.
    pub fn catalog(&self) -> &[Section] {
        &self.catalog
    }

    /// Open a session, snapshotting the job's custom sections when one is given.
    pub fn start(
        &self,
        candidate_name: &str,
        job_id: Option<JobId>,
    ) -> Result<AssessmentSession, AssessmentServiceError> {
        let candidate_name = candidate_name.trim();
        if candidate_name.is_empty() {
            return Err(AssessmentServiceError::MissingCandidateName);
        }

        let custom_sections = match &job_id {
            Some(id) => {
                self.jobs
                    .fetch(id)?
                    .ok_or_else(|| AssessmentServiceError::UnknownJob(id.0.clone()))?
                    .custom_sections
            }
            None => Vec::new(),
        };

        let plan = self
            .catalog
            .iter()
            .map(|section| section.id.clone())
            .collect();
        let session = AssessmentSession::new(
            next_session_id(),
            candidate_name,
            job_id,
            plan,
            Utc::now(),
        )
        .with_custom_sections(custom_sections);

        let stored = self.sessions.insert(session)?;
        info!(
            session_id = %stored.session_id.0,
            sections = stored.section_plan.len(),
            "assessment session started"
        );
        Ok(stored)
    }

    /// Score one section and record it on the session, replacing an earlier submission.
    pub fn submit_section(
        &self,
        session_id: &SessionId,
        section_id: &str,
        answers: AnswerMap,
    ) -> Result<TestResult, AssessmentServiceError> {
        let result = self
            .sessions
            .modify(session_id, |session| -> Result<_, AssessmentServiceError> {
                if session.is_completed() {
                    return Err(AssessmentServiceError::SessionCompleted(session_id.0.clone()));
                }

                let section = self
                    .catalog
                    .iter()
                    .find(|section| section.id == section_id)
                    .or_else(|| session.custom_section(section_id))
                    .ok_or_else(|| AssessmentServiceError::UnknownSection(section_id.to_string()))?;

                let result = self.scorer.score(section, &answers);
                session.record(result.clone());
                Ok(result)
            })?
            .ok_or_else(|| AssessmentServiceError::UnknownSession(session_id.0.clone()))??;

        info!(
            session_id = %session_id.0,
            section = section_id,
            percentage = result.percentage,
            "section submitted"
        );
        Ok(result)
    }

    /// Close the session, then append the candidate summary to the results store.
    pub fn complete(
        &self,
        session_id: &SessionId,
    ) -> Result<CandidateRecord, AssessmentServiceError> {
        let completed_at = Utc::now();
        let record = self
            .sessions
            .modify(session_id, |session| {
                if session.is_completed() {
                    return Err(AssessmentServiceError::SessionCompleted(session_id.0.clone()));
                }
                session.mark_completed(completed_at);
                Ok(CandidateRecord::from_session(session, completed_at))
            })?
            .ok_or_else(|| AssessmentServiceError::UnknownSession(session_id.0.clone()))??;

        if let Err(error) = self.results.append(record.clone()) {
            self.sessions.modify(session_id, AssessmentSession::reopen)?;
            return Err(error.into());
        }

        info!(
            session_id = %session_id.0,
            status = record.status_label.as_str(),
            "assessment completed"
        );
        Ok(record)
    }

    pub fn get(&self, session_id: &SessionId) -> Result<SessionView, AssessmentServiceError> {
        self.load(session_id).map(SessionView::from)
    }

    /// Text context for the AI-written candidate report.
    pub fn report_context(&self, session_id: &SessionId) -> Result<String, AssessmentServiceError> {
        let session = self.load(session_id)?;
        let record = session
            .completed_at
            .map(|at| CandidateRecord::from_session(&session, at));
        Ok(prompt_context(&session, record.as_ref()))
    }

    fn load(&self, session_id: &SessionId) -> Result<AssessmentSession, AssessmentServiceError> {
        self.sessions
            .fetch(session_id)?
            .ok_or_else(|| AssessmentServiceError::UnknownSession(session_id.0.clone()))
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error("candidate name is required")]
    MissingCandidateName,
    #[error("session {0} not found")]
    UnknownSession(String),
    #[error("section {0} is not part of this assessment")]
    UnknownSection(String),
    #[error("job {0} not found")]
    UnknownJob(String),
    #[error("session {0} is already completed")]
    SessionCompleted(String),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
