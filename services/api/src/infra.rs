use hr_assess::workflows::assessment::{
    AnswerMap, AssessmentSession, CandidateRecord, JobId, RepositoryError, ResultsStore,
    SessionId, SessionRepository,
};
use hr_assess::workflows::hr::{Job, JobRepository};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, RepositoryError> {
    mutex
        .lock()
        .map_err(|_| RepositoryError::Unavailable("in-memory store poisoned".to_string()))
}

#[derive(Default, Clone)]
pub(crate) struct InMemorySessionRepository {
    sessions: Arc<Mutex<HashMap<SessionId, AssessmentSession>>>,
}

impl SessionRepository for InMemorySessionRepository {
    fn insert(&self, session: AssessmentSession) -> Result<AssessmentSession, RepositoryError> {
        let mut guard = lock(&self.sessions)?;
        if guard.contains_key(&session.session_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(session.session_id.clone(), session.clone());
        Ok(session)
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<AssessmentSession>, RepositoryError> {
        let guard = lock(&self.sessions)?;
        Ok(guard.get(id).cloned())
    }

    fn modify<T, F>(&self, id: &SessionId, change: F) -> Result<Option<T>, RepositoryError>
    where
        F: FnOnce(&mut AssessmentSession) -> T,
    {
        let mut guard = lock(&self.sessions)?;
        Ok(guard.get_mut(id).map(change))
    }
}

/// Append-only stand-in for the shared results spreadsheet.
#[derive(Default, Clone)]
pub(crate) struct InMemoryResultsStore {
    records: Arc<Mutex<Vec<CandidateRecord>>>,
}

impl ResultsStore for InMemoryResultsStore {
    fn append(&self, record: CandidateRecord) -> Result<(), RepositoryError> {
        lock(&self.records)?.push(record);
        Ok(())
    }

    fn list(&self, job: Option<&JobId>) -> Result<Vec<CandidateRecord>, RepositoryError> {
        let guard = lock(&self.records)?;
        Ok(guard
            .iter()
            .filter(|record| job.is_none() || record.job_id.as_ref() == job)
            .cloned()
            .collect())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryJobRepository {
    jobs: Arc<Mutex<HashMap<JobId, Job>>>,
}

impl JobRepository for InMemoryJobRepository {
    fn insert(&self, job: Job) -> Result<Job, RepositoryError> {
        let mut guard = lock(&self.jobs)?;
        if guard.contains_key(&job.job_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(job.job_id.clone(), job.clone());
        Ok(job)
    }

    fn fetch(&self, id: &JobId) -> Result<Option<Job>, RepositoryError> {
        let guard = lock(&self.jobs)?;
        Ok(guard.get(id).cloned())
    }
}

/// Answers file for the `score` command: a JSON object keyed by question id.
pub(crate) fn read_answers(path: &Path) -> Result<AnswerMap, hr_assess::error::AppError> {
    let raw = std::fs::read(path)?;
    Ok(serde_json::from_slice(&raw)?)
}
