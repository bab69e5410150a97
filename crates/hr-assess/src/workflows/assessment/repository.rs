use super::domain::{JobId, SessionId};
use super::session::AssessmentSession;
use super::summary::CandidateRecord;

/// Storage for in-progress candidate sessions.
pub trait SessionRepository: Send + Sync {
    fn insert(&self, session: AssessmentSession) -> Result<AssessmentSession, RepositoryError>;
    fn fetch(&self, id: &SessionId) -> Result<Option<AssessmentSession>, RepositoryError>;

    /// Apply `change` to the stored session without letting another writer interleave.
    /// Returns `None` when the session does not exist.
    fn modify<T, F>(&self, id: &SessionId, change: F) -> Result<Option<T>, RepositoryError>
    where
        F: FnOnce(&mut AssessmentSession) -> T;
}

/// Destination for completed candidate records (the shared results spreadsheet in production).
pub trait ResultsStore: Send + Sync {
    fn append(&self, record: CandidateRecord) -> Result<(), RepositoryError>;
    fn list(&self, job: Option<&JobId>) -> Result<Vec<CandidateRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
