use super::domain::Job;
use crate::workflows::assessment::domain::JobId;
use crate::workflows::assessment::repository::RepositoryError;

/// Storage abstraction for HR-authored jobs.
pub trait JobRepository: Send + Sync {
    fn insert(&self, job: Job) -> Result<Job, RepositoryError>;
    fn fetch(&self, id: &JobId) -> Result<Option<Job>, RepositoryError>;
}
