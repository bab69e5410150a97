use std::cmp::Reverse;
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use super::domain::{CandidateReport, Job, JobDraft};
use super::export::{candidates_csv, ExportError};
use super::fit::{calculate_fit, BenchmarkError};
use super::repository::JobRepository;
use crate::workflows::assessment::catalog::standard_sections;
use crate::workflows::assessment::domain::{JobId, SectionKind};
use crate::workflows::assessment::repository::{RepositoryError, ResultsStore};

/// HR console operations: job authoring and candidate review.
pub struct HrConsoleService<J, R> {
    jobs: Arc<J>,
    results: Arc<R>,
}

static JOB_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_job_id() -> JobId {
    let id = JOB_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    JobId(format!("job-{id:04}"))
}

impl<J, R> HrConsoleService<J, R>
where
    J: JobRepository + 'static,
    R: ResultsStore + 'static,
{
    pub fn new(jobs: Arc<J>, results: Arc<R>) -> Self {
        Self { jobs, results }
    }

    /// Validate and store a new job with its benchmark and custom sections.
    pub fn create_job(&self, draft: JobDraft) -> Result<Job, HrServiceError> {
        let title = draft.title.trim();
        if title.is_empty() {
            return Err(HrServiceError::MissingTitle);
        }
        draft.benchmark.validate()?;
        validate_custom_sections(&draft)?;

        let job = Job {
            job_id: next_job_id(),
            title: title.to_string(),
            benchmark: draft.benchmark,
            custom_sections: draft.custom_sections,
            created_at: Utc::now(),
        };
        let stored = self.jobs.insert(job)?;

        info!(
            job_id = %stored.job_id.0,
            custom_sections = stored.custom_sections.len(),
            "job created"
        );
        Ok(stored)
    }

    pub fn job(&self, job_id: &JobId) -> Result<Job, HrServiceError> {
        self.jobs
            .fetch(job_id)?
            .ok_or_else(|| HrServiceError::UnknownJob(job_id.0.clone()))
    }

    /// Completed candidates for the job, best fit first.
    pub fn candidates(&self, job_id: &JobId) -> Result<Vec<CandidateReport>, HrServiceError> {
        let job = self.job(job_id)?;
        let mut reports: Vec<CandidateReport> = self
            .results
            .list(Some(job_id))?
            .into_iter()
            .map(|record| {
                let fit = calculate_fit(&record.metrics.fit_metrics(), &job.benchmark);
                CandidateReport { record, fit }
            })
            .collect();
        reports.sort_by_key(|report| Reverse(report.fit.fit_percentage));
        Ok(reports)
    }

    pub fn export_candidates(&self, job_id: &JobId) -> Result<String, HrServiceError> {
        let reports = self.candidates(job_id)?;
        let csv = candidates_csv(&reports)?;
        info!(job_id = %job_id.0, rows = reports.len(), "candidate export produced");
        Ok(csv)
    }
}

fn validate_custom_sections(draft: &JobDraft) -> Result<(), HrServiceError> {
    let reserved: HashSet<String> = standard_sections()
        .into_iter()
        .map(|section| section.id)
        .collect();
    let mut seen = HashSet::new();

    for section in &draft.custom_sections {
        if section.kind != SectionKind::Custom {
            return Err(HrServiceError::InvalidSection(format!(
                "section '{}' must use the custom kind",
                section.id
            )));
        }
        if section.questions.is_empty() {
            return Err(HrServiceError::InvalidSection(format!(
                "section '{}' has no questions",
                section.id
            )));
        }
        if reserved.contains(&section.id) || !seen.insert(section.id.as_str()) {
            return Err(HrServiceError::InvalidSection(format!(
                "section id '{}' is already in use",
                section.id
            )));
        }
    }

    Ok(())
}

/// Error raised by the HR console service.
#[derive(Debug, thiserror::Error)]
pub enum HrServiceError {
    #[error("job title is required")]
    MissingTitle,
    #[error("job {0} not found")]
    UnknownJob(String),
    #[error("invalid custom section: {0}")]
    InvalidSection(String),
    #[error(transparent)]
    Benchmark(#[from] BenchmarkError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Export(#[from] ExportError),
}
