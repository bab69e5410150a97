use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::fit::{Benchmark, FitReport};
use crate::workflows::assessment::domain::{JobId, Section};
use crate::workflows::assessment::summary::CandidateRecord;

/// Vacancy configured in the HR console.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub job_id: JobId,
    pub title: String,
    pub benchmark: Benchmark,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_sections: Vec<Section>,
    pub created_at: DateTime<Utc>,
}

/// HR input for creating a job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDraft {
    pub title: String,
    pub benchmark: Benchmark,
    #[serde(default)]
    pub custom_sections: Vec<Section>,
}

/// Candidate row on a job dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateReport {
    pub record: CandidateRecord,
    pub fit: FitReport,
}
