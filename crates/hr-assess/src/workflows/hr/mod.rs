//! HR console: jobs with target benchmarks, candidate dashboards, and exports.

pub mod domain;
pub mod export;
pub mod fit;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{CandidateReport, Job, JobDraft};
pub use export::{candidates_csv, write_candidates, ExportError};
pub use fit::{
    calculate_fit, Benchmark, BenchmarkError, FitMetric, FitMetrics, FitReport, MetricGap,
};
pub use repository::JobRepository;
pub use router::{hr_router, ACCESS_CODE_HEADER};
pub use service::{HrConsoleService, HrServiceError};
