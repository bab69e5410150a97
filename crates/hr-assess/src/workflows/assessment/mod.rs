//! Candidate assessment: the section catalog, scoring engines, sessions, and
//! the summary policy applied when a candidate finishes.

pub mod catalog;
pub mod domain;
pub mod report;
pub mod repository;
pub mod rubric;
pub mod router;
pub mod scoring;
pub mod service;
pub mod session;
pub mod summary;

#[cfg(test)]
mod tests;

pub use catalog::standard_sections;
pub use domain::{
    AnswerMap, AnswerType, AnswerValue, HexacoFactor, JobId, MotivationValue, Question,
    QuestionOption, Section, SectionKind, SessionId,
};
pub use report::prompt_context;
pub use repository::{RepositoryError, ResultsStore, SessionRepository};
pub use router::assessment_router;
pub use rubric::{ScoringRubric, TraitKey, ValidityChecks};
pub use scoring::{
    check_validity, score_hexaco, score_motivation, HexacoScore, MotivationProfile,
    SectionDetails, SectionScorer, TestResult, ValidityProfile,
};
pub use service::{AssessmentService, AssessmentServiceError, SessionView};
pub use session::AssessmentSession;
pub use summary::{CandidateMetrics, CandidateRecord, HiringStatus};
