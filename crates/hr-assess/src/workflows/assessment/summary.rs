use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{HexacoFactor, JobId, SectionKind, SessionId};
use super::scoring::{factor, TestResult, ValidityProfile};
use super::session::AssessmentSession;
use crate::workflows::hr::fit::FitMetrics;

const RECOMMENDED_MIN_IQ: f64 = 6.0;
const RECOMMENDED_MIN_RELIABILITY: f64 = 3.0;
const REJECT_BELOW_IQ: f64 = 4.0;
const REJECT_BELOW_RELIABILITY: f64 = 2.5;
const RELIABILITY_SCALE_MAX: f64 = 5.0;

/// Hiring recommendation shown to HR next to the candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HiringStatus {
    Invalid,
    Recommended,
    NotRecommended,
    NeedsReview,
}

impl HiringStatus {
    pub const fn label(self) -> &'static str {
        match self {
            HiringStatus::Invalid => "ТЕСТ НЕДОСТОВЕРЕН",
            HiringStatus::Recommended => "РЕКОМЕНДОВАН К НАЙМУ",
            HiringStatus::NotRecommended => "НЕ РЕКОМЕНДОВАН",
            HiringStatus::NeedsReview => "ТРЕБУЕТ ПРОВЕРКИ",
        }
    }

    /// `reliability` is on the 1–5 factor-average scale.
    pub fn decide(validity_passed: bool, iq: f64, reliability: f64) -> Self {
        if !validity_passed {
            HiringStatus::Invalid
        } else if iq >= RECOMMENDED_MIN_IQ && reliability >= RECOMMENDED_MIN_RELIABILITY {
            HiringStatus::Recommended
        } else if iq < REJECT_BELOW_IQ || reliability < REJECT_BELOW_RELIABILITY {
            HiringStatus::NotRecommended
        } else {
            HiringStatus::NeedsReview
        }
    }
}

/// Aggregate metrics derived from a session's section results. Missing sections count as 0.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CandidateMetrics {
    pub iq: f64,
    /// Mean of the Conscientiousness and Honesty-Humility averages (1–5).
    pub reliability: f64,
    pub emotionality: f64,
    pub sjt: f64,
}

impl CandidateMetrics {
    pub fn from_results(results: &[TestResult]) -> Self {
        let raw_of = |kind: SectionKind| {
            results
                .iter()
                .find(|result| result.kind() == kind)
                .map(|result| result.raw_score)
                .unwrap_or_default()
        };

        let hexaco = results.iter().find_map(TestResult::hexaco_profile);
        let average = |code: HexacoFactor| {
            hexaco
                .and_then(|scores| factor(scores, code))
                .map(|score| score.average)
                .unwrap_or_default()
        };

        Self {
            iq: raw_of(SectionKind::Cognitive),
            reliability: (average(HexacoFactor::C) + average(HexacoFactor::H)) / 2.0,
            emotionality: average(HexacoFactor::E),
            sjt: raw_of(SectionKind::SituationalJudgment),
        }
    }

    pub fn reliability_percentage(&self) -> f64 {
        self.reliability * 100.0 / RELIABILITY_SCALE_MAX
    }

    /// Metrics on the benchmark scales (iq 0–12, reliability 0–100, sjt 0–8).
    pub fn fit_metrics(&self) -> FitMetrics {
        FitMetrics {
            iq: self.iq,
            reliability: self.reliability_percentage(),
            sjt: self.sjt,
        }
    }
}

/// Row persisted to the results store once a session is completed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub session_id: SessionId,
    pub candidate_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_id: Option<JobId>,
    pub completed_at: DateTime<Utc>,
    pub metrics: CandidateMetrics,
    pub top_drivers: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validity: Option<ValidityProfile>,
    pub status: HiringStatus,
    pub status_label: String,
}

impl CandidateRecord {
    pub fn from_session(session: &AssessmentSession, completed_at: DateTime<Utc>) -> Self {
        let metrics = CandidateMetrics::from_results(&session.results);
        let validity = session
            .results
            .iter()
            .find_map(TestResult::validity_profile)
            .cloned();
        let top_drivers = session
            .results
            .iter()
            .find_map(TestResult::motivation_profile)
            .map(|profile| profile.top_driver_names())
            .unwrap_or_default();

        // Sessions without a personality section never showed the validity items.
        let validity_passed = validity.as_ref().is_none_or(ValidityProfile::is_valid);
        let status = HiringStatus::decide(validity_passed, metrics.iq, metrics.reliability);

        Self {
            session_id: session.session_id.clone(),
            candidate_name: session.candidate_name.clone(),
            job_id: session.job_id.clone(),
            completed_at,
            metrics,
            top_drivers,
            validity,
            status,
            status_label: status.label().to_string(),
        }
    }
}
