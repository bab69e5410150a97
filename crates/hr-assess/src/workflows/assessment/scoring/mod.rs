mod hexaco;
mod motivation;
mod validity;

pub use hexaco::{score_hexaco, HexacoScore};
pub use motivation::{score_motivation, BlockScore, DriverScore, MotivationProfile, ValueScore};
pub use validity::{check_validity, ValidityProfile, FAIL_LABEL, VALID_LABEL};

pub(crate) use hexaco::factor;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::domain::{numeric_answers, AnswerMap, HexacoFactor, Section, SectionKind};
use super::rubric::ScoringRubric;

const PERSONALITY_MAX: f64 = 5.0;
const MOTIVATION_MAX: f64 = 6.0;
const SJT_POINTS_PER_QUESTION: f64 = 2.0;

pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

fn percentage(raw_score: f64, max_score: f64) -> f64 {
    if max_score == 0.0 {
        0.0
    } else {
        raw_score * 100.0 / max_score
    }
}

/// Kind-specific payload attached to a section result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SectionDetails {
    Cognitive,
    Personality {
        hexaco: Vec<HexacoScore>,
        validity: ValidityProfile,
    },
    Motivation {
        profile: MotivationProfile,
    },
    SituationalJudgment,
    WorkSample {
        text_answer: String,
    },
    Custom,
}

impl SectionDetails {
    pub const fn kind(&self) -> SectionKind {
        match self {
            SectionDetails::Cognitive => SectionKind::Cognitive,
            SectionDetails::Personality { .. } => SectionKind::Personality,
            SectionDetails::Motivation { .. } => SectionKind::Motivation,
            SectionDetails::SituationalJudgment => SectionKind::SituationalJudgment,
            SectionDetails::WorkSample { .. } => SectionKind::WorkSample,
            SectionDetails::Custom => SectionKind::Custom,
        }
    }
}

/// Result recorded once per completed section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    pub section_id: String,
    pub title: String,
    pub raw_score: f64,
    pub max_score: f64,
    pub percentage: f64,
    pub answers: AnswerMap,
    pub details: SectionDetails,
}

impl TestResult {
    pub fn kind(&self) -> SectionKind {
        self.details.kind()
    }

    pub fn hexaco_profile(&self) -> Option<&[HexacoScore]> {
        match &self.details {
            SectionDetails::Personality { hexaco, .. } => Some(hexaco),
            _ => None,
        }
    }

    pub fn validity_profile(&self) -> Option<&ValidityProfile> {
        match &self.details {
            SectionDetails::Personality { validity, .. } => Some(validity),
            _ => None,
        }
    }

    pub fn motivation_profile(&self) -> Option<&MotivationProfile> {
        match &self.details {
            SectionDetails::Motivation { profile } => Some(profile),
            _ => None,
        }
    }

    pub fn text_answer(&self) -> Option<&str> {
        match &self.details {
            SectionDetails::WorkSample { text_answer } => Some(text_answer),
            _ => None,
        }
    }
}

/// Stateless dispatcher choosing the aggregation strategy by section kind.
#[derive(Debug, Clone)]
pub struct SectionScorer {
    rubric: Arc<ScoringRubric>,
}

impl SectionScorer {
    pub fn new(rubric: ScoringRubric) -> Self {
        Self {
            rubric: Arc::new(rubric),
        }
    }

    pub fn rubric(&self) -> &ScoringRubric {
        &self.rubric
    }

    pub fn score(&self, section: &Section, answers: &AnswerMap) -> TestResult {
        let question_count = section.questions.len() as f64;
        let scoped = section_answers(section, answers);

        let (raw_score, max_score, details) = match section.kind {
            SectionKind::Personality => {
                let hexaco = score_hexaco(&scoped, &self.rubric.trait_keys);
                let validity = check_validity(&scoped, &self.rubric.validity);
                let raw = factor(&hexaco, HexacoFactor::C)
                    .map(|score| score.average)
                    .unwrap_or_default();
                (
                    raw,
                    PERSONALITY_MAX,
                    SectionDetails::Personality { hexaco, validity },
                )
            }
            SectionKind::Motivation => {
                let scores: Vec<f64> = numeric_answers(&scoped).collect();
                let raw = if scores.is_empty() {
                    0.0
                } else {
                    scores.iter().sum::<f64>() / scores.len() as f64
                };
                let profile = score_motivation(&scoped, &self.rubric);
                (raw, MOTIVATION_MAX, SectionDetails::Motivation { profile })
            }
            SectionKind::SituationalJudgment => (
                numeric_answers(&scoped).sum(),
                SJT_POINTS_PER_QUESTION * question_count,
                SectionDetails::SituationalJudgment,
            ),
            SectionKind::WorkSample => (
                0.0,
                0.0,
                SectionDetails::WorkSample {
                    text_answer: free_text(section, answers),
                },
            ),
            SectionKind::Cognitive => (
                numeric_answers(&scoped).sum(),
                question_count,
                SectionDetails::Cognitive,
            ),
            SectionKind::Custom => (
                numeric_answers(&scoped).sum(),
                question_count,
                SectionDetails::Custom,
            ),
        };

        tracing::debug!(
            section = %section.id,
            kind = section.kind.label(),
            raw_score,
            max_score,
            "scored section"
        );

        TestResult {
            section_id: section.id.clone(),
            title: section.title.clone(),
            raw_score,
            max_score,
            percentage: percentage(raw_score, max_score),
            answers: answers.clone(),
            details,
        }
    }
}

impl Default for SectionScorer {
    fn default() -> Self {
        Self::new(ScoringRubric::standard())
    }
}

/// Answers keyed by the section's own question ids; anything else scores nothing.
fn section_answers(section: &Section, answers: &AnswerMap) -> AnswerMap {
    section
        .questions
        .iter()
        .filter_map(|question| answers.get_key_value(&question.id))
        .map(|(id, answer)| (id.clone(), answer.clone()))
        .collect()
}

/// The candidate's free-text response, preferring the section's own question order.
fn free_text(section: &Section, answers: &AnswerMap) -> String {
    section
        .questions
        .iter()
        .filter_map(|question| answers.get(&question.id))
        .chain(answers.values())
        .find_map(|answer| answer.as_text())
        .map(str::to_string)
        .unwrap_or_default()
}
