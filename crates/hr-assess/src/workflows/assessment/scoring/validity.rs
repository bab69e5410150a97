use serde::{Deserialize, Serialize};

use super::super::domain::AnswerMap;
use super::super::rubric::ValidityChecks;

pub const VALID_LABEL: &str = "Valid";
pub const FAIL_LABEL: &str = "FAIL";

/// Advisory attention and social-desirability signals. A failed check flags the report but
/// never blocks scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidityProfile {
    pub attention_passed: bool,
    pub lie_score: f64,
    pub status_label: String,
}

impl ValidityProfile {
    pub fn is_valid(&self) -> bool {
        self.attention_passed
    }
}

pub fn check_validity(answers: &AnswerMap, checks: &ValidityChecks) -> ValidityProfile {
    let attention_passed = answers
        .get(&checks.attention_id)
        .and_then(|answer| answer.as_score())
        .is_some_and(|value| value == checks.attention_expected);

    let lie_total: f64 = checks
        .lie_ids
        .iter()
        .map(|id| {
            answers
                .get(id)
                .and_then(|answer| answer.as_score())
                .unwrap_or(0.0)
        })
        .sum();
    let lie_score = lie_total / checks.lie_ids.len() as f64;

    let status_label = if attention_passed {
        VALID_LABEL
    } else {
        FAIL_LABEL
    };

    ValidityProfile {
        attention_passed,
        lie_score,
        status_label: status_label.to_string(),
    }
}
