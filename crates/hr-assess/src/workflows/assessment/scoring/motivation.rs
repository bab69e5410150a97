use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::super::domain::{AnswerMap, MotivationValue};
use super::super::rubric::ScoringRubric;
use super::round_to;

const TOP_DRIVER_COUNT: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueScore {
    pub code: MotivationValue,
    pub name: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockScore {
    pub name: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverScore {
    pub name: String,
    pub score: f64,
    pub rank: usize,
    pub hint: String,
}

/// Values, blocks and ranked drivers for one motivation section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotivationProfile {
    pub values: Vec<ValueScore>,
    pub blocks: Vec<BlockScore>,
    pub drivers: Vec<DriverScore>,
    pub top_drivers: Vec<DriverScore>,
}

impl MotivationProfile {
    pub fn top_driver_names(&self) -> Vec<String> {
        self.top_drivers
            .iter()
            .map(|driver| driver.name.clone())
            .collect()
    }
}

fn mean_of(values: &[ValueScore], members: &[MotivationValue]) -> f64 {
    let scores: Vec<f64> = values
        .iter()
        .filter(|value| members.contains(&value.code))
        .map(|value| value.score)
        .collect();

    if scores.is_empty() {
        0.0
    } else {
        scores.iter().sum::<f64>() / scores.len() as f64
    }
}

/// Every declared value, block and driver appears in the profile, answered or not.
pub fn score_motivation(answers: &AnswerMap, rubric: &ScoringRubric) -> MotivationProfile {
    let mut totals: BTreeMap<MotivationValue, (f64, u32)> = BTreeMap::new();
    for (question_id, answer) in answers {
        let (Some(code), Some(value)) = (rubric.motivation_map.get(question_id), answer.as_score())
        else {
            continue;
        };
        let entry = totals.entry(*code).or_insert((0.0, 0));
        entry.0 += value;
        entry.1 += 1;
    }

    let values: Vec<ValueScore> = rubric
        .value_names
        .iter()
        .map(|entry| {
            let (sum, count) = totals.get(&entry.code).copied().unwrap_or((0.0, 0));
            ValueScore {
                code: entry.code,
                name: entry.name.clone(),
                score: round_to(sum / f64::from(count.max(1)), 1),
            }
        })
        .collect();

    let blocks = rubric
        .blocks
        .iter()
        .map(|block| BlockScore {
            name: block.name.clone(),
            score: round_to(mean_of(&values, &block.values), 2),
        })
        .collect();

    let mut drivers: Vec<DriverScore> = rubric
        .drivers
        .iter()
        .map(|driver| DriverScore {
            name: driver.name.clone(),
            score: round_to(mean_of(&values, &driver.values), 1),
            rank: 0,
            hint: driver.hint.clone(),
        })
        .collect();
    rank_drivers(&mut drivers);

    let top_drivers = drivers.iter().take(TOP_DRIVER_COUNT).cloned().collect();

    tracing::debug!(
        answered = answers.len(),
        drivers = drivers.len(),
        "scored motivation section"
    );

    MotivationProfile {
        values,
        blocks,
        drivers,
        top_drivers,
    }
}

/// Stable descending sort; equal scores keep declaration order.
fn rank_drivers(drivers: &mut [DriverScore]) {
    drivers.sort_by(|a, b| b.score.total_cmp(&a.score));
    for (index, driver) in drivers.iter_mut().enumerate() {
        driver.rank = index + 1;
    }
}
