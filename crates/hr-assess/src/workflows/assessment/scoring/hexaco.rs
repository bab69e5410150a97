use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::super::domain::{AnswerMap, HexacoFactor};
use super::super::rubric::TraitKey;
use super::round_to;

const LIKERT_MAX: f64 = 5.0;

/// Aggregated result for one personality factor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HexacoScore {
    pub factor: String,
    pub code: HexacoFactor,
    pub raw_score: f64,
    pub question_count: u32,
    pub average: f64,
    pub percentage: f64,
}

impl HexacoScore {
    fn from_totals(code: HexacoFactor, raw_score: f64, question_count: u32) -> Self {
        let (average, percentage) = if question_count == 0 {
            (0.0, 0.0)
        } else {
            let count = f64::from(question_count);
            (
                round_to(raw_score / count, 2),
                raw_score * 100.0 / (count * LIKERT_MAX),
            )
        };

        Self {
            factor: code.label().to_string(),
            code,
            raw_score,
            question_count,
            average,
            percentage,
        }
    }
}

/// Six factor records in H, E, X, A, C, O order, whatever was answered.
pub fn score_hexaco(answers: &AnswerMap, keys: &BTreeMap<String, TraitKey>) -> Vec<HexacoScore> {
    let mut totals: BTreeMap<HexacoFactor, (f64, u32)> = HexacoFactor::ALL
        .iter()
        .map(|factor| (*factor, (0.0, 0)))
        .collect();

    for (question_id, answer) in answers {
        let (Some(key), Some(value)) = (keys.get(question_id), answer.as_score()) else {
            continue;
        };
        let value = if key.reverse {
            LIKERT_MAX + 1.0 - value
        } else {
            value
        };
        let entry = totals.entry(key.code).or_insert((0.0, 0));
        entry.0 += value;
        entry.1 += 1;
    }

    HexacoFactor::ALL
        .iter()
        .map(|factor| {
            let (sum, count) = totals.get(factor).copied().unwrap_or((0.0, 0));
            HexacoScore::from_totals(*factor, sum, count)
        })
        .collect()
}

pub(crate) fn factor(scores: &[HexacoScore], code: HexacoFactor) -> Option<&HexacoScore> {
    scores.iter().find(|score| score.code == code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::assessment::domain::AnswerValue;
    use crate::workflows::assessment::rubric::ScoringRubric;

    fn single_key(reverse: bool) -> BTreeMap<String, TraitKey> {
        BTreeMap::from([(
            "q1".to_string(),
            TraitKey {
                code: HexacoFactor::H,
                reverse,
            },
        )])
    }

    fn answers(pairs: &[(&str, f64)]) -> AnswerMap {
        pairs
            .iter()
            .map(|(id, value)| (id.to_string(), AnswerValue::Score(*value)))
            .collect()
    }

    #[test]
    fn always_emits_six_factors() {
        let scores = score_hexaco(&AnswerMap::new(), &ScoringRubric::standard().trait_keys);

        let codes: Vec<_> = scores.iter().map(|score| score.code).collect();
        assert_eq!(codes, HexacoFactor::ALL.to_vec());
        assert!(scores
            .iter()
            .all(|score| score.average == 0.0 && score.percentage == 0.0));
    }

    #[test]
    fn forward_item_scores_raw_value() {
        let scores = score_hexaco(&answers(&[("q1", 4.0)]), &single_key(false));
        let honesty = factor(&scores, HexacoFactor::H).expect("H present");

        assert_eq!(honesty.average, 4.0);
        assert_eq!(honesty.percentage, 80.0);
        assert_eq!(honesty.question_count, 1);
    }

    #[test]
    fn reverse_item_scores_mirrored_value() {
        let scores = score_hexaco(&answers(&[("q1", 4.0)]), &single_key(true));
        let honesty = factor(&scores, HexacoFactor::H).expect("H present");

        assert_eq!(honesty.average, 2.0);
        assert_eq!(honesty.percentage, 40.0);
    }

    #[test]
    fn reverse_extremes_swap() {
        let low = score_hexaco(&answers(&[("q1", 1.0)]), &single_key(true));
        let high = score_hexaco(&answers(&[("q1", 5.0)]), &single_key(true));

        assert_eq!(low[0].raw_score, 5.0);
        assert_eq!(high[0].raw_score, 1.0);
    }

    #[test]
    fn ignores_unknown_ids_and_text() {
        let mut map = answers(&[("q1", 3.0), ("unknown", 5.0)]);
        map.insert("q2".to_string(), AnswerValue::Text("n/a".to_string()));
        let mut keys = single_key(false);
        keys.insert(
            "q2".to_string(),
            TraitKey {
                code: HexacoFactor::H,
                reverse: false,
            },
        );

        let scores = score_hexaco(&map, &keys);
        let honesty = factor(&scores, HexacoFactor::H).expect("H present");
        assert_eq!(honesty.question_count, 1);
        assert_eq!(honesty.raw_score, 3.0);
    }

    #[test]
    fn average_rounds_to_two_places() {
        let keys: BTreeMap<_, _> = ["a", "b", "c"]
            .iter()
            .map(|id| {
                (
                    id.to_string(),
                    TraitKey {
                        code: HexacoFactor::C,
                        reverse: false,
                    },
                )
            })
            .collect();
        let scores = score_hexaco(&answers(&[("a", 4.0), ("b", 4.0), ("c", 5.0)]), &keys);
        let conscientiousness = factor(&scores, HexacoFactor::C).expect("C present");

        assert_eq!(conscientiousness.average, 4.33);
        assert!((1.0..=5.0).contains(&conscientiousness.average));
        assert!(conscientiousness.percentage <= 100.0);
    }
}
