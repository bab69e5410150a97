use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Raw answer captured by the quiz runner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Score(f64),
    Text(String),
}

impl AnswerValue {
    pub fn as_score(&self) -> Option<f64> {
        match self {
            AnswerValue::Score(value) => Some(*value),
            AnswerValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AnswerValue::Score(_) => None,
            AnswerValue::Text(text) => Some(text),
        }
    }
}

/// Question id to answer for a single section.
pub type AnswerMap = BTreeMap<String, AnswerValue>;

/// Every numeric answer in the map, in key order.
pub(crate) fn numeric_answers(answers: &AnswerMap) -> impl Iterator<Item = f64> + '_ {
    answers.values().filter_map(AnswerValue::as_score)
}

/// HEXACO personality factor codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HexacoFactor {
    H,
    E,
    X,
    A,
    C,
    O,
}

impl HexacoFactor {
    pub const ALL: [HexacoFactor; 6] = [
        HexacoFactor::H,
        HexacoFactor::E,
        HexacoFactor::X,
        HexacoFactor::A,
        HexacoFactor::C,
        HexacoFactor::O,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            HexacoFactor::H => "Honesty-Humility",
            HexacoFactor::E => "Emotionality",
            HexacoFactor::X => "eXtraversion",
            HexacoFactor::A => "Agreeableness",
            HexacoFactor::C => "Conscientiousness",
            HexacoFactor::O => "Openness",
        }
    }
}

/// Motivational value codes measured by the motivation section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MotivationValue {
    SelfThought,
    SelfAction,
    Stimulation,
    Hedonism,
    Achievement,
    PowerDominance,
    PowerResources,
    Face,
    SecurityPersonal,
    SecuritySocietal,
    Tradition,
    ConformityRules,
    ConformityInterpersonal,
    Humility,
    BenevolenceDependability,
    BenevolenceCaring,
    UniversalismConcern,
    UniversalismNature,
    UniversalismTolerance,
}

/// Scoring strategy applied to a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Cognitive,
    Personality,
    Motivation,
    SituationalJudgment,
    WorkSample,
    Custom,
}

impl SectionKind {
    pub const fn label(self) -> &'static str {
        match self {
            SectionKind::Cognitive => "cognitive",
            SectionKind::Personality => "personality",
            SectionKind::Motivation => "motivation",
            SectionKind::SituationalJudgment => "situational_judgment",
            SectionKind::WorkSample => "work_sample",
            SectionKind::Custom => "custom",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerType {
    Choice,
    Likert,
    Text,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionOption {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub prompt: String,
    pub answer_type: AnswerType,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<QuestionOption>,
}

/// A quiz section as served to the candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    pub kind: SectionKind,
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct JobId(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_deserialize_from_mixed_json() {
        let answers: AnswerMap =
            serde_json::from_str(r#"{"q1": 4, "q2": "free text", "q3": 2.5}"#)
                .expect("answer map parses");

        assert_eq!(answers.get("q1"), Some(&AnswerValue::Score(4.0)));
        assert_eq!(answers["q2"].as_text(), Some("free text"));
        assert_eq!(numeric_answers(&answers).sum::<f64>(), 6.5);
    }

    #[test]
    fn motivation_values_use_screaming_codes() {
        let code = serde_json::to_string(&MotivationValue::SelfThought).expect("serializes");
        assert_eq!(code, "\"SELF_THOUGHT\"");
    }
}
