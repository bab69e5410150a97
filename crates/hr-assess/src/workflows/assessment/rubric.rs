//! Scoring tables mapping question ids to trait, value, block and driver metadata.
//!
//! `ScoringRubric::standard()` mirrors the bundled question catalog. Alternative rubrics can be
//! deserialized from JSON (see `AssessmentSettings::scoring_rubric`) or built directly in tests.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::{HexacoFactor, MotivationValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitKey {
    pub code: HexacoFactor,
    #[serde(default)]
    pub reverse: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueName {
    pub code: MotivationValue,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotivationBlock {
    pub name: String,
    pub values: Vec<MotivationValue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverLogic {
    pub name: String,
    pub values: Vec<MotivationValue>,
    pub hint: String,
}

/// Reserved validity items embedded in the personality section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidityChecks {
    pub attention_id: String,
    pub attention_expected: f64,
    pub lie_ids: [String; 2],
}

/// Immutable scoring configuration injected into the scorers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringRubric {
    pub trait_keys: BTreeMap<String, TraitKey>,
    pub motivation_map: BTreeMap<String, MotivationValue>,
    /// Declaration order drives the order of value scores in a profile.
    pub value_names: Vec<ValueName>,
    pub blocks: Vec<MotivationBlock>,
    /// Declaration order breaks ties when drivers are ranked.
    pub drivers: Vec<DriverLogic>,
    pub validity: ValidityChecks,
}

pub const ATTENTION_CHECK_ID: &str = "hx_attention";
pub const ATTENTION_EXPECTED: f64 = 2.0;
pub const LIE_ITEM_IDS: [&str; 2] = ["hx_lie1", "hx_lie2"];

use HexacoFactor::{A, C, E, H, O, X};

const TRAIT_KEYS: &[(&str, HexacoFactor, bool)] = &[
    ("hx01", H, false),
    ("hx02", E, false),
    ("hx03", X, false),
    ("hx04", A, false),
    ("hx05", C, false),
    ("hx06", O, false),
    ("hx07", H, true),
    ("hx08", E, true),
    ("hx09", X, true),
    ("hx10", A, true),
    ("hx11", C, true),
    ("hx12", O, true),
    ("hx13", H, false),
    ("hx14", E, false),
    ("hx15", X, false),
    ("hx16", A, false),
    ("hx17", C, false),
    ("hx18", O, false),
    ("hx19", H, true),
    ("hx20", E, true),
    ("hx21", X, true),
    ("hx22", A, true),
    ("hx23", C, true),
    ("hx24", O, true),
];

use MotivationValue::*;

const VALUE_NAMES: &[(MotivationValue, &str)] = &[
    (SelfThought, "Independent thinking"),
    (SelfAction, "Freedom of action"),
    (Stimulation, "Novelty and challenge"),
    (Hedonism, "Enjoyment"),
    (Achievement, "Personal success"),
    (PowerDominance, "Influence over people"),
    (PowerResources, "Control of resources"),
    (Face, "Reputation"),
    (SecurityPersonal, "Personal safety"),
    (SecuritySocietal, "Social order"),
    (Tradition, "Tradition"),
    (ConformityRules, "Following rules"),
    (ConformityInterpersonal, "Tact"),
    (Humility, "Humility"),
    (BenevolenceDependability, "Reliability for the team"),
    (BenevolenceCaring, "Care for colleagues"),
    (UniversalismConcern, "Fairness"),
    (UniversalismNature, "Care for the environment"),
    (UniversalismTolerance, "Tolerance"),
];

const MOTIVATION_KEYS: &[(&str, MotivationValue)] = &[
    ("mv01", SelfThought),
    ("mv02", SelfAction),
    ("mv03", Stimulation),
    ("mv04", Hedonism),
    ("mv05", Achievement),
    ("mv06", PowerDominance),
    ("mv07", PowerResources),
    ("mv08", Face),
    ("mv09", SecurityPersonal),
    ("mv10", SecuritySocietal),
    ("mv11", Tradition),
    ("mv12", ConformityRules),
    ("mv13", ConformityInterpersonal),
    ("mv14", Humility),
    ("mv15", BenevolenceDependability),
    ("mv16", BenevolenceCaring),
    ("mv17", UniversalismConcern),
    ("mv18", UniversalismNature),
    ("mv19", UniversalismTolerance),
];

const BLOCKS: &[(&str, &[MotivationValue])] = &[
    (
        "Openness to change",
        &[SelfThought, SelfAction, Stimulation, Hedonism],
    ),
    (
        "Self-enhancement",
        &[Achievement, PowerDominance, PowerResources, Face],
    ),
    (
        "Conservation",
        &[
            SecurityPersonal,
            SecuritySocietal,
            Tradition,
            ConformityRules,
            ConformityInterpersonal,
            Humility,
        ],
    ),
    (
        "Self-transcendence",
        &[
            BenevolenceDependability,
            BenevolenceCaring,
            UniversalismConcern,
            UniversalismNature,
            UniversalismTolerance,
        ],
    ),
];

const DRIVERS: &[(&str, &[MotivationValue], &str)] = &[
    (
        "Autonomy",
        &[SelfThought, SelfAction],
        "Give ownership of outcomes and room to choose the method.",
    ),
    (
        "Achievement",
        &[Achievement, Face],
        "Set visible goals and recognise results publicly.",
    ),
    (
        "Money and power",
        &[PowerResources, PowerDominance],
        "Tie compensation to results and offer a path to leading people.",
    ),
    (
        "Stability",
        &[SecurityPersonal, SecuritySocietal],
        "Offer a predictable schedule, a clear contract and long-term prospects.",
    ),
    (
        "Novelty",
        &[Stimulation, Hedonism],
        "Rotate projects and keep routine work to a minimum.",
    ),
    (
        "Team spirit",
        &[BenevolenceDependability, BenevolenceCaring],
        "Place in a close-knit team where mutual help is valued.",
    ),
    (
        "Order",
        &[ConformityRules, Tradition, ConformityInterpersonal],
        "Provide written procedures and a clear chain of command.",
    ),
    (
        "Mission",
        &[
            UniversalismConcern,
            UniversalismTolerance,
            UniversalismNature,
        ],
        "Explain the social impact of the work and keep the company's values explicit.",
    ),
];

impl ScoringRubric {
    /// Rubric matching the bundled question catalog.
    pub fn standard() -> Self {
        let trait_keys = TRAIT_KEYS
            .iter()
            .map(|(id, code, reverse)| {
                (
                    id.to_string(),
                    TraitKey {
                        code: *code,
                        reverse: *reverse,
                    },
                )
            })
            .collect();

        let motivation_map = MOTIVATION_KEYS
            .iter()
            .map(|(id, value)| (id.to_string(), *value))
            .collect();

        let value_names = VALUE_NAMES
            .iter()
            .map(|(code, name)| ValueName {
                code: *code,
                name: name.to_string(),
            })
            .collect();

        let blocks = BLOCKS
            .iter()
            .map(|(name, values)| MotivationBlock {
                name: name.to_string(),
                values: values.to_vec(),
            })
            .collect();

        let drivers = DRIVERS
            .iter()
            .map(|(name, values, hint)| DriverLogic {
                name: name.to_string(),
                values: values.to_vec(),
                hint: hint.to_string(),
            })
            .collect();

        Self {
            trait_keys,
            motivation_map,
            value_names,
            blocks,
            drivers,
            validity: ValidityChecks {
                attention_id: ATTENTION_CHECK_ID.to_string(),
                attention_expected: ATTENTION_EXPECTED,
                lie_ids: LIE_ITEM_IDS.map(str::to_string),
            },
        }
    }

    pub fn value_name(&self, code: MotivationValue) -> Option<&str> {
        self.value_names
            .iter()
            .find(|entry| entry.code == code)
            .map(|entry| entry.name.as_str())
    }
}
