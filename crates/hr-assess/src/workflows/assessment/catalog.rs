//! Bundled five-section quiz served to candidates.

use super::domain::{AnswerType, Question, QuestionOption, Section, SectionKind};
use super::rubric::{ATTENTION_CHECK_ID, LIE_ITEM_IDS};

pub const COGNITIVE_SECTION: &str = "cognitive";
pub const PERSONALITY_SECTION: &str = "personality";
pub const MOTIVATION_SECTION: &str = "motivation";
pub const SJT_SECTION: &str = "sjt";
pub const WORK_SAMPLE_SECTION: &str = "work_sample";

const LIKERT_5: &[&str] = &[
    "Strongly disagree",
    "Disagree",
    "Neutral",
    "Agree",
    "Strongly agree",
];

const LIKERT_6: &[&str] = &[
    "Not like me at all",
    "Not like me",
    "A little like me",
    "Somewhat like me",
    "Like me",
    "Very much like me",
];

/// (id, prompt, options, index of the correct option)
#[rustfmt::skip]
const COGNITIVE_ITEMS: &[(&str, &str, &[&str], usize)] = &[
    ("cg01", "Continue the series: 2, 4, 8, 16, ...", &["24", "32", "30", "18"], 1),
    ("cg02", "Which word does not belong: apple, pear, carrot, plum?", &["apple", "pear", "carrot", "plum"], 2),
    ("cg03", "A shirt costs 800 after a 20% discount. What was the original price?", &["960", "1000", "1100", "900"], 1),
    ("cg04", "If all managers are employees and some employees are remote, which is certain?", &["All managers are remote", "Some managers are remote", "No conclusion about managers being remote", "No employees are managers"], 2),
    ("cg05", "Continue the series: 3, 6, 11, 18, 27, ...", &["36", "38", "35", "40"], 1),
    ("cg06", "Book is to reading as fork is to ...", &["kitchen", "eating", "spoon", "metal"], 1),
    ("cg07", "Three workers finish a task in 6 hours. How long do 9 workers need?", &["1 hour", "2 hours", "3 hours", "18 hours"], 1),
    ("cg08", "Which number is the odd one out: 9, 25, 49, 63, 81?", &["9", "25", "63", "81"], 2),
    ("cg09", "Rearrange 'LPAEP' into a fruit. Which letter comes first?", &["P", "A", "L", "E"], 1),
    ("cg10", "A train leaves at 14:45 and the trip takes 2 h 50 min. When does it arrive?", &["17:25", "17:35", "17:45", "16:35"], 1),
    ("cg11", "Continue the series: A, C, F, J, ...", &["M", "N", "O", "P"], 2),
    ("cg12", "Report sales rose 25% and then fell 20%. Compared with the start they are ...", &["5% higher", "the same", "5% lower", "10% higher"], 1),
];

#[rustfmt::skip]
const PERSONALITY_ITEMS: &[(&str, &str)] = &[
    ("hx01", "I would not take credit for a colleague's idea even if nobody would find out."),
    ("hx02", "I worry a lot about things that might go wrong at work."),
    ("hx03", "I enjoy presenting my work to a large group."),
    ("hx04", "I rarely hold a grudge against people who criticised me."),
    ("hx05", "I plan my tasks before starting the working day."),
    ("hx06", "I like learning tools that are not required for my job."),
    ("hx07", "I would bend the rules if it brought me a bonus."),
    ("hx08", "Stressful deadlines hardly affect my mood."),
    ("hx09", "I prefer to stay in the background at meetings."),
    ("hx10", "I lose patience quickly with slow colleagues."),
    ("hx11", "I often leave work unfinished when something more interesting appears."),
    ("hx12", "I find abstract discussions a waste of time."),
    ("hx13", "I would return extra change a cashier gave me by mistake."),
    ("hx14", "I need support from others when I go through hard times."),
    ("hx15", "I start conversations with strangers easily."),
    ("hx16", "I am willing to compromise even when I think I am right."),
    ("hx17", "I double-check my work for mistakes before handing it in."),
    ("hx18", "I am drawn to unusual ideas and approaches."),
    ("hx19", "I want people to know that I earn more than they do."),
    ("hx20", "I can stay calm in situations others find frightening."),
    ("hx21", "I feel drained after a day of social contact."),
    ("hx22", "I tend to argue until others accept my point."),
    ("hx23", "I make decisions on impulse without weighing the consequences."),
    ("hx24", "I prefer familiar methods to experimenting."),
    (ATTENTION_CHECK_ID, "To show you are reading carefully, select 'Disagree' for this statement."),
    (LIE_ITEM_IDS[0], "I have never been late for anything in my life."),
    (LIE_ITEM_IDS[1], "I have always been completely honest with everyone."),
];

const MOTIVATION_ITEMS: &[(&str, &str)] = &[
    ("mv01", "It matters to me to form my own opinions and ideas."),
    ("mv02", "It matters to me to decide for myself how to do my work."),
    ("mv03", "I look for new and exciting experiences at work."),
    ("mv04", "Having a good time is important to me."),
    ("mv05", "Being recognised as successful is important to me."),
    ("mv06", "I want to be the one who makes decisions for others."),
    ("mv07", "It matters to me to have money and valuable things."),
    ("mv08", "Protecting my public image is important to me."),
    ("mv09", "I avoid anything that might endanger my safety."),
    ("mv10", "A stable and orderly society is important to me."),
    ("mv11", "Keeping up traditional ways of doing things matters to me."),
    ("mv12", "I follow rules even when nobody is watching."),
    ("mv13", "I avoid upsetting other people."),
    ("mv14", "I try not to draw attention to myself."),
    ("mv15", "People close to me can always rely on me."),
    ("mv16", "Caring for the well-being of people around me is important."),
    ("mv17", "Everyone should be treated fairly, even people I do not know."),
    ("mv18", "Protecting nature matters to me."),
    ("mv19", "I listen to people whose views differ from mine."),
];

/// (id, scenario, options with score)
const SJT_ITEMS: &[(&str, &str, &[(&str, f64)])] = &[
    (
        "sj01",
        "A client complains loudly about a delay you did not cause.",
        &[
            ("Explain it is not your fault", 0.0),
            ("Apologise and promise to pass it on", 1.0),
            ("Acknowledge the problem, give a concrete date and follow up", 2.0),
        ],
    ),
    (
        "sj02",
        "You notice a colleague has made an error in a report due today.",
        &[
            ("Ignore it, it is their report", 0.0),
            ("Tell the manager", 1.0),
            ("Point it out privately and offer help to fix it", 2.0),
        ],
    ),
    (
        "sj03",
        "Two urgent tasks arrive from different managers at the same time.",
        &[
            ("Do the one you like more", 0.0),
            ("Try to do both in parallel", 1.0),
            ("Clarify priorities with both managers before starting", 2.0),
        ],
    ),
    (
        "sj04",
        "A new process you were told to follow slows your work down.",
        &[
            ("Quietly return to the old way", 0.0),
            ("Follow it and complain to colleagues", 1.0),
            ("Follow it and propose measured improvements to the owner", 2.0),
        ],
    ),
];

const WORK_SAMPLE_PROMPT: &str = "A key customer threatens to leave after a failed delivery. \
    Write the email you would send them today.";

fn scale_options(labels: &[&str]) -> Vec<QuestionOption> {
    labels
        .iter()
        .enumerate()
        .map(|(index, label)| QuestionOption {
            label: label.to_string(),
            value: (index + 1) as f64,
        })
        .collect()
}

fn likert_section(
    id: &str,
    title: &str,
    kind: SectionKind,
    items: &[(&str, &str)],
    scale: &[&str],
) -> Section {
    Section {
        id: id.to_string(),
        title: title.to_string(),
        kind,
        questions: items
            .iter()
            .map(|(id, prompt)| Question {
                id: id.to_string(),
                prompt: prompt.to_string(),
                answer_type: AnswerType::Likert,
                options: scale_options(scale),
            })
            .collect(),
    }
}

fn cognitive_section() -> Section {
    Section {
        id: COGNITIVE_SECTION.to_string(),
        title: "Cognitive ability".to_string(),
        kind: SectionKind::Cognitive,
        questions: COGNITIVE_ITEMS
            .iter()
            .map(|(id, prompt, options, correct)| Question {
                id: id.to_string(),
                prompt: prompt.to_string(),
                answer_type: AnswerType::Choice,
                options: options
                    .iter()
                    .enumerate()
                    .map(|(index, label)| QuestionOption {
                        label: label.to_string(),
                        value: if index == *correct { 1.0 } else { 0.0 },
                    })
                    .collect(),
            })
            .collect(),
    }
}

fn sjt_section() -> Section {
    Section {
        id: SJT_SECTION.to_string(),
        title: "Situational judgment".to_string(),
        kind: SectionKind::SituationalJudgment,
        questions: SJT_ITEMS
            .iter()
            .map(|(id, prompt, options)| Question {
                id: id.to_string(),
                prompt: prompt.to_string(),
                answer_type: AnswerType::Choice,
                options: options
                    .iter()
                    .map(|(label, value)| QuestionOption {
                        label: label.to_string(),
                        value: *value,
                    })
                    .collect(),
            })
            .collect(),
    }
}

fn work_sample_section() -> Section {
    Section {
        id: WORK_SAMPLE_SECTION.to_string(),
        title: "Work sample".to_string(),
        kind: SectionKind::WorkSample,
        questions: vec![Question {
            id: "ws01".to_string(),
            prompt: WORK_SAMPLE_PROMPT.to_string(),
            answer_type: AnswerType::Text,
            options: Vec::new(),
        }],
    }
}

/// The standard quiz in the order it is presented.
pub fn standard_sections() -> Vec<Section> {
    vec![
        cognitive_section(),
        likert_section(
            PERSONALITY_SECTION,
            "Work style",
            SectionKind::Personality,
            PERSONALITY_ITEMS,
            LIKERT_5,
        ),
        likert_section(
            MOTIVATION_SECTION,
            "Motivation",
            SectionKind::Motivation,
            MOTIVATION_ITEMS,
            LIKERT_6,
        ),
        sjt_section(),
        work_sample_section(),
    ]
}
