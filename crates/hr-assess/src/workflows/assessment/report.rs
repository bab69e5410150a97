//! Plain-text context handed to the AI report prompt.

use std::fmt::Write as _;

use super::scoring::{SectionDetails, TestResult};
use super::session::AssessmentSession;
use super::summary::CandidateRecord;

fn section_line(result: &TestResult) -> String {
    let mut line = format!("- {}: {:.0}%", result.title, result.percentage);

    match &result.details {
        SectionDetails::Personality { hexaco, validity } => {
            let factors: Vec<String> = hexaco
                .iter()
                .map(|score| format!("{} {:.2}", score.factor, score.average))
                .collect();
            let _ = write!(
                line,
                " | HEXACO: {} | validity {} (lie score {:.1})",
                factors.join(", "),
                validity.status_label,
                validity.lie_score
            );
        }
        SectionDetails::Motivation { profile } => {
            let drivers: Vec<String> = profile
                .top_drivers
                .iter()
                .map(|driver| format!("{}. {} ({:.1})", driver.rank, driver.name, driver.score))
                .collect();
            let _ = write!(line, " | top drivers: {}", drivers.join(", "));
        }
        SectionDetails::WorkSample { text_answer } => {
            let answer = if text_answer.trim().is_empty() {
                "(no answer)"
            } else {
                text_answer.trim()
            };
            let _ = write!(line, " | answer: \"{answer}\"");
        }
        SectionDetails::Cognitive
        | SectionDetails::SituationalJudgment
        | SectionDetails::Custom => {
            let _ = write!(line, " ({}/{})", result.raw_score, result.max_score);
        }
    }

    line
}

/// Natural-language summary of a session, one line per completed section.
pub fn prompt_context(session: &AssessmentSession, record: Option<&CandidateRecord>) -> String {
    let mut context = format!("Candidate: {}\n", session.candidate_name);
    if let Some(job) = &session.job_id {
        let _ = writeln!(context, "Job: {}", job.0);
    }

    context.push_str("Section results:\n");
    for result in &session.results {
        context.push_str(&section_line(result));
        context.push('\n');
    }

    if let Some(record) = record {
        let _ = writeln!(
            context,
            "Summary: IQ {:.0}, reliability {:.2}, emotionality {:.2}, SJT {:.0}, status {}",
            record.metrics.iq,
            record.metrics.reliability,
            record.metrics.emotionality,
            record.metrics.sjt,
            record.status_label
        );
    }

    context
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::assessment::catalog::{standard_sections, WORK_SAMPLE_SECTION};
    use crate::workflows::assessment::domain::{AnswerMap, AnswerValue, SessionId};
    use crate::workflows::assessment::scoring::SectionScorer;
    use chrono::Utc;

    #[test]
    fn includes_work_sample_text_and_percentages() {
        let scorer = SectionScorer::default();
        let section = standard_sections()
            .into_iter()
            .find(|section| section.id == WORK_SAMPLE_SECTION)
            .expect("work sample section");
        let answers = AnswerMap::from([(
            "ws01".to_string(),
            AnswerValue::Text("Dear client, ...".to_string()),
        )]);

        let mut session = AssessmentSession::new(
            SessionId("s-ctx".to_string()),
            "Boris",
            None,
            vec![section.id.clone()],
            Utc::now(),
        );
        session.record(scorer.score(&section, &answers));

        let context = prompt_context(&session, None);
        assert!(context.starts_with("Candidate: Boris"));
        assert!(context.contains("Work sample: 0%"));
        assert!(context.contains("\"Dear client, ...\""));
        assert!(!context.contains("Summary:"));
    }
}
