use crate::infra::{
    read_answers, InMemoryJobRepository, InMemoryResultsStore, InMemorySessionRepository,
};
use clap::Args;
use hr_assess::error::AppError;
use hr_assess::workflows::assessment::{
    standard_sections, AnswerMap, AnswerValue, AssessmentService, AssessmentServiceError,
    ScoringRubric, Section, SectionKind, SectionScorer,
};
use hr_assess::workflows::hr::{Benchmark, HrConsoleService, JobDraft};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Standard section id (cognitive, personality, motivation, sjt, work_sample)
    #[arg(long)]
    pub(crate) section: String,
    /// JSON file mapping question ids to numeric or text answers
    #[arg(long)]
    pub(crate) answers: PathBuf,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Candidate name shown in the demo output
    #[arg(long)]
    pub(crate) candidate: Option<String>,
    /// Number of correct cognitive answers (0-12)
    #[arg(long, default_value_t = 9, value_parser = clap::value_parser!(u8).range(0..=12))]
    pub(crate) correct: u8,
    /// Print the AI report context after the summary
    #[arg(long)]
    pub(crate) show_context: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let section = standard_sections()
        .into_iter()
        .find(|section| section.id == args.section)
        .ok_or(AssessmentServiceError::UnknownSection(args.section))?;
    let answers = read_answers(&args.answers)?;

    let result = SectionScorer::default().score(&section, &answers);
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let candidate = args
        .candidate
        .unwrap_or_else(|| "Demo Candidate".to_string());

    let sessions = Arc::new(InMemorySessionRepository::default());
    let results = Arc::new(InMemoryResultsStore::default());
    let jobs = Arc::new(InMemoryJobRepository::default());
    let scorer = SectionScorer::default();
    let rubric = scorer.rubric().clone();
    let assessment = AssessmentService::new(sessions, results.clone(), jobs.clone(), scorer);
    let console = HrConsoleService::new(jobs, results);

    let job = console.create_job(JobDraft {
        title: "Account manager".to_string(),
        benchmark: Benchmark {
            iq: 8.0,
            reliability: 70.0,
            sjt: 6.0,
            hexaco: BTreeMap::new(),
        },
        custom_sections: Vec::new(),
    })?;

    println!("Candidate assessment demo");
    println!("Job: {} ({})", job.title, job.job_id.0);

    let session = assessment.start(&candidate, Some(job.job_id.clone()))?;
    println!(
        "Session: {} for {}",
        session.session_id.0, session.candidate_name
    );

    println!("\nSection results");
    for section in assessment.catalog() {
        let answers = demo_answers(section, &rubric, usize::from(args.correct));
        let result = assessment.submit_section(&session.session_id, &section.id, answers)?;
        println!(
            "  - {:<22} raw {:>5.2} / {:<5.2} ({:.0}%)",
            result.title, result.raw_score, result.max_score, result.percentage
        );
        if let Some(hexaco) = result.hexaco_profile() {
            for score in hexaco {
                println!("      {:<18} {:.2}", score.factor, score.average);
            }
        }
        if let Some(profile) = result.motivation_profile() {
            for driver in &profile.top_drivers {
                println!(
                    "      #{} {} ({:.1}): {}",
                    driver.rank, driver.name, driver.score, driver.hint
                );
            }
        }
    }

    let record = assessment.complete(&session.session_id)?;
    println!("\nSummary");
    println!("  IQ: {:.0}/12", record.metrics.iq);
    println!(
        "  Reliability: {:.2} ({:.0}%)",
        record.metrics.reliability,
        record.metrics.reliability_percentage()
    );
    println!("  Emotionality: {:.2}", record.metrics.emotionality);
    println!("  SJT: {:.0}/8", record.metrics.sjt);
    if let Some(validity) = &record.validity {
        println!(
            "  Validity: {} (lie score {:.1})",
            validity.status_label, validity.lie_score
        );
    }
    println!("  Status: {}", record.status_label);

    let reports = console.candidates(&job.job_id)?;
    if let Some(report) = reports.first() {
        println!(
            "\nFit against {}: {}%",
            job.title, report.fit.fit_percentage
        );
        for gap in &report.fit.gaps {
            println!(
                "  {:?}: actual {:.1}, target {:.1}, gap {:+.1}",
                gap.metric, gap.actual, gap.target, gap.gap
            );
        }
    }

    if args.show_context {
        println!("\nReport context");
        print!("{}", assessment.report_context(&session.session_id)?);
    }

    println!("\nCSV export");
    print!("{}", console.export_candidates(&job.job_id)?);
    Ok(())
}

fn demo_answers(section: &Section, rubric: &ScoringRubric, correct: usize) -> AnswerMap {
    match section.kind {
        SectionKind::Personality => {
            let mut answers: AnswerMap = rubric
                .trait_keys
                .iter()
                .map(|(id, key)| {
                    let raw = if key.reverse { 2.0 } else { 4.0 };
                    (id.clone(), AnswerValue::Score(raw))
                })
                .collect();
            answers.insert(
                rubric.validity.attention_id.clone(),
                AnswerValue::Score(rubric.validity.attention_expected),
            );
            for id in &rubric.validity.lie_ids {
                answers.insert(id.clone(), AnswerValue::Score(3.0));
            }
            answers
        }
        SectionKind::WorkSample => section
            .questions
            .iter()
            .map(|question| {
                let text = "Apologise, explain the cause, and confirm a new delivery slot today.";
                (question.id.clone(), AnswerValue::Text(text.to_string()))
            })
            .collect(),
        SectionKind::Motivation => section
            .questions
            .iter()
            .enumerate()
            .map(|(index, question)| {
                (question.id.clone(), AnswerValue::Score((index % 6 + 1) as f64))
            })
            .collect(),
        SectionKind::Cognitive => section
            .questions
            .iter()
            .enumerate()
            .map(|(index, question)| {
                let score = if index < correct { 1.0 } else { 0.0 };
                (question.id.clone(), AnswerValue::Score(score))
            })
            .collect(),
        SectionKind::SituationalJudgment | SectionKind::Custom => section
            .questions
            .iter()
            .map(|question| {
                let best = question
                    .options
                    .iter()
                    .map(|option| option.value)
                    .fold(0.0, f64::max);
                (question.id.clone(), AnswerValue::Score(best))
            })
            .collect(),
    }
}
