use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::Utc;
use serde_json::Value;

use crate::workflows::assessment::catalog::{
    standard_sections, COGNITIVE_SECTION, PERSONALITY_SECTION, SJT_SECTION,
};
use crate::workflows::assessment::domain::{
    AnswerMap, AnswerType, AnswerValue, JobId, Question, QuestionOption, Section, SectionKind,
    SessionId,
};
use crate::workflows::assessment::repository::{RepositoryError, ResultsStore};
use crate::workflows::assessment::scoring::SectionScorer;
use crate::workflows::assessment::session::AssessmentSession;
use crate::workflows::assessment::summary::CandidateRecord;
use crate::workflows::hr::domain::{Job, JobDraft};
use crate::workflows::hr::fit::Benchmark;
use crate::workflows::hr::repository::JobRepository;
use crate::workflows::hr::service::HrConsoleService;

pub(super) const ACCESS_CODE: &str = "hr-test";

pub(super) type MemoryConsole = HrConsoleService<MemoryJobs, MemoryResults>;

#[derive(Default, Clone)]
pub(super) struct MemoryJobs {
    jobs: Arc<Mutex<HashMap<JobId, Job>>>,
}

impl JobRepository for MemoryJobs {
    fn insert(&self, job: Job) -> Result<Job, RepositoryError> {
        let mut guard = self.jobs.lock().expect("job mutex poisoned");
        if guard.contains_key(&job.job_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(job.job_id.clone(), job.clone());
        Ok(job)
    }

    fn fetch(&self, id: &JobId) -> Result<Option<Job>, RepositoryError> {
        let guard = self.jobs.lock().expect("job mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryResults {
    records: Arc<Mutex<Vec<CandidateRecord>>>,
}

impl ResultsStore for MemoryResults {
    fn append(&self, record: CandidateRecord) -> Result<(), RepositoryError> {
        self.records
            .lock()
            .expect("results mutex poisoned")
            .push(record);
        Ok(())
    }

    fn list(&self, job: Option<&JobId>) -> Result<Vec<CandidateRecord>, RepositoryError> {
        let guard = self.records.lock().expect("results mutex poisoned");
        Ok(guard
            .iter()
            .filter(|record| job.is_none() || record.job_id.as_ref() == job)
            .cloned()
            .collect())
    }
}

pub(super) struct Fixture {
    pub(super) console: Arc<MemoryConsole>,
    pub(super) results: Arc<MemoryResults>,
}

pub(super) fn build_console() -> Fixture {
    let jobs = Arc::new(MemoryJobs::default());
    let results = Arc::new(MemoryResults::default());
    let console = Arc::new(HrConsoleService::new(jobs, results.clone()));
    Fixture { console, results }
}

pub(super) fn draft(title: &str) -> JobDraft {
    JobDraft {
        title: title.to_string(),
        benchmark: Benchmark {
            iq: 9.0,
            reliability: 80.0,
            sjt: 8.0,
            hexaco: BTreeMap::new(),
        },
        custom_sections: Vec::new(),
    }
}

pub(super) fn custom_section(id: &str) -> Section {
    Section {
        id: id.to_string(),
        title: "Spreadsheet skills".to_string(),
        kind: SectionKind::Custom,
        questions: vec![Question {
            id: format!("{id}-1"),
            prompt: "Which function sums a range?".to_string(),
            answer_type: AnswerType::Choice,
            options: vec![
                QuestionOption {
                    label: "SUM".to_string(),
                    value: 1.0,
                },
                QuestionOption {
                    label: "COUNT".to_string(),
                    value: 0.0,
                },
            ],
        }],
    }
}

/// Completed candidate with `correct` cognitive items, trait items at 4 and `sjt` points per item.
pub(super) fn candidate(name: &str, job_id: &JobId, correct: usize, sjt: f64) -> CandidateRecord {
    let scorer = SectionScorer::default();
    let sections = standard_sections();
    let section = |id: &str| {
        sections
            .iter()
            .find(|section| section.id == id)
            .expect("standard section present")
    };

    let mut session = AssessmentSession::new(
        SessionId(format!("session-{name}")),
        name,
        Some(job_id.clone()),
        sections.iter().map(|section| section.id.clone()).collect(),
        Utc::now(),
    );

    let cognitive = section(COGNITIVE_SECTION);
    let answers: AnswerMap = cognitive
        .questions
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let score = if index < correct { 1.0 } else { 0.0 };
            (question.id.clone(), AnswerValue::Score(score))
        })
        .collect();
    session.record(scorer.score(cognitive, &answers));

    let rubric = scorer.rubric();
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
    session.record(scorer.score(section(PERSONALITY_SECTION), &answers));

    let situational = section(SJT_SECTION);
    let answers: AnswerMap = situational
        .questions
        .iter()
        .map(|question| (question.id.clone(), AnswerValue::Score(sjt)))
        .collect();
    session.record(scorer.score(situational, &answers));

    let completed_at = Utc::now();
    session.mark_completed(completed_at);
    CandidateRecord::from_session(&session, completed_at)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
