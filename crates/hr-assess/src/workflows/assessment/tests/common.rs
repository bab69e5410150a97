use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::Utc;
use serde_json::Value;

use crate::workflows::assessment::catalog::{
    COGNITIVE_SECTION, MOTIVATION_SECTION, PERSONALITY_SECTION, SJT_SECTION, WORK_SAMPLE_SECTION,
};
use crate::workflows::assessment::domain::{
    AnswerMap, AnswerType, AnswerValue, JobId, Question, QuestionOption, Section, SectionKind,
    SessionId,
};
use crate::workflows::assessment::repository::{
    RepositoryError, ResultsStore, SessionRepository,
};
use crate::workflows::assessment::scoring::SectionScorer;
use crate::workflows::assessment::session::AssessmentSession;
use crate::workflows::assessment::summary::CandidateRecord;
use crate::workflows::assessment::{assessment_router, AssessmentService};
use crate::workflows::hr::domain::Job;
use crate::workflows::hr::fit::Benchmark;
use crate::workflows::hr::repository::JobRepository;

pub(super) type MemoryService = AssessmentService<MemorySessions, MemoryResults, MemoryJobs>;

#[derive(Default, Clone)]
pub(super) struct MemorySessions {
    pub(super) sessions: Arc<Mutex<HashMap<SessionId, AssessmentSession>>>,
}

impl SessionRepository for MemorySessions {
    fn insert(&self, session: AssessmentSession) -> Result<AssessmentSession, RepositoryError> {
        let mut guard = self.sessions.lock().expect("session mutex poisoned");
        if guard.contains_key(&session.session_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(session.session_id.clone(), session.clone());
        Ok(session)
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<AssessmentSession>, RepositoryError> {
        let guard = self.sessions.lock().expect("session mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn modify<T, F>(&self, id: &SessionId, change: F) -> Result<Option<T>, RepositoryError>
    where
        F: FnOnce(&mut AssessmentSession) -> T,
    {
        let mut guard = self.sessions.lock().expect("session mutex poisoned");
        Ok(guard.get_mut(id).map(change))
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryResults {
    records: Arc<Mutex<Vec<CandidateRecord>>>,
}

impl MemoryResults {
    pub(super) fn records(&self) -> Vec<CandidateRecord> {
        self.records.lock().expect("results mutex poisoned").clone()
    }
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

pub(super) struct UnavailableSessions;

impl SessionRepository for UnavailableSessions {
    fn insert(&self, _session: AssessmentSession) -> Result<AssessmentSession, RepositoryError> {
        Err(RepositoryError::Unavailable("sheet offline".to_string()))
    }

    fn fetch(&self, _id: &SessionId) -> Result<Option<AssessmentSession>, RepositoryError> {
        Err(RepositoryError::Unavailable("sheet offline".to_string()))
    }

    fn modify<T, F>(&self, _id: &SessionId, _change: F) -> Result<Option<T>, RepositoryError>
    where
        F: FnOnce(&mut AssessmentSession) -> T,
    {
        Err(RepositoryError::Unavailable("sheet offline".to_string()))
    }
}

pub(super) struct Fixture {
    pub(super) service: Arc<MemoryService>,
    pub(super) sessions: Arc<MemorySessions>,
    pub(super) results: Arc<MemoryResults>,
    pub(super) jobs: Arc<MemoryJobs>,
}

pub(super) fn build_service() -> Fixture {
    let sessions = Arc::new(MemorySessions::default());
    let results = Arc::new(MemoryResults::default());
    let jobs = Arc::new(MemoryJobs::default());
    let service = Arc::new(AssessmentService::new(
        sessions.clone(),
        results.clone(),
        jobs.clone(),
        SectionScorer::default(),
    ));
    Fixture {
        service,
        sessions,
        results,
        jobs,
    }
}

pub(super) fn router_for(fixture: &Fixture) -> axum::Router {
    assessment_router(fixture.service.clone())
}

pub(super) fn section(service: &MemoryService, id: &str) -> Section {
    service
        .catalog()
        .iter()
        .find(|section| section.id == id)
        .cloned()
        .expect("standard section present")
}

/// Same score for every question of a section.
pub(super) fn uniform_answers(section: &Section, score: f64) -> AnswerMap {
    section
        .questions
        .iter()
        .map(|question| (question.id.clone(), AnswerValue::Score(score)))
        .collect()
}

pub(super) fn answers<const N: usize>(pairs: [(&str, f64); N]) -> AnswerMap {
    pairs
        .into_iter()
        .map(|(id, score)| (id.to_string(), AnswerValue::Score(score)))
        .collect()
}

/// Cognitive answers with `correct` of the 12 items right.
pub(super) fn cognitive_answers(service: &MemoryService, correct: usize) -> AnswerMap {
    section(service, COGNITIVE_SECTION)
        .questions
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let score = if index < correct { 1.0 } else { 0.0 };
            (question.id.clone(), AnswerValue::Score(score))
        })
        .collect()
}

/// Personality answers with every trait item at 4, attention passed and modest lie items.
pub(super) fn personality_answers(service: &MemoryService) -> AnswerMap {
    let rubric = service.scorer().rubric();
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
        answers.insert(id.clone(), AnswerValue::Score(2.0));
    }
    answers
}

pub(super) fn complete_candidate(service: &MemoryService, session_id: &SessionId) {
    service
        .submit_section(session_id, COGNITIVE_SECTION, cognitive_answers(service, 9))
        .expect("cognitive accepted");
    service
        .submit_section(
            session_id,
            PERSONALITY_SECTION,
            personality_answers(service),
        )
        .expect("personality accepted");
    service
        .submit_section(
            session_id,
            MOTIVATION_SECTION,
            uniform_answers(&section(service, MOTIVATION_SECTION), 5.0),
        )
        .expect("motivation accepted");
    service
        .submit_section(
            session_id,
            SJT_SECTION,
            uniform_answers(&section(service, SJT_SECTION), 2.0),
        )
        .expect("sjt accepted");
    let mut work = AnswerMap::new();
    work.insert(
        "ws01".to_string(),
        AnswerValue::Text("Apologise, offer a replacement delivery tomorrow.".to_string()),
    );
    service
        .submit_section(session_id, WORK_SAMPLE_SECTION, work)
        .expect("work sample accepted");
}

pub(super) fn custom_section(id: &str) -> Section {
    Section {
        id: id.to_string(),
        title: "Spreadsheet skills".to_string(),
        kind: SectionKind::Custom,
        questions: vec![
            Question {
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
            },
            Question {
                id: format!("{id}-2"),
                prompt: "Which function looks up a value?".to_string(),
                answer_type: AnswerType::Choice,
                options: vec![
                    QuestionOption {
                        label: "VLOOKUP".to_string(),
                        value: 1.0,
                    },
                    QuestionOption {
                        label: "LEN".to_string(),
                        value: 0.0,
                    },
                ],
            },
        ],
    }
}

pub(super) fn store_job(jobs: &MemoryJobs, id: &str, custom_sections: Vec<Section>) -> JobId {
    let job = Job {
        job_id: JobId(id.to_string()),
        title: "Account manager".to_string(),
        benchmark: Benchmark {
            iq: 8.0,
            reliability: 70.0,
            sjt: 6.0,
            hexaco: BTreeMap::new(),
        },
        custom_sections,
        created_at: Utc::now(),
    };
    jobs.insert(job).expect("job stored").job_id
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
