use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{AnswerMap, JobId, SessionId};
use super::repository::{RepositoryError, ResultsStore, SessionRepository};
use super::service::{AssessmentService, AssessmentServiceError, SessionView};
use crate::workflows::hr::repository::JobRepository;

#[derive(Debug, Deserialize)]
pub(crate) struct StartRequest {
    pub(crate) candidate_name: String,
    #[serde(default)]
    pub(crate) job_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SubmitRequest {
    pub(crate) answers: AnswerMap,
}

/// Router builder exposing the candidate-facing quiz endpoints.
pub fn assessment_router<S, R, J>(service: Arc<AssessmentService<S, R, J>>) -> Router
where
    S: SessionRepository + 'static,
    R: ResultsStore + 'static,
    J: JobRepository + 'static,
{
    Router::new()
        .route("/api/v1/assessment/catalog", get(catalog_handler::<S, R, J>))
        .route("/api/v1/assessment/sessions", post(start_handler::<S, R, J>))
        .route(
            "/api/v1/assessment/sessions/:session_id",
            get(session_handler::<S, R, J>),
        )
        .route(
            "/api/v1/assessment/sessions/:session_id/sections/:section_id",
            post(submit_handler::<S, R, J>),
        )
        .route(
            "/api/v1/assessment/sessions/:session_id/complete",
            post(complete_handler::<S, R, J>),
        )
        .route(
            "/api/v1/assessment/sessions/:session_id/report-context",
            get(report_context_handler::<S, R, J>),
        )
        .with_state(service)
}

fn error_response(error: AssessmentServiceError) -> Response {
    let status = match &error {
        AssessmentServiceError::UnknownSession(_) | AssessmentServiceError::UnknownJob(_) => {
            StatusCode::NOT_FOUND
        }
        AssessmentServiceError::MissingCandidateName
        | AssessmentServiceError::UnknownSection(_)
        | AssessmentServiceError::SessionCompleted(_) => StatusCode::UNPROCESSABLE_ENTITY,
        AssessmentServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        AssessmentServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        AssessmentServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}

pub(crate) async fn catalog_handler<S, R, J>(
    State(service): State<Arc<AssessmentService<S, R, J>>>,
) -> Response
where
    S: SessionRepository + 'static,
    R: ResultsStore + 'static,
    J: JobRepository + 'static,
{
    (StatusCode::OK, axum::Json(service.catalog().to_vec())).into_response()
}

pub(crate) async fn start_handler<S, R, J>(
    State(service): State<Arc<AssessmentService<S, R, J>>>,
    axum::Json(request): axum::Json<StartRequest>,
) -> Response
where
    S: SessionRepository + 'static,
    R: ResultsStore + 'static,
    J: JobRepository + 'static,
{
    let job_id = request.job_id.map(JobId);
    match service.start(&request.candidate_name, job_id) {
        Ok(session) => {
            let view = SessionView::from(session);
            (StatusCode::CREATED, axum::Json(view)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn session_handler<S, R, J>(
    State(service): State<Arc<AssessmentService<S, R, J>>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: SessionRepository + 'static,
    R: ResultsStore + 'static,
    J: JobRepository + 'static,
{
    match service.get(&SessionId(session_id)) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn submit_handler<S, R, J>(
    State(service): State<Arc<AssessmentService<S, R, J>>>,
    Path((session_id, section_id)): Path<(String, String)>,
    axum::Json(request): axum::Json<SubmitRequest>,
) -> Response
where
    S: SessionRepository + 'static,
    R: ResultsStore + 'static,
    J: JobRepository + 'static,
{
    match service.submit_section(&SessionId(session_id), &section_id, request.answers) {
        Ok(result) => (StatusCode::OK, axum::Json(result)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn complete_handler<S, R, J>(
    State(service): State<Arc<AssessmentService<S, R, J>>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: SessionRepository + 'static,
    R: ResultsStore + 'static,
    J: JobRepository + 'static,
{
    match service.complete(&SessionId(session_id)) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn report_context_handler<S, R, J>(
    State(service): State<Arc<AssessmentService<S, R, J>>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: SessionRepository + 'static,
    R: ResultsStore + 'static,
    J: JobRepository + 'static,
{
    match service.report_context(&SessionId(session_id)) {
        Ok(context) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            context,
        )
            .into_response(),
        Err(error) => error_response(error),
    }
}
