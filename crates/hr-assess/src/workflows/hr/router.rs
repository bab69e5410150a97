use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::JobDraft;
use super::fit::{calculate_fit, Benchmark, FitMetrics};
use super::repository::JobRepository;
use super::service::{HrConsoleService, HrServiceError};
use crate::workflows::assessment::domain::JobId;
use crate::workflows::assessment::repository::{RepositoryError, ResultsStore};

pub const ACCESS_CODE_HEADER: &str = "x-access-code";

pub struct HrState<J, R> {
    pub(crate) service: Arc<HrConsoleService<J, R>>,
    pub(crate) access_code: Arc<str>,
}

impl<J, R> Clone for HrState<J, R> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            access_code: self.access_code.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct FitRequest {
    pub(crate) metrics: FitMetrics,
    pub(crate) benchmark: Benchmark,
}

/// Router builder exposing the HR console endpoints behind the shared access code.
pub fn hr_router<J, R>(service: Arc<HrConsoleService<J, R>>, access_code: &str) -> Router
where
    J: JobRepository + 'static,
    R: ResultsStore + 'static,
{
    let state = HrState {
        service,
        access_code: Arc::from(access_code),
    };

    Router::new()
        .route("/api/v1/hr/jobs", post(create_job_handler::<J, R>))
        .route("/api/v1/hr/jobs/:job_id", get(job_handler::<J, R>))
        .route(
            "/api/v1/hr/jobs/:job_id/candidates",
            get(candidates_handler::<J, R>),
        )
        .route(
            "/api/v1/hr/jobs/:job_id/candidates/export",
            get(export_handler::<J, R>),
        )
        .route("/api/v1/hr/fit", post(fit_handler::<J, R>))
        .with_state(state)
}

fn authorize(headers: &HeaderMap, access_code: &str) -> Result<(), Response> {
    let provided = headers
        .get(ACCESS_CODE_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim);

    if provided == Some(access_code) {
        Ok(())
    } else {
        let payload = json!({ "error": "access code required" });
        Err((StatusCode::UNAUTHORIZED, axum::Json(payload)).into_response())
    }
}

fn error_response(error: HrServiceError) -> Response {
    let status = match &error {
        HrServiceError::UnknownJob(_) => StatusCode::NOT_FOUND,
        HrServiceError::MissingTitle
        | HrServiceError::InvalidSection(_)
        | HrServiceError::Benchmark(_) => StatusCode::UNPROCESSABLE_ENTITY,
        HrServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        HrServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        HrServiceError::Repository(RepositoryError::Unavailable(_))
        | HrServiceError::Export(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}

pub(crate) async fn create_job_handler<J, R>(
    State(state): State<HrState<J, R>>,
    headers: HeaderMap,
    axum::Json(draft): axum::Json<JobDraft>,
) -> Response
where
    J: JobRepository + 'static,
    R: ResultsStore + 'static,
{
    if let Err(rejection) = authorize(&headers, &state.access_code) {
        return rejection;
    }

    match state.service.create_job(draft) {
        Ok(job) => (StatusCode::CREATED, axum::Json(job)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn job_handler<J, R>(
    State(state): State<HrState<J, R>>,
    headers: HeaderMap,
    Path(job_id): Path<String>,
) -> Response
where
    J: JobRepository + 'static,
    R: ResultsStore + 'static,
{
    if let Err(rejection) = authorize(&headers, &state.access_code) {
        return rejection;
    }

    match state.service.job(&JobId(job_id)) {
        Ok(job) => (StatusCode::OK, axum::Json(job)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn candidates_handler<J, R>(
    State(state): State<HrState<J, R>>,
    headers: HeaderMap,
    Path(job_id): Path<String>,
) -> Response
where
    J: JobRepository + 'static,
    R: ResultsStore + 'static,
{
    if let Err(rejection) = authorize(&headers, &state.access_code) {
        return rejection;
    }

    match state.service.candidates(&JobId(job_id)) {
        Ok(reports) => (StatusCode::OK, axum::Json(reports)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn export_handler<J, R>(
    State(state): State<HrState<J, R>>,
    headers: HeaderMap,
    Path(job_id): Path<String>,
) -> Response
where
    J: JobRepository + 'static,
    R: ResultsStore + 'static,
{
    if let Err(rejection) = authorize(&headers, &state.access_code) {
        return rejection;
    }

    match state.service.export_candidates(&JobId(job_id)) {
        Ok(csv) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/csv; charset=utf-8")],
            csv,
        )
            .into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn fit_handler<J, R>(
    State(state): State<HrState<J, R>>,
    headers: HeaderMap,
    axum::Json(request): axum::Json<FitRequest>,
) -> Response
where
    J: JobRepository + 'static,
    R: ResultsStore + 'static,
{
    if let Err(rejection) = authorize(&headers, &state.access_code) {
        return rejection;
    }

    if let Err(error) = request.benchmark.validate() {
        return error_response(HrServiceError::Benchmark(error));
    }

    let report = calculate_fit(&request.metrics, &request.benchmark);
    (StatusCode::OK, axum::Json(report)).into_response()
}
