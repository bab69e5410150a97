use crate::cli::ServeArgs;
use crate::infra::{
    AppState, InMemoryJobRepository, InMemoryResultsStore, InMemorySessionRepository,
};
use crate::routes::with_assessment_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use hr_assess::config::AppConfig;
use hr_assess::error::AppError;
use hr_assess::telemetry;
use hr_assess::workflows::assessment::{AssessmentService, SectionScorer};
use hr_assess::workflows::hr::HrConsoleService;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let rubric = config.assessment.scoring_rubric()?;
    let sessions = Arc::new(InMemorySessionRepository::default());
    let results = Arc::new(InMemoryResultsStore::default());
    let jobs = Arc::new(InMemoryJobRepository::default());
    let assessment_service = Arc::new(AssessmentService::new(
        sessions,
        results.clone(),
        jobs.clone(),
        SectionScorer::new(rubric),
    ));
    let console_service = Arc::new(HrConsoleService::new(jobs, results));

    let app = with_assessment_routes(
        assessment_service,
        console_service,
        &config.assessment.access_code,
    )
    .layer(Extension(app_state))
    .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        custom_rubric = config.assessment.rubric_path.is_some(),
        "assessment service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
