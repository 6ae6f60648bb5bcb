use crate::cli::ServeArgs;
use crate::infra::{suggestion_client, AppState};
use crate::routes::with_calculator_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use grade_boost::calculator::GradeCalculatorService;
use grade_boost::config::AppConfig;
use grade_boost::error::AppError;
use grade_boost::telemetry;
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

    let client = suggestion_client(&config.suggestions)?;
    let calculator_service = Arc::new(GradeCalculatorService::new(client));

    let app = with_calculator_routes(calculator_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        suggestions_model = %config.suggestions.model,
        suggestions_enabled = config.suggestions.is_configured(),
        "grade calculator ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
