use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use clap::{Args, Parser, Subcommand};
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::json;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use stress_assess::config::AppConfig;
use stress_assess::error::AppError;
use stress_assess::telemetry;
use stress_assess::workflows::assessment::intake::validate_answers;
use stress_assess::workflows::assessment::{
    assessment_router, AssessmentService, GenAiGateway, InMemoryResponseStore,
    QuestionnaireAnswers, RecommendationProvider, ScoringConfig, ScoringEngine,
};
use tracing::info;

#[derive(Clone)]
struct AppState {
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
}

#[derive(Parser, Debug)]
#[command(
    name = "Stress Assessment Service",
    about = "Score student stress self-assessments and serve the questionnaire backend",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score an answer sheet offline and print the breakdown
    Assess(AssessArgs),
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Args, Debug, Default)]
struct AssessArgs {
    /// JSON file with one answer per questionnaire field; a built-in sample
    /// sheet is scored when omitted
    #[arg(long)]
    answers: Option<PathBuf>,
    /// Use the sigmoid strategy instead of the raw weighted sum
    #[arg(long)]
    sigmoid: bool,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Assess(args) => run_assess(args).await,
    }
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config)?;

    let provider = match config.genai.clone() {
        Some(genai) => {
            let timeout = genai.timeout;
            RecommendationProvider::new(GenAiGateway::new(genai)?, timeout)
        }
        None => {
            info!("no GENAI_API_KEY configured, recommendations use static templates");
            RecommendationProvider::disabled()
        }
    };

    let repository = Arc::new(InMemoryResponseStore::default());
    let service = Arc::new(AssessmentService::new(
        repository,
        provider,
        ScoringConfig::reference(),
    ));

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
    };

    let app = Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .with_state(state)
        .merge(assessment_router(service))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "stress assessment service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

async fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let answers = match &args.answers {
        Some(path) => {
            let raw = std::fs::read_to_string(path)?;
            parse_answer_sheet(&raw)?
        }
        None => sample_answers(),
    };

    let config = if args.sigmoid {
        ScoringConfig::reference_sigmoid()
    } else {
        ScoringConfig::reference()
    };
    let engine = ScoringEngine::new(config);
    let breakdown = engine.score(&answers);

    let provider = RecommendationProvider::<GenAiGateway>::disabled();
    let recommendation = provider.recommend(breakdown.stress_class, &answers).await;

    println!("Stress assessment demo");
    println!(
        "Class: {} ({})",
        breakdown.stress_class.display_label(),
        breakdown.stress_class.code()
    );
    println!(
        "Score: {:.3} (raw weighted sum {:.3})",
        breakdown.decision_score, breakdown.raw_score
    );

    println!("\nCategory contributions");
    for (category, total) in breakdown.category_totals() {
        println!("- {}: {:+.3}", category.label(), total);
    }

    println!("\nDisplay confidence");
    println!(
        "- no stress: {:.0}%",
        breakdown.probabilities.no_stress * 100.0
    );
    println!(
        "- positive stress: {:.0}%",
        breakdown.probabilities.positive_stress * 100.0
    );
    println!(
        "- negative stress: {:.0}%",
        breakdown.probabilities.negative_stress * 100.0
    );

    println!("\nRecommendations (static template)");
    println!("{}", recommendation.text);

    Ok(())
}

/// Read an answer sheet from JSON, enforcing the same declared ranges the
/// server enforces at intake. Out-of-range sheets are rejected, not clamped.
fn parse_answer_sheet(raw: &str) -> Result<QuestionnaireAnswers, AppError> {
    let answers = serde_json::from_str::<QuestionnaireAnswers>(raw)?;
    validate_answers(&answers)?;
    Ok(answers)
}

fn sample_answers() -> QuestionnaireAnswers {
    QuestionnaireAnswers {
        anxiety_level: 9,
        self_esteem: 18,
        mental_health_history: 0,
        depression: 7,
        headache: 2,
        blood_pressure: 1,
        sleep_quality: 3,
        breathing_problem: 1,
        noise_level: 2,
        living_conditions: 3,
        safety: 4,
        basic_needs: 4,
        academic_performance: 3,
        study_load: 4,
        teacher_student_relationship: 3,
        future_career_concerns: 3,
        social_support: 2,
        peer_pressure: 2,
        extracurricular_activities: 2,
        bullying: 1,
    }
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
