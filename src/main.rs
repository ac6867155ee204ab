use adjuster_ai::config::AppConfig;
use adjuster_ai::error::AppError;
use adjuster_ai::telemetry;
use adjuster_ai::workflows::claims::{
    claims_router, ClaimAssessment, ClaimTriageService, VisionExportImporter,
};
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use chrono::Local;
use clap::{Args, Parser, Subcommand};
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::json;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
struct AppState {
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
}

#[derive(Parser, Debug)]
#[command(
    name = "Adjuster AI",
    about = "Run the damage triage service or assess a vision export from the command line",
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
    /// Run the triage pipeline offline against a vision export
    Claims {
        #[command(subcommand)]
        command: ClaimsCommand,
    },
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

#[derive(Subcommand, Debug)]
enum ClaimsCommand {
    /// Assess a vision export file and print the triage report
    Assess(AssessArgs),
}

#[derive(Args, Debug)]
struct AssessArgs {
    /// Vision export JSON: an observation array, or {"observations": [...], "narrative": "..."}
    #[arg(long)]
    export: PathBuf,
    /// Narrative fallback when the export carries none
    #[arg(long)]
    narrative: Option<String>,
    /// Include the normalized findings in the output
    #[arg(long)]
    list_findings: bool,
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
        Command::Claims {
            command: ClaimsCommand::Assess(args),
        } => run_claims_assess(args),
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

    telemetry::init(&config.telemetry)?;

    let service = Arc::new(ClaimTriageService::new(config.triage.clone()));

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
        .merge(claims_router(service))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "damage triage service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_claims_assess(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs {
        export,
        narrative,
        list_findings,
    } = args;

    let config = AppConfig::load()?;
    let service = ClaimTriageService::new(config.triage.clone());

    let mut request = VisionExportImporter::from_path(export)?;
    if request.narrative.is_none() {
        request.narrative = narrative;
    }

    let assessment = service.assess(&request);
    render_claim_assessment(&assessment, list_findings);

    Ok(())
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

fn render_claim_assessment(assessment: &ClaimAssessment, list_findings: bool) {
    println!("Claim triage report");
    println!("Assessed {}", Local::now().format("%Y-%m-%d %H:%M"));

    println!("\nDecision: {}", assessment.decision.label());
    for reason in assessment.decision.reasons() {
        println!("- {reason}");
    }

    println!(
        "\nEstimate: ${} - ${} {}",
        assessment.estimate.cost_low, assessment.estimate.cost_high, assessment.estimate.currency
    );
    for assumption in &assessment.estimate.assumptions {
        println!("- {assumption}");
    }

    println!(
        "\nAggregate confidence: {:.0}%",
        assessment.aggregate_confidence * 100.0
    );
    println!("Max severity: {}", assessment.max_severity);

    if assessment.damage_summary.is_empty() {
        println!("Damage summary: none");
    } else {
        println!("Damage summary: {}", assessment.damage_summary);
    }

    if list_findings {
        if assessment.records.is_empty() {
            println!("\nFindings: none");
        } else {
            println!("\nFindings");
            for record in &assessment.records {
                let paint_note = if record.needs_paint { ", paint" } else { "" };
                let parts_note = if record.likely_parts.is_empty() {
                    String::new()
                } else {
                    format!(", parts: {}", record.likely_parts.join(", "))
                };
                println!(
                    "- {} | {:.2}h{}{}",
                    record.summary(),
                    record.est_labor_hours,
                    paint_note,
                    parts_note
                );
            }
        }
    }
}
