//! HTTP routes for pitstopd.
//!
//! The browser-facing routes speak HTML forms; the `/v1/*` routes speak
//! JSON for scripted use. Both feed the same scoring engine.

use crate::server::AppState;
use crate::templates::{
    AnswerField, ChecklistTemplate, HtmlTemplate, ReportTemplate, ResultsTemplate,
};
use askama::Template;
use axum::{
    extract::{Form, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use pitstop_common::evaluate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{error, info};

type AppStateArc = Arc<AppState>;

/// Filename offered for the exported report document.
pub const REPORT_FILENAME: &str = "cyber_posture_report.html";

// ============================================================================
// Checklist Routes
// ============================================================================

pub fn checklist_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/", get(checklist_page).post(submit_assessment))
        .route("/report", post(download_report))
}

async fn checklist_page(State(state): State<AppStateArc>) -> HtmlTemplate<ChecklistTemplate> {
    HtmlTemplate(ChecklistTemplate {
        questions: state.catalog.questions().to_vec(),
    })
}

async fn submit_assessment(
    State(state): State<AppStateArc>,
    Form(answers): Form<HashMap<String, String>>,
) -> HtmlTemplate<ResultsTemplate> {
    let result = evaluate(&state.catalog, &state.guidance, &state.thresholds, &answers);
    info!(
        "Assessment scored {}/{} ({})",
        result.score,
        result.total,
        result.tier.label()
    );

    // Replay the raw answers as hidden fields so the report download can
    // re-evaluate the same submission without any server-side state.
    let fields = answer_fields(&state, &answers);
    HtmlTemplate(ResultsTemplate::from_result(&result, fields))
}

async fn download_report(
    State(state): State<AppStateArc>,
    Form(answers): Form<HashMap<String, String>>,
) -> Response {
    let result = evaluate(&state.catalog, &state.guidance, &state.thresholds, &answers);
    info!(
        "Report export: {}/{} ({})",
        result.score,
        result.total,
        result.tier.label()
    );

    match ReportTemplate::from_result(&result).render() {
        Ok(document) => (
            [
                (
                    header::CONTENT_TYPE,
                    "application/octet-stream".to_string(),
                ),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", REPORT_FILENAME),
                ),
            ],
            document,
        )
            .into_response(),
        Err(err) => {
            error!("Report rendering error: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Report error: {}", err),
            )
                .into_response()
        }
    }
}

/// Catalog-ordered hidden-field pairs for answers that were submitted.
fn answer_fields(state: &AppState, answers: &HashMap<String, String>) -> Vec<AnswerField> {
    state
        .catalog
        .questions()
        .iter()
        .filter_map(|question| {
            answers.get(question).map(|value| AnswerField {
                name: question.clone(),
                value: value.clone(),
            })
        })
        .collect()
}

// ============================================================================
// API Routes
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentRequest {
    /// Mapping from question text to the submitted answer value.
    #[serde(default)]
    pub answers: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub questions_total: usize,
}

pub fn api_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/v1/assessment", post(run_assessment))
        .route("/v1/health", get(health_check))
}

async fn run_assessment(
    State(state): State<AppStateArc>,
    Json(req): Json<AssessmentRequest>,
) -> Json<pitstop_common::AssessmentResult> {
    let result = evaluate(
        &state.catalog,
        &state.guidance,
        &state.thresholds,
        &req.answers,
    );
    info!(
        "API assessment scored {}/{} ({})",
        result.score,
        result.total,
        result.tier.label()
    );
    Json(result)
}

async fn health_check(State(state): State<AppStateArc>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        questions_total: state.catalog.len(),
    })
}
