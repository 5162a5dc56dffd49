//! Askama template definitions for the checklist UI.

use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use pitstop_common::AssessmentResult;

/// Renders an askama template, mapping render failures to a 500.
pub struct HtmlTemplate<T>(pub T);

impl<T> IntoResponse for HtmlTemplate<T>
where
    T: Template,
{
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!("Template rendering error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Template error: {}", err),
                )
                    .into_response()
            }
        }
    }
}

// ============================================
// Checklist Form
// ============================================

#[derive(Template)]
#[template(path = "checklist.html")]
pub struct ChecklistTemplate {
    pub questions: Vec<String>,
}

// ============================================
// Results Page
// ============================================

/// One failed checklist item with its remediation guidance.
#[derive(Clone)]
pub struct FailureRow {
    pub question: String,
    pub explanation: String,
    pub exploitation: String,
    pub client_impact: String,
    pub compliance: String,
    pub help: String,
}

/// Raw answer replayed as a hidden form field so the report download
/// stays stateless.
#[derive(Clone)]
pub struct AnswerField {
    pub name: String,
    pub value: String,
}

#[derive(Template)]
#[template(path = "results.html")]
pub struct ResultsTemplate {
    pub score: usize,
    pub total: usize,
    pub tier_class: &'static str,
    pub tier_label: &'static str,
    pub tier_detail: &'static str,
    pub failures: Vec<FailureRow>,
    pub answers: Vec<AnswerField>,
}

// ============================================
// Exported Report
// ============================================

#[derive(Template)]
#[template(path = "report.html")]
pub struct ReportTemplate {
    pub score: usize,
    pub total: usize,
    pub tier_label: &'static str,
    pub tier_detail: &'static str,
    pub failures: Vec<FailureRow>,
}

/// CSS class suffix for the tier banner.
fn tier_class(result: &AssessmentResult) -> &'static str {
    match result.tier {
        pitstop_common::RiskTier::Low => "low",
        pitstop_common::RiskTier::Moderate => "moderate",
        pitstop_common::RiskTier::High => "high",
    }
}

fn failure_rows(result: &AssessmentResult) -> Vec<FailureRow> {
    result
        .failures
        .iter()
        .map(|f| FailureRow {
            question: f.question.clone(),
            explanation: f.explanation.clone(),
            exploitation: f.exploitation.clone(),
            client_impact: f.client_impact.clone(),
            compliance: f.compliance.clone(),
            help: f.help.clone(),
        })
        .collect()
}

impl ResultsTemplate {
    pub fn from_result(result: &AssessmentResult, answers: Vec<AnswerField>) -> Self {
        Self {
            score: result.score,
            total: result.total,
            tier_class: tier_class(result),
            tier_label: result.tier.label(),
            tier_detail: result.tier.detail(),
            failures: failure_rows(result),
            answers,
        }
    }
}

impl ReportTemplate {
    pub fn from_result(result: &AssessmentResult) -> Self {
        Self {
            score: result.score,
            total: result.total,
            tier_label: result.tier.label(),
            tier_detail: result.tier.detail(),
            failures: failure_rows(result),
        }
    }
}
