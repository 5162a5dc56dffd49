//! Scoring engine: answers in, score/tier/failures out.
//!
//! `evaluate` is pure and total. It performs no I/O, raises nothing, and
//! degrades every missing-data case to a fallback, so the HTTP layer can
//! hand it whatever the form parser produced.

use crate::catalog::Catalog;
use crate::error::PostureError;
use crate::guidance::GuidanceTable;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The only answer value that counts toward the score. Anything else,
/// including an absent entry, counts as not-yes.
pub const ANSWER_YES: &str = "yes";

/// Score cutoffs separating the risk tiers, evaluated high to low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskThresholds {
    /// Minimum score for `RiskTier::Low`.
    pub high: usize,
    /// Minimum score for `RiskTier::Moderate`.
    pub mid: usize,
}

impl RiskThresholds {
    /// Default policy: low-risk cutoff at 90% of the catalog, moderate
    /// at 60%, both rounded half-up. For the standard ten-question
    /// catalog that is 9 and 6.
    pub fn for_total(total: usize) -> Self {
        Self {
            high: round_tenths(total, 9),
            mid: round_tenths(total, 6),
        }
    }

    /// Cutoffs must be ordered and reachable within the catalog.
    pub fn validate(&self, total: usize) -> Result<(), PostureError> {
        if self.mid > self.high || self.high > total {
            return Err(PostureError::InvalidThresholds {
                high: self.high,
                mid: self.mid,
                total,
            });
        }
        Ok(())
    }
}

/// `total * tenths / 10`, rounded half-up.
fn round_tenths(total: usize, tenths: usize) -> usize {
    (total * tenths + 5) / 10
}

/// Qualitative risk bucket derived from the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

impl RiskTier {
    /// First matching cutoff wins, highest first.
    pub fn from_score(score: usize, thresholds: &RiskThresholds) -> Self {
        if score >= thresholds.high {
            Self::Low
        } else if score >= thresholds.mid {
            Self::Moderate
        } else {
            Self::High
        }
    }

    /// Short banner label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low Risk",
            Self::Moderate => "Moderate Risk",
            Self::High => "High Risk",
        }
    }

    /// Longer descriptive suffix shown under the label.
    pub fn detail(&self) -> &'static str {
        match self {
            Self::Low => {
                "Your cybersecurity posture is strong. Keep up regular reviews to stay ahead of emerging threats."
            }
            Self::Moderate => {
                "Several gaps need attention. Prioritize the items below to harden your defenses."
            }
            Self::High => {
                "Your business is exposed on multiple fronts. The items below need urgent attention."
            }
        }
    }
}

/// One non-yes question enriched with its remediation guidance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailureRecord {
    pub question: String,
    pub explanation: String,
    pub exploitation: String,
    pub client_impact: String,
    pub compliance: String,
    pub help: String,
}

/// Outcome of a single assessment submission. Request-scoped; never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub score: usize,
    pub total: usize,
    pub tier: RiskTier,
    pub failures: Vec<FailureRecord>,
}

/// Score an answer set against a catalog.
///
/// Failures come out in catalog order regardless of submission order,
/// one per question not answered exactly `"yes"`.
pub fn evaluate(
    catalog: &Catalog,
    guidance: &GuidanceTable,
    thresholds: &RiskThresholds,
    answers: &HashMap<String, String>,
) -> AssessmentResult {
    let mut score = 0;
    let mut failures = Vec::new();

    for question in catalog.questions() {
        if answers.get(question).map(String::as_str) == Some(ANSWER_YES) {
            score += 1;
        } else {
            let record = guidance.lookup(question);
            failures.push(FailureRecord {
                question: question.clone(),
                explanation: record.rationale,
                exploitation: record.exploitation_scenario,
                client_impact: record.client_impact,
                compliance: record.compliance_reference,
                help: record.assistance_offer,
            });
        }
    }

    AssessmentResult {
        score,
        total: catalog.len(),
        tier: RiskTier::from_score(score, thresholds),
        failures,
    }
}
