//! Pitstop Common - catalog, guidance, and scoring for the posture checklist.
//!
//! Everything here is synchronous and allocation-only: the daemon wires
//! these pieces into its HTTP surface.

pub mod assessment;
pub mod catalog;
pub mod config;
pub mod error;
pub mod guidance;

pub use assessment::{
    evaluate, AssessmentResult, FailureRecord, RiskThresholds, RiskTier, ANSWER_YES,
};
pub use catalog::{standard_questions, Catalog};
pub use config::PitstopConfig;
pub use error::PostureError;
pub use guidance::{GuidanceRecord, GuidanceTable};
