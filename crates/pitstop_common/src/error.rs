//! Error types for Pitstop.

use thiserror::Error;

/// Startup-time validation failures.
///
/// The scoring engine itself never errors; everything here is caught
/// before the server binds.
#[derive(Error, Debug)]
pub enum PostureError {
    #[error("duplicate question in catalog: {0}")]
    DuplicateQuestion(String),

    #[error("invalid risk thresholds: mid={mid} high={high} total={total} (need mid <= high <= total)")]
    InvalidThresholds {
        high: usize,
        mid: usize,
        total: usize,
    },
}
