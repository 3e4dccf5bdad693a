//! Claim engine metrics.

use metrics::{Counter, Histogram};
use metrics_derive::Metrics;

/// Metrics for a [`ClaimEngine`](crate::engine::ClaimEngine).
#[derive(Metrics)]
#[metrics(scope = "claims")]
pub struct ClaimMetrics {
    /// Number of settled claims.
    pub settled: Counter,
    /// Number of rejected claims.
    pub rejected: Counter,
    /// Number of published roots.
    pub roots_added: Counter,
    /// Number of deprecated roots.
    pub roots_deprecated: Counter,
    /// Number of siblings in submitted proofs.
    pub proof_length: Histogram,
}
