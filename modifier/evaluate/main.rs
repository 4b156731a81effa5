//! Scoring of prediction corpora against observed expressions.

/// Report types returned by the scorer.
pub mod report;
/// Micro-averaged precision/recall computation.
pub mod scorer;

pub use report::{EvaluationReport, ReferentScore};
pub use scorer::{evaluate, EvaluateError};
