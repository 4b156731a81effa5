use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Precision/recall for a single referent, kept for significance
/// testing. Values are the referent's summed per-expression
/// contributions divided by its own non-empty expression count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferentScore {
    /// Object class of the referent.
    pub supertype: String,
    /// Geometric instance within the class.
    pub subtype: String,
    /// Per-referent precision.
    pub precision: f64,
    /// Per-referent recall.
    pub recall: f64,
    /// Non-empty expressions scored for this referent.
    pub expressions: usize,
}

/// Aggregate scoring result for one prediction corpus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// Micro-averaged precision over all scored expressions.
    pub precision: f64,
    /// Micro-averaged recall over all scored expressions.
    pub recall: f64,
    /// Total non-empty expressions entering the aggregate.
    pub scored_expressions: usize,
    /// Referents excluded because they had no scorable expressions.
    pub skipped_referents: usize,
    /// Per-referent side-channel, in corpus order.
    pub per_referent: Vec<ReferentScore>,
    /// When the report was produced.
    pub generated_at: DateTime<Utc>,
}
