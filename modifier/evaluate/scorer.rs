use chrono::Utc;
use serde_json::json;
use thiserror::Error;

use crate::evaluate::report::{EvaluationReport, ReferentScore};
use crate::module::{type_counts, Expression, ObservationCorpus, PredictionCorpus, SizeTerm};
use crate::telemetry::ModifierTelemetry;

/// Errors raised while scoring a prediction corpus.
#[derive(Debug, Error)]
pub enum EvaluateError {
    /// Every referent was skipped: the observation corpus holds nothing
    /// scorable, and dividing through would silently yield NaN.
    #[error("observation corpus contains no scorable expressions")]
    NoScorableExpressions,
}

/// Scores `predictions` against `observed` with micro-averaged,
/// type-based precision and recall.
///
/// Per referent: each predicted term is checked for literal membership
/// in each of the referent's non-empty expressions; the match (0 or 1)
/// is divided by the number of distinct types in the prediction
/// (precision) and in the expression (recall). A referent with no or an
/// empty prediction is scored through an unmatchable sentinel with a
/// type count of one: absence of a prediction depresses the score, it
/// never excludes the referent. Referents without scorable expressions
/// and expressions without any size term are excluded from every
/// numerator and denominator, with a diagnostic record when telemetry is
/// attached.
pub fn evaluate(
    predictions: &PredictionCorpus,
    observed: &ObservationCorpus,
    telemetry: Option<&ModifierTelemetry>,
) -> Result<EvaluationReport, EvaluateError> {
    let mut precision_sum = 0.0;
    let mut recall_sum = 0.0;
    let mut scored_expressions = 0usize;
    let mut skipped_referents = 0usize;
    let mut per_referent = Vec::new();

    for (supertype, subtype, expressions) in observed.referents() {
        let scorable: Vec<&Expression> = expressions
            .values()
            .filter(|expression| !expression.is_empty())
            .collect();
        if scorable.is_empty() {
            skipped_referents += 1;
            if let Some(telemetry) = telemetry {
                let _ = telemetry.log(
                    sizegen_logging::LogLevel::Warn,
                    "evaluate.referent.skipped",
                    json!({ "supertype": supertype, "subtype": subtype }),
                );
            }
            continue;
        }

        let prediction = predictions
            .get(supertype, subtype)
            .filter(|prediction| !prediction.is_empty());
        // The sentinel for a missing prediction matches nothing and
        // counts as a single predicted type.
        let (terms, precision_denom): (&[SizeTerm], f64) = match prediction {
            Some(prediction) => (prediction.as_slice(), type_counts(prediction).len() as f64),
            None => (&[], 1.0),
        };

        let mut referent_precision = 0.0;
        let mut referent_recall = 0.0;
        for expression in &scorable {
            let recall_denom = type_counts(expression.as_slice()).len() as f64;
            for term in terms {
                let tp = f64::from(u8::from(expression.contains(term)));
                referent_precision += tp / precision_denom;
                referent_recall += tp / recall_denom;
            }
        }

        let count = scorable.len() as f64;
        let score = ReferentScore {
            supertype: supertype.to_string(),
            subtype: subtype.to_string(),
            precision: referent_precision / count,
            recall: referent_recall / count,
            expressions: scorable.len(),
        };
        if let Some(telemetry) = telemetry {
            let _ = telemetry.log(
                sizegen_logging::LogLevel::Info,
                "evaluate.referent.scored",
                json!({
                    "supertype": score.supertype,
                    "subtype": score.subtype,
                    "precision": score.precision,
                    "recall": score.recall,
                    "expressions": score.expressions,
                }),
            );
        }
        per_referent.push(score);
        precision_sum += referent_precision;
        recall_sum += referent_recall;
        scored_expressions += scorable.len();
    }

    if scored_expressions == 0 {
        return Err(EvaluateError::NoScorableExpressions);
    }
    let total = scored_expressions as f64;
    Ok(EvaluationReport {
        precision: precision_sum / total,
        recall: recall_sum / total,
        scored_expressions,
        skipped_referents,
        per_referent,
        generated_at: Utc::now(),
    })
}
