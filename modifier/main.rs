use anyhow::{Context, Result};
use serde_json::json;

use crate::algorithm::predictor::SizePredictor;
use crate::baselines::{majority_predict, oracle_predict};
use crate::evaluate::{evaluate, EvaluationReport};
use crate::module::{GeometryCorpus, ObservationCorpus};
use crate::telemetry::ModifierTelemetry;

/// Evaluation reports for the three predictors over one corpus pair.
#[derive(Debug, Clone)]
pub struct RuntimeOutcome {
    /// Geometry-driven size algorithm.
    pub algorithm: EvaluationReport,
    /// Per-referent majority-vote oracle.
    pub oracle: EvaluationReport,
    /// Corpus-wide majority vote excluding the referent.
    pub majority: EvaluationReport,
}

/// Orchestrates the size algorithm and both baselines over a single
/// geometry/observation corpus pair, scoring each against the same
/// observed expressions.
pub struct ModifierRuntime {
    geometry: GeometryCorpus,
    observed: ObservationCorpus,
    seed: Option<u64>,
    telemetry: Option<ModifierTelemetry>,
}

impl ModifierRuntime {
    /// Creates a runtime over the given corpora.
    #[must_use]
    pub fn new(geometry: GeometryCorpus, observed: ObservationCorpus) -> Self {
        Self {
            geometry,
            observed,
            seed: None,
            telemetry: None,
        }
    }

    /// Fixes the rng seed so the whole run is reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Attaches a telemetry handle.
    #[must_use]
    pub fn with_telemetry(mut self, telemetry: ModifierTelemetry) -> Self {
        self.telemetry = Some(telemetry);
        self
    }

    /// Runs prediction and evaluation for all three predictors.
    pub fn run(&self) -> Result<RuntimeOutcome> {
        let mut predictor = match self.seed {
            Some(seed) => SizePredictor::with_seed(self.geometry.clone(), seed),
            None => SizePredictor::new(self.geometry.clone()),
        };
        if let Some(telemetry) = &self.telemetry {
            predictor = predictor.with_telemetry(telemetry.clone());
        }

        let predictions = predictor
            .predict(&self.observed)
            .context("running the size algorithm")?;
        self.log_stage("runtime.algorithm.predicted", &predictions.term_tallies());
        let algorithm = evaluate(&predictions, &self.observed, self.telemetry.as_ref())
            .context("scoring the size algorithm")?;

        let predictions = oracle_predict(&self.observed);
        self.log_stage("runtime.oracle.predicted", &predictions.term_tallies());
        let oracle = evaluate(&predictions, &self.observed, self.telemetry.as_ref())
            .context("scoring the oracle baseline")?;

        let predictions = majority_predict(&self.observed);
        self.log_stage("runtime.majority.predicted", &predictions.term_tallies());
        let majority = evaluate(&predictions, &self.observed, self.telemetry.as_ref())
            .context("scoring the majority baseline")?;

        if let Some(telemetry) = &self.telemetry {
            let _ = telemetry.log(
                sizegen_logging::LogLevel::Info,
                "runtime.completed",
                json!({
                    "algorithm": { "precision": algorithm.precision, "recall": algorithm.recall },
                    "oracle": { "precision": oracle.precision, "recall": oracle.recall },
                    "majority": { "precision": majority.precision, "recall": majority.recall },
                }),
            );
        }
        Ok(RuntimeOutcome {
            algorithm,
            oracle,
            majority,
        })
    }

    fn log_stage(
        &self,
        message: &str,
        tallies: &indexmap::IndexMap<crate::module::SizeTerm, usize>,
    ) {
        if let Some(telemetry) = &self.telemetry {
            let summary: Vec<_> = tallies
                .iter()
                .map(|(term, count)| json!({ "lemma": crate::lexicon::lemma(*term), "count": count }))
                .collect();
            let _ = telemetry.log(
                sizegen_logging::LogLevel::Info,
                message,
                json!({ "terms": summary }),
            );
        }
    }
}
