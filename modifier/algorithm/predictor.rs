use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde_json::json;

use crate::algorithm::classifier::{classify, ClassifyError};
use crate::lexicon;
use crate::module::{GeometryCorpus, ObservationCorpus, PredictionCorpus};
use crate::telemetry::ModifierTelemetry;

/// Corpus-level predictor running the geometry classifier over every
/// referent of an observation corpus.
///
/// Owns the scene geometry and the rng feeding the ratio tie-breaker;
/// with a fixed seed, [`SizePredictor::predict`] is a pure function of
/// the corpus.
pub struct SizePredictor {
    geometry: GeometryCorpus,
    rng: ChaCha8Rng,
    telemetry: Option<ModifierTelemetry>,
}

impl SizePredictor {
    /// Creates a predictor with an entropy-seeded rng.
    #[must_use]
    pub fn new(geometry: GeometryCorpus) -> Self {
        Self {
            geometry,
            rng: ChaCha8Rng::from_entropy(),
            telemetry: None,
        }
    }

    /// Creates a predictor with a fixed seed for reproducible runs.
    #[must_use]
    pub fn with_seed(geometry: GeometryCorpus, seed: u64) -> Self {
        Self {
            geometry,
            rng: ChaCha8Rng::seed_from_u64(seed),
            telemetry: None,
        }
    }

    /// Attaches a telemetry handle.
    #[must_use]
    pub fn with_telemetry(mut self, telemetry: ModifierTelemetry) -> Self {
        self.telemetry = Some(telemetry);
        self
    }

    /// Predicts one size term per referent of `targets`.
    ///
    /// A referent whose geometry cannot be resolved aborts the whole run
    /// with [`ClassifyError::MissingGeometry`]: a partially-scored corpus
    /// would be worse than a loud configuration failure. Referents whose
    /// objects are identical on both axes get an empty prediction.
    pub fn predict(
        &mut self,
        targets: &ObservationCorpus,
    ) -> Result<PredictionCorpus, ClassifyError> {
        let mut predictions = PredictionCorpus::default();
        for (supertype, subtype, _) in targets.referents() {
            let scene = self.geometry.get(supertype, subtype).copied().ok_or_else(|| {
                ClassifyError::MissingGeometry {
                    supertype: supertype.to_string(),
                    subtype: subtype.to_string(),
                }
            })?;
            let term = classify(&scene, &mut self.rng)?;
            if let Some(telemetry) = &self.telemetry {
                let _ = telemetry.log(
                    sizegen_logging::LogLevel::Debug,
                    "predict.term",
                    json!({
                        "supertype": supertype,
                        "subtype": subtype,
                        "lemma": term.map(lexicon::lemma),
                    }),
                );
            }
            predictions.insert(supertype, subtype, term.into_iter().collect());
        }
        Ok(predictions)
    }
}
