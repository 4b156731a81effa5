#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rust_2018_idioms,
    missing_docs
)]

//! Size-modifier generation for referring expressions, after Mitchell,
//! van Deemter & Reiter (2011): a geometry-driven decision procedure,
//! two majority-vote baselines, and micro-averaged precision/recall
//! scoring against human-produced expressions.

/// Telemetry builder/handle for pipeline components.
#[path = "../telemetry.rs"]
pub mod telemetry;

/// Core data model: axes, modifiers, polarity, corpora.
#[path = "../module.rs"]
pub mod module;

/// Surface lemmas for size terms.
#[path = "../lexicon.rs"]
pub mod lexicon;

/// Geometry classifier, ratio tie-breaker and predictor facade.
#[path = "../algorithm/main.rs"]
pub mod algorithm;

/// Oracle and majority baseline predictors.
#[path = "../baselines.rs"]
pub mod baselines;

/// Micro-averaged precision/recall scoring.
#[path = "../evaluate/main.rs"]
pub mod evaluate;

/// Corpus readers (scene vectors, observation JSON).
#[path = "../corpus/main.rs"]
pub mod corpus;

/// Runtime entry point orchestrating predictors and scoring.
#[path = "../main.rs"]
pub mod runtime;

pub use algorithm::{classify, ClassifyError, SizePredictor};
pub use baselines::{majority_predict, oracle_predict};
pub use corpus::{load_observations, load_scenes, CorpusError};
pub use evaluate::{evaluate, EvaluateError, EvaluationReport, ReferentScore};
pub use module::{
    Axis, Expression, Extent, GeometryCorpus, Modifier, ObservationCorpus, Polarity, Prediction,
    PredictionCorpus, ScenePair, SizeTerm,
};
pub use runtime::{ModifierRuntime, RuntimeOutcome};
pub use telemetry::{ModifierTelemetry, ModifierTelemetryBuilder};
