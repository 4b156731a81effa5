//! Corpus readers feeding the predictors and the evaluator.

use thiserror::Error;

/// Observation corpus loading (JSON, lemma form).
pub mod observed;
/// Scene-vector parsing into geometry corpora.
pub mod scene;

pub use observed::load_observations;
pub use scene::load_scenes;

/// Errors raised while reading corpus files. All of these are fatal
/// configuration errors: the run aborts rather than scoring partial
/// data.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// Filesystem failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON parsing failure.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    /// Scene line lacks a required cell.
    #[error("scene line {line}: missing {cell} cell")]
    MissingCell {
        /// 1-based line number.
        line: usize,
        /// Which cell (`referent` or `distractor`) was absent.
        cell: &'static str,
    },
    /// Scene cell did not match the `name:WxH` shape.
    #[error("scene line {line}: malformed cell `{cell}`")]
    MalformedCell {
        /// 1-based line number.
        line: usize,
        /// Offending cell text.
        cell: String,
    },
    /// Dimensions must be strictly positive.
    #[error("scene line {line}: dimensions must be positive")]
    NonPositiveDimension {
        /// 1-based line number.
        line: usize,
    },
    /// Expression contained a lemma outside the size lexicon.
    #[error("unknown size lemma `{lemma}` for referent {supertype}/{subtype}")]
    UnknownLemma {
        /// Object class of the referent.
        supertype: String,
        /// Geometric instance within the class.
        subtype: String,
        /// The unrecognized surface form.
        lemma: String,
    },
    /// The file parsed but described no referents at all.
    #[error("corpus file {path} contains no referents")]
    EmptyCorpus {
        /// Offending file path.
        path: String,
    },
}
