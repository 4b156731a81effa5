//! Size-modifier decision procedure wiring.

/// Geometry classifier and largest-dimension-difference rule.
pub mod classifier;
/// Stochastic ratio-based tie-breaker for single-axis ties.
pub mod ratio;
/// Corpus-level predictor facade.
pub mod predictor;

pub use classifier::{classify, ClassifyError};
pub use predictor::SizePredictor;
pub use ratio::ratio_tie_break;
