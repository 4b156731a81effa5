//! Surface lemmas for size terms.
//!
//! Six lemmas cover the full term space: the generic pair big/small and
//! the axis-specific pairs tall/short (height) and fat/thin (width).
//! Anything richer than the bare lemma (agreement, comparatives, full
//! noun phrases) is out of scope.

use crate::module::{Axis, Modifier, Polarity, SizeTerm};

/// Returns the surface lemma for a size term.
#[must_use]
pub const fn lemma(term: SizeTerm) -> &'static str {
    match (term.modifier, term.polarity) {
        (Modifier::Over, Polarity::Greater) => "big",
        (Modifier::Over, Polarity::Lesser) => "small",
        (Modifier::Individual(Axis::Height), Polarity::Greater) => "tall",
        (Modifier::Individual(Axis::Height), Polarity::Lesser) => "short",
        (Modifier::Individual(Axis::Width), Polarity::Greater) => "fat",
        (Modifier::Individual(Axis::Width), Polarity::Lesser) => "thin",
    }
}

/// Parses a surface lemma back into a size term.
#[must_use]
pub fn parse(lemma: &str) -> Option<SizeTerm> {
    let term = match lemma {
        "big" => SizeTerm::new(Modifier::Over, Polarity::Greater),
        "small" => SizeTerm::new(Modifier::Over, Polarity::Lesser),
        "tall" => SizeTerm::new(Modifier::Individual(Axis::Height), Polarity::Greater),
        "short" => SizeTerm::new(Modifier::Individual(Axis::Height), Polarity::Lesser),
        "fat" => SizeTerm::new(Modifier::Individual(Axis::Width), Polarity::Greater),
        "thin" => SizeTerm::new(Modifier::Individual(Axis::Width), Polarity::Lesser),
        _ => return None,
    };
    Some(term)
}
