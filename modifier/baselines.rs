//! Majority-vote baseline predictors.
//!
//! Both baselines vote by modifier *type*, not token: each expression
//! contributes one vote per distinct term it contains, so a speaker who
//! repeats a modifier inside one utterance still casts a single vote for
//! it, while a speaker producing three different expressions casts three.

use indexmap::IndexMap;

use crate::module::{type_counts, Expression, ObservationCorpus, PredictionCorpus, SizeTerm};

/// Oracle baseline: per-referent majority vote over the referent's own
/// observed expressions.
///
/// Count ties are broken by the documented ordering on [`SizeTerm`]
/// (smallest wins), replacing the insertion-order tie-break of earlier
/// implementations. A referent with no votes gets an empty prediction.
#[must_use]
pub fn oracle_predict(observed: &ObservationCorpus) -> PredictionCorpus {
    let mut predictions = PredictionCorpus::default();
    for (supertype, subtype, expressions) in observed.referents() {
        let tallies = tally_expressions(expressions.values());
        predictions.insert(supertype, subtype, top_term(&tallies).into_iter().collect());
    }
    predictions
}

/// Majority baseline: corpus-wide majority vote excluding the referent
/// under prediction from its own vote pool.
///
/// Tallies the whole corpus once and subtracts each referent's own
/// contribution; behavior is identical to excluding the referent and
/// recounting from scratch.
#[must_use]
pub fn majority_predict(observed: &ObservationCorpus) -> PredictionCorpus {
    let mut global: IndexMap<SizeTerm, usize> = IndexMap::new();
    let mut local: Vec<IndexMap<SizeTerm, usize>> = Vec::new();
    for (_, _, expressions) in observed.referents() {
        let tallies = tally_expressions(expressions.values());
        for (term, count) in &tallies {
            *global.entry(*term).or_insert(0) += count;
        }
        local.push(tallies);
    }

    let mut predictions = PredictionCorpus::default();
    for ((supertype, subtype, _), own) in observed.referents().zip(&local) {
        let mut pool = global.clone();
        for (term, count) in own {
            if let Some(total) = pool.get_mut(term) {
                *total -= count;
            }
        }
        predictions.insert(supertype, subtype, top_term(&pool).into_iter().collect());
    }
    predictions
}

/// One vote per distinct term per expression.
fn tally_expressions<'a>(
    expressions: impl Iterator<Item = &'a Expression>,
) -> IndexMap<SizeTerm, usize> {
    let mut tallies = IndexMap::new();
    for expression in expressions {
        for term in type_counts(expression).keys() {
            *tallies.entry(*term).or_insert(0) += 1;
        }
    }
    tallies
}

/// Most frequent term; ties broken by the `Ord` on [`SizeTerm`].
fn top_term(tallies: &IndexMap<SizeTerm, usize>) -> Option<SizeTerm> {
    let mut best: Option<(SizeTerm, usize)> = None;
    for (&term, &count) in tallies {
        if count == 0 {
            continue;
        }
        match best {
            Some((best_term, best_count))
                if count < best_count || (count == best_count && term >= best_term) => {}
            _ => best = Some((term, count)),
        }
    }
    best.map(|(term, _)| term)
}
