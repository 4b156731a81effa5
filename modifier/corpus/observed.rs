use std::{fs, path::Path};

use indexmap::IndexMap;

use crate::corpus::CorpusError;
use crate::lexicon;
use crate::module::{Expression, ObservationCorpus};

/// Raw JSON shape: supertype → subtype → expression-id → lemma list.
type RawCorpus = IndexMap<String, IndexMap<String, IndexMap<String, Vec<String>>>>;

/// Loads an observation corpus from a JSON file.
///
/// Expressions are written in lemma form, the way annotators transcribe
/// them:
///
/// ```json
/// { "face": { "3": { "23": ["tall"], "24": ["big", "tall"], "25": [] } } }
/// ```
///
/// An empty lemma list is a speaker who used no size modifier; the
/// evaluator skips those. A lemma outside the size lexicon and a file
/// describing no referents are fatal configuration errors.
pub fn load_observations(path: impl AsRef<Path>) -> Result<ObservationCorpus, CorpusError> {
    let content = fs::read_to_string(&path)?;
    let raw: RawCorpus = serde_json::from_str(&content)?;

    let mut corpus = ObservationCorpus::default();
    let mut referents = 0usize;
    for (supertype, subtypes) in &raw {
        for (subtype, expressions) in subtypes {
            referents += 1;
            corpus.insert_referent(supertype, subtype);
            for (expression_id, lemmas) in expressions {
                let mut expression = Expression::new();
                for lemma in lemmas {
                    let term =
                        lexicon::parse(lemma).ok_or_else(|| CorpusError::UnknownLemma {
                            supertype: supertype.clone(),
                            subtype: subtype.clone(),
                            lemma: lemma.clone(),
                        })?;
                    expression.push(term);
                }
                corpus.insert(supertype, subtype, expression_id, expression);
            }
        }
    }

    if referents == 0 {
        return Err(CorpusError::EmptyCorpus {
            path: path.as_ref().display().to_string(),
        });
    }
    Ok(corpus)
}
