use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Axis along which two objects are compared.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Horizontal extent.
    Width,
    /// Vertical extent.
    Height,
}

impl Axis {
    /// Returns human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Width => "width",
            Self::Height => "height",
        }
    }
}

/// Descriptive dimension chosen for a referent.
///
/// The derived ordering (`Over` < `Individual(Width)` <
/// `Individual(Height)`) is the documented tie-break rule for majority
/// votes: when two modifiers tie on count, the smaller one wins.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Modifier {
    /// Generic size term covering both axes ("big"/"small").
    Over,
    /// Axis-specific term ("tall"/"short", "fat"/"thin").
    Individual(Axis),
}

/// Direction of the comparison: is the referent the larger or the
/// smaller object on the relevant dimension? (1/0 in the source data.)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    /// Referent is the smaller object.
    Lesser,
    /// Referent is the larger object.
    Greater,
}

/// One (modifier, polarity) pair, the unit both predictions and human
/// expressions are made of.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct SizeTerm {
    /// Chosen descriptive dimension.
    pub modifier: Modifier,
    /// Direction of the comparison.
    pub polarity: Polarity,
}

impl SizeTerm {
    /// Creates a term from its parts.
    #[must_use]
    pub const fn new(modifier: Modifier, polarity: Polarity) -> Self {
        Self { modifier, polarity }
    }
}

/// An object's extent along the two axes under comparison. Both
/// dimensions are strictly positive; corpus construction validates this.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Extent {
    /// Creates an extent from width and height.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Referent/distractor geometry for one scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenePair {
    /// The object being described.
    pub referent: Extent,
    /// The object it is contrasted against.
    pub distractor: Extent,
}

/// One human utterance for one referent: zero or more size terms (a
/// speaker may combine modifiers, or use none).
pub type Expression = Vec<SizeTerm>;

/// Terms attributed to one referent by a predictor. The decision
/// procedure emits zero or one term; the shape supports more.
pub type Prediction = Vec<SizeTerm>;

/// Reduces an expression to its distinct term types with token counts.
///
/// A speaker who repeats a modifier within one utterance still casts a
/// single vote for it: callers interested in types use the key set.
#[must_use]
pub fn type_counts(terms: &[SizeTerm]) -> IndexMap<SizeTerm, usize> {
    let mut counts = IndexMap::new();
    for term in terms {
        *counts.entry(*term).or_insert(0) += 1;
    }
    counts
}

/// Supertype → subtype → scene geometry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GeometryCorpus(IndexMap<String, IndexMap<String, ScenePair>>);

impl GeometryCorpus {
    /// Registers geometry for one referent.
    pub fn insert(&mut self, supertype: &str, subtype: &str, scene: ScenePair) {
        self.0
            .entry(supertype.to_string())
            .or_default()
            .insert(subtype.to_string(), scene);
    }

    /// Looks up the scene pair for one referent.
    #[must_use]
    pub fn get(&self, supertype: &str, subtype: &str) -> Option<&ScenePair> {
        self.0.get(supertype)?.get(subtype)
    }

    /// Number of referents across all supertypes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.values().map(IndexMap::len).sum()
    }

    /// Whether the corpus holds no referents.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Supertype → subtype → expression-id → observed expression.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObservationCorpus(IndexMap<String, IndexMap<String, IndexMap<String, Expression>>>);

impl ObservationCorpus {
    /// Records one observed expression.
    pub fn insert(&mut self, supertype: &str, subtype: &str, expression_id: &str, expression: Expression) {
        self.0
            .entry(supertype.to_string())
            .or_default()
            .entry(subtype.to_string())
            .or_default()
            .insert(expression_id.to_string(), expression);
    }

    /// Registers a referent with no expressions yet.
    pub fn insert_referent(&mut self, supertype: &str, subtype: &str) {
        self.0
            .entry(supertype.to_string())
            .or_default()
            .entry(subtype.to_string())
            .or_default();
    }

    /// Expressions observed for one referent.
    #[must_use]
    pub fn expressions(&self, supertype: &str, subtype: &str) -> Option<&IndexMap<String, Expression>> {
        self.0.get(supertype)?.get(subtype)
    }

    /// Iterates referents in corpus order.
    pub fn referents(
        &self,
    ) -> impl Iterator<Item = (&str, &str, &IndexMap<String, Expression>)> {
        self.0.iter().flat_map(|(supertype, subtypes)| {
            subtypes.iter().map(move |(subtype, expressions)| {
                (supertype.as_str(), subtype.as_str(), expressions)
            })
        })
    }

    /// Number of referents across all supertypes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.values().map(IndexMap::len).sum()
    }

    /// Whether the corpus holds no referents.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Supertype → subtype → prediction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PredictionCorpus(IndexMap<String, IndexMap<String, Prediction>>);

impl PredictionCorpus {
    /// Stores the prediction for one referent.
    pub fn insert(&mut self, supertype: &str, subtype: &str, prediction: Prediction) {
        self.0
            .entry(supertype.to_string())
            .or_default()
            .insert(subtype.to_string(), prediction);
    }

    /// Prediction for one referent, if any was made.
    #[must_use]
    pub fn get(&self, supertype: &str, subtype: &str) -> Option<&Prediction> {
        self.0.get(supertype)?.get(subtype)
    }

    /// Iterates predictions in corpus order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &Prediction)> {
        self.0.iter().flat_map(|(supertype, subtypes)| {
            subtypes
                .iter()
                .map(move |(subtype, prediction)| (supertype.as_str(), subtype.as_str(), prediction))
        })
    }

    /// Tallies predicted terms across the whole corpus (token counts).
    #[must_use]
    pub fn term_tallies(&self) -> IndexMap<SizeTerm, usize> {
        let mut tallies = IndexMap::new();
        for (_, _, prediction) in self.iter() {
            for term in prediction {
                *tallies.entry(*term).or_insert(0) += 1;
            }
        }
        tallies
    }

    /// Number of referents across all supertypes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.values().map(IndexMap::len).sum()
    }

    /// Whether the corpus holds no predictions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tall() -> SizeTerm {
        SizeTerm::new(Modifier::Individual(Axis::Height), Polarity::Greater)
    }

    fn big() -> SizeTerm {
        SizeTerm::new(Modifier::Over, Polarity::Greater)
    }

    #[test]
    fn type_counts_collapses_repeated_tokens() {
        let counts = type_counts(&[tall(), tall(), big()]);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[&tall()], 2);
        assert_eq!(counts[&big()], 1);
    }

    #[test]
    fn term_ordering_breaks_ties_deterministically() {
        // Over sorts before any axis-specific term, width before height.
        let mut terms = vec![
            tall(),
            SizeTerm::new(Modifier::Individual(Axis::Width), Polarity::Lesser),
            big(),
        ];
        terms.sort();
        assert_eq!(terms[0], big());
        assert_eq!(terms[1].modifier, Modifier::Individual(Axis::Width));
        assert_eq!(terms[2], tall());
    }

    #[test]
    fn observation_corpus_iterates_in_insertion_order() {
        let mut corpus = ObservationCorpus::default();
        corpus.insert("face", "3", "23", vec![tall()]);
        corpus.insert("face", "1", "23", vec![big()]);
        corpus.insert("books", "h++w++", "24", vec![]);
        let order: Vec<_> = corpus
            .referents()
            .map(|(supertype, subtype, _)| (supertype.to_string(), subtype.to_string()))
            .collect();
        assert_eq!(
            order,
            vec![
                ("face".into(), "3".into()),
                ("face".into(), "1".into()),
                ("books".into(), "h++w++".into())
            ]
        );
        assert_eq!(corpus.len(), 3);
    }

    #[test]
    fn modifier_serializes_to_compact_tags() {
        let json = serde_json::to_value(Modifier::Individual(Axis::Height)).unwrap();
        assert_eq!(json, serde_json::json!({ "individual": "height" }));
        let json = serde_json::to_value(Modifier::Over).unwrap();
        assert_eq!(json, serde_json::json!("over"));
    }
}
