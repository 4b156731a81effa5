use rand_chacha::ChaCha8Rng;
use thiserror::Error;

use crate::algorithm::ratio::ratio_tie_break;
use crate::module::{Axis, Extent, Modifier, Polarity, ScenePair, SizeTerm};

/// Errors raised by the geometry classifier.
#[derive(Debug, Error)]
pub enum ClassifyError {
    /// No scene geometry registered for an evaluated referent.
    #[error("no scene geometry for referent {supertype}/{subtype}")]
    MissingGeometry {
        /// Object class of the referent.
        supertype: String,
        /// Geometric instance within the class.
        subtype: String,
    },
    /// Referent and distractor share every dimension inside the
    /// crossed-axes branch. The caller's precondition rules this out, so
    /// reaching it means the branch logic is out of sync.
    #[error("degenerate comparison: referent and distractor share every dimension")]
    DegenerateComparison,
}

/// Chooses the size modifier distinguishing `scene.referent` from
/// `scene.distractor`.
///
/// Returns `Ok(None)` when the two objects are identical on both axes:
/// no modifier is needed, which is an accepted terminal case rather than
/// an error. The rng feeds the ratio tie-breaker and is only consumed
/// when exactly one axis is tied.
pub fn classify(
    scene: &ScenePair,
    rng: &mut ChaCha8Rng,
) -> Result<Option<SizeTerm>, ClassifyError> {
    let r = scene.referent;
    let d = scene.distractor;
    let term = if r.height > d.height {
        if r.width > d.width {
            // Taller and wider: the generic term covers both axes.
            SizeTerm::new(Modifier::Over, Polarity::Greater)
        } else if r.width < d.width {
            largest_dim_diff(r, d)?
        } else {
            ratio_tie_break(r, d, Axis::Height, Polarity::Greater, rng)
        }
    } else if r.height < d.height {
        if r.width < d.width {
            SizeTerm::new(Modifier::Over, Polarity::Lesser)
        } else if r.width > d.width {
            largest_dim_diff(r, d)?
        } else {
            ratio_tie_break(r, d, Axis::Height, Polarity::Lesser, rng)
        }
    } else if r.width > d.width {
        ratio_tie_break(r, d, Axis::Width, Polarity::Greater, rng)
    } else if r.width < d.width {
        ratio_tie_break(r, d, Axis::Width, Polarity::Lesser, rng)
    } else {
        return Ok(None);
    };
    Ok(Some(term))
}

/// Crossed-axes rule: the axis with the strictly larger absolute
/// difference wins, polarity following the referent's direction on it.
///
/// Exactly equal differences fall back to height. A later version could
/// reason about spatial context here instead; the deterministic default
/// keeps behavior testable.
pub fn largest_dim_diff(r: Extent, d: Extent) -> Result<SizeTerm, ClassifyError> {
    let height_diff = (r.height - d.height).abs();
    let width_diff = (r.width - d.width).abs();
    if height_diff > width_diff {
        Ok(axis_term(Axis::Height, r.height, d.height))
    } else if width_diff > height_diff {
        Ok(axis_term(Axis::Width, r.width, d.width))
    } else if r.height != d.height {
        Ok(axis_term(Axis::Height, r.height, d.height))
    } else if r.width != d.width {
        Ok(axis_term(Axis::Width, r.width, d.width))
    } else {
        Err(ClassifyError::DegenerateComparison)
    }
}

fn axis_term(axis: Axis, referent_value: f64, distractor_value: f64) -> SizeTerm {
    let polarity = if referent_value > distractor_value {
        Polarity::Greater
    } else {
        Polarity::Lesser
    };
    SizeTerm::new(Modifier::Individual(axis), polarity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(11)
    }

    fn scene(rw: f64, rh: f64, dw: f64, dh: f64) -> ScenePair {
        ScenePair {
            referent: Extent::new(rw, rh),
            distractor: Extent::new(dw, dh),
        }
    }

    #[test]
    fn dominant_referent_gets_generic_greater() {
        let term = classify(&scene(10.0, 12.0, 4.0, 6.0), &mut rng())
            .unwrap()
            .unwrap();
        assert_eq!(term, SizeTerm::new(Modifier::Over, Polarity::Greater));
    }

    #[test]
    fn swapping_objects_flips_polarity() {
        let term = classify(&scene(4.0, 6.0, 10.0, 12.0), &mut rng())
            .unwrap()
            .unwrap();
        assert_eq!(term, SizeTerm::new(Modifier::Over, Polarity::Lesser));
    }

    #[test]
    fn crossed_axes_pick_larger_difference() {
        // Height difference 7 beats width difference 2.
        let term = classify(&scene(5.0, 15.0, 3.0, 8.0), &mut rng())
            .unwrap()
            .unwrap();
        assert_eq!(
            term,
            SizeTerm::new(Modifier::Individual(Axis::Height), Polarity::Greater)
        );
    }

    #[test]
    fn crossed_axes_pick_width_when_it_dominates() {
        let term = classify(&scene(15.0, 5.0, 8.0, 6.0), &mut rng())
            .unwrap()
            .unwrap();
        assert_eq!(
            term,
            SizeTerm::new(Modifier::Individual(Axis::Width), Polarity::Greater)
        );
    }

    #[test]
    fn equal_differences_default_to_height() {
        // Crossed axes with |dh| == |dw| == 3.
        let term = largest_dim_diff(Extent::new(8.0, 5.0), Extent::new(5.0, 8.0)).unwrap();
        assert_eq!(
            term,
            SizeTerm::new(Modifier::Individual(Axis::Height), Polarity::Lesser)
        );
    }

    #[test]
    fn equal_differences_with_equal_heights_fall_back_to_width() {
        let term = largest_dim_diff(Extent::new(8.0, 5.0), Extent::new(8.0, 5.0));
        assert!(matches!(term, Err(ClassifyError::DegenerateComparison)));
        let term = largest_dim_diff(Extent::new(8.0, 5.0), Extent::new(11.0, 5.0)).unwrap();
        assert_eq!(
            term,
            SizeTerm::new(Modifier::Individual(Axis::Width), Polarity::Lesser)
        );
    }

    #[test]
    fn identical_objects_need_no_modifier() {
        let term = classify(&scene(5.0, 5.0, 5.0, 5.0), &mut rng()).unwrap();
        assert!(term.is_none());
    }

    #[test]
    fn extreme_aspect_ratio_forces_axis_specific_tie_break() {
        // Widths tied, referent ten times taller than wide: the ratio
        // tie-break probability saturates at 1, so every draw lands on
        // the axis-specific term.
        let mut rng = rng();
        for _ in 0..50 {
            let term = classify(&scene(5.0, 50.0, 5.0, 20.0), &mut rng)
                .unwrap()
                .unwrap();
            assert_eq!(
                term,
                SizeTerm::new(Modifier::Individual(Axis::Height), Polarity::Greater)
            );
        }
    }
}
