//! Weighted similarity between parameter records
//!
//! Each component compares one aspect of two records and maps the absolute
//! difference to `1 − min(1, |Δ| / scale)`. A reference's similarity is the
//! weighted mean of its components; the final score averages the finite
//! reference similarities.

use crate::error::{AnalysisError, AnalysisResult};
use crate::params::SignatureParameters;
use crate::stats;
use serde::{Deserialize, Serialize};

/// Score used when a value cannot be compared.
pub const NEUTRAL_SCORE: f64 = 0.5;

/// Component weights and saturation scales.
///
/// A component scores 0 once its difference reaches the scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SimilarityWeights {
    pub aspect_ratio: f64,
    pub stroke_width: f64,
    pub stroke_length: f64,
    pub center_of_mass: f64,
    pub complexity: f64,
    pub loops: f64,
    pub slope: f64,

    pub aspect_ratio_scale: f64,
    pub stroke_width_scale_mm: f64,
    /// Lower bound of the relative stroke-length denominator
    pub stroke_length_floor_mm: f64,
    pub center_of_mass_scale: f64,
    pub complexity_scale: f64,
    pub loops_scale: f64,
    pub slope_scale_deg: f64,
}

impl Default for SimilarityWeights {
    fn default() -> Self {
        Self {
            aspect_ratio: 0.05,
            stroke_width: 0.25,
            stroke_length: 0.25,
            center_of_mass: 0.10,
            complexity: 0.12,
            loops: 0.10,
            slope: 0.13,

            aspect_ratio_scale: 1.0,
            stroke_width_scale_mm: 2.0,
            stroke_length_floor_mm: 1.0,
            center_of_mass_scale: 0.25,
            complexity_scale: 0.5,
            loops_scale: 5.0,
            slope_scale_deg: 45.0,
        }
    }
}

/// Per-component similarities for one reference, each in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentScores {
    pub aspect_ratio: f64,
    pub stroke_width: f64,
    pub stroke_length: f64,
    pub center_of_mass: f64,
    pub complexity: f64,
    pub loops: f64,
    pub slope: f64,
}

/// Result against one reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceSimilarity {
    /// Position in the reference slice
    pub index: usize,
    pub components: ComponentScores,
    /// Weighted similarity, `None` when it was not finite
    pub similarity: Option<f64>,
}

/// Overall comparison result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarityScore {
    /// Mean of the finite reference similarities, in `[0, 1]`
    pub score: f64,
    pub references: Vec<ReferenceSimilarity>,
}

/// `1 − min(1, |Δ| / scale)`; non-finite results become the neutral score.
pub fn component_similarity(difference: f64, scale: f64) -> f64 {
    let s = 1.0 - (difference.abs() / scale).min(1.0);
    if s.is_finite() { s.clamp(0.0, 1.0) } else { NEUTRAL_SCORE }
}

/// Component scores of `questioned` against one reference.
pub fn component_scores(
    questioned: &SignatureParameters,
    reference: &SignatureParameters,
    weights: &SimilarityWeights,
) -> ComponentScores {
    let q = questioned;
    let r = reference;

    let ql = q.connectivity.total_stroke_length_mm;
    let rl = r.connectivity.total_stroke_length_mm;
    let length_scale = ql.max(rl).max(weights.stroke_length_floor_mm);

    let com_offset = (q.spatial_distribution.center_of_mass_x
        - r.spatial_distribution.center_of_mass_x)
        .hypot(q.spatial_distribution.center_of_mass_y - r.spatial_distribution.center_of_mass_y);

    let slope_diff = (q.writing.inclination_deg - r.writing.inclination_deg).abs()
        + (q.writing.slope_variation_deg - r.writing.slope_variation_deg).abs();

    ComponentScores {
        aspect_ratio: component_similarity(
            q.dimensions.aspect_ratio - r.dimensions.aspect_ratio,
            weights.aspect_ratio_scale,
        ),
        stroke_width: component_similarity(
            q.stroke_width.mean_mm - r.stroke_width.mean_mm,
            weights.stroke_width_scale_mm,
        ),
        stroke_length: component_similarity(ql - rl, length_scale),
        center_of_mass: component_similarity(com_offset, weights.center_of_mass_scale),
        complexity: component_similarity(
            q.connectivity.stroke_complexity - r.connectivity.stroke_complexity,
            weights.complexity_scale,
        ),
        loops: component_similarity(
            q.feature_points.loop_count as f64 - r.feature_points.loop_count as f64,
            weights.loops_scale,
        ),
        slope: component_similarity(slope_diff, weights.slope_scale_deg),
    }
}

/// Weighted mean of the component scores; NaN when the weights sum to 0.
pub fn weighted_similarity(scores: &ComponentScores, weights: &SimilarityWeights) -> f64 {
    let pairs = [
        (scores.aspect_ratio, weights.aspect_ratio),
        (scores.stroke_width, weights.stroke_width),
        (scores.stroke_length, weights.stroke_length),
        (scores.center_of_mass, weights.center_of_mass),
        (scores.complexity, weights.complexity),
        (scores.loops, weights.loops),
        (scores.slope, weights.slope),
    ];
    let total: f64 = pairs.iter().map(|&(_, w)| w).sum();
    let acc: f64 = pairs.iter().map(|&(s, w)| s * w).sum();
    acc / total
}

/// Compare a questioned record against one or more references.
///
/// # Errors
///
/// Returns [`AnalysisError::NoReferenceProvided`] for an empty reference
/// slice.
///
/// # Examples
///
/// ```ignore
/// let score = compare_signatures(&questioned, &[reference], &SimilarityWeights::default())?;
/// println!("similarity {:.3}", score.score);
/// ```
pub fn compare_signatures(
    questioned: &SignatureParameters,
    references: &[SignatureParameters],
    weights: &SimilarityWeights,
) -> AnalysisResult<SimilarityScore> {
    if references.is_empty() {
        return Err(AnalysisError::NoReferenceProvided);
    }

    let results: Vec<ReferenceSimilarity> = references
        .iter()
        .enumerate()
        .map(|(index, reference)| {
            let components = component_scores(questioned, reference, weights);
            let value = weighted_similarity(&components, weights);
            ReferenceSimilarity {
                index,
                components,
                similarity: value.is_finite().then_some(value),
            }
        })
        .collect();

    let finite: Vec<f64> = results.iter().filter_map(|r| r.similarity).collect();
    let score = match stats::mean(&finite) {
        Some(m) => stats::unit(m),
        None => {
            tracing::warn!("no finite reference similarity, using neutral score");
            NEUTRAL_SCORE
        }
    };

    tracing::debug!(score, references = references.len(), "compared signatures");
    Ok(SimilarityScore {
        score,
        references: results,
    })
}
