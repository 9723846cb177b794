//! Per-parameter difference report between two records

use crate::params::SignatureParameters;
use serde::{Deserialize, Serialize};

/// Outcome of one parameter comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Difference below the tolerance
    Compatible,
    /// Difference at or above the tolerance, or not comparable
    Divergent,
}

/// One row of a difference report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    pub parameter: String,
    pub questioned: f64,
    pub reference: f64,
    pub difference: f64,
    pub tolerance: f64,
    pub verdict: Verdict,
}

impl Finding {
    /// Compare two values against a tolerance.
    pub fn new(parameter: &str, questioned: f64, reference: f64, tolerance: f64) -> Self {
        let difference = (questioned - reference).abs();
        let verdict = if difference < tolerance {
            Verdict::Compatible
        } else {
            Verdict::Divergent
        };
        Finding {
            parameter: parameter.to_string(),
            questioned,
            reference,
            difference,
            tolerance,
            verdict,
        }
    }

    pub fn is_compatible(&self) -> bool {
        self.verdict == Verdict::Compatible
    }
}

/// Tolerances used by [`describe_differences`].
pub mod tolerance {
    pub const VELOCITY: f64 = 0.2;
    pub const ASPECT_RATIO: f64 = 0.2;
    pub const MEAN_PRESSURE: f64 = 0.1;
    pub const INCLINATION_DEG: f64 = 5.0;
    pub const AVERAGE_CURVATURE: f64 = 0.15;
    pub const SPACING_MM: f64 = 5.0;
    pub const STROKE_WIDTH_MM: f64 = 0.2;
}

/// List compatible and divergent parameters between two records.
pub fn describe_differences(
    questioned: &SignatureParameters,
    reference: &SignatureParameters,
) -> Vec<Finding> {
    let (q, r) = (questioned, reference);
    vec![
        Finding::new(
            "velocity",
            q.writing.velocity,
            r.writing.velocity,
            tolerance::VELOCITY,
        ),
        Finding::new(
            "aspectRatio",
            q.dimensions.aspect_ratio,
            r.dimensions.aspect_ratio,
            tolerance::ASPECT_RATIO,
        ),
        Finding::new(
            "meanPressure",
            q.pressure_points.mean_pressure,
            r.pressure_points.mean_pressure,
            tolerance::MEAN_PRESSURE,
        ),
        Finding::new(
            "inclination",
            q.writing.inclination_deg,
            r.writing.inclination_deg,
            tolerance::INCLINATION_DEG,
        ),
        Finding::new(
            "averageCurvature",
            q.curvature_metrics.average_curvature,
            r.curvature_metrics.average_curvature,
            tolerance::AVERAGE_CURVATURE,
        ),
        Finding::new(
            "averageSpacing",
            q.writing.average_spacing_mm,
            r.writing.average_spacing_mm,
            tolerance::SPACING_MM,
        ),
        Finding::new(
            "meanStrokeWidth",
            q.stroke_width.mean_mm,
            r.stroke_width.mean_mm,
            tolerance::STROKE_WIDTH_MM,
        ),
    ]
}
