//! Uniform cubic B-spline curves, evaluated by change of basis.

use serde::{Deserialize, Serialize};
use swept_core::{Result, SweptError};
use swept_math::{Point3, Vector3};

use super::bezier::{segment_point, segment_tangent, BezierCurve};
use super::{split_spans, Curve};
use crate::basis;

/// A uniform cubic B-spline defined by its control polygon.
///
/// Every consecutive window of 4 control points contributes one cubic span,
/// so `n` control points give `n - 3` spans. Each window is converted to an
/// equivalent Bezier span via the fixed change-of-basis product, which
/// reduces evaluation to the Bezier case.
///
/// Parameterized over `[0, span_count]`, with span `k` covering `[k, k + 1]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UniformBSpline {
    control_points: Vec<Point3>,
}

impl UniformBSpline {
    /// Build a spline from 4 or more control points.
    pub fn new(control_points: Vec<Point3>) -> Result<Self> {
        if control_points.len() < 4 {
            return Err(SweptError::InvalidInput(format!(
                "B-spline requires at least 4 control points, got {}",
                control_points.len()
            )));
        }
        Ok(Self { control_points })
    }

    pub fn control_points(&self) -> &[Point3] {
        &self.control_points
    }

    pub fn span_count(&self) -> usize {
        self.control_points.len() - 3
    }

    fn window(&self, k: usize) -> [Point3; 4] {
        [
            self.control_points[k],
            self.control_points[k + 1],
            self.control_points[k + 2],
            self.control_points[k + 3],
        ]
    }

    /// The Bezier span equivalent to control point window `k`.
    pub fn bezier_span(&self, k: usize) -> BezierCurve {
        BezierCurve::from_segment(basis::bspline_window_to_bezier(&self.window(k)))
    }
}

impl Curve for UniformBSpline {
    fn point_at(&self, t: f64) -> Point3 {
        let (k, local) = split_spans(t, self.span_count());
        segment_point(&basis::bspline_window_to_bezier(&self.window(k)), local)
    }

    fn tangent_at(&self, t: f64) -> Vector3 {
        let (k, local) = split_spans(t, self.span_count());
        segment_tangent(&basis::bspline_window_to_bezier(&self.window(k)), local)
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, self.span_count() as f64)
    }
}
