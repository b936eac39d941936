//! Piecewise cubic Bezier curves.

use serde::{Deserialize, Serialize};
use swept_core::{Result, SweptError};
use swept_math::{Point3, Vector3};

use super::{split_spans, Curve};
use crate::basis::{self, BEZIER_BASIS};

/// A piecewise cubic Bezier curve.
///
/// Stores `3n + 1` control points; adjacent cubic spans share their
/// endpoint, so span `k` is defined by control points `3k .. 3k + 3`.
/// Parameterized over `[0, segment_count]`, with span `k` covering
/// `[k, k + 1]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BezierCurve {
    control_points: Vec<Point3>,
}

impl BezierCurve {
    /// Build a curve from `3n + 1` control points (`n >= 1` cubic spans).
    pub fn new(control_points: Vec<Point3>) -> Result<Self> {
        if control_points.len() < 4 || (control_points.len() - 1) % 3 != 0 {
            return Err(SweptError::InvalidInput(format!(
                "Bezier curve requires 3n+1 control points, got {}",
                control_points.len()
            )));
        }
        Ok(Self { control_points })
    }

    /// Build a single cubic span; four points always form one.
    pub fn from_segment(points: [Point3; 4]) -> Self {
        Self {
            control_points: points.to_vec(),
        }
    }

    pub fn control_points(&self) -> &[Point3] {
        &self.control_points
    }

    pub fn segment_count(&self) -> usize {
        (self.control_points.len() - 1) / 3
    }

    /// The four control points of span `k`.
    pub fn segment_points(&self, k: usize) -> [Point3; 4] {
        let i = 3 * k;
        [
            self.control_points[i],
            self.control_points[i + 1],
            self.control_points[i + 2],
            self.control_points[i + 3],
        ]
    }
}

/// Evaluate one cubic span at local parameter `t` in `[0, 1]`.
pub(crate) fn segment_point(points: &[Point3; 4], t: f64) -> Point3 {
    (basis::geometry_matrix(points) * BEZIER_BASIS * basis::monomial(t)).truncate()
}

/// Derivative of one cubic span at local parameter `t`.
pub(crate) fn segment_tangent(points: &[Point3; 4], t: f64) -> Vector3 {
    (basis::geometry_matrix(points) * BEZIER_BASIS * basis::monomial_derivative(t)).truncate()
}

impl Curve for BezierCurve {
    fn point_at(&self, t: f64) -> Point3 {
        let (k, local) = split_spans(t, self.segment_count());
        segment_point(&self.segment_points(k), local)
    }

    fn tangent_at(&self, t: f64) -> Vector3 {
        let (k, local) = split_spans(t, self.segment_count());
        segment_tangent(&self.segment_points(k), local)
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, self.segment_count() as f64)
    }
}
