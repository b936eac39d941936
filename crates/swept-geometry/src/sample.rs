//! Curve sampling: discretize parametric curves into points carrying a
//! moving orthonormal frame.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};
use swept_math::{Frame, Point3, Vector3};

use crate::curve::{BezierCurve, Circle, Curve, UniformBSpline};

/// Seed direction for the first frame of a sampled curve.
const FRAME_SEED: Vector3 = Vector3::NEG_Z;
/// Substitute seed, used when the tangent is parallel to [`FRAME_SEED`].
const FRAME_SEED_FALLBACK: Vector3 = Vector3::Y;

const PARALLEL_EPSILON: f64 = 1e-12;

/// One sample on a curve: position plus a unit tangent/normal/binormal
/// frame, with `binormal = tangent x normal`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CurvePoint {
    pub position: Point3,
    pub tangent: Vector3,
    pub normal: Vector3,
    pub binormal: Vector3,
}

impl CurvePoint {
    /// Rigid placement whose columns are (normal, binormal, tangent,
    /// position): a profile's x/y axes map onto normal/binormal and its
    /// plane faces along the tangent.
    pub fn frame(&self) -> Frame {
        Frame::from_axes(self.normal, self.binormal, self.tangent, self.position)
    }
}

/// Advance the moving frame onto the next tangent.
///
/// The first step derives the normal from a fixed seed direction; every
/// later step derives it from the previous sample's binormal, so
/// consecutive frames carry minimal twist. The binormal is recomputed from
/// tangent and normal to keep the triple orthogonal.
fn propagate_frame(prev_binormal: Option<Vector3>, tangent: Vector3) -> (Vector3, Vector3) {
    let normal = match prev_binormal {
        Some(binormal) => binormal.cross(tangent).normalize(),
        None => {
            let seed = if tangent.cross(FRAME_SEED).length_squared() < PARALLEL_EPSILON {
                FRAME_SEED_FALLBACK
            } else {
                FRAME_SEED
            };
            seed.cross(tangent).normalize()
        }
    };
    let binormal = tangent.cross(normal).normalize();
    (normal, binormal)
}

/// Sample a piecewise Bezier curve with `steps` samples per cubic span.
///
/// Span `k` is sampled at `t = k + i/steps` for `i = 0..steps`, covering
/// `[k, k+1)`: spans run back to back, interior junctions appear once, and
/// the curve's final point `t = span_count` is not emitted. The moving
/// frame propagates continuously across the whole curve.
///
/// Tangent-degenerate inputs (a zero derivative at a cusp or repeated
/// control point) are a caller precondition; the frame is undefined there.
///
/// # Panics
/// Panics if `steps` is zero.
pub fn sample_bezier(curve: &BezierCurve, steps: usize) -> Vec<CurvePoint> {
    assert!(steps >= 1, "Need at least 1 sample per span");

    let mut samples = Vec::with_capacity(curve.segment_count() * steps);
    let mut prev_binormal = None;
    for k in 0..curve.segment_count() {
        for i in 0..steps {
            let t = k as f64 + i as f64 / steps as f64;
            let position = curve.point_at(t);
            let tangent = curve.tangent_at(t).normalize();
            let (normal, binormal) = propagate_frame(prev_binormal, tangent);
            prev_binormal = Some(binormal);
            samples.push(CurvePoint {
                position,
                tangent,
                normal,
                binormal,
            });
        }
    }
    samples
}

/// Sample a uniform B-spline by converting each 4-point window to its
/// Bezier span and sampling the spans in window order, `steps` samples
/// each (`steps * span_count` in total).
///
/// The moving frame restarts from the seed direction at every span, so the
/// binormal can jump at window boundaries even though positions and
/// tangents are continuous there. Callers that need a seam-free frame
/// along the whole spline must reframe the result themselves.
///
/// # Panics
/// Panics if `steps` is zero.
pub fn sample_bspline(spline: &UniformBSpline, steps: usize) -> Vec<CurvePoint> {
    assert!(steps >= 1, "Need at least 1 sample per span");

    let mut samples = Vec::with_capacity(spline.span_count() * steps);
    for k in 0..spline.span_count() {
        samples.extend(sample_bezier(&spline.bezier_span(k), steps));
    }
    samples
}

/// Sample a circle with `steps + 1` samples over `[0, 2*PI]`, both ends
/// included, so the first and last positions coincide.
///
/// The frame is closed form — normal pointing at the center, constant
/// binormal `+Z` — and needs no propagation.
///
/// # Panics
/// Panics if `steps` is zero.
pub fn sample_circle(radius: f64, steps: usize) -> Vec<CurvePoint> {
    assert!(steps >= 1, "Need at least 1 sample");

    let circle = Circle::new(radius);
    (0..=steps)
        .map(|i| {
            let t = TAU * i as f64 / steps as f64;
            CurvePoint {
                position: circle.point_at(t),
                tangent: circle.tangent_at(t).normalize(),
                normal: circle.normal_at(t),
                binormal: Vector3::Z,
            }
        })
        .collect()
}
