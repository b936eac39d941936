//! SweptEngine geometry: parametric curves, basis conversion, and frame
//! sampling.

pub mod basis;
pub mod curve;
pub mod sample;

pub use curve::{BezierCurve, Circle, Curve, UniformBSpline};
pub use sample::{sample_bezier, sample_bspline, sample_circle, CurvePoint};
