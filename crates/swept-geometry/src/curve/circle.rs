//! Circle profile curve.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use swept_math::{Point3, Vector3};

use super::Curve;

/// A circle of given radius about the origin in the xy plane,
/// parameterized counterclockwise over `[0, 2*PI]`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Circle {
    pub radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    /// In-plane unit normal at parameter `t` (second-derivative direction,
    /// pointing at the center).
    pub fn normal_at(&self, t: f64) -> Vector3 {
        Vector3::new(-t.cos(), -t.sin(), 0.0)
    }
}

impl Curve for Circle {
    fn point_at(&self, t: f64) -> Point3 {
        self.radius * Vector3::new(t.cos(), t.sin(), 0.0)
    }

    fn tangent_at(&self, t: f64) -> Vector3 {
        self.radius * Vector3::new(-t.sin(), t.cos(), 0.0)
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, 2.0 * PI)
    }

    fn is_closed(&self) -> bool {
        true
    }
}
