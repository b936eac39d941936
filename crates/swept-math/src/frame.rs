use crate::{DMat4, Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Rigid placement in space (rotation + translation, no shear/scale).
///
/// Used to carry a profile curve into world space, one placement per ring
/// of a swept surface.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Frame {
    matrix: DMat4,
}

impl Frame {
    pub fn identity() -> Self {
        Self {
            matrix: DMat4::IDENTITY,
        }
    }

    /// Rotation about the y axis by `angle` radians.
    pub fn rotation_y(angle: f64) -> Self {
        Self {
            matrix: DMat4::from_rotation_y(angle),
        }
    }

    /// Build a placement whose columns are the given local axes and origin.
    ///
    /// A point `(x, y, z)` in frame coordinates maps to
    /// `origin + x * x_axis + y * y_axis + z * z_axis`.
    pub fn from_axes(x_axis: Vector3, y_axis: Vector3, z_axis: Vector3, origin: Point3) -> Self {
        Self {
            matrix: DMat4::from_cols(
                x_axis.extend(0.0),
                y_axis.extend(0.0),
                z_axis.extend(0.0),
                origin.extend(1.0),
            ),
        }
    }

    /// Transform a position (homogeneous coordinate 1).
    pub fn transform_point(&self, p: Point3) -> Point3 {
        self.matrix.transform_point3(p)
    }

    /// Transform a surface normal (homogeneous coordinate 0).
    ///
    /// Normals map through the inverse-transpose of the placement, not the
    /// placement itself.
    pub fn transform_normal(&self, n: Vector3) -> Vector3 {
        let m = self.matrix.inverse().transpose();
        (m * n.extend(0.0)).truncate()
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::identity()
    }
}
