//! Change-of-basis matrices between cubic Bezier and uniform B-spline forms.

use std::sync::LazyLock;

use swept_math::{DMat4, DVec4, Point3};

/// Cubic Bezier basis: maps the monomial vector `(1, t, t^2, t^3)` to the
/// four Bernstein weights.
pub const BEZIER_BASIS: DMat4 = DMat4::from_cols(
    DVec4::new(1.0, 0.0, 0.0, 0.0),
    DVec4::new(-3.0, 3.0, 0.0, 0.0),
    DVec4::new(3.0, -6.0, 3.0, 0.0),
    DVec4::new(-1.0, 3.0, -3.0, 1.0),
);

/// Uniform cubic B-spline basis (the blending matrix scaled by 1/6).
pub const BSPLINE_BASIS: DMat4 = DMat4::from_cols(
    DVec4::new(1.0 / 6.0, 4.0 / 6.0, 1.0 / 6.0, 0.0),
    DVec4::new(-3.0 / 6.0, 0.0, 3.0 / 6.0, 0.0),
    DVec4::new(3.0 / 6.0, -6.0 / 6.0, 3.0 / 6.0, 0.0),
    DVec4::new(-1.0 / 6.0, 3.0 / 6.0, -3.0 / 6.0, 1.0 / 6.0),
);

/// Inverse of [`BEZIER_BASIS`], computed once on first use.
pub static BEZIER_BASIS_INV: LazyLock<DMat4> = LazyLock::new(|| BEZIER_BASIS.inverse());

pub(crate) fn monomial(t: f64) -> DVec4 {
    DVec4::new(1.0, t, t * t, t * t * t)
}

pub(crate) fn monomial_derivative(t: f64) -> DVec4 {
    DVec4::new(0.0, 1.0, 2.0 * t, 3.0 * t * t)
}

/// Pack four control points into matrix columns.
///
/// The last row is zero: the basis change acts on blending coefficients,
/// not on homogeneous positions.
pub(crate) fn geometry_matrix(window: &[Point3; 4]) -> DMat4 {
    DMat4::from_cols(
        window[0].extend(0.0),
        window[1].extend(0.0),
        window[2].extend(0.0),
        window[3].extend(0.0),
    )
}

/// Convert one 4-point B-spline window into the control points of the
/// equivalent cubic Bezier span.
pub fn bspline_window_to_bezier(window: &[Point3; 4]) -> [Point3; 4] {
    let converted = geometry_matrix(window) * BSPLINE_BASIS * *BEZIER_BASIS_INV;
    [
        converted.col(0).truncate(),
        converted.col(1).truncate(),
        converted.col(2).truncate(),
        converted.col(3).truncate(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use swept_math::DVec3;

    fn mat_approx_eq(a: DMat4, b: DMat4) -> bool {
        a.to_cols_array()
            .iter()
            .zip(b.to_cols_array().iter())
            .all(|(x, y)| (x - y).abs() < 1e-12)
    }

    #[test]
    fn test_bezier_basis_times_inverse_is_identity() {
        assert!(mat_approx_eq(BEZIER_BASIS * *BEZIER_BASIS_INV, DMat4::IDENTITY));
    }

    #[test]
    fn test_bernstein_weights_at_endpoints() {
        let w0 = BEZIER_BASIS * monomial(0.0);
        assert!((w0 - DVec4::new(1.0, 0.0, 0.0, 0.0)).length() < 1e-12);

        let w1 = BEZIER_BASIS * monomial(1.0);
        assert!((w1 - DVec4::new(0.0, 0.0, 0.0, 1.0)).length() < 1e-12);
    }

    #[test]
    fn test_bernstein_weights_partition_of_unity() {
        for i in 0..=10 {
            let t = i as f64 / 10.0;
            let w = BEZIER_BASIS * monomial(t);
            let sum = w.x + w.y + w.z + w.w;
            assert!((sum - 1.0).abs() < 1e-12, "Weights at t={} sum to {}", t, sum);
        }
    }

    #[test]
    fn test_bspline_weights_at_span_start() {
        // A uniform cubic B-spline span starts at (P0 + 4*P1 + P2) / 6
        let w = BSPLINE_BASIS * monomial(0.0);
        assert!((w - DVec4::new(1.0 / 6.0, 4.0 / 6.0, 1.0 / 6.0, 0.0)).length() < 1e-12);
    }

    #[test]
    fn test_window_conversion_preserves_span_endpoints() {
        let window = [
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 2.0, 0.0),
            DVec3::new(3.0, 2.0, 1.0),
            DVec3::new(4.0, 0.0, 1.0),
        ];
        let bezier = bspline_window_to_bezier(&window);

        // Converted span must interpolate the B-spline junction points
        let start = (window[0] + 4.0 * window[1] + window[2]) / 6.0;
        let end = (window[1] + 4.0 * window[2] + window[3]) / 6.0;
        assert!((bezier[0] - start).length() < 1e-12);
        assert!((bezier[3] - end).length() < 1e-12);
    }
}
