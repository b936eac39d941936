//! Profile sweeping: surfaces of revolution and generalized cylinders.

use std::f64::consts::TAU;

use swept_core::{Result, SweptError, Tolerance};
use swept_geometry::CurvePoint;
use swept_math::Frame;

use crate::SurfaceMesh;

/// Every sample of a sweep profile must lie in the xy plane: position,
/// tangent, and normal all carry zero z (within linear tolerance).
fn check_flat(profile: &[CurvePoint]) -> Result<()> {
    let tol = Tolerance::default_precision();
    for (i, p) in profile.iter().enumerate() {
        if !tol.is_zero(p.position.z) || !tol.is_zero(p.tangent.z) || !tol.is_zero(p.normal.z) {
            return Err(SweptError::InvalidInput(format!(
                "profile sample {} is not flat in the xy plane",
                i
            )));
        }
    }
    Ok(())
}

/// Append one placed copy of the profile (a ring) plus the triangles
/// stitching it to the following ring.
///
/// Ring `r` owns vertex indices `r*S .. (r+1)*S`. The matching vertex one
/// ring over is taken modulo `S * ring_count`, which wraps the final ring
/// back onto ring 0. Positions map through the ring frame, normals through
/// its inverse-transpose.
fn emit_ring(
    mesh: &mut SurfaceMesh,
    profile: &[CurvePoint],
    ring_count: usize,
    ring_index: usize,
    frame: &Frame,
) {
    let size = profile.len();
    for (j, p) in profile.iter().enumerate() {
        mesh.positions.push(frame.transform_point(p.position));
        mesh.normals.push(frame.transform_normal(p.normal));

        // Two triangles per quad; the last profile sample starts no quad.
        if j + 1 < size {
            let a = (ring_index * size + j) as u32;
            let b = a + 1;
            let c = ((ring_index * size + j + size) % (size * ring_count)) as u32;
            mesh.triangles.push([a, b, c]);
            mesh.triangles.push([b, c + 1, c]);
        }
    }
}

/// Revolve a flat profile about the y axis in `steps` angular increments.
///
/// Ring `i` is the profile rotated by `2*PI*i/steps`; the result has
/// `profile.len() * steps` vertices and `2 * (profile.len() - 1) * steps`
/// triangles, with the final ring wrapping back to the first.
///
/// Fails with `InvalidInput` if the profile is not flat. No partial mesh
/// escapes: validation runs before any output is built.
///
/// # Panics
/// Panics if `steps` is zero.
pub fn make_surf_rev(profile: &[CurvePoint], steps: usize) -> Result<SurfaceMesh> {
    assert!(steps >= 1, "Need at least 1 revolution step");
    check_flat(profile)?;

    let mut mesh = SurfaceMesh::default();
    mesh.positions.reserve(profile.len() * steps);
    mesh.normals.reserve(profile.len() * steps);
    mesh.triangles
        .reserve(2 * profile.len().saturating_sub(1) * steps);

    for i in 0..steps {
        let angle = TAU * i as f64 / steps as f64;
        emit_ring(&mut mesh, profile, steps, i, &Frame::rotation_y(angle));
    }
    Ok(mesh)
}

/// Sweep a flat profile along a sampled path: one ring per path sample,
/// each placed by that sample's (normal, binormal, tangent, position)
/// frame.
///
/// Ring stitching always wraps the final ring back onto the first, so a
/// sweep path that does not return to its start grows a spurious closing
/// band; supply a closed path for a clean tube.
///
/// Fails with `InvalidInput` if the profile is not flat.
pub fn make_gen_cyl(profile: &[CurvePoint], sweep: &[CurvePoint]) -> Result<SurfaceMesh> {
    check_flat(profile)?;

    let mut mesh = SurfaceMesh::default();
    mesh.positions.reserve(profile.len() * sweep.len());
    mesh.normals.reserve(profile.len() * sweep.len());
    mesh.triangles
        .reserve(2 * profile.len().saturating_sub(1) * sweep.len());

    for (i, s) in sweep.iter().enumerate() {
        emit_ring(&mut mesh, profile, sweep.len(), i, &s.frame());
    }
    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use swept_math::DVec3;

    // A straight vertical profile standing in the xy plane, one unit out
    // from the axis of revolution.
    fn post_profile(samples: usize) -> Vec<CurvePoint> {
        (0..samples)
            .map(|i| CurvePoint {
                position: DVec3::new(1.0, i as f64 / (samples - 1) as f64, 0.0),
                tangent: DVec3::Y,
                normal: DVec3::X,
                binormal: DVec3::Z,
            })
            .collect()
    }

    #[test]
    fn test_surf_rev_counts() {
        let mesh = make_surf_rev(&post_profile(5), 12).unwrap();
        assert_eq!(mesh.vertex_count(), 5 * 12);
        assert_eq!(mesh.normals.len(), mesh.vertex_count());
        assert_eq!(mesh.triangle_count(), 2 * 4 * 12);
    }

    #[test]
    fn test_surf_rev_indices_in_range() {
        let mesh = make_surf_rev(&post_profile(4), 9).unwrap();
        let n = mesh.vertex_count() as u32;
        for tri in &mesh.triangles {
            for &idx in tri {
                assert!(idx < n, "Index {} out of bounds (n={})", idx, n);
            }
        }
    }

    #[test]
    fn test_surf_rev_last_ring_wraps_to_first() {
        let profile = post_profile(3);
        let mesh = make_surf_rev(&profile, 4).unwrap();
        let last_ring_quad = &mesh.triangles[mesh.triangle_count() - 2];
        // Third corner of the final ring's quads lives in ring 0
        assert!(last_ring_quad[2] < profile.len() as u32);
    }

    #[test]
    fn test_surf_rev_normals_rotate_with_rings() {
        let mesh = make_surf_rev(&post_profile(2), 4).unwrap();
        // Ring 2 sits half a revolution around: the outward normal +x maps
        // to -x
        let n = mesh.normals[2 * 2];
        assert!((n - DVec3::NEG_X).length() < 1e-10);
    }

    #[test]
    fn test_rejects_profile_off_plane() {
        let mut profile = post_profile(3);
        profile[1].position.z = 0.25;
        assert!(matches!(
            make_surf_rev(&profile, 8),
            Err(SweptError::InvalidInput(_))
        ));

        let mut profile = post_profile(3);
        profile[2].tangent = DVec3::Z;
        assert!(matches!(
            make_surf_rev(&profile, 8),
            Err(SweptError::InvalidInput(_))
        ));

        let mut profile = post_profile(3);
        profile[0].normal = DVec3::new(0.6, 0.0, 0.8);
        assert!(matches!(
            make_gen_cyl(&profile, &post_profile(3)),
            Err(SweptError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_gen_cyl_counts() {
        // Sweep along a straight line of frames pointing up the z axis
        let sweep: Vec<CurvePoint> = (0..7)
            .map(|i| CurvePoint {
                position: DVec3::new(0.0, 0.0, i as f64),
                tangent: DVec3::Z,
                normal: DVec3::X,
                binormal: DVec3::Y,
            })
            .collect();
        let mesh = make_gen_cyl(&post_profile(4), &sweep).unwrap();
        assert_eq!(mesh.vertex_count(), 4 * 7);
        assert_eq!(mesh.triangle_count(), 2 * 3 * 7);
    }

    #[test]
    fn test_gen_cyl_rings_follow_sweep_frames() {
        let sweep = vec![CurvePoint {
            position: DVec3::new(5.0, 0.0, 0.0),
            tangent: DVec3::Z,
            normal: DVec3::X,
            binormal: DVec3::Y,
        }];
        let profile = post_profile(2);
        let mesh = make_gen_cyl(&profile, &sweep).unwrap();
        // Profile x maps to the frame normal (+x), offset by the frame origin
        assert!((mesh.positions[0] - DVec3::new(6.0, 0.0, 0.0)).length() < 1e-10);
        assert!((mesh.positions[1] - DVec3::new(6.0, 1.0, 0.0)).length() < 1e-10);
    }
}
