//! Wavefront OBJ export.

use std::io::Write;

use swept_core::Result;

use crate::SurfaceMesh;

/// Write a mesh as Wavefront OBJ text: every vertex as `v  x y z`, every
/// normal as `vn x y z`, a single placeholder texture coordinate, then
/// every triangle as `f  a/1/a b/1/b c/1/c ` with 1-based indices.
///
/// Section order and spacing are fixed; downstream consumers parse this
/// exact layout.
pub fn write_obj<W: Write>(out: &mut W, mesh: &SurfaceMesh) -> Result<()> {
    for p in &mesh.positions {
        writeln!(out, "v  {} {} {}", p.x, p.y, p.z)?;
    }

    for n in &mesh.normals {
        writeln!(out, "vn {} {} {}", n.x, n.y, n.z)?;
    }

    writeln!(out, "vt  0 0 0")?;

    for tri in &mesh.triangles {
        write!(out, "f  ")?;
        for &index in tri {
            write!(out, "{}/1/{} ", index + 1, index + 1)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use swept_math::DVec3;

    fn single_triangle() -> SurfaceMesh {
        SurfaceMesh {
            positions: vec![
                DVec3::new(0.0, 0.0, 0.0),
                DVec3::new(1.0, 0.0, 0.0),
                DVec3::new(0.0, 1.0, 0.0),
            ],
            normals: vec![DVec3::Z; 3],
            triangles: vec![[0, 1, 2]],
        }
    }

    #[test]
    fn test_exact_line_format() {
        let mut buf = Vec::new();
        write_obj(&mut buf, &single_triangle()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "v  0 0 0\n\
             v  1 0 0\n\
             v  0 1 0\n\
             vn 0 0 1\n\
             vn 0 0 1\n\
             vn 0 0 1\n\
             vt  0 0 0\n\
             f  1/1/1 2/1/2 3/1/3 \n"
        );
    }

    #[test]
    fn test_empty_mesh_still_writes_placeholder() {
        let mut buf = Vec::new();
        write_obj(&mut buf, &SurfaceMesh::default()).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "vt  0 0 0\n");
    }

    #[test]
    fn test_indices_are_one_based() {
        let mut buf = Vec::new();
        write_obj(&mut buf, &single_triangle()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(!text.contains("0/1/0"));
        assert!(text.contains("1/1/1"));
    }
}
